//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of the evolutionary loop. It is fixed
//! at construction of a [`GeneticOptimizer`](super::GeneticOptimizer) and
//! never mutated by a run.

use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use route_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 200);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use route_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_generations(500)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of routes in each generation.
    pub population_size: usize,

    /// Number of generations. The loop always runs all of them.
    pub generations: usize,

    /// Probability that an individual gets a swap mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability that an adjacent pair is replaced by its crossover
    /// children (0.0–1.0).
    pub crossover_rate: f64,

    /// Individuals sampled (without replacement) per tournament.
    ///
    /// Clamped to the population size at selection time.
    pub tournament_size: usize,

    /// Evaluate fitness on rayon. Only effective with the `parallel`
    /// feature; results are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 200,
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            tournament_size: 3,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// A zero generation count is valid: the run returns the best member
    /// of the initial population.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::EmptyTournament);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.generations, 200);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert_eq!(config.tournament_size, 3);
        assert!(config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(40)
            .with_generations(10)
            .with_mutation_rate(0.3)
            .with_crossover_rate(0.6)
            .with_tournament_size(5)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.population_size, 40);
        assert_eq!(config.generations, 10);
        assert!((config.mutation_rate - 0.3).abs() < 1e-10);
        assert!((config.crossover_rate - 0.6).abs() < 1e-10);
        assert_eq!(config.tournament_size, 5);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);
        assert_eq!(config.crossover_rate, 0.0);
        assert_eq!(config.mutation_rate, 1.0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::default().with_generations(0).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(ConfigError::EmptyPopulation));
    }

    #[test]
    fn test_validate_empty_tournament() {
        let config = GaConfig::default().with_tournament_size(0);
        assert_eq!(config.validate(), Err(ConfigError::EmptyTournament));
    }
}
