//! Route encoding for the GA.
//!
//! [`RouteProblem`] plugs stop orders into the generic [`GaRunner`]:
//! random routes with a fixed start, fitness as reciprocal distance, order
//! crossover and swap mutation. [`GeneticOptimizer`] is the entry point that
//! callers use.

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use super::runner::{GaResult, GaRunner};
use super::types::{GaProblem, Individual};
use crate::distance::DistanceMatrix;
use crate::error::{ConfigError, RouteError};
use crate::fitness::{cost_from_fitness, route_cost, route_fitness};
use crate::model::{identity_route, Waypoint};
use crate::solver::RouteSolver;
use rand::seq::SliceRandom;
use rand::Rng;

/// A route and its cached fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteIndividual {
    /// Stop indices in visiting order, starting at 0.
    pub genes: Vec<usize>,
    fitness: f64,
}

impl RouteIndividual {
    /// Wraps a route. Fitness is unset until evaluated.
    pub fn new(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: f64::NEG_INFINITY,
        }
    }
}

impl Individual for RouteIndividual {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Stop-order optimization over a shared distance matrix.
pub struct RouteProblem<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> RouteProblem<'a> {
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }
}

impl GaProblem for RouteProblem<'_> {
    type Individual = RouteIndividual;

    /// `0` followed by a random permutation of `1..n`.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> RouteIndividual {
        let n = self.distances.size();
        let mut tail: Vec<usize> = (1..n).collect();
        tail.shuffle(rng);

        let mut genes = Vec::with_capacity(n);
        if n > 0 {
            genes.push(0);
        }
        genes.extend(tail);
        RouteIndividual::new(genes)
    }

    fn evaluate(&self, individual: &RouteIndividual) -> f64 {
        route_fitness(&individual.genes, self.distances)
    }

    /// Route length in kilometers.
    fn cost(&self, individual: &RouteIndividual) -> f64 {
        route_cost(&individual.genes, self.distances)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &RouteIndividual,
        parent2: &RouteIndividual,
        rng: &mut R,
    ) -> (RouteIndividual, RouteIndividual) {
        let (c1, c2) = order_crossover(&parent1.genes, &parent2.genes, rng);
        (RouteIndividual::new(c1), RouteIndividual::new(c2))
    }

    fn mutate<R: Rng>(&self, individual: &mut RouteIndividual, rng: &mut R) {
        swap_mutation(&mut individual.genes, rng);
    }

    fn on_generation(&self, generation: usize, best_fitness: f64) {
        tracing::trace!(
            generation,
            best_cost_km = cost_from_fitness(best_fitness),
            "ga generation"
        );
    }
}

/// Genetic-algorithm stop-order optimizer.
///
/// Built once with a fixed [`GaConfig`], then invoked any number of times.
/// Each call is independent: no state survives between calls.
///
/// # Examples
///
/// ```
/// use route_metaheur::ga::{GaConfig, GeneticOptimizer};
/// use route_metaheur::model::Waypoint;
///
/// let stops = vec![
///     Waypoint::new(0.0, 0.0),
///     Waypoint::new(0.0, 2.0),
///     Waypoint::new(0.0, 1.0),
/// ];
/// let optimizer = GeneticOptimizer::new(GaConfig::default().with_seed(1));
/// assert_eq!(optimizer.optimize(&stops), vec![0, 2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneticOptimizer {
    config: GaConfig,
}

impl GeneticOptimizer {
    /// Creates an optimizer.
    ///
    /// # Panics
    /// Panics if the configuration is invalid. Use [`try_new`](Self::try_new)
    /// to get the error instead.
    pub fn new(config: GaConfig) -> Self {
        match Self::try_new(config) {
            Ok(optimizer) => optimizer,
            Err(e) => panic!("invalid GaConfig: {e}"),
        }
    }

    /// Creates an optimizer, validating the configuration.
    pub fn try_new(config: GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Optimizes the visiting order of `waypoints`.
    ///
    /// Fewer than 2 waypoints return the identity order without running the
    /// algorithm. Coordinates are not validated.
    pub fn optimize(&self, waypoints: &[Waypoint]) -> Vec<usize> {
        if waypoints.len() < 2 {
            return identity_route(waypoints.len());
        }
        let distances = DistanceMatrix::from_waypoints(waypoints);
        self.optimize_with_matrix(&distances)
    }

    /// Optimizes over a precomputed matrix.
    pub fn optimize_with_matrix(&self, distances: &DistanceMatrix) -> Vec<usize> {
        self.run(distances).best.genes
    }

    /// Runs the full GA and returns its statistics.
    pub fn run(&self, distances: &DistanceMatrix) -> GaResult<RouteIndividual> {
        let n = distances.size();
        if n < 2 {
            return GaResult {
                best: RouteIndividual::new(identity_route(n)),
                best_fitness: f64::NEG_INFINITY,
                best_cost: 0.0,
                generations: 0,
                fitness_history: Vec::new(),
            };
        }

        tracing::debug!(
            n,
            population_size = self.config.population_size,
            generations = self.config.generations,
            "starting genetic optimization"
        );

        let problem = RouteProblem::new(distances);
        let result = GaRunner::run(&problem, &self.config);

        tracing::debug!(
            n,
            cost_km = result.best_cost,
            "genetic optimization finished"
        );
        result
    }
}

impl RouteSolver for GeneticOptimizer {
    fn solve(&self, waypoints: &[Waypoint]) -> Result<Vec<usize>, RouteError> {
        Ok(self.optimize(waypoints))
    }
}

/// Optimizes `waypoints` with a genetic algorithm configured by `config`.
///
/// # Panics
/// Panics if `config` is invalid.
pub fn optimize_genetic(waypoints: &[Waypoint], config: &GaConfig) -> Vec<usize> {
    GeneticOptimizer::new(config.clone()).optimize(waypoints)
}
