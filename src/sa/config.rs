//! SA configuration and cooling schedule.
//!
//! Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, one neighbor per
//! temperature step. The run length is therefore fixed by the schedule:
//! `ceil(ln(T_min / T_0) / ln(cooling_rate))` iterations.

use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use route_metaheur::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_min_temperature(0.01)
///     .with_cooling_rate(0.99)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.iteration_budget(), 1077);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more uphill moves early on.
    pub initial_temperature: f64,

    /// Multiplicative decay per iteration, in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// The loop stops once the temperature is no longer above this.
    pub min_temperature: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
            min_temperature: 0.1,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of neighbor evaluations a run performs.
    ///
    /// Returns 0 for an invalid configuration, which [`SaRunner`](super::SaRunner)
    /// refuses to run.
    pub fn iteration_budget(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut t = self.initial_temperature;
        let mut steps = 0;
        while t > self.min_temperature {
            t *= self.cooling_rate;
            steps += 1;
        }
        steps
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(ConfigError::NonPositiveTemperature(self.initial_temperature));
        }
        if !(self.min_temperature > 0.0) {
            return Err(ConfigError::NonPositiveMinTemperature(self.min_temperature));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(ConfigError::MinAboveInitial {
                min: self.min_temperature,
                initial: self.initial_temperature,
            });
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::CoolingRateOutOfRange(self.cooling_rate));
        }
        Ok(())
    }
}
