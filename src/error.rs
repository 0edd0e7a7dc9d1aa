//! Error types.
//!
//! The optimizers themselves never fail: degenerate inputs produce the
//! identity route. Errors arise only from configuration validation and
//! from the planning facade, which enforces the request-level rules.

use thiserror::Error;

/// A configuration parameter is out of its valid range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("tournament_size must be at least 1")]
    EmptyTournament,

    #[error("initial_temperature must be positive and finite, got {0}")]
    NonPositiveTemperature(f64),

    #[error("min_temperature must be positive, got {0}")]
    NonPositiveMinTemperature(f64),

    #[error("min_temperature ({min}) must be less than initial_temperature ({initial})")]
    MinAboveInitial { min: f64, initial: f64 },

    #[error("cooling_rate must be in (0, 1), got {0}")]
    CoolingRateOutOfRange(f64),

    #[error("objective weight `{name}` must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
}

/// Errors surfaced by route planning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// The planner needs a start and at least one more stop.
    #[error("at least 2 waypoints required, got {0}")]
    InsufficientWaypoints(usize),

    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),

    /// A solver could not produce a route. Recoverable: callers fall back
    /// to nearest-neighbor construction.
    #[error("no solution found: {0}")]
    NoSolution(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
