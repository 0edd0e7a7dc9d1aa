//! Genetic Algorithm stop-order optimizer.
//!
//! A trait-based GA engine specialized to routes. [`GaRunner`] owns the
//! evolutionary loop; [`RouteProblem`] supplies the route encoding;
//! [`GeneticOptimizer`] is the caller-facing entry point.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution carrying its fitness (higher is better)
//! - [`GaProblem`]: Initialization, evaluation, crossover, mutation
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, generations, rates, seed
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final result with per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover and swap mutation with a fixed start
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod route;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use route::{optimize_genetic, GeneticOptimizer, RouteIndividual, RouteProblem};
pub use runner::{GaResult, GaRunner};
pub use selection::tournament;
pub use types::{GaProblem, Individual};
