//! Simulated Annealing (SA) stop-order optimizer.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Starting from the nearest-neighbor route, it accepts
//! worsening swaps with a probability that decreases as the temperature
//! falls, allowing the search to escape local optima early and converge
//! later.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod route;
mod runner;
mod types;

pub use config::SaConfig;
pub use route::{optimize_annealing, AnnealingOptimizer, RouteAnnealing};
pub use runner::{SaResult, SaRunner};
pub use types::SaProblem;
