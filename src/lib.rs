//! Stop-order optimization for delivery and service routes.
//!
//! Given geolocated stops with index 0 as the fixed start, finds a visiting
//! order that keeps the open-path geodesic distance short:
//!
//! - **Genetic Algorithm (GA)**: population search with tournament
//!   selection, order crossover and swap mutation.
//! - **Simulated Annealing (SA)**: single-trajectory search seeded from the
//!   nearest-neighbor route with geometric cooling.
//! - **Nearest neighbor**: deterministic greedy construction.
//! - **Multi-objective**: weighted distance, service time and priority,
//!   with a nearest-neighbor fallback.
//!
//! Every solver returns a permutation of `0..n` that starts with 0, or the
//! identity for fewer than 2 stops. Coordinates are not validated.
//!
//! # Quick start
//!
//! ```
//! use route_metaheur::{optimize_genetic, GaConfig, Waypoint};
//!
//! let stops = vec![
//!     Waypoint::new(0.0, 0.0),
//!     Waypoint::new(0.0, 0.2),
//!     Waypoint::new(0.0, 0.1),
//! ];
//! let order = optimize_genetic(&stops, &GaConfig::default().with_seed(42));
//! assert_eq!(order, vec![0, 2, 1]);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for stops, configs and results
//! - `parallel`: rayon for GA fitness evaluation and distance-matrix rows

pub mod construction;
pub mod distance;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod metrics;
pub mod model;
pub mod multi_objective;
pub mod planner;
pub mod random;
pub mod sa;
pub mod solver;

pub use construction::{nearest_neighbor_route, NearestNeighborSolver};
pub use distance::{geodesic_km, DistanceMatrix};
pub use error::{ConfigError, RouteError};
pub use ga::{optimize_genetic, GaConfig, GeneticOptimizer};
pub use metrics::{route_metrics, RouteMetrics};
pub use model::Waypoint;
pub use multi_objective::{MultiObjectiveSolver, ObjectiveWeights};
pub use planner::{plan_route, Algorithm, OptimizedRoute, PlannerConfig};
pub use sa::{optimize_annealing, AnnealingOptimizer, SaConfig};
pub use solver::RouteSolver;
