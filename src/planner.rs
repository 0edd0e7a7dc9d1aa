//! Algorithm selection and the end-to-end planning call.
//!
//! [`plan_route`] picks a [`RouteSolver`] for the requested [`Algorithm`],
//! orders the stops and attaches the route totals.

use std::fmt;
use std::str::FromStr;

use crate::construction::NearestNeighborSolver;
use crate::error::RouteError;
use crate::ga::{GaConfig, GeneticOptimizer};
use crate::metrics::{route_metrics, RouteMetrics};
use crate::model::{reorder, Waypoint};
use crate::multi_objective::{MultiObjectiveSolver, ObjectiveWeights};
use crate::sa::{AnnealingOptimizer, SaConfig};
use crate::solver::RouteSolver;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Available ordering strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    #[default]
    NearestNeighbor,
    Genetic,
    SimulatedAnnealing,
    MultiObjective,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::NearestNeighbor,
        Algorithm::Genetic,
        Algorithm::SimulatedAnnealing,
        Algorithm::MultiObjective,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor => "nearest_neighbor",
            Algorithm::Genetic => "genetic",
            Algorithm::SimulatedAnnealing => "simulated_annealing",
            Algorithm::MultiObjective => "multi_objective",
        }
    }

    /// Parses `name`, treating anything unrecognized as nearest neighbor.
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| RouteError::UnknownAlgorithm(s.to_string()))
    }
}

/// Parameters for every algorithm; only the selected one is read.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlannerConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub ga: GaConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sa: SaConfig,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weights: ObjectiveWeights,
}

impl PlannerConfig {
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    pub fn with_weights(mut self, weights: ObjectiveWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// A planned route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptimizedRoute {
    /// Visiting order as indices into the input.
    pub order: Vec<usize>,
    /// The input stops in visiting order.
    pub waypoints: Vec<Waypoint>,
    pub metrics: RouteMetrics,
    pub algorithm: Algorithm,
}

fn solver_for(
    algorithm: Algorithm,
    config: &PlannerConfig,
) -> Result<Box<dyn RouteSolver>, RouteError> {
    let solver: Box<dyn RouteSolver> = match algorithm {
        Algorithm::NearestNeighbor => Box::new(NearestNeighborSolver),
        Algorithm::Genetic => Box::new(GeneticOptimizer::try_new(config.ga.clone())?),
        Algorithm::SimulatedAnnealing => {
            Box::new(AnnealingOptimizer::try_new(config.sa.clone())?)
        }
        Algorithm::MultiObjective => Box::new(MultiObjectiveSolver::new(config.weights)),
    };
    Ok(solver)
}

/// Orders `waypoints` with `algorithm` and computes the route totals.
///
/// # Errors
/// - [`RouteError::InsufficientWaypoints`] for fewer than 2 stops
/// - [`RouteError::InvalidConfig`] when the selected algorithm's
///   configuration does not validate
///
/// # Examples
///
/// ```
/// use route_metaheur::model::Waypoint;
/// use route_metaheur::planner::{plan_route, Algorithm, PlannerConfig};
///
/// let stops = vec![
///     Waypoint::new(0.0, 0.0),
///     Waypoint::new(0.0, 0.2),
///     Waypoint::new(0.0, 0.1),
/// ];
/// let plan = plan_route(&stops, Algorithm::NearestNeighbor, &PlannerConfig::default()).unwrap();
/// assert_eq!(plan.order, vec![0, 2, 1]);
/// assert_eq!(plan.waypoints[1], stops[2]);
/// ```
pub fn plan_route(
    waypoints: &[Waypoint],
    algorithm: Algorithm,
    config: &PlannerConfig,
) -> Result<OptimizedRoute, RouteError> {
    if waypoints.len() < 2 {
        return Err(RouteError::InsufficientWaypoints(waypoints.len()));
    }

    let solver = solver_for(algorithm, config)?;
    let order = solver.solve(waypoints)?;
    let metrics = route_metrics(waypoints, &order);

    tracing::debug!(
        %algorithm,
        n = waypoints.len(),
        distance_km = metrics.distance_km,
        duration_minutes = metrics.duration_minutes,
        "route planned"
    );

    Ok(OptimizedRoute {
        waypoints: reorder(waypoints, &order),
        order,
        metrics,
        algorithm,
    })
}
