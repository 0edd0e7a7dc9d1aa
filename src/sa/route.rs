//! Route encoding for simulated annealing.

use super::config::SaConfig;
use super::runner::{SaResult, SaRunner};
use super::types::SaProblem;
use crate::construction::nearest_neighbor_route;
use crate::distance::DistanceMatrix;
use crate::error::{ConfigError, RouteError};
use crate::fitness::route_cost;
use crate::ga::operators::swap_mutation;
use crate::model::{identity_route, Waypoint};
use crate::solver::RouteSolver;
use rand::Rng;

/// Stop-order annealing over a shared distance matrix.
///
/// Seeds from the nearest-neighbor route; a neighbor swaps two stops other
/// than the start.
pub struct RouteAnnealing<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> RouteAnnealing<'a> {
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }
}

impl SaProblem for RouteAnnealing<'_> {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Vec<usize> {
        nearest_neighbor_route(self.distances)
    }

    fn cost(&self, route: &Vec<usize>) -> f64 {
        route_cost(route, self.distances)
    }

    fn neighbor<R: Rng>(&self, route: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let mut next = route.clone();
        swap_mutation(&mut next, rng);
        next
    }
}

/// Simulated-annealing stop-order optimizer.
///
/// # Examples
///
/// ```
/// use route_metaheur::model::Waypoint;
/// use route_metaheur::sa::{AnnealingOptimizer, SaConfig};
///
/// let stops = vec![
///     Waypoint::new(0.0, 0.0),
///     Waypoint::new(0.0, 3.0),
///     Waypoint::new(0.0, 1.0),
///     Waypoint::new(0.0, 2.0),
/// ];
/// let optimizer = AnnealingOptimizer::new(SaConfig::default().with_seed(5));
/// assert_eq!(optimizer.optimize(&stops), vec![0, 2, 3, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnnealingOptimizer {
    config: SaConfig,
}

impl AnnealingOptimizer {
    /// Creates an optimizer.
    ///
    /// # Panics
    /// Panics if the configuration is invalid. Use [`try_new`](Self::try_new)
    /// to get the error instead.
    pub fn new(config: SaConfig) -> Self {
        match Self::try_new(config) {
            Ok(optimizer) => optimizer,
            Err(e) => panic!("invalid SaConfig: {e}"),
        }
    }

    /// Creates an optimizer, validating the configuration.
    pub fn try_new(config: SaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Optimizes the visiting order of `waypoints`.
    ///
    /// Fewer than 2 waypoints return the identity order. Coordinates are
    /// not validated.
    pub fn optimize(&self, waypoints: &[Waypoint]) -> Vec<usize> {
        if waypoints.len() < 2 {
            return identity_route(waypoints.len());
        }
        let distances = DistanceMatrix::from_waypoints(waypoints);
        self.optimize_with_matrix(&distances)
    }

    /// Optimizes over a precomputed matrix.
    pub fn optimize_with_matrix(&self, distances: &DistanceMatrix) -> Vec<usize> {
        self.run(distances).best
    }

    /// Runs the annealing schedule and returns its statistics.
    pub fn run(&self, distances: &DistanceMatrix) -> SaResult<Vec<usize>> {
        let n = distances.size();
        if n < 2 {
            return SaResult {
                best: identity_route(n),
                best_cost: 0.0,
                initial_cost: 0.0,
                iterations: 0,
                final_temperature: self.config.initial_temperature,
                accepted_moves: 0,
                improving_moves: 0,
            };
        }

        tracing::debug!(
            n,
            initial_temperature = self.config.initial_temperature,
            cooling_rate = self.config.cooling_rate,
            min_temperature = self.config.min_temperature,
            "starting simulated annealing"
        );

        let result = SaRunner::run(&RouteAnnealing::new(distances), &self.config);

        tracing::debug!(
            n,
            initial_cost_km = result.initial_cost,
            best_cost_km = result.best_cost,
            iterations = result.iterations,
            accepted = result.accepted_moves,
            "simulated annealing finished"
        );
        result
    }
}

impl RouteSolver for AnnealingOptimizer {
    fn solve(&self, waypoints: &[Waypoint]) -> Result<Vec<usize>, RouteError> {
        Ok(self.optimize(waypoints))
    }
}

/// Optimizes `waypoints` with simulated annealing configured by `config`.
///
/// # Panics
/// Panics if `config` is invalid.
pub fn optimize_annealing(waypoints: &[Waypoint], config: &SaConfig) -> Vec<usize> {
    AnnealingOptimizer::new(config.clone()).optimize(waypoints)
}
