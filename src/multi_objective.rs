//! Weighted multi-objective stop ordering.
//!
//! Combines distance, service time and priority into one integer arc cost,
//! builds a path by cheapest arc from the start and improves it with 2-opt.
//! When no route can be produced the solver falls back to nearest-neighbor
//! construction on plain distances; that recovery is never fatal.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::construction::nearest_neighbor_route;
use crate::distance::DistanceMatrix;
use crate::error::{ConfigError, RouteError};
use crate::model::{identity_route, Waypoint};
use crate::solver::RouteSolver;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Priority at which the priority term of an arc cost vanishes.
const PRIORITY_CEILING: i32 = 10;

const I64_MIN_F64: f64 = i64::MIN as f64;
const I64_MAX_F64: f64 = i64::MAX as f64;

/// Relative weight of each objective in the arc cost.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectiveWeights {
    pub distance: f64,
    pub time: f64,
    pub priority: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            distance: 0.5,
            time: 0.3,
            priority: 0.2,
        }
    }
}

impl ObjectiveWeights {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("distance", self.distance),
            ("time", self.time),
            ("priority", self.priority),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Integer cost of travelling to `to` over `distance_km`.
///
/// `distance_km * w.distance * 1000 + service(to) * w.time * 10
/// + (10 - priority(to)) * w.priority * 100`, truncated toward zero.
/// Higher-priority destinations are cheaper to reach.
///
/// Returns `None` when the cost is not finite or does not fit in an `i64`.
pub fn arc_cost(
    distance_km: f64,
    to: &Waypoint,
    weights: &ObjectiveWeights,
) -> Option<i64> {
    let cost = distance_km * weights.distance * 1000.0
        + f64::from(to.service_minutes()) * weights.time * 10.0
        + (f64::from(PRIORITY_CEILING) - f64::from(to.priority)) * weights.priority * 100.0;
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if (I64_MIN_F64..I64_MAX_F64).contains(&cost) {
        Some(cost as i64)
    } else {
        None
    }
}

/// Weighted solver: cheapest-arc construction plus 2-opt.
#[derive(Debug, Clone, Default)]
pub struct MultiObjectiveSolver {
    weights: ObjectiveWeights,
}

impl MultiObjectiveSolver {
    pub fn new(weights: ObjectiveWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ObjectiveWeights {
        &self.weights
    }

    /// Solves without the fallback.
    ///
    /// Returns [`RouteError::NoSolution`] when the weights are invalid or an
    /// arc cost is not finite (for example NaN coordinates).
    pub fn try_solve(&self, waypoints: &[Waypoint]) -> Result<Vec<usize>, RouteError> {
        if waypoints.len() < 2 {
            return Ok(identity_route(waypoints.len()));
        }
        self.weights
            .validate()
            .map_err(|e| RouteError::NoSolution(e.to_string()))?;

        let distances = DistanceMatrix::from_waypoints(waypoints);
        let costs = self.cost_matrix(waypoints, &distances)?;

        let mut route = cheapest_arc_path(&costs);
        two_opt(&mut route, &costs);
        Ok(route)
    }

    fn cost_matrix(
        &self,
        waypoints: &[Waypoint],
        distances: &DistanceMatrix,
    ) -> Result<Vec<Vec<i64>>, RouteError> {
        let n = waypoints.len();
        let mut costs = vec![vec![0i64; n]; n];
        for (i, row) in costs.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                if i == j {
                    continue;
                }
                *cell = arc_cost(distances.get(i, j), &waypoints[j], &self.weights)
                    .ok_or_else(|| {
                        RouteError::NoSolution(format!("arc {i} -> {j} has no finite cost"))
                    })?;
            }
        }
        Ok(costs)
    }
}

impl RouteSolver for MultiObjectiveSolver {
    /// Solves, falling back to nearest-neighbor construction on failure.
    fn solve(&self, waypoints: &[Waypoint]) -> Result<Vec<usize>, RouteError> {
        match self.try_solve(waypoints) {
            Ok(route) => Ok(route),
            Err(RouteError::NoSolution(reason)) => {
                tracing::warn!(%reason, "weighted solver found no route; using nearest neighbor");
                Ok(nearest_neighbor_route(&DistanceMatrix::from_waypoints(
                    waypoints,
                )))
            }
            Err(e) => Err(e),
        }
    }
}

/// Greedy path from 0 along the cheapest outgoing arc. Ties take the lowest index.
fn cheapest_arc_path(costs: &[Vec<i64>]) -> Vec<usize> {
    let n = costs.len();
    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n);
    visited[0] = true;
    route.push(0);

    let mut current = 0;
    while let Some(next) = (0..n)
        .filter(|&j| !visited[j])
        .min_by_key(|&j| (costs[current][j], j))
    {
        visited[next] = true;
        route.push(next);
        current = next;
    }
    route
}

/// Saturates at the `i64` bounds rather than overflowing.
fn path_cost(route: &[usize], costs: &[Vec<i64>]) -> i64 {
    route
        .windows(2)
        .fold(0i64, |acc, leg| acc.saturating_add(costs[leg[0]][leg[1]]))
}

/// First-improvement 2-opt on an open path with position 0 fixed.
///
/// Arc costs may be asymmetric, so each candidate reversal is priced in
/// full rather than by the four-edge delta.
///
/// # Complexity
/// O(n³) per pass
fn two_opt(route: &mut [usize], costs: &[Vec<i64>]) {
    let n = route.len();
    if n < 4 {
        return;
    }

    let mut best = path_cost(route, costs);
    let mut improved = true;
    while improved {
        improved = false;
        for i in 1..n - 1 {
            for j in i + 1..n {
                route[i..=j].reverse();
                let candidate = path_cost(route, costs);
                if candidate < best {
                    best = candidate;
                    improved = true;
                } else {
                    route[i..=j].reverse();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::is_valid_route;

    #[test]
    fn test_default_weights() {
        let w = ObjectiveWeights::default();
        assert_eq!((w.distance, w.time, w.priority), (0.5, 0.3, 0.2));
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_arc_cost_formula() {
        let to = Waypoint::new(0.0, 0.0)
            .with_estimated_duration(20)
            .with_priority(4);
        // 2.0 * 0.5 * 1000 + 20 * 0.3 * 10 + 6 * 0.2 * 100 = 1000 + 60 + 120
        assert_eq!(arc_cost(2.0, &to, &ObjectiveWeights::default()), Some(1180));
    }

    #[test]
    fn test_arc_cost_default_service_time() {
        let to = Waypoint::new(0.0, 0.0);
        // 0 + 30 * 0.3 * 10 + 10 * 0.2 * 100 = 90 + 200
        assert_eq!(arc_cost(0.0, &to, &ObjectiveWeights::default()), Some(290));
    }

    #[test]
    fn test_arc_cost_nan_distance() {
        assert_eq!(
            arc_cost(f64::NAN, &Waypoint::new(0.0, 0.0), &ObjectiveWeights::default()),
            None
        );
    }

    #[test]
    fn test_arc_cost_extreme_priority() {
        let to = Waypoint::new(0.0, 0.0).with_priority(i32::MIN);
        let cost = arc_cost(0.0, &to, &ObjectiveWeights::default()).expect("fits in i64");
        assert!(cost > 0);

        let to = Waypoint::new(0.0, 0.0).with_priority(i32::MAX);
        let cost = arc_cost(0.0, &to, &ObjectiveWeights::default()).expect("fits in i64");
        assert!(cost < 0);
    }

    #[test]
    fn test_arc_cost_out_of_range() {
        let w = ObjectiveWeights {
            distance: 1e300,
            ..ObjectiveWeights::default()
        };
        assert!(w.validate().is_ok());
        assert_eq!(arc_cost(1.0, &Waypoint::new(0.0, 0.0), &w), None);
    }

    #[test]
    fn test_path_cost_saturates() {
        let costs = vec![
            vec![0, i64::MAX, 0],
            vec![i64::MAX, 0, i64::MAX],
            vec![0, i64::MAX, 0],
        ];
        assert_eq!(path_cost(&[0, 1, 2], &costs), i64::MAX);
    }

    #[test]
    fn test_solves_with_extreme_priority() {
        let stops = vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 0.1).with_priority(i32::MIN),
            Waypoint::new(0.0, 0.2).with_priority(i32::MAX),
            Waypoint::new(0.0, 0.3),
        ];
        let route = MultiObjectiveSolver::default()
            .try_solve(&stops)
            .expect("finite costs");
        assert!(is_valid_route(&route, 4));
    }

    #[test]
    fn test_huge_weight_falls_back() {
        let stops = vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 0.3),
            Waypoint::new(0.0, 0.1),
            Waypoint::new(0.0, 0.2),
        ];
        let solver = MultiObjectiveSolver::new(ObjectiveWeights {
            distance: 1e300,
            ..ObjectiveWeights::default()
        });
        assert!(matches!(
            solver.try_solve(&stops),
            Err(RouteError::NoSolution(_))
        ));
        let route = solver.solve(&stops).expect("fallback never fails");
        assert_eq!(route, vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_invalid_weights() {
        let w = ObjectiveWeights {
            distance: -1.0,
            ..ObjectiveWeights::default()
        };
        assert_eq!(
            w.validate(),
            Err(ConfigError::InvalidWeight {
                name: "distance",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_solves_line() {
        let stops = vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 0.3),
            Waypoint::new(0.0, 0.1),
            Waypoint::new(0.0, 0.2),
        ];
        let route = MultiObjectiveSolver::default().solve(&stops).expect("solves");
        assert_eq!(route, vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_two_opt_fixes_greedy_detour() {
        let stops = vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 0.1),
            Waypoint::new(0.0, -0.11),
            Waypoint::new(0.0, -0.2),
            Waypoint::new(0.0, 0.5),
        ];
        let route = MultiObjectiveSolver::default()
            .try_solve(&stops)
            .expect("finite costs");
        // Both orders clear the west side before heading east.
        assert!(
            route == vec![0, 2, 3, 1, 4] || route == vec![0, 3, 2, 1, 4],
            "unexpected {route:?}"
        );
    }

    #[test]
    fn test_two_opt_never_worsens() {
        let costs = vec![
            vec![0, 5, 9, 4, 7],
            vec![3, 0, 2, 8, 6],
            vec![7, 1, 0, 5, 3],
            vec![2, 9, 4, 0, 1],
            vec![6, 3, 8, 2, 0],
        ];
        let mut route = cheapest_arc_path(&costs);
        let before = path_cost(&route, &costs);
        two_opt(&mut route, &costs);
        assert!(path_cost(&route, &costs) <= before);
        assert!(is_valid_route(&route, 5));
    }

    #[test]
    fn test_degenerate_inputs() {
        let solver = MultiObjectiveSolver::default();
        assert!(solver.solve(&[]).expect("identity").is_empty());
        assert_eq!(
            solver.solve(&[Waypoint::new(1.0, 1.0)]).expect("identity"),
            vec![0]
        );
    }

    #[test]
    fn test_no_solution_is_reported() {
        let stops = vec![Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 1.0)];
        let solver = MultiObjectiveSolver::new(ObjectiveWeights {
            priority: -0.5,
            ..ObjectiveWeights::default()
        });
        let err = solver.try_solve(&stops).unwrap_err();
        assert!(matches!(err, RouteError::NoSolution(_)));
    }

    #[test]
    fn test_falls_back_to_nearest_neighbor() {
        let stops = vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 0.3),
            Waypoint::new(0.0, 0.1),
            Waypoint::new(0.0, 0.2),
        ];
        let solver = MultiObjectiveSolver::new(ObjectiveWeights {
            time: f64::INFINITY,
            ..ObjectiveWeights::default()
        });
        assert!(solver.try_solve(&stops).is_err());

        let route = solver.solve(&stops).expect("fallback never fails");
        let greedy = nearest_neighbor_route(&DistanceMatrix::from_waypoints(&stops));
        assert_eq!(route, greedy);
        assert!(is_valid_route(&route, 4));
    }
}
