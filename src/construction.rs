//! Nearest-neighbor route construction.
//!
//! Greedy: start at 0 and always move to the closest unvisited stop. Used as
//! the annealing seed, as the fallback of the weighted solver, and as a
//! standalone algorithm.

use crate::distance::DistanceMatrix;
use crate::error::RouteError;
use crate::model::{identity_route, Waypoint};
use crate::solver::RouteSolver;

/// Builds the nearest-neighbor route over `distances`.
///
/// Ties go to the lowest index, so the result is deterministic.
///
/// # Complexity
/// O(n²)
pub fn nearest_neighbor_route(distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.size();
    if n < 2 {
        return identity_route(n);
    }

    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n);
    let mut current = 0;
    visited[0] = true;
    route.push(0);

    while route.len() < n {
        let mut nearest = usize::MAX;
        let mut nearest_dist = f64::INFINITY;
        for (j, &d) in distances.row(current).iter().enumerate() {
            if visited[j] {
                continue;
            }
            // `nearest == usize::MAX` admits NaN distances so every stop is still placed.
            if d < nearest_dist || nearest == usize::MAX {
                nearest = j;
                nearest_dist = d;
            }
        }
        visited[nearest] = true;
        route.push(nearest);
        current = nearest;
    }

    route
}

/// Nearest-neighbor construction as a standalone algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborSolver;

impl NearestNeighborSolver {
    pub fn optimize(&self, waypoints: &[Waypoint]) -> Vec<usize> {
        if waypoints.len() < 2 {
            return identity_route(waypoints.len());
        }
        nearest_neighbor_route(&DistanceMatrix::from_waypoints(waypoints))
    }
}

impl RouteSolver for NearestNeighborSolver {
    fn solve(&self, waypoints: &[Waypoint]) -> Result<Vec<usize>, RouteError> {
        Ok(self.optimize(waypoints))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::route_cost;
    use crate::model::is_valid_route;

    #[test]
    fn test_unit_square_traces_perimeter() {
        let square = vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 1.0),
            Waypoint::new(1.0, 1.0),
            Waypoint::new(1.0, 0.0),
        ];
        let m = DistanceMatrix::from_waypoints(&square);
        let route = nearest_neighbor_route(&m);
        // One degree of latitude is shorter than one of longitude near the
        // equator, so the walk goes north first.
        assert_eq!(route, vec![0, 3, 2, 1]);

        for leg in route.windows(2) {
            let crosses = matches!((leg[0], leg[1]), (0, 2) | (2, 0) | (1, 3) | (3, 1));
            assert!(!crosses, "diagonal leg {leg:?}");
        }
        let cost = route_cost(&route, &m);
        let edges = m.get(0, 3) + m.get(3, 2) + m.get(2, 1);
        assert!((cost - edges).abs() < 1e-9);
    }

    #[test]
    fn test_line_in_order() {
        let m = DistanceMatrix::from_rows(vec![
            vec![0.0, 5.0, 1.0, 3.0],
            vec![5.0, 0.0, 4.0, 2.0],
            vec![1.0, 4.0, 0.0, 2.0],
            vec![3.0, 2.0, 2.0, 0.0],
        ]);
        assert_eq!(nearest_neighbor_route(&m), vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_ties_take_lowest_index() {
        let m = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ]);
        assert_eq!(nearest_neighbor_route(&m), vec![0, 1, 2]);
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(NearestNeighborSolver.optimize(&[]).is_empty());
        assert_eq!(NearestNeighborSolver.optimize(&[Waypoint::new(3.0, 4.0)]), vec![0]);
    }

    #[test]
    fn test_coincident_stops_all_visited() {
        let stops = vec![
            Waypoint::new(10.0, 10.0),
            Waypoint::new(10.0, 10.0),
            Waypoint::new(10.5, 10.0),
            Waypoint::new(10.0, 10.0),
        ];
        let route = NearestNeighborSolver.solve(&stops).expect("infallible");
        assert!(is_valid_route(&route, 4));
        assert_eq!(route, vec![0, 1, 3, 2]);
    }
}
