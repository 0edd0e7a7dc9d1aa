//! The strategy boundary shared by every stop-ordering algorithm.

use crate::error::RouteError;
use crate::model::Waypoint;

/// A strategy that orders stops.
///
/// Implementations return a permutation of `0..n` starting at 0, or the
/// identity for fewer than 2 waypoints. Any implementation can stand in for
/// another without changing the caller.
pub trait RouteSolver {
    fn solve(&self, waypoints: &[Waypoint]) -> Result<Vec<usize>, RouteError>;
}
