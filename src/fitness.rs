//! Route cost and fitness.
//!
//! Two views of the same quantity, total traveled distance:
//!
//! - **cost**: sum of consecutive-edge distances, lower is better (SA)
//! - **fitness**: `1 / (cost + ε)`, higher is better (GA selection)

use crate::distance::DistanceMatrix;

/// Guard against division by zero when every stop is coincident.
pub const FITNESS_EPSILON: f64 = 1e-10;

/// Total distance along `route` in kilometers.
///
/// The route is an open path: no return leg to the start.
pub fn route_cost(route: &[usize], distances: &DistanceMatrix) -> f64 {
    route
        .windows(2)
        .map(|leg| distances.get(leg[0], leg[1]))
        .sum()
}

/// Reciprocal of a cost. Strictly decreasing in `cost` and finite at 0.
#[inline]
pub fn fitness_from_cost(cost: f64) -> f64 {
    1.0 / (cost + FITNESS_EPSILON)
}

/// Inverse of [`fitness_from_cost`].
#[inline]
pub fn cost_from_fitness(fitness: f64) -> f64 {
    1.0 / fitness - FITNESS_EPSILON
}

/// Fitness of `route` against `distances`.
pub fn route_fitness(route: &[usize], distances: &DistanceMatrix) -> f64 {
    fitness_from_cost(route_cost(route, distances))
}
