//! Pairwise geodesic distance matrix.
//!
//! Distances are measured on the WGS-84 ellipsoid (Karney's geodesic
//! algorithm via `geo`), so polar and long-range pairs are accurate.
//! The matrix is built once per optimization call and shared read-only by
//! every solver.
//!
//! # Complexity
//! O(n²) distance evaluations. Only the upper triangle is computed; the
//! lower triangle is mirrored, so `get(i, j) == get(j, i)` exactly.

use crate::model::Waypoint;
use geo::{Distance, Geodesic, Point};

const METERS_PER_KM: f64 = 1000.0;

/// Geodesic distance in kilometers between two `(latitude, longitude)` pairs.
///
/// # Examples
///
/// ```
/// use route_metaheur::distance::geodesic_km;
///
/// let d = geodesic_km((0.0, 0.0), (0.0, 1.0));
/// assert!((d - 111.32).abs() < 0.01);
/// ```
pub fn geodesic_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    // geo points are (x = longitude, y = latitude)
    let a = Point::new(from.1, from.0);
    let b = Point::new(to.1, to.0);
    Geodesic.distance(a, b) / METERS_PER_KM
}

/// Dense `n × n` distance table in kilometers, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix from waypoint coordinates.
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Self {
        let positions: Vec<(f64, f64)> = waypoints.iter().map(Waypoint::position).collect();
        let n = positions.len();

        let upper = upper_rows(&positions);

        let mut data = vec![0.0; n * n];
        for (i, row) in upper.into_iter().enumerate() {
            for (offset, d) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        tracing::trace!(n, "built geodesic distance matrix");
        Self { n, data }
    }

    /// Wraps precomputed distances.
    ///
    /// # Panics
    /// Panics if `rows` is not square.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "distance matrix must be square");
            data.extend(row);
        }
        Self { n, data }
    }

    /// Number of waypoints.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance from `i` to `j` in kilometers.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Distances from `i` to every waypoint.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

/// For each `i`, distances to every `j > i`.
#[cfg(feature = "parallel")]
fn upper_rows(positions: &[(f64, f64)]) -> Vec<Vec<f64>> {
    use rayon::prelude::*;

    (0..positions.len())
        .into_par_iter()
        .map(|i| {
            positions[i + 1..]
                .iter()
                .map(|&p| geodesic_km(positions[i], p))
                .collect()
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn upper_rows(positions: &[(f64, f64)]) -> Vec<Vec<f64>> {
    (0..positions.len())
        .map(|i| {
            positions[i + 1..]
                .iter()
                .map(|&p| geodesic_km(positions[i], p))
                .collect()
        })
        .collect()
}
