//! Distance and duration summaries for an ordered route.

use crate::distance::geodesic_km;
use crate::model::Waypoint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Travel speed used to turn kilometers into minutes.
pub const AVERAGE_SPEED_KMH: f64 = 50.0;

/// Totals for one route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteMetrics {
    /// Open-path geodesic length, rounded to 2 decimals.
    pub distance_km: f64,

    /// Travel plus service time at every stop after the first.
    pub duration_minutes: u64,
}

/// Computes totals for `waypoints` visited in `order`.
///
/// Each leg contributes `trunc(travel + service)` minutes, where travel is
/// at [`AVERAGE_SPEED_KMH`] and service belongs to the leg's destination.
/// The start stop's own service time is not counted.
///
/// # Panics
/// Panics if `order` contains an index out of bounds.
///
/// # Examples
///
/// ```
/// use route_metaheur::metrics::route_metrics;
/// use route_metaheur::model::Waypoint;
///
/// let stops = vec![Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 1.0)];
/// let m = route_metrics(&stops, &[0, 1]);
/// assert_eq!(m.distance_km, 111.32);
/// assert_eq!(m.duration_minutes, 163);
/// ```
pub fn route_metrics(waypoints: &[Waypoint], order: &[usize]) -> RouteMetrics {
    let mut distance_km = 0.0;
    let mut duration_minutes = 0u64;

    for leg in order.windows(2) {
        let from = &waypoints[leg[0]];
        let to = &waypoints[leg[1]];
        let km = geodesic_km(from.position(), to.position());
        let travel = km / AVERAGE_SPEED_KMH * 60.0;

        distance_km += km;
        duration_minutes += (travel + f64::from(to.service_minutes())) as u64;
    }

    RouteMetrics {
        distance_km: (distance_km * 100.0).round() / 100.0,
        duration_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        let zero = RouteMetrics {
            distance_km: 0.0,
            duration_minutes: 0,
        };
        assert_eq!(route_metrics(&[], &[]), zero);
        assert_eq!(route_metrics(&[Waypoint::new(3.0, 4.0)], &[0]), zero);
    }

    #[test]
    fn test_one_degree_leg() {
        let stops = vec![Waypoint::new(0.0, 0.0), Waypoint::new(0.0, 1.0)];
        let m = route_metrics(&stops, &[0, 1]);
        assert!((m.distance_km - 111.32).abs() < 1e-9);
        // 111.32 km at 50 km/h = 133.58 min, plus 30 min default service
        assert_eq!(m.duration_minutes, 163);
    }

    #[test]
    fn test_destination_service_time() {
        let stops = vec![
            Waypoint::new(0.0, 0.0).with_estimated_duration(500),
            Waypoint::new(0.0, 0.0).with_estimated_duration(12),
            Waypoint::new(0.0, 0.0),
        ];
        let m = route_metrics(&stops, &[0, 1, 2]);
        assert_eq!(m.distance_km, 0.0);
        assert_eq!(m.duration_minutes, 12 + 30);
    }

    #[test]
    fn test_each_leg_truncated() {
        // 0.1 degree legs: 11.132 km -> 13.358 min travel, truncated per leg
        let stops = vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 0.1).with_estimated_duration(1),
            Waypoint::new(0.0, 0.2).with_estimated_duration(1),
        ];
        let m = route_metrics(&stops, &[0, 1, 2]);
        assert_eq!(m.duration_minutes, 14 + 14);
    }

    #[test]
    fn test_order_matters() {
        let stops = vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(0.0, 2.0),
            Waypoint::new(0.0, 1.0),
        ];
        let good = route_metrics(&stops, &[0, 2, 1]);
        let bad = route_metrics(&stops, &[0, 1, 2]);
        assert!(good.distance_km < bad.distance_km);
        assert!(good.duration_minutes < bad.duration_minutes);
    }
}
