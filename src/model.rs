//! Stop and route representation.
//!
//! A [`Waypoint`] is identified only by its position in the caller's list.
//! Index 0 is the fixed start: every route produced by this crate is a
//! permutation of `0..n` that begins with 0.
//!
//! Coordinates are **not validated** here or anywhere in the solvers.
//! Out-of-range latitude/longitude is a caller precondition violation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Service time assumed for a stop with no (or zero) estimated duration.
pub const DEFAULT_SERVICE_MINUTES: u32 = 30;

/// A geolocated stop.
///
/// # Examples
///
/// ```
/// use route_metaheur::model::Waypoint;
///
/// let stop = Waypoint::new(51.5074, -0.1278)
///     .with_address("10 Downing St")
///     .with_estimated_duration(45)
///     .with_priority(3);
/// assert_eq!(stop.service_minutes(), 45);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,

    /// Longitude in decimal degrees.
    pub longitude: f64,

    /// Display only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: Option<String>,

    /// Display only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub service_type: Option<String>,

    /// Expected time spent at the stop. See [`service_minutes`](Self::service_minutes).
    #[cfg_attr(feature = "serde", serde(default))]
    pub estimated_duration_minutes: Option<u32>,

    /// Higher is more important.
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: i32,

    /// Reserved; ignored by every solver in this crate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_window_start: Option<i64>,

    /// Reserved; ignored by every solver in this crate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_window_end: Option<i64>,
}

impl Waypoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            address: None,
            service_type: None,
            estimated_duration_minutes: None,
            priority: 0,
            time_window_start: None,
            time_window_end: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = Some(service_type.into());
        self
    }

    pub fn with_estimated_duration(mut self, minutes: u32) -> Self {
        self.estimated_duration_minutes = Some(minutes);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_time_window(mut self, start: i64, end: i64) -> Self {
        self.time_window_start = Some(start);
        self.time_window_end = Some(end);
        self
    }

    /// `(latitude, longitude)` pair.
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Effective service time in minutes.
    ///
    /// Absent or zero durations fall back to [`DEFAULT_SERVICE_MINUTES`].
    pub fn service_minutes(&self) -> u32 {
        match self.estimated_duration_minutes {
            Some(m) if m > 0 => m,
            _ => DEFAULT_SERVICE_MINUTES,
        }
    }
}

/// The trivial route `[0, 1, .., n-1]`.
pub fn identity_route(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Checks the route invariants: a permutation of `0..n` starting at 0.
///
/// The empty route is valid only for `n == 0`.
pub fn is_valid_route(route: &[usize], n: usize) -> bool {
    if route.len() != n {
        return false;
    }
    if n == 0 {
        return true;
    }
    if route[0] != 0 {
        return false;
    }
    let mut seen = vec![false; n];
    for &idx in route {
        if idx >= n || seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}

/// Returns `waypoints` rearranged in visiting order.
///
/// # Panics
/// Panics if `order` contains an index out of bounds.
pub fn reorder(waypoints: &[Waypoint], order: &[usize]) -> Vec<Waypoint> {
    order.iter().map(|&i| waypoints[i].clone()).collect()
}
