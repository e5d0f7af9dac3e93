use chrono::NaiveDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One GPS observation from the telemetry log
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fix {
    /// Log timestamp, whole-second resolution
    pub timestamp: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    /// True while the remote control was engaged
    pub remote_control: bool,
}

impl Fix {
    pub fn point(&self) -> TrackPoint {
        TrackPoint::new(self.latitude, self.longitude)
    }
}

/// A latitude/longitude pair in floating-point degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl TrackPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Mission waypoint with its acceptance radius
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_m: f64,
}

impl Waypoint {
    pub fn point(&self) -> TrackPoint {
        TrackPoint::new(self.latitude, self.longitude)
    }
}
