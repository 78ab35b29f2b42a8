//! Recorded track position samples.

use serde::{Deserialize, Serialize};

/// One recorded position report of a track.
///
/// Samples are consumed as an ordered sequence; the order is the flight
/// order. A negative altitude marks an unknown or below-reference reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Altitude in feet; negative means unknown.
    pub altitude: f64,
}

impl PositionSample {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}
