//! Calibrated base-image frame types.

use serde::{Deserialize, Serialize};

/// A calibration anchor: a known geographic position tied to the pixel it
/// occupies on the base image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoAnchor {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Image column of this position.
    pub pixel_x: u32,
    /// Image row of this position.
    pub pixel_y: u32,
}

impl GeoAnchor {
    pub fn new(lat: f64, lon: f64, pixel_x: u32, pixel_y: u32) -> Self {
        Self {
            lat,
            lon,
            pixel_x,
            pixel_y,
        }
    }
}

/// Pixel dimensions and the two calibration corners of a base image.
///
/// `top_left` must sit above and left of `bottom_right` in pixel space.
/// Frames with a zero pixel span on either axis are rejected when the
/// coordinate mapper is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoImageFrame {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Calibration anchor toward the top-left corner.
    pub top_left: GeoAnchor,
    /// Calibration anchor toward the bottom-right corner.
    pub bottom_right: GeoAnchor,
}

impl GeoImageFrame {
    pub fn new(width: u32, height: u32, top_left: GeoAnchor, bottom_right: GeoAnchor) -> Self {
        Self {
            width,
            height,
            top_left,
            bottom_right,
        }
    }

    /// Total pixel count of the base image.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}
