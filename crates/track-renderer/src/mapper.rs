//! Linear degrees-to-pixel coordinate mapping.

use track_common::{GeoImageFrame, OverlayError, OverlayResult};

/// Derived linear transform between geographic coordinates and image pixels.
///
/// Built once per calibration frame and reused for every position of a
/// render. The mapping is affine per axis; earth curvature across the frame
/// is assumed negligible.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    deg_per_pixel_lat: f64,
    deg_per_pixel_lon: f64,
    origin_lat: f64,
    origin_lon: f64,
}

impl CoordinateMapper {
    /// Derive the per-axis ratios and the geographic position of pixel (0,0)
    /// from the frame's calibration corners.
    pub fn new(frame: &GeoImageFrame) -> OverlayResult<Self> {
        let lat_diff_px = frame.top_left.pixel_y as f64 - frame.bottom_right.pixel_y as f64;
        if lat_diff_px == 0.0 {
            return Err(OverlayError::DegenerateFrame { axis: "y" });
        }

        let lon_diff_px = frame.top_left.pixel_x as f64 - frame.bottom_right.pixel_x as f64;
        if lon_diff_px == 0.0 {
            return Err(OverlayError::DegenerateFrame { axis: "x" });
        }

        let lat_diff_deg = frame.bottom_right.lat - frame.top_left.lat;
        let deg_per_pixel_lat = lat_diff_deg / lat_diff_px;

        let lon_diff_deg = frame.top_left.lon - frame.bottom_right.lon;
        let deg_per_pixel_lon = lon_diff_deg / lon_diff_px;

        Ok(Self {
            deg_per_pixel_lat,
            deg_per_pixel_lon,
            origin_lat: frame.top_left.lat + frame.top_left.pixel_y as f64 * deg_per_pixel_lat,
            origin_lon: frame.top_left.lon - frame.top_left.pixel_x as f64 * deg_per_pixel_lon,
        })
    }

    /// Map a latitude to an image row.
    ///
    /// Positions past the top edge clamp to row 0; the path renderer treats
    /// 0 as the off-image sentinel.
    pub fn pixel_y(&self, lat: f64) -> u32 {
        let px = (self.origin_lat - lat) / self.deg_per_pixel_lat;
        if px < 0.0 {
            0
        } else {
            px.round() as u32
        }
    }

    /// Map a longitude to an image column, with the same clamp policy as
    /// [`pixel_y`](Self::pixel_y).
    pub fn pixel_x(&self, lon: f64) -> u32 {
        let px = (lon - self.origin_lon) / self.deg_per_pixel_lon;
        if px < 0.0 {
            0
        } else {
            px.round() as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use track_common::GeoAnchor;

    #[test]
    fn test_degenerate_frame_is_rejected() {
        let flat = GeoImageFrame::new(
            100,
            100,
            GeoAnchor::new(50.0, 10.0, 0, 40),
            GeoAnchor::new(49.0, 11.0, 100, 40),
        );
        assert!(matches!(
            CoordinateMapper::new(&flat),
            Err(OverlayError::DegenerateFrame { axis: "y" })
        ));

        let thin = GeoImageFrame::new(
            100,
            100,
            GeoAnchor::new(50.0, 10.0, 70, 0),
            GeoAnchor::new(49.0, 11.0, 70, 100),
        );
        assert!(matches!(
            CoordinateMapper::new(&thin),
            Err(OverlayError::DegenerateFrame { axis: "x" })
        ));
    }
}
