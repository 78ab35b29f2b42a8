//! Path rendering: recorded positions to colored segments on a canvas.

use rand::rngs::ThreadRng;
use rand::Rng;
use track_common::{GeoImageFrame, OverlayResult, PositionSample};

use crate::canvas::RasterCanvas;
use crate::gradient::{GradientTable, Palette};
use crate::mapper::CoordinateMapper;

/// Image-size scaling factor for the stroke width.
const LINE_CONST: f64 = 0.0000006064;

/// Image-size scaling factor for the alpha channel.
const ALPHA_CONST: f64 = 0.0000181283;

/// Alpha a zero-pixel image would get; derived values count down from here.
const BASE_ALPHA: f64 = 110.0;

/// Floor for derived alpha values (0-127 coverage scale).
const MIN_ALPHA: u8 = 40;

const MIN_LINE_WIDTH: u32 = 1;
const MAX_LINE_WIDTH: u32 = 3;

/// Options for a single path render.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Palette id 1-6; 0 picks one at random.
    pub palette_id: u8,
    /// Alpha in the 0-127 coverage convention; 0 derives it from the image
    /// size.
    pub alpha: u8,
}

/// Renders recorded tracks onto raster canvases.
///
/// Holds the random source used when no palette is requested explicitly, so
/// tests can inject a seeded one.
#[derive(Debug)]
pub struct PathRenderer<R: Rng> {
    rng: R,
}

impl PathRenderer<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PathRenderer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PathRenderer<R> {
    /// Use an explicit random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one track onto the canvas.
    ///
    /// Consecutive samples are connected by segments colored by altitude.
    /// Samples mapping outside the image draw nothing but still advance the
    /// reference point, so a track re-entering the image continues from its
    /// true previous position. Fails before any drawing if the frame is
    /// degenerate.
    pub fn draw_path<C: RasterCanvas>(
        &mut self,
        positions: &[PositionSample],
        frame: &GeoImageFrame,
        options: RenderOptions,
        canvas: &mut C,
    ) -> OverlayResult<()> {
        let mapper = CoordinateMapper::new(frame)?;

        let alpha = if options.alpha == 0 {
            derive_alpha(frame)
        } else {
            options.alpha
        };

        let line_width = derive_line_width(frame);
        canvas.set_line_width(line_width);

        let palette = if options.palette_id == 0 {
            Palette::random(&mut self.rng)
        } else {
            Palette::from_id(options.palette_id)
        };
        let table = GradientTable::build(palette);

        tracing::debug!(
            samples = positions.len(),
            palette = ?palette,
            alpha,
            line_width,
            "drawing track overlay"
        );

        // (0,0) means "no prior point yet", distinct from a real pixel at
        // the origin.
        let mut last: (u32, u32) = (0, 0);

        for position in positions {
            let rgb = table.color_for_altitude(position.altitude);
            let color = canvas.allocate_color(rgb.r, rgb.g, rgb.b, alpha);

            let x = mapper.pixel_x(position.longitude);
            let y = mapper.pixel_y(position.latitude);

            if last == (0, 0) && x > 0 && y > 0 {
                // First visible point: a dot establishes the start without
                // drawing a stray segment.
                canvas.draw_segment(x, y, x, y, color);
            } else if x > 0 && y > 0 && x < frame.width && y < frame.height {
                canvas.draw_segment(last.0, last.1, x, y, color);
            }

            last = (x, y);
        }

        Ok(())
    }
}

/// Derive the alpha channel from the image size.
///
/// Larger images get a lower coverage value so dense tracks stay legible.
fn derive_alpha(frame: &GeoImageFrame) -> u8 {
    let pixels = frame.pixel_count() as f64;
    let alphas_per_pixel = (pixels * ALPHA_CONST).round();
    let alpha = BASE_ALPHA - (alphas_per_pixel / BASE_ALPHA).round();

    if alpha < MIN_ALPHA as f64 {
        MIN_ALPHA
    } else {
        alpha as u8
    }
}

/// Derive the stroke width from the image size.
fn derive_line_width(frame: &GeoImageFrame) -> u32 {
    let width = (frame.pixel_count() as f64 * LINE_CONST).round() as u32;
    width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use track_common::GeoAnchor;

    fn frame(width: u32, height: u32) -> GeoImageFrame {
        GeoImageFrame::new(
            width,
            height,
            GeoAnchor::new(50.0, 10.0, 0, 0),
            GeoAnchor::new(49.0, 11.0, width, height),
        )
    }

    #[test]
    fn test_derive_alpha_small_image() {
        // 1000x1000: 18 alphas per pixel, rounds away to nothing.
        assert_eq!(derive_alpha(&frame(1000, 1000)), 110);
    }

    #[test]
    fn test_derive_alpha_floor() {
        assert_eq!(derive_alpha(&frame(60000, 60000)), MIN_ALPHA);
    }

    #[test]
    fn test_derive_line_width_clamps() {
        assert_eq!(derive_line_width(&frame(100, 100)), 1);
        assert_eq!(derive_line_width(&frame(2000, 2000)), 2);
        assert_eq!(derive_line_width(&frame(4000, 4000)), 3);
    }
}
