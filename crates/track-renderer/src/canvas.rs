//! Canvas seam between the path renderer and the raster backend.

use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Drawing capabilities the path renderer needs from a raster backend.
///
/// Alpha follows the 0-127 coverage convention of the original raster
/// library: 0 is opaque, 127 fully transparent.
pub trait RasterCanvas {
    /// Backend-specific color handle.
    type ColorHandle: Copy;

    /// Allocate a drawable color.
    fn allocate_color(&mut self, r: u8, g: u8, b: u8, alpha: u8) -> Self::ColorHandle;

    /// Set the stroke width for subsequent segments.
    fn set_line_width(&mut self, width: u32);

    /// Draw a line segment. Coincident endpoints draw a single dot.
    fn draw_segment(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Self::ColorHandle);
}

/// [`RasterCanvas`] adapter over a tiny-skia pixmap.
pub struct PixmapCanvas {
    pixmap: Pixmap,
    line_width: f32,
}

impl PixmapCanvas {
    /// Allocate a transparent canvas. Returns `None` for zero dimensions.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            pixmap: Pixmap::new(width, height)?,
            line_width: 1.0,
        })
    }

    /// Wrap an existing pixmap, e.g. one with the base image already drawn.
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self {
            pixmap,
            line_width: 1.0,
        }
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn paint_for(color: tiny_skia::Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        paint
    }
}

impl RasterCanvas for PixmapCanvas {
    type ColorHandle = tiny_skia::Color;

    fn allocate_color(&mut self, r: u8, g: u8, b: u8, alpha: u8) -> Self::ColorHandle {
        // 0-127 coverage to 0-255 opacity.
        let coverage = alpha.min(127) as u16;
        let opacity = ((127 - coverage) * 255 / 127) as u8;
        tiny_skia::Color::from_rgba8(r, g, b, opacity)
    }

    fn set_line_width(&mut self, width: u32) {
        self.line_width = width.max(1) as f32;
    }

    fn draw_segment(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Self::ColorHandle) {
        let paint = Self::paint_for(color);

        if x0 == x1 && y0 == y1 {
            // Degenerate segment: a filled dot the size of the stroke.
            let radius = (self.line_width / 2.0).max(0.5);
            let mut pb = PathBuilder::new();
            pb.push_circle(x0 as f32, y0 as f32, radius);
            if let Some(path) = pb.finish() {
                self.pixmap
                    .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
            return;
        }

        let mut stroke = Stroke::default();
        stroke.width = self.line_width;
        stroke.line_cap = LineCap::Round;
        stroke.line_join = LineJoin::Round;

        let mut pb = PathBuilder::new();
        pb.move_to(x0 as f32, y0 as f32);
        pb.line_to(x1 as f32, y1 as f32);
        if let Some(path) = pb.finish() {
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_alpha_conversion() {
        let mut canvas = PixmapCanvas::new(4, 4).unwrap();

        let opaque = canvas.allocate_color(255, 255, 255, 0);
        assert_eq!(opaque.alpha(), 1.0);

        let transparent = canvas.allocate_color(255, 255, 255, 127);
        assert_eq!(transparent.alpha(), 0.0);
    }

    #[test]
    fn test_segment_touches_pixels() {
        let mut canvas = PixmapCanvas::new(100, 100).unwrap();
        canvas.set_line_width(2);
        let color = canvas.allocate_color(255, 0, 0, 0);
        canvas.draw_segment(10, 10, 90, 90, color);

        let pixel = canvas.pixmap().pixel(50, 50).unwrap();
        assert!(pixel.alpha() > 0);
    }
}
