//! Flight-track overlay rendering.
//!
//! Draws recorded position reports as colored line segments onto a
//! calibrated raster image:
//! - Linear degrees-to-pixel coordinate mapping
//! - Altitude-keyed gradient color tables
//! - Path drawing with off-image clipping

pub mod canvas;
pub mod gradient;
pub mod mapper;
pub mod path;

pub use canvas::{PixmapCanvas, RasterCanvas};
pub use gradient::{GradientTable, Palette};
pub use mapper::CoordinateMapper;
pub use path::{PathRenderer, RenderOptions};
