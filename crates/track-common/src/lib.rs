//! Common types shared across the track-overlay crates.

pub mod color;
pub mod error;
pub mod frame;
pub mod position;

pub use color::Rgb;
pub use error::{OverlayError, OverlayResult};
pub use frame::{GeoAnchor, GeoImageFrame};
pub use position::PositionSample;
