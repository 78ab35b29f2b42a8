//! Error types for the track-overlay crates.

use thiserror::Error;

/// Result type alias using OverlayError.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Primary error type for overlay rendering operations.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// The calibration corners span zero pixels on one axis, so no
    /// degrees-per-pixel ratio can be derived.
    #[error("degenerate calibration frame: zero pixel span on the {axis} axis")]
    DegenerateFrame { axis: &'static str },

    #[error("invalid hex color: {0}")]
    InvalidHexColor(String),
}
