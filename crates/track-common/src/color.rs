//! RGB color values and hex parsing.

use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex triple like `"FF3118"` or `"#ff3118"`.
    pub fn from_hex(hex: &str) -> OverlayResult<Self> {
        let raw = hex.trim_start_matches('#');
        if raw.len() != 6 || !raw.is_ascii() {
            return Err(OverlayError::InvalidHexColor(hex.to_string()));
        }

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&raw[range], 16)
                .map_err(|_| OverlayError::InvalidHexColor(hex.to_string()))
        };

        Ok(Self {
            r: component(0..2)?,
            g: component(2..4)?,
            b: component(4..6)?,
        })
    }
}
