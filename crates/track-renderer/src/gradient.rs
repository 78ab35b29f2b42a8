//! Altitude-keyed gradient color tables.
//!
//! A palette is six hex color stops. The table pre-expands the five
//! consecutive stop pairs into a dense run of interpolated colors, indexed
//! by a quantized altitude bucket.

use rand::Rng;
use serde::{Deserialize, Serialize};
use track_common::Rgb;

/// Altitude bucket size used to index the gradient table.
const MAPPER_STEPS: f64 = 500.0;

/// Altitude span covered by one stop pair.
const PAIR_SPAN: f64 = 20000.0;

/// Sentinel color for unknown (negative) altitudes.
const SENTINEL_WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Fallback when a stop fails to parse; unreachable for the built-in
/// palettes.
const FALLBACK_GRAY: Rgb = Rgb {
    r: 200,
    g: 200,
    b: 200,
};

/// A named six-stop color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Normal,
    Bright,
    Red,
    Green,
    Blue,
    Xmas,
}

impl Palette {
    /// Resolve a numeric style id. Ids outside 1-6 fall back to `Normal`.
    pub fn from_id(id: u8) -> Self {
        match id {
            2 => Palette::Bright,
            3 => Palette::Red,
            4 => Palette::Green,
            5 => Palette::Blue,
            6 => Palette::Xmas,
            _ => Palette::Normal,
        }
    }

    /// Pick one of the six palettes uniformly.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_id(rng.gen_range(1..=6))
    }

    /// The six hex color stops of this palette, low altitude first.
    pub fn stops(self) -> [&'static str; 6] {
        match self {
            Palette::Normal => ["FF3118", "e1e54b", "B1AF4B", "9a1de2", "4df924", "58b9f1"],
            Palette::Bright => ["FF3118", "fdff89", "9fff79", "e1aeff", "ff62e5", "a2dfff"],
            Palette::Red => ["FF3118", "ff4e18", "ff8018", "ffae18", "fff018", "e8ff18"],
            Palette::Green => ["FF3118", "ffc118", "fffb18", "baff18", "18ffc5", "67dcff"],
            Palette::Blue => ["FF3118", "ffc118", "18ffba", "18b6ff", "183bff", "7667ff"],
            Palette::Xmas => ["18ff5d", "a6ff18", "ffc118", "ff4618", "ff1818", "ff0000"],
        }
    }
}

/// Pre-expanded gradient lookup table.
///
/// Building is a pure function of the palette; the same palette always
/// yields the same table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientTable {
    colors: Vec<Rgb>,
}

impl GradientTable {
    /// Expand a palette into the interpolated lookup table.
    pub fn build(palette: Palette) -> Self {
        let stops = palette
            .stops()
            .map(|hex| Rgb::from_hex(hex).unwrap_or(FALLBACK_GRAY));
        let steps = (PAIR_SPAN / MAPPER_STEPS).round() as u32;

        let mut colors = Vec::with_capacity(stops.len() * steps as usize);
        for pair in stops.windows(2) {
            let mut run = interpolate_pair(pair[0], pair[1], steps);
            // The ramp overshoots the end stop by one step; drop it. The
            // next pair starts at that stop again, so junctions stay exact.
            run.pop();
            colors.extend(run);
        }

        Self { colors }
    }

    /// Color for an altitude, via the quantized bucket index.
    ///
    /// Negative altitudes mean "unknown" and return the white sentinel.
    /// Indices past either end of the table clamp to the nearest entry.
    pub fn color_for_altitude(&self, altitude: f64) -> Rgb {
        if altitude < 0.0 {
            return SENTINEL_WHITE;
        }

        let rounded = ((altitude * 2.0) / 100.0).round() * 100.0;
        let index = (rounded / MAPPER_STEPS).round() as i64;
        let index = index.clamp(0, self.colors.len() as i64 - 1);

        self.colors[index as usize]
    }

    /// The expanded color entries, low altitude first.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Linear ramp from one stop toward the next.
///
/// Generates `steps + 1` points with a divisor of `steps - 1`, faithfully
/// reproducing the reference ramp: point `steps - 1` lands on the end stop
/// and the final point overshoots past it.
fn interpolate_pair(from: Rgb, to: Rgb, steps: u32) -> Vec<Rgb> {
    debug_assert!(steps >= 2);

    let step_r = (from.r as f64 - to.r as f64) / (steps - 1) as f64;
    let step_g = (from.g as f64 - to.g as f64) / (steps - 1) as f64;
    let step_b = (from.b as f64 - to.b as f64) / (steps - 1) as f64;

    let mut run = Vec::with_capacity(steps as usize + 1);
    for i in 0..=steps {
        let i = i as f64;
        run.push(Rgb {
            r: (from.r as f64 - step_r * i).floor() as u8,
            g: (from.g as f64 - step_g * i).floor() as u8,
            b: (from.b as f64 - step_b * i).floor() as u8,
        });
    }

    run
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_pair_endpoints() {
        let from = Rgb::new(0, 0, 0);
        let to = Rgb::new(39, 78, 117);
        let run = interpolate_pair(from, to, 40);

        assert_eq!(run.len(), 41);
        assert_eq!(run[0], from);
        assert_eq!(run[39], to);
    }
}
