use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// Viridis control points, darkest to brightest.
const VIRIDIS_ANCHORS: [Color; 20] = [
    Color::new(68, 1, 84),
    Color::new(72, 21, 103),
    Color::new(72, 38, 119),
    Color::new(69, 55, 129),
    Color::new(64, 71, 136),
    Color::new(57, 86, 140),
    Color::new(51, 99, 141),
    Color::new(45, 112, 142),
    Color::new(40, 125, 142),
    Color::new(35, 138, 141),
    Color::new(31, 150, 139),
    Color::new(32, 163, 135),
    Color::new(41, 175, 127),
    Color::new(60, 187, 117),
    Color::new(85, 198, 103),
    Color::new(115, 208, 85),
    Color::new(149, 216, 64),
    Color::new(184, 222, 41),
    Color::new(220, 227, 25),
    Color::new(253, 231, 37),
];

/// The 256-step viridis lookup table, interpolated from the anchor colors
/// once on first use and read-only afterwards.
pub static VIRIDIS: Lazy<[Color; 256]> = Lazy::new(|| {
    let mut table = [Color::new(0, 0, 0); 256];
    let segments = (VIRIDIS_ANCHORS.len() - 1) as f64;

    for (i, entry) in table.iter_mut().enumerate() {
        let position = i as f64 / 255.0 * segments;
        let lower = position.floor() as usize;
        let upper = (lower + 1).min(VIRIDIS_ANCHORS.len() - 1);
        let t = position - lower as f64;

        let start = VIRIDIS_ANCHORS[lower];
        let end = VIRIDIS_ANCHORS[upper];
        *entry = Color::new(
            lerp(start.r, end.r, t),
            lerp(start.g, end.g, t),
            lerp(start.b, end.b, t),
        );
    }

    table
});

fn lerp(start: u8, end: u8, t: f64) -> u8 {
    (start as f64 + (end as f64 - start as f64) * t).round() as u8
}
