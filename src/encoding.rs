use crate::palette::{Color, VIRIDIS};

/// Fraction of a station's capacity currently holding bikes. A station
/// reporting zero bikes and zero docks is treated as empty rather than
/// undefined.
pub fn occupancy_ratio(bikes: u32, free: u32) -> f64 {
    let capacity = bikes + free;
    if capacity == 0 {
        0.0
    } else {
        f64::from(bikes) / f64::from(capacity)
    }
}

/// Looks the ratio up in the 256-step viridis table, clamping the index to
/// the table bounds.
pub fn color_for_ratio(ratio: f64) -> Color {
    let index = ((ratio * 255.0).floor() as isize).clamp(0, 255) as usize;
    VIRIDIS[index]
}

/// Marker size for the renderer: total capacity scaled by a fixed factor.
pub fn size_for_counts(bikes: u32, free: u32) -> f64 {
    f64::from(bikes + free) * 0.5
}
