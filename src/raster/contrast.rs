use crate::raster::grid::PixelGrid;

/// Mean brightness rounded to the nearest integer (halves round up).
pub fn mean_brightness(grid: &PixelGrid) -> u8 {
    if grid.is_empty() {
        return 0;
    }
    let sum: u64 = grid.as_raw().iter().map(|&p| u64::from(p)).sum();
    let mean = sum as f64 / grid.as_raw().len() as f64;
    (mean + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Stretch brightness away from the image mean by `factor`.
///
/// Every pixel becomes `mean + factor * (p - mean)`, truncated toward zero and clamped to
/// `0..=255`. `1.0` is the identity, `0.0` flattens the grid to its mean, and values above `1.0`
/// push mid-tones toward black or white.
pub fn enhance_contrast(grid: &PixelGrid, factor: f64) -> PixelGrid {
    if grid.is_empty() {
        return grid.clone();
    }
    let mean = f64::from(mean_brightness(grid));
    // NaN factors saturate to 0 in the cast.
    grid.map(|p| (mean + factor * (f64::from(p) - mean)).trunc().clamp(0.0, 255.0) as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/contrast.rs"]
mod tests;
