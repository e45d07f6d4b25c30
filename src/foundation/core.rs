pub use kurbo::{BezPath, Point};

/// Output canvas dimensions in document units.
///
/// Width is the source image width (unscaled); height is the image height multiplied by the
/// line spacing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in document units (one unit per source pixel column).
    pub width: u32,
    /// Height in document units.
    pub height: f64,
}

impl Canvas {
    /// Canvas for a `width x height` pixel grid drawn with `line_spacing` between rows.
    pub fn for_grid(width: u32, height: u32, line_spacing: f64) -> Self {
        Self {
            width,
            height: f64::from(height) * line_spacing,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
