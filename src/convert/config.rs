/// Default vertical distance between row baselines.
pub const DEFAULT_LINE_SPACING: f64 = 2.0;
/// Default wave amplitude for fully black pixels.
pub const DEFAULT_MAX_AMPLITUDE: f64 = 3.0;
/// Default brightness at or above which a pixel is treated as background.
pub const DEFAULT_WHITE_THRESHOLD: u8 = 250;

/// Read-only parameters shared by every row of a conversion.
///
/// Numeric fields are not range-checked. Negative or zero spacing yields a degenerate canvas but
/// conversion stays deterministic for any finite value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Vertical distance between consecutive row baselines.
    pub line_spacing: f64,
    /// Wave amplitude reached at darkness `1.0`.
    pub max_amplitude: f64,
    /// Enable the positional sine perturbation of amplitude and frequency.
    pub organic_mode: bool,
    /// Pixels with brightness `>= white_threshold` produce flat points.
    pub white_threshold: u8,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            line_spacing: DEFAULT_LINE_SPACING,
            max_amplitude: DEFAULT_MAX_AMPLITUDE,
            organic_mode: false,
            white_threshold: DEFAULT_WHITE_THRESHOLD,
        }
    }
}

impl ConversionConfig {
    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn with_max_amplitude(mut self, max_amplitude: f64) -> Self {
        self.max_amplitude = max_amplitude;
        self
    }

    pub fn with_organic_mode(mut self, organic_mode: bool) -> Self {
        self.organic_mode = organic_mode;
        self
    }

    pub fn with_white_threshold(mut self, white_threshold: u8) -> Self {
        self.white_threshold = white_threshold;
        self
    }

    /// Baseline y of `row` in document space.
    pub fn baseline(&self, row: u32) -> f64 {
        f64::from(row) * self.line_spacing
    }

    pub fn is_white(&self, brightness: u8) -> bool {
        brightness >= self.white_threshold
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/config.rs"]
mod tests;
