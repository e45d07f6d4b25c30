//! Darkness-to-waveform mapping.
//!
//! Each non-white pixel contributes a sine sample whose amplitude and frequency grow with
//! darkness. Organic mode adds a low-frequency positional perturbation that is a pure function of
//! `(x, row)`, so output stays reproducible.

use crate::convert::config::ConversionConfig;

/// Pixels lighter than this darkness contribute no wave.
pub const MIN_DARKNESS_THRESHOLD: f64 = 0.02;
/// Frequency factor at the darkness threshold floor.
pub const FREQUENCY_BASE: f64 = 0.5;
/// Additional frequency factor reached at darkness `1.0`.
pub const FREQUENCY_SCALE: f64 = 1.5;

/// Noise phase advance per column.
pub const ORGANIC_X_FREQUENCY: f64 = 0.05;
/// Noise phase advance per row.
pub const ORGANIC_Y_FREQUENCY: f64 = 0.1;
/// Peak magnitude of the organic noise term.
pub const ORGANIC_NOISE_SCALE: f64 = 0.2;
/// Share of the noise applied to amplitude.
pub const ORGANIC_AMPLITUDE_VAR: f64 = 0.3;
/// Share of the noise applied to frequency.
pub const ORGANIC_FREQUENCY_VAR: f64 = 0.2;

/// Global multiplier turning `x * frequency_factor` into a sine phase.
pub const WAVE_FREQUENCY_SCALE: f64 = 0.1;

/// Per-pixel wave shape.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveParams {
    pub amplitude: f64,
    pub frequency_factor: f64,
}

impl WaveParams {
    /// No wave: the pixel sits on its baseline.
    pub const FLAT: Self = Self {
        amplitude: 0.0,
        frequency_factor: 0.0,
    };

    /// Vertical displacement from the baseline at column `x`.
    pub fn offset_at(self, x: u32) -> f64 {
        self.amplitude * (f64::from(x) * self.frequency_factor * WAVE_FREQUENCY_SCALE).sin()
    }
}

/// Darkness in `[0, 1]`: `0.0` for white, `1.0` for black.
pub fn darkness(brightness: u8) -> f64 {
    1.0 - f64::from(brightness) / 255.0
}

/// Deterministic noise in `[-ORGANIC_NOISE_SCALE, ORGANIC_NOISE_SCALE]`.
pub fn organic_noise(x: u32, row: u32) -> f64 {
    (f64::from(x) * ORGANIC_X_FREQUENCY + f64::from(row) * ORGANIC_Y_FREQUENCY).sin()
        * ORGANIC_NOISE_SCALE
}

pub fn calculate_wave_params(
    darkness: f64,
    x: u32,
    row: u32,
    config: &ConversionConfig,
) -> WaveParams {
    if darkness < MIN_DARKNESS_THRESHOLD {
        return WaveParams::FLAT;
    }

    let mut amplitude = config.max_amplitude * darkness;
    let mut frequency_factor = FREQUENCY_BASE + darkness * FREQUENCY_SCALE;

    if config.organic_mode {
        let noise = organic_noise(x, row);
        amplitude *= 1.0 + noise * ORGANIC_AMPLITUDE_VAR;
        frequency_factor *= 1.0 + noise * ORGANIC_FREQUENCY_VAR;
    }

    WaveParams {
        amplitude,
        frequency_factor,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/wave.rs"]
mod tests;
