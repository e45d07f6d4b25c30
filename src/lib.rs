//! Polarwave turns grayscale images into pen-plotter line drawings.
//!
//! Every image row becomes one horizontal path. Dark pixels bend the path into a sine wave whose
//! amplitude and frequency grow with darkness; white pixels keep it straight.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: image bytes -> [`PixelGrid`] (8-bit luma) via [`decode_grayscale`]
//! 2. **Enhance**: optional [`enhance_contrast`] around the mean brightness
//! 3. **Trace**: [`generate_row_path`] per row, driven by [`calculate_wave_params`]
//! 4. **Assemble**: [`assemble_document`] serializes rows into one SVG document
//!
//! Steps 3 and 4 are pure and deterministic: identical grids and [`ConversionConfig`] values
//! produce byte-identical documents, whether rows are traced sequentially or in parallel.
#![forbid(unsafe_code)]

mod convert;
mod document;
mod foundation;
mod raster;

pub use convert::config::{
    ConversionConfig, DEFAULT_LINE_SPACING, DEFAULT_MAX_AMPLITUDE, DEFAULT_WHITE_THRESHOLD,
};
pub use convert::pipeline::{
    ConversionStats, RowThreading, convert_to_svg, convert_with_stats, generate_rows,
};
pub use convert::row::{RowPath, generate_row_path};
pub use convert::wave::{
    FREQUENCY_BASE, FREQUENCY_SCALE, MIN_DARKNESS_THRESHOLD, WAVE_FREQUENCY_SCALE, WaveParams,
    calculate_wave_params, darkness, organic_noise,
};
pub use document::svg::{assemble_document, points_to_path_string};
pub use foundation::core::{BezPath, Canvas, Point};
pub use foundation::error::{PolarwaveError, PolarwaveResult};
pub use raster::contrast::{enhance_contrast, mean_brightness};
pub use raster::decode::{decode_grayscale, decode_grayscale_file};
pub use raster::grid::PixelGrid;
