use std::path::Path;

use crate::{
    foundation::error::{PolarwaveError, PolarwaveResult},
    raster::grid::PixelGrid,
};

/// Decode any format supported by the `image` crate into an 8-bit grayscale grid.
///
/// Grayscale inputs keep their luma. Color inputs are reduced with ITU-R 601-2 weights
/// (`L = R * 299/1000 + G * 587/1000 + B * 114/1000`); alpha is dropped.
pub fn decode_grayscale(bytes: &[u8]) -> PolarwaveResult<PixelGrid> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| PolarwaveError::decode(format!("decode image from memory: {e}")))?;
    if !dyn_img.color().has_color() {
        return Ok(PixelGrid::from_luma(dyn_img.to_luma8()));
    }

    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let data = rgb.pixels().map(|px| luma_601(px.0)).collect();
    PixelGrid::new(width, height, data)
}

/// 16.16 fixed-point ITU-R 601-2 luma, rounded to nearest.
pub(crate) fn luma_601([r, g, b]: [u8; 3]) -> u8 {
    let l = u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000;
    (l >> 16) as u8
}

/// Read and decode an image file.
///
/// Returns [`PolarwaveError::InputNotFound`] before touching the decoder when `path` is not an
/// existing regular file.
#[tracing::instrument(level = "debug")]
pub fn decode_grayscale_file(path: &Path) -> PolarwaveResult<PixelGrid> {
    if !path.is_file() {
        return Err(PolarwaveError::input_not_found(path));
    }
    let bytes = std::fs::read(path)?;
    decode_grayscale(&bytes).map_err(|e| match e {
        PolarwaveError::Decode(msg) => {
            PolarwaveError::decode(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/decode.rs"]
mod tests;
