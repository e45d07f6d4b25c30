use crate::foundation::error::{PolarwaveError, PolarwaveResult};

/// Immutable row-major grid of 8-bit brightness values (0 = black, 255 = white).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Wrap a row-major buffer, validating that `data.len() == width * height`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> PolarwaveResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| PolarwaveError::validation("pixel grid dimensions overflow"))?;
        if data.len() != expected {
            return Err(PolarwaveError::validation(format!(
                "pixel grid {width}x{height} needs {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Grid where every pixel has the same brightness.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Build from rows of equal length. Fails on ragged input.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> PolarwaveResult<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(width * rows.len());
        for (i, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(PolarwaveError::validation(format!(
                    "row {i} has {} pixels, expected {width}",
                    r.len()
                )));
            }
            data.extend_from_slice(r);
        }
        let width = u32::try_from(width)
            .map_err(|_| PolarwaveError::validation("pixel grid width exceeds u32"))?;
        let height = u32::try_from(rows.len())
            .map_err(|_| PolarwaveError::validation("pixel grid height exceeds u32"))?;
        Self::new(width, height, data)
    }

    /// Take ownership of a luma image. Bytes past `width * height` are discarded.
    pub fn from_luma(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = img.into_raw();
        data.truncate(width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Brightness at `(x, row)`.
    ///
    /// Panics when the coordinate is out of bounds.
    pub fn get(&self, x: u32, row: u32) -> u8 {
        assert!(
            x < self.width && row < self.height,
            "pixel ({x}, {row}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.data[row as usize * self.width as usize + x as usize]
    }

    /// One row of brightness values, or `None` past the last row.
    pub fn row(&self, row: u32) -> Option<&[u8]> {
        if row >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = row as usize * w;
        Some(&self.data[start..start + w])
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Apply `f` to every pixel, keeping dimensions.
    pub fn map(&self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&p| f(p)).collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/grid.rs"]
mod tests;
