use std::sync::Arc;

use crate::foundation::error::{GreenscreenError, GreenscreenResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Straight (non-premultiplied) RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// A decoded image: straight RGBA8, tightly packed, row-major.
///
/// Pixels are shared behind an `Arc` and never mutated after construction; keying
/// always works on a copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    rgba8: Arc<Vec<u8>>,
}

impl RasterImage {
    /// Wrap raw RGBA8 bytes, checking that they cover exactly `width * height` pixels.
    pub fn from_raw(width: u32, height: u32, rgba8: Vec<u8>) -> GreenscreenResult<Self> {
        if width == 0 || height == 0 {
            return Err(GreenscreenError::validation(
                "raster dimensions must be non-zero",
            ));
        }
        let expected_len = rgba8_len(width, height)?;
        if rgba8.len() != expected_len {
            return Err(GreenscreenError::validation(format!(
                "raster expects {expected_len} bytes for {width}x{height}, got {}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8: Arc::new(rgba8),
        })
    }

    /// A raster filled with a single color.
    pub fn solid(width: u32, height: u32, color: Rgba8) -> GreenscreenResult<Self> {
        let len = rgba8_len(width, height)?;
        let mut rgba8 = Vec::with_capacity(len);
        for _ in 0..len / 4 {
            rgba8.extend_from_slice(&color);
        }
        Self::from_raw(width, height, rgba8)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` as floating point, for coordinate math.
    pub fn size_f64(&self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.rgba8.as_slice()
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.rgba8[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }
}

pub(crate) fn rgba8_len(width: u32, height: u32) -> GreenscreenResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| GreenscreenError::validation("raster buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
