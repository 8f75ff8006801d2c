//! Color-difference keying.
//!
//! A pixel is "green" by `diff = g - max(r, b)`. Green pixels lose alpha in proportion to
//! `diff` (a soft ramp rather than a threshold) and have red and blue pulled toward green to
//! neutralize spill. Everything else passes through untouched.

use rayon::prelude::*;

use crate::foundation::{
    core::{RasterImage, Rgba8},
    error::{GreenscreenError, GreenscreenResult},
    math::clamp_to_u8,
};

/// Alpha lost per unit of green excess.
pub const EDGE_SOFTNESS: f64 = 8.0;
/// Fraction of the distance to green that red and blue travel.
pub const SPILL_REMOVAL: f64 = 0.6;

const PIXELS_PER_TASK: usize = 4096;

/// Tunables for [`key_pixel`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KeyParams {
    pub edge_softness: f64,
    pub spill_removal: f64,
}

impl Default for KeyParams {
    fn default() -> Self {
        Self {
            edge_softness: EDGE_SOFTNESS,
            spill_removal: SPILL_REMOVAL,
        }
    }
}

impl KeyParams {
    pub fn validate(&self) -> GreenscreenResult<()> {
        if !self.edge_softness.is_finite() || self.edge_softness < 0.0 {
            return Err(GreenscreenError::validation(
                "edge_softness must be finite and >= 0",
            ));
        }
        if !self.spill_removal.is_finite() || !(0.0..=1.0).contains(&self.spill_removal) {
            return Err(GreenscreenError::validation(
                "spill_removal must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Key a single straight-alpha pixel.
pub fn key_pixel(px: Rgba8, params: KeyParams) -> Rgba8 {
    let [r, g, b, _] = px;
    let diff = i32::from(g) - i32::from(r.max(b));
    if diff <= 0 {
        return px;
    }

    let alpha = clamp_to_u8(255.0 - f64::from(diff) * params.edge_softness);
    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));
    let r = clamp_to_u8(rf + (gf - rf) * params.spill_removal);
    let b = clamp_to_u8(bf + (gf - bf) * params.spill_removal);
    [r, g, b, alpha]
}

/// Key a tightly packed RGBA8 buffer in place.
pub fn key_rgba8_in_place(rgba: &mut [u8], params: KeyParams) -> GreenscreenResult<()> {
    if !rgba.len().is_multiple_of(4) {
        return Err(GreenscreenError::evaluation(
            "key_rgba8_in_place expects a whole number of rgba8 pixels",
        ));
    }
    rgba.par_chunks_mut(PIXELS_PER_TASK * 4).for_each(|chunk| {
        for px in chunk.chunks_exact_mut(4) {
            let out = key_pixel([px[0], px[1], px[2], px[3]], params);
            px.copy_from_slice(&out);
        }
    });
    Ok(())
}

/// Key a working copy of `src`; the source raster is left as loaded.
pub fn key_image(src: &RasterImage, params: KeyParams) -> GreenscreenResult<RasterImage> {
    let mut rgba = src.as_bytes().to_vec();
    key_rgba8_in_place(&mut rgba, params)?;
    RasterImage::from_raw(src.width(), src.height(), rgba)
}

#[cfg(test)]
#[path = "../../tests/unit/keying/chroma.rs"]
mod tests;
