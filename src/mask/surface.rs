//! Full-resolution alpha mask over the foreground.
//!
//! The mask never replaces the key: at composite time the keyed alpha is multiplied by the
//! mask alpha, so a pixel removed by either one stays removed.

use crate::{
    foundation::{
        core::Point,
        error::{GreenscreenError, GreenscreenResult},
        math::mul_div255_u8,
    },
    mask::brush::BrushMode,
};

/// Sub-samples per axis when estimating how much of a pixel a brush circle covers.
const SUPERSAMPLE: u32 = 4;

/// Single-channel alpha raster, `255` = keep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskSurface {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl MaskSurface {
    /// A fully opaque mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![255; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn alpha(&self) -> &[u8] {
        &self.alpha
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.alpha[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Back to fully opaque.
    pub fn reset(&mut self) {
        self.alpha.fill(255);
    }

    /// Stamp a filled circle in mask pixel coordinates.
    ///
    /// Edge pixels get fractional coverage. Returns whether any pixel changed.
    pub fn paint(&mut self, center: Point, radius: f64, mode: BrushMode) -> bool {
        if !radius.is_finite() || radius <= 0.0 || !center.x.is_finite() || !center.y.is_finite()
        {
            return false;
        }

        let x0 = (center.x - radius).floor().max(0.0);
        let y0 = (center.y - radius).floor().max(0.0);
        let x1 = (center.x + radius).ceil().min(f64::from(self.width));
        let y1 = (center.y + radius).ceil().min(f64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return false;
        }

        let (x0, y0, x1, y1) = (x0 as u32, y0 as u32, x1 as u32, y1 as u32);
        let r2 = radius * radius;
        let mut changed = false;

        for y in y0..y1 {
            let row = (y as usize) * (self.width as usize);
            for x in x0..x1 {
                let cov = coverage(x, y, center, r2);
                if cov == 0 {
                    continue;
                }
                let a = &mut self.alpha[row + x as usize];
                let inv = 255 - cov;
                let kept = mul_div255_u8(u16::from(*a), u16::from(inv));
                let next = match mode {
                    BrushMode::Restore => cov.saturating_add(kept),
                    BrushMode::Erase => kept,
                };
                if next != *a {
                    *a = next;
                    changed = true;
                }
            }
        }
        changed
    }

    /// Multiply the alpha channel of a straight RGBA8 buffer by this mask.
    pub fn intersect_in_place(&self, rgba: &mut [u8]) -> GreenscreenResult<()> {
        if rgba.len() != self.alpha.len() * 4 {
            return Err(GreenscreenError::evaluation(format!(
                "mask is {}x{} but the keyed buffer holds {} pixels",
                self.width,
                self.height,
                rgba.len() / 4
            )));
        }
        for (px, &m) in rgba.chunks_exact_mut(4).zip(&self.alpha) {
            px[3] = mul_div255_u8(u16::from(px[3]), u16::from(m));
        }
        Ok(())
    }
}

/// Fraction of pixel `(x, y)` inside the circle, scaled to `0..=255`.
fn coverage(x: u32, y: u32, center: Point, r2: f64) -> u8 {
    let step = 1.0 / f64::from(SUPERSAMPLE);
    let mut hits = 0u32;
    for sy in 0..SUPERSAMPLE {
        let py = f64::from(y) + (f64::from(sy) + 0.5) * step;
        for sx in 0..SUPERSAMPLE {
            let px = f64::from(x) + (f64::from(sx) + 0.5) * step;
            let (dx, dy) = (px - center.x, py - center.y);
            if dx * dx + dy * dy <= r2 {
                hits += 1;
            }
        }
    }
    let total = SUPERSAMPLE * SUPERSAMPLE;
    ((hits * 255 + total / 2) / total) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/mask/surface.rs"]
mod tests;
