use crate::foundation::{
    core::Point,
    error::{GreenscreenError, GreenscreenResult},
};

pub const PREVIEW_MAX_WIDTH: f64 = 800.0;
pub const PREVIEW_MAX_HEIGHT: f64 = 600.0;

/// Ratio by which logical space is shrunk for on-screen display. Never above 1.
pub fn preview_scale(bg_width: u32, bg_height: u32, max_width: f64, max_height: f64) -> f64 {
    if bg_width == 0 || bg_height == 0 {
        return 1.0;
    }
    (max_width / f64::from(bg_width))
        .min(max_height / f64::from(bg_height))
        .min(1.0)
}

/// Pixel size of a background rendered at `scale`. At least 1x1.
pub fn output_size(bg_width: u32, bg_height: u32, scale: f64) -> GreenscreenResult<(u32, u32)> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(GreenscreenError::validation(format!(
            "render scale must be finite and > 0, got {scale}"
        )));
    }
    let dim = |v: u32| ((f64::from(v) * scale).floor() as u32).max(1);
    Ok((dim(bg_width), dim(bg_height)))
}

/// How the preview canvas sits on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Top-left of the preview canvas in screen pixels.
    pub canvas_origin: Point,
    pub preview_scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            canvas_origin: Point::ORIGIN,
            preview_scale: 1.0,
        }
    }
}

impl Viewport {
    pub fn to_logical(&self, screen: Point) -> Point {
        ((screen - self.canvas_origin) / self.preview_scale).to_point()
    }

    pub fn to_screen(&self, logical: Point) -> Point {
        self.canvas_origin + logical.to_vec2() * self.preview_scale
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/viewport.rs"]
mod tests;
