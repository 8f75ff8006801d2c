use crate::foundation::core::{Affine, Point, Vec2};

/// Lowest scale any interaction may reach; keeps the foreground visible and invertible.
pub const MIN_SCALE: f64 = 0.1;

/// Where the foreground sits over the background.
///
/// `translate` is the foreground's *center* in logical (background pixel) space. Values are
/// always logical; the preview scale never leaks in here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate: Vec2,
    scale: f64,
    pub rotation_rad: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
            rotation_rad: 0.0,
        }
    }
}

impl Transform {
    /// Centered on a background of the given size, unscaled and unrotated.
    pub fn centered_on(bg_width: u32, bg_height: u32) -> Self {
        Self {
            translate: Vec2::new(f64::from(bg_width) / 2.0, f64::from(bg_height) / 2.0),
            ..Self::default()
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the scale, clamped to [`MIN_SCALE`]. Non-finite values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.scale = scale.max(MIN_SCALE);
        }
    }

    pub fn add_scale(&mut self, delta: f64) {
        self.set_scale(self.scale + delta);
    }

    pub fn multiply_scale(&mut self, factor: f64) {
        self.set_scale(self.scale * factor);
    }

    pub fn translate_by(&mut self, delta: Vec2) {
        if delta.is_finite() {
            self.translate += delta;
        }
    }

    pub fn rotate_by(&mut self, delta_rad: f64) {
        if delta_rad.is_finite() {
            self.rotation_rad += delta_rad;
        }
    }

    /// Foreground pixel space to output pixel space for an output rendered at `output_scale`
    /// times the background resolution.
    ///
    /// Order: `T(translate * s) * R(rotation) * S(scale * s) * T(-size / 2)`.
    pub fn placement_affine(&self, fg_width: f64, fg_height: f64, output_scale: f64) -> Affine {
        Affine::translate(self.translate * output_scale)
            * Affine::rotate(self.rotation_rad)
            * Affine::scale(self.scale * output_scale)
            * Affine::translate(Vec2::new(-fg_width / 2.0, -fg_height / 2.0))
    }

    /// Map a logical point into foreground-local pixel coordinates.
    pub fn logical_to_foreground(&self, logical: Point, fg_width: f64, fg_height: f64) -> Point {
        let d = logical.to_vec2() - self.translate;
        let d = if self.rotation_rad == 0.0 {
            d
        } else {
            let (sin, cos) = (-self.rotation_rad).sin_cos();
            Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
        };
        Point::new(
            d.x / self.scale + fg_width / 2.0,
            d.y / self.scale + fg_height / 2.0,
        )
    }

    /// Brush radius in foreground pixels so the dab keeps its on-screen size at any zoom.
    pub fn brush_radius_in_foreground(&self, screen_radius: f64) -> f64 {
        screen_radius / self.scale
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/placement.rs"]
mod tests;
