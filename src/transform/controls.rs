//! Slider mirroring.
//!
//! Sync is one-way: [`ControlValues::from_transform`] reflects state into controls after
//! every mutation, and only an explicit [`ControlInput`] writes a control back into state.

use std::f64::consts::PI;

use crate::transform::placement::Transform;

/// The control surface's view of a [`Transform`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlValues {
    /// Horizontal position, 0..100 of the background width.
    pub pos_x_pct: f64,
    /// Vertical position, 0..100 of the background height.
    pub pos_y_pct: f64,
    pub scale_pct: f64,
    pub rotation_deg: f64,
}

impl ControlValues {
    pub fn from_transform(t: &Transform, bg_width: u32, bg_height: u32) -> Self {
        Self {
            pos_x_pct: t.translate.x / f64::from(bg_width) * 100.0,
            pos_y_pct: t.translate.y / f64::from(bg_height) * 100.0,
            scale_pct: t.scale() * 100.0,
            rotation_deg: t.rotation_rad.to_degrees(),
        }
    }
}

/// A single control edit, as produced by one slider.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlInput {
    PosXPct(f64),
    PosYPct(f64),
    ScalePct(f64),
    RotationDeg(f64),
}

impl ControlInput {
    /// Write this control into `t`. Returns `false` for non-finite input.
    pub fn apply(self, t: &mut Transform, bg_width: u32, bg_height: u32) -> bool {
        match self {
            Self::PosXPct(v) if v.is_finite() => t.translate.x = v / 100.0 * f64::from(bg_width),
            Self::PosYPct(v) if v.is_finite() => t.translate.y = v / 100.0 * f64::from(bg_height),
            Self::ScalePct(v) if v.is_finite() => t.set_scale(v / 100.0),
            Self::RotationDeg(v) if v.is_finite() => t.rotation_rad = v * PI / 180.0,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/controls.rs"]
mod tests;
