use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{GreenscreenError, GreenscreenResult},
    keying::chroma::KeyParams,
    mask::brush::DEFAULT_BRUSH_RADIUS,
    transform::viewport::{PREVIEW_MAX_HEIGHT, PREVIEW_MAX_WIDTH},
};

/// Rotation per logical pixel of horizontal drag while rotating.
pub const ROTATE_SENSITIVITY: f64 = 0.01;
/// Scale change per unit of wheel delta (applied negated: wheel down shrinks).
pub const WHEEL_SENSITIVITY: f64 = 0.001;

/// Editor-wide settings. Every field has a default, so partial JSON is accepted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub preview_max_width: f64,
    pub preview_max_height: f64,
    pub key: KeyParams,
    pub rotate_sensitivity: f64,
    pub wheel_sensitivity: f64,
    pub default_brush_radius: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            preview_max_width: PREVIEW_MAX_WIDTH,
            preview_max_height: PREVIEW_MAX_HEIGHT,
            key: KeyParams::default(),
            rotate_sensitivity: ROTATE_SENSITIVITY,
            wheel_sensitivity: WHEEL_SENSITIVITY,
            default_brush_radius: DEFAULT_BRUSH_RADIUS,
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(json: &str) -> GreenscreenResult<Self> {
        let cfg: Self = serde_json::from_str(json).context("parse editor config JSON")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path(path: &Path) -> GreenscreenResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read editor config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Apply `GREENSCREEN_PREVIEW_MAX_WIDTH` / `GREENSCREEN_PREVIEW_MAX_HEIGHT` when set to a
    /// positive number.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = env_positive_f64("GREENSCREEN_PREVIEW_MAX_WIDTH") {
            self.preview_max_width = v;
        }
        if let Some(v) = env_positive_f64("GREENSCREEN_PREVIEW_MAX_HEIGHT") {
            self.preview_max_height = v;
        }
        self
    }

    pub fn validate(&self) -> GreenscreenResult<()> {
        for (name, v) in [
            ("preview_max_width", self.preview_max_width),
            ("preview_max_height", self.preview_max_height),
            ("default_brush_radius", self.default_brush_radius),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(GreenscreenError::validation(format!("{name} must be > 0")));
            }
        }
        for (name, v) in [
            ("rotate_sensitivity", self.rotate_sensitivity),
            ("wheel_sensitivity", self.wheel_sensitivity),
        ] {
            if !v.is_finite() {
                return Err(GreenscreenError::validation(format!("{name} must be finite")));
            }
        }
        self.key.validate()
    }
}

fn env_positive_f64(name: &str) -> Option<f64> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
