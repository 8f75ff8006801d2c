use crate::foundation::error::{GreenscreenError, GreenscreenResult};

/// Default brush radius in screen pixels.
pub const DEFAULT_BRUSH_RADIUS: f64 = 30.0;

/// How a brush dab combines with the mask.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BrushMode {
    /// Paint opacity back in (source-over with full alpha).
    #[default]
    Restore,
    /// Cut opacity out (destination-out).
    Erase,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub enabled: bool,
    pub mode: BrushMode,
    /// Radius in screen pixels; divided by the foreground scale before it reaches the mask.
    pub radius: f64,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: BrushMode::Restore,
            radius: DEFAULT_BRUSH_RADIUS,
        }
    }
}

impl BrushConfig {
    pub fn validate(&self) -> GreenscreenResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GreenscreenError::validation("brush radius must be > 0"));
        }
        Ok(())
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/brush.rs"]
mod tests;
