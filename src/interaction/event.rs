use crate::foundation::core::Point;

/// One input event from the host, in screen pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        x: f64,
        y: f64,
        /// Rotate instead of drag (shift held).
        #[serde(default)]
        modifier: bool,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    PointerLeave,
    Wheel {
        delta_y: f64,
    },
    TouchStart {
        touches: Vec<Point>,
    },
    TouchMove {
        touches: Vec<Point>,
    },
    TouchEnd,
}

impl InputEvent {
    pub fn pointer_down(x: f64, y: f64, modifier: bool) -> Self {
        Self::PointerDown { x, y, modifier }
    }

    pub fn pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }
}

/// Distance and angle between the first two touches.
pub(crate) fn touch_pair_metrics(touches: &[Point]) -> Option<(f64, f64)> {
    let [a, b, ..] = touches else {
        return None;
    };
    let d = *b - *a;
    Some((d.hypot(), d.y.atan2(d.x)))
}
