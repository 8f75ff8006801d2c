//! Pointer, wheel and touch input as an explicit state machine.
//!
//! [`InteractionController::handle`] is the whole contract: one event in, session mutated,
//! an [`Update`] out telling the host whether to redraw. Event binding lives in the host.

use crate::{
    foundation::core::Point,
    interaction::event::{InputEvent, touch_pair_metrics},
    session::{config::EditorConfig, editor::EditorSession},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
    Rotating,
    Painting,
    PinchGesture,
}

/// What an event changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Update {
    Unchanged,
    TransformChanged,
    MaskChanged,
}

impl Update {
    pub fn is_mutation(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PinchBaseline {
    distance: f64,
    angle: f64,
}

#[derive(Clone, Debug)]
pub struct InteractionController {
    state: InteractionState,
    /// Last pointer position in logical space.
    last_pointer: Point,
    pinch: Option<PinchBaseline>,
    rotate_sensitivity: f64,
    wheel_sensitivity: f64,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl InteractionController {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            state: InteractionState::Idle,
            last_pointer: Point::ORIGIN,
            pinch: None,
            rotate_sensitivity: config.rotate_sensitivity,
            wheel_sensitivity: config.wheel_sensitivity,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn handle(&mut self, session: &mut EditorSession, event: &InputEvent) -> Update {
        let update = match event {
            InputEvent::PointerDown { x, y, modifier } => {
                self.pointer_down(session, Point::new(*x, *y), *modifier)
            }
            InputEvent::PointerMove { x, y } => self.pointer_move(session, Point::new(*x, *y)),
            InputEvent::PointerUp | InputEvent::PointerLeave | InputEvent::TouchEnd => {
                self.reset();
                Update::Unchanged
            }
            InputEvent::Wheel { delta_y } => self.wheel(session, *delta_y),
            InputEvent::TouchStart { touches } => self.touch_start(session, touches),
            InputEvent::TouchMove { touches } => self.touch_move(session, touches),
        };
        tracing::trace!(state = ?self.state, ?update, "input handled");
        update
    }

    fn reset(&mut self) {
        self.state = InteractionState::Idle;
        self.pinch = None;
    }

    fn pointer_down(
        &mut self,
        session: &mut EditorSession,
        screen: Point,
        modifier: bool,
    ) -> Update {
        let logical = session.viewport().to_logical(screen);
        self.last_pointer = logical;
        if session.brush().enabled {
            self.state = InteractionState::Painting;
            return paint(session, logical);
        }
        self.state = if modifier {
            InteractionState::Rotating
        } else {
            InteractionState::Dragging
        };
        Update::Unchanged
    }

    fn pointer_move(&mut self, session: &mut EditorSession, screen: Point) -> Update {
        let logical = session.viewport().to_logical(screen);
        let delta = logical - self.last_pointer;
        let update = match self.state {
            InteractionState::Dragging if session.background().is_some() => {
                session.transform_mut().translate_by(delta);
                Update::TransformChanged
            }
            InteractionState::Rotating if session.background().is_some() => {
                session
                    .transform_mut()
                    .rotate_by(delta.x * self.rotate_sensitivity);
                Update::TransformChanged
            }
            InteractionState::Painting if session.brush().enabled => paint(session, logical),
            _ => Update::Unchanged,
        };
        self.last_pointer = logical;
        update
    }

    fn wheel(&mut self, session: &mut EditorSession, delta_y: f64) -> Update {
        if session.brush().enabled || session.background().is_none() || !delta_y.is_finite() {
            return Update::Unchanged;
        }
        session
            .transform_mut()
            .add_scale(delta_y * -self.wheel_sensitivity);
        Update::TransformChanged
    }

    fn touch_start(&mut self, session: &mut EditorSession, touches: &[Point]) -> Update {
        if session.brush().enabled {
            let Some(first) = touches.first() else {
                return Update::Unchanged;
            };
            self.state = InteractionState::Painting;
            let logical = session.viewport().to_logical(*first);
            self.last_pointer = logical;
            return paint(session, logical);
        }
        if let Some((distance, angle)) = touch_pair_metrics(touches) {
            self.state = InteractionState::PinchGesture;
            self.pinch = Some(PinchBaseline { distance, angle });
        }
        Update::Unchanged
    }

    fn touch_move(&mut self, session: &mut EditorSession, touches: &[Point]) -> Update {
        if session.brush().enabled {
            if self.state != InteractionState::Painting {
                return Update::Unchanged;
            }
            let Some(first) = touches.first() else {
                return Update::Unchanged;
            };
            let logical = session.viewport().to_logical(*first);
            self.last_pointer = logical;
            return paint(session, logical);
        }
        if session.background().is_none() {
            return Update::Unchanged;
        }

        match touches {
            [single] => {
                // One finger places the foreground center directly under the touch.
                let logical = session.viewport().to_logical(*single);
                session.transform_mut().translate = logical.to_vec2();
                Update::TransformChanged
            }
            [_, _, ..] => {
                let Some((distance, angle)) = touch_pair_metrics(touches) else {
                    return Update::Unchanged;
                };
                let baseline = self.pinch.replace(PinchBaseline { distance, angle });
                self.state = InteractionState::PinchGesture;
                let Some(prev) = baseline else {
                    return Update::Unchanged;
                };
                if prev.distance > 0.0 {
                    session
                        .transform_mut()
                        .multiply_scale(distance / prev.distance);
                }
                session.transform_mut().rotate_by(angle - prev.angle);
                Update::TransformChanged
            }
            [] => Update::Unchanged,
        }
    }
}

fn paint(session: &mut EditorSession, logical: Point) -> Update {
    if session.paint_at_logical(logical) {
        Update::MaskChanged
    } else {
        Update::Unchanged
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/controller.rs"]
mod tests;
