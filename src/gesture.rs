//! Gesture classifier: touch batches in, interaction lifecycle calls out.
//!
//! The classifier keeps only transient bookkeeping (finger count, the
//! previous single-finger start time, the first-move flag and the touches
//! captured on the first move). From these it derives one coarse
//! [`Interaction`] and drives the [`TransformEngine`] through the matching
//! start/update/end calls. It never mutates the transform directly.
//!
//! Transitions between interactions always run the old interaction's end
//! action before the new one's start action, so a pinch that loses a finger
//! degrades to a drag (`zoom_end`, then `drag_start`) and a gesture that loses
//! its last finger ends cleanly.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use tracing::debug;

use crate::consts::DOUBLE_TAP_WINDOW_MS;
use crate::geometry::{Point, centroid, pair_distance};
use crate::input::{Disposition, InputEvent, Interaction};
use crate::transform::TransformEngine;

#[derive(Debug, Clone)]
pub struct GestureClassifier {
    interaction: Interaction,
    fingers: usize,
    last_start_ms: Option<f64>,
    start_touches: Vec<Point>,
    first_move: bool,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self {
            interaction: Interaction::None,
            fingers: 0,
            last_start_ms: None,
            start_touches: Vec::new(),
            first_move: true,
        }
    }
}

impl GestureClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    #[must_use]
    pub fn fingers(&self) -> usize {
        self.fingers
    }

    // --- Entry points ---

    /// Contacts went down.
    ///
    /// A start with no contacts previously down opens a new input lifecycle;
    /// an interaction still marked active from the last one is ended first.
    pub fn on_start(&mut self, engine: &mut TransformEngine, event: &InputEvent) -> Disposition {
        if self.fingers == 0 && self.interaction.is_active() {
            debug!(interaction = ?self.interaction, "stale interaction at lifecycle start");
            Self::end_interaction(engine, self.interaction, event);
            self.interaction = Interaction::None;
        }
        self.first_move = true;
        self.fingers = event.touches.len();
        self.detect_double_tap(engine, event)
    }

    /// Forget the tracked contacts, so the next start opens a new lifecycle.
    ///
    /// For hosts that stopped forwarding input for a while (the engine was
    /// disabled): lifts that happened in the meantime were never seen.
    pub fn forget_contacts(&mut self) {
        self.fingers = 0;
    }

    /// Contacts moved.
    pub fn on_change(&mut self, engine: &mut TransformEngine, event: &InputEvent) -> Disposition {
        if engine.is_double_tap() {
            return Disposition::Ignored;
        }

        let mut disposition = Disposition::Ignored;
        if self.first_move {
            self.update_interaction(engine, event);
            if self.interaction.is_active() {
                disposition = Disposition::Consumed;
            }
            self.start_touches.clone_from(&event.touches);
        } else {
            match self.interaction {
                Interaction::Zoom => {
                    if let Some(scale) = self.pinch_scale(&event.touches)
                        && let Some(center) = centroid(&event.touches)
                    {
                        engine.zoom(scale, center, event);
                    }
                }
                Interaction::Drag => {
                    if let Some(point) = event.primary() {
                        engine.drag(point, event);
                    }
                }
                Interaction::None => {}
            }
            if self.interaction.is_active() {
                disposition = Disposition::Consumed;
                engine.request_render();
            }
        }

        self.first_move = false;
        disposition
    }

    /// Contacts lifted; `event.touches` holds the ones still down.
    pub fn on_end(&mut self, engine: &mut TransformEngine, event: &InputEvent) -> Disposition {
        self.fingers = event.touches.len();
        self.update_interaction(engine, event);
        Disposition::Ignored
    }

    // --- Internals ---

    /// Pair-distance ratio between the first-move touches and `touches`.
    ///
    /// Only defined when both sets hold exactly two points and the starting
    /// pair is not degenerate.
    fn pinch_scale(&self, touches: &[Point]) -> Option<f64> {
        let start = pair_distance(&self.start_touches)?;
        let current = pair_distance(touches)?;
        if start <= 0.0 {
            return None;
        }
        Some(current / start)
    }

    fn update_interaction(&mut self, engine: &mut TransformEngine, event: &InputEvent) {
        let next = Interaction::from_fingers(self.fingers, engine.can_drag());
        self.set_interaction(engine, next, event);
    }

    /// Switch to `next`, ending the current interaction first.
    ///
    /// A pinch that degrades to a drag therefore emits `zoomend` before
    /// `dragstart`; every start is paired with exactly one end.
    fn set_interaction(&mut self, engine: &mut TransformEngine, next: Interaction, event: &InputEvent) {
        if self.interaction != next {
            debug!(from = ?self.interaction, to = ?next, fingers = self.fingers, "interaction changed");
            Self::end_interaction(engine, self.interaction, event);
            match next {
                Interaction::Zoom => engine.zoom_start(event),
                Interaction::Drag => engine.drag_start(event),
                Interaction::None => {}
            }
        }
        self.interaction = next;
    }

    fn end_interaction(engine: &mut TransformEngine, interaction: Interaction, event: &InputEvent) {
        match interaction {
            Interaction::Zoom => engine.zoom_end(event),
            Interaction::Drag => engine.drag_end(event),
            Interaction::None => {}
        }
    }

    fn detect_double_tap(&mut self, engine: &mut TransformEngine, event: &InputEvent) -> Disposition {
        let now = event.time_ms;
        if self.fingers > 1 {
            self.last_start_ms = None;
        }

        let mut disposition = Disposition::Ignored;
        let within_window = self.last_start_ms.is_some_and(|last| now - last < DOUBLE_TAP_WINDOW_MS);
        if within_window {
            disposition = Disposition::Consumed;
            engine.double_tap(event);
            if self.interaction.is_active() {
                debug!(interaction = ?self.interaction, "double tap ends active interaction");
                Self::end_interaction(engine, self.interaction, event);
                self.interaction = Interaction::None;
            }
        } else {
            engine.clear_double_tap();
        }

        if self.fingers == 1 {
            self.last_start_ms = Some(now);
        }
        disposition
    }
}
