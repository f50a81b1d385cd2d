//! Input model: touch batches in, host actions out.
//!
//! The host delivers one [`InputEvent`] per native touch event, carrying every
//! contact still on the surface. The engine answers with a list of
//! [`Action`]s: whether to suppress the platform default, when to paint, when
//! to call back on the next display refresh, and which notifications fired.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::animation::AnimationId;
use crate::geometry::Point;
use crate::notify::NotificationKind;

/// Lifecycle phase of a native touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchPhase {
    /// One or more contacts went down.
    Start,
    /// Contacts moved.
    Move,
    /// One or more contacts lifted (or were cancelled).
    End,
}

/// One sample batch: every active contact at one instant.
///
/// `touches` is in surface-local pixels. Its order carries no meaning but must
/// be stable within a batch; the first two entries form the pinch pair.
/// `time_ms` is read from the host's monotonic clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputEvent {
    pub phase: TouchPhase,
    pub time_ms: f64,
    #[serde(default)]
    pub touches: Vec<Point>,
}

impl InputEvent {
    #[must_use]
    pub fn new(phase: TouchPhase, time_ms: f64, touches: Vec<Point>) -> Self {
        Self { phase, time_ms, touches }
    }

    #[must_use]
    pub fn start(time_ms: f64, touches: Vec<Point>) -> Self {
        Self::new(TouchPhase::Start, time_ms, touches)
    }

    #[must_use]
    pub fn moved(time_ms: f64, touches: Vec<Point>) -> Self {
        Self::new(TouchPhase::Move, time_ms, touches)
    }

    #[must_use]
    pub fn end(time_ms: f64, touches: Vec<Point>) -> Self {
        Self::new(TouchPhase::End, time_ms, touches)
    }

    /// The first contact, if any.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        self.touches.first().copied()
    }
}

/// The coarse gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interaction {
    #[default]
    None,
    Drag,
    Zoom,
}

impl Interaction {
    /// Interaction implied by the number of contacts on the surface.
    #[must_use]
    pub fn from_fingers(fingers: usize, can_drag: bool) -> Self {
        match fingers {
            2 => Self::Zoom,
            1 if can_drag => Self::Drag,
            _ => Self::None,
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::None
    }
}

/// Whether the engine claimed the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Leave the event to the platform.
    Ignored,
    /// The host must suppress default handling and propagation.
    Consumed,
}

/// Work the host must perform after an engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Suppress the platform's default handling of the triggering event.
    PreventDefault,
    /// Call `render` on the next macrotask tick.
    ScheduleRender,
    /// Call `on_frame` with this id on the next display refresh.
    RequestFrame(AnimationId),
    /// A lifecycle notification fired; deliver it to platform listeners.
    Notify(NotificationKind),
}
