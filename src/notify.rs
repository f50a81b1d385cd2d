//! Outbound lifecycle notifications and user callbacks.
//!
//! Every notification is raised with the input event that caused it, passed
//! explicitly to the callback. Listeners never read an ambient "current
//! event".

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::fmt;

use serde::Serialize;

use crate::geometry::Point;
use crate::input::InputEvent;

/// The seven lifecycle notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ZoomStart,
    ZoomUpdate,
    ZoomEnd,
    DragStart,
    DragUpdate,
    DragEnd,
    DoubleTap,
}

impl NotificationKind {
    pub const ALL: [Self; 7] = [
        Self::ZoomStart,
        Self::ZoomUpdate,
        Self::ZoomEnd,
        Self::DragStart,
        Self::DragUpdate,
        Self::DragEnd,
        Self::DoubleTap,
    ];

    /// Platform event name (`zoomstart`, `dragupdate`, ...).
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::ZoomStart => "zoomstart",
            Self::ZoomUpdate => "zoomupdate",
            Self::ZoomEnd => "zoomend",
            Self::DragStart => "dragstart",
            Self::DragUpdate => "dragupdate",
            Self::DragEnd => "dragend",
            Self::DoubleTap => "doubletap",
        }
    }
}

/// Engine state handed to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransformSnapshot {
    pub zoom_factor: f64,
    pub offset: Point,
    pub has_interaction: bool,
    pub animating: bool,
}

/// A user callback for one notification kind.
pub type Listener = Box<dyn FnMut(&TransformSnapshot, &InputEvent)>;

/// Optional callback per notification kind.
#[derive(Default)]
pub struct Listeners {
    zoom_start: Option<Listener>,
    zoom_update: Option<Listener>,
    zoom_end: Option<Listener>,
    drag_start: Option<Listener>,
    drag_update: Option<Listener>,
    drag_end: Option<Listener>,
    double_tap: Option<Listener>,
}

impl Listeners {
    /// Register `callback` for `kind`, replacing any previous one.
    #[must_use]
    pub fn on(mut self, kind: NotificationKind, callback: impl FnMut(&TransformSnapshot, &InputEvent) + 'static) -> Self {
        *self.slot(kind) = Some(Box::new(callback));
        self
    }

    /// Invoke the callback for `kind`, if one is registered.
    pub fn dispatch(&mut self, kind: NotificationKind, snapshot: &TransformSnapshot, event: &InputEvent) {
        if let Some(callback) = self.slot(kind).as_mut() {
            callback(snapshot, event);
        }
    }

    fn slot(&mut self, kind: NotificationKind) -> &mut Option<Listener> {
        match kind {
            NotificationKind::ZoomStart => &mut self.zoom_start,
            NotificationKind::ZoomUpdate => &mut self.zoom_update,
            NotificationKind::ZoomEnd => &mut self.zoom_end,
            NotificationKind::DragStart => &mut self.drag_start,
            NotificationKind::DragUpdate => &mut self.drag_update,
            NotificationKind::DragEnd => &mut self.drag_end,
            NotificationKind::DoubleTap => &mut self.double_tap,
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("zoom_start", &self.zoom_start.is_some())
            .field("zoom_update", &self.zoom_update.is_some())
            .field("zoom_end", &self.zoom_end.is_some())
            .field("drag_start", &self.drag_start.is_some())
            .field("drag_update", &self.drag_update.is_some())
            .field("drag_end", &self.drag_end.is_some())
            .field("double_tap", &self.double_tap.is_some())
            .finish()
    }
}
