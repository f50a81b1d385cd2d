//! Transform engine: the authoritative zoom factor, offset and animation.
//!
//! The gesture classifier drives this engine through lifecycle calls
//! (`zoom_start`/`zoom`/`zoom_end`, `drag_start`/`drag`/`drag_end`,
//! `double_tap`). The engine mutates its transform, keeps the offset inside
//! [`OffsetBounds`], starts eased corrective animations when a gesture ends,
//! and queues [`Action`]s for the host (render requests, frame requests,
//! notifications). Interaction and animation are tracked independently: a
//! snap-back animation legitimately runs right after an interaction ends.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use tracing::{debug, trace};

use crate::animation::{AnimationId, AnimationKind, AnimationRun, FrameProgress};
use crate::bounds::{Layout, OffsetBounds};
use crate::consts::{UNIT_ZOOM_TOLERANCE, ZOOM_CENTER_EPSILON, ZOOM_JITTER_STEPS};
use crate::geometry::{Point, is_close_to};
use crate::input::{Action, InputEvent};
use crate::notify::{Listeners, NotificationKind, TransformSnapshot};
use crate::options::{OptionsError, ZoomOptions};
use crate::render::{RenderFrame, RenderScheduler, TransformMode};

#[derive(Debug)]
pub struct TransformEngine {
    options: ZoomOptions,
    listeners: Listeners,
    layout: Layout,

    zoom_factor: f64,
    offset: Point,
    initial_offset: Point,
    offsets_set: bool,

    // Per-gesture bookkeeping.
    last_scale: f64,
    nth_zoom: u32,
    last_zoom_center: Option<Point>,
    last_drag_position: Option<Point>,
    has_interaction: bool,
    is_double_tap: bool,

    animation: Option<AnimationRun>,
    next_animation_id: u64,
    scheduler: RenderScheduler,
    pending: Vec<Action>,
}

impl TransformEngine {
    /// Build an engine at native scale with validated options.
    pub fn new(options: ZoomOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            options,
            listeners: Listeners::default(),
            layout: Layout::default(),
            zoom_factor: 1.0,
            offset: Point::default(),
            initial_offset: Point::default(),
            offsets_set: false,
            last_scale: 1.0,
            nth_zoom: 0,
            last_zoom_center: None,
            last_drag_position: None,
            has_interaction: false,
            is_double_tap: false,
            animation: None,
            next_animation_id: 0,
            scheduler: RenderScheduler::default(),
            pending: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_listeners(mut self, listeners: Listeners) -> Self {
        self.listeners = listeners;
        self
    }

    pub fn set_listeners(&mut self, listeners: Listeners) {
        self.listeners = listeners;
    }

    // --- Queries ---

    #[must_use]
    pub fn options(&self) -> &ZoomOptions {
        &self.options
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    #[must_use]
    pub fn initial_offset(&self) -> Point {
        self.initial_offset
    }

    #[must_use]
    pub fn has_interaction(&self) -> bool {
        self.has_interaction
    }

    #[must_use]
    pub fn is_double_tap(&self) -> bool {
        self.is_double_tap
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// The animation run currently in flight, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&AnimationRun> {
        self.animation.as_ref()
    }

    #[must_use]
    pub fn snapshot(&self) -> TransformSnapshot {
        TransformSnapshot {
            zoom_factor: self.zoom_factor,
            offset: self.offset,
            has_interaction: self.has_interaction,
            animating: self.is_animating(),
        }
    }

    /// A single finger may pan only when allowed at native scale or when zoomed.
    #[must_use]
    pub fn can_drag(&self) -> bool {
        self.options.draggable_unzoomed || !is_close_to(self.zoom_factor, 1.0)
    }

    /// Legal offset range at the current zoom factor.
    #[must_use]
    pub fn bounds(&self) -> OffsetBounds {
        OffsetBounds::for_zoom(
            &self.layout,
            self.zoom_factor,
            self.options.horizontal_padding,
            self.options.vertical_padding,
        )
    }

    #[must_use]
    pub fn clamp_offset(&self, offset: Point) -> Point {
        self.bounds().clamp(offset)
    }

    #[must_use]
    pub fn is_out_of_bounds(&self, offset: Point) -> bool {
        !self.bounds().contains(offset)
    }

    /// Content point currently anchored for a zoom back to native scale.
    ///
    /// Inverts the anchored-zoom equation at zoom factor 1: zooming to 1 about
    /// the returned point brings the offset back to `initial_offset`. `None`
    /// when the zoom factor is too close to 1 for the inversion to be stable.
    #[must_use]
    pub fn current_zoom_center(&self) -> Option<Point> {
        let denom = 1.0 / self.zoom_factor - 1.0;
        if denom.abs() < ZOOM_CENTER_EPSILON {
            return None;
        }
        let dx = self.offset.x - self.initial_offset.x;
        let dy = self.offset.y - self.initial_offset.y;
        Some(Point::new(-self.offset.x - dx / denom, -self.offset.y - dy / denom))
    }

    /// Drain the actions queued since the last call.
    pub fn take_actions(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.pending)
    }

    // --- Layout ---

    /// Replace the measured geometry. Does not touch the offset.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Compute the initial offset for the current layout and jump to it.
    ///
    /// With `set_offsets_once` only the first call has any effect.
    pub fn setup_offsets(&mut self) {
        if self.options.set_offsets_once && self.offsets_set {
            return;
        }
        self.offsets_set = true;
        self.initial_offset = self.layout.initial_offset(self.options.center_initial_offset);
        self.reset_offset();
    }

    pub fn reset_offset(&mut self) {
        self.offset = self.initial_offset;
    }

    // --- Scaling ---

    /// Multiply the zoom factor by `ratio`, keeping `center` visually fixed.
    ///
    /// Returns the ratio actually applied after clamping to the zoom limits.
    pub fn scale_by(&mut self, ratio: f64, center: Point) -> f64 {
        self.zoom_anchored(self.zoom_factor * ratio, center)
    }

    /// Move the zoom factor to `zoom_factor`, keeping `center` visually fixed.
    pub fn scale_to(&mut self, zoom_factor: f64, center: Point) -> f64 {
        self.zoom_anchored(zoom_factor, center)
    }

    fn zoom_anchored(&mut self, target: f64, center: Point) -> f64 {
        let original = self.zoom_factor;
        self.zoom_factor = target.max(self.options.min_zoom).min(self.options.max_zoom);
        let applied = self.zoom_factor / original;
        self.offset.x += (applied - 1.0) * (center.x + self.offset.x);
        self.offset.y += (applied - 1.0) * (center.y + self.offset.y);
        applied
    }

    /// Pan opposite to the pointer movement from `last` to `center`.
    ///
    /// Returns `false` (and does nothing) when there is no previous point.
    fn pan(&mut self, center: Point, last: Option<Point>) -> bool {
        let Some(last) = last else {
            return false;
        };
        let mut dx = center.x - last.x;
        let mut dy = center.y - last.y;
        if self.options.lock_drag_axis {
            if dx.abs() > dy.abs() {
                dy = 0.0;
            } else {
                dx = 0.0;
            }
        }
        self.offset.x -= dx;
        self.offset.y -= dy;
        true
    }

    // --- Zoom lifecycle ---

    pub fn zoom_start(&mut self, event: &InputEvent) {
        self.notify(NotificationKind::ZoomStart, event);
        self.stop_animation();
        self.last_scale = 1.0;
        self.nth_zoom = 0;
        self.last_zoom_center = None;
        self.has_interaction = true;
    }

    /// Apply a pinch sample.
    ///
    /// `raw_scale` is the pair-distance ratio since the gesture started;
    /// `center` is the current touch centroid. The first few samples of every
    /// gesture only update bookkeeping.
    pub fn zoom(&mut self, raw_scale: f64, center: Point, event: &InputEvent) {
        if !(raw_scale.is_finite() && raw_scale > 0.0) {
            return;
        }
        let scale = raw_scale / self.last_scale;
        self.last_scale = raw_scale;

        self.nth_zoom += 1;
        if self.nth_zoom > ZOOM_JITTER_STEPS {
            self.scale_by(scale, center);
            self.pan(center, self.last_zoom_center);
            self.notify(NotificationKind::ZoomUpdate, event);
        }
        self.last_zoom_center = Some(center);
    }

    pub fn zoom_end(&mut self, event: &InputEvent) {
        self.notify(NotificationKind::ZoomEnd, event);
        self.end(event.time_ms);
    }

    // --- Drag lifecycle ---

    pub fn drag_start(&mut self, event: &InputEvent) {
        self.notify(NotificationKind::DragStart, event);
        self.stop_animation();
        self.last_drag_position = None;
        self.has_interaction = true;
        if let Some(point) = event.primary() {
            self.drag(point, event);
        }
    }

    /// Pan to `point`, hard-clamping the offset into bounds.
    pub fn drag(&mut self, point: Point, event: &InputEvent) {
        let moved = self.pan(point, self.last_drag_position);
        self.offset = self.clamp_offset(self.offset);
        self.last_drag_position = Some(point);
        if moved {
            self.notify(NotificationKind::DragUpdate, event);
        }
    }

    pub fn drag_end(&mut self, event: &InputEvent) {
        self.notify(NotificationKind::DragEnd, event);
        self.end(event.time_ms);
    }

    fn end(&mut self, now_ms: f64) {
        self.has_interaction = false;
        self.sanitize(now_ms);
        self.request_render();
    }

    // --- Double tap ---

    /// Toggle between native scale and `tap_zoom_factor` about the tap point.
    pub fn double_tap(&mut self, event: &InputEvent) {
        let Some(tap) = event.primary() else {
            return;
        };
        if self.has_interaction {
            return;
        }

        let start = self.zoom_factor;
        let target = if start > 1.0 + UNIT_ZOOM_TOLERANCE { 1.0 } else { self.options.tap_zoom_factor };
        self.is_double_tap = true;

        let center = if start > target { self.current_zoom_center().unwrap_or(tap) } else { tap };
        debug!(from = start, to = target, x = center.x, y = center.y, "double tap zoom");
        self.animate(AnimationKind::Zoom { from: start, to: target, center }, event.time_ms);
        self.notify(NotificationKind::DoubleTap, event);
    }

    pub fn clear_double_tap(&mut self) {
        self.is_double_tap = false;
    }

    // --- Sanitation ---

    /// Start at most one corrective animation after a gesture ends.
    ///
    /// Below `zoom_out_factor` the zoom snaps back to native scale; otherwise
    /// an out-of-bounds offset slides back to the nearest legal value.
    pub fn sanitize(&mut self, now_ms: f64) {
        if self.zoom_factor < self.options.zoom_out_factor && self.zoom_out_animation(now_ms) {
            return;
        }
        if self.is_out_of_bounds(self.offset) {
            self.sanitize_offset_animation(now_ms);
        }
    }

    fn zoom_out_animation(&mut self, now_ms: f64) -> bool {
        let Some(center) = self.current_zoom_center() else {
            return false;
        };
        self.animate(AnimationKind::Zoom { from: self.zoom_factor, to: 1.0, center }, now_ms);
        true
    }

    fn sanitize_offset_animation(&mut self, now_ms: f64) {
        let target = self.clamp_offset(self.offset);
        self.animate(AnimationKind::Offset { from: self.offset, to: target }, now_ms);
    }

    // --- Animation ---

    fn animate(&mut self, kind: AnimationKind, now_ms: f64) {
        self.next_animation_id += 1;
        let id = AnimationId(self.next_animation_id);
        let run = AnimationRun {
            id,
            start_ms: now_ms,
            duration_ms: self.options.animation_duration_ms,
            easing: self.options.easing,
            kind,
        };
        if let Some(previous) = self.animation.replace(run) {
            debug!(superseded = previous.id.0, "animation superseded");
        }
        debug!(id = id.0, ?kind, "animation started");
        self.pending.push(Action::RequestFrame(id));
    }

    pub fn stop_animation(&mut self) {
        if let Some(run) = self.animation.take() {
            debug!(id = run.id.0, "animation stopped");
        }
    }

    /// Advance the animation identified by `id` to `now_ms`.
    ///
    /// Frames for a run that has finished, been stopped or been replaced are
    /// ignored.
    pub fn on_frame(&mut self, id: AnimationId, now_ms: f64) {
        let Some(run) = self.animation else {
            trace!(id = id.0, "frame without animation");
            return;
        };
        if run.id != id {
            trace!(id = id.0, active = run.id.0, "stale animation frame");
            return;
        }

        match run.progress_at(now_ms) {
            FrameProgress::Finished => {
                self.apply_animation(run.kind, 1.0);
                self.animation = None;
                self.request_render();
                debug!(id = id.0, "animation finished");
            }
            FrameProgress::Running(progress) => {
                trace!(id = id.0, progress, "animation frame");
                self.apply_animation(run.kind, progress);
                self.request_render();
                self.pending.push(Action::RequestFrame(id));
            }
        }
    }

    fn apply_animation(&mut self, kind: AnimationKind, progress: f64) {
        match kind {
            AnimationKind::Zoom { from, to, center } => {
                let zoom = if progress >= 1.0 { to } else { from + progress * (to - from) };
                self.scale_to(zoom, center);
            }
            AnimationKind::Offset { from, to } => {
                self.offset = if progress >= 1.0 { to } else { from.lerp(to, progress) };
            }
        }
    }

    // --- Render ---

    /// Ask the host for a paint; coalesced until [`Self::render`] runs.
    pub fn request_render(&mut self) {
        if self.scheduler.request() {
            self.pending.push(Action::ScheduleRender);
        }
    }

    #[must_use]
    pub fn is_render_planned(&self) -> bool {
        self.scheduler.is_planned()
    }

    /// Produce the frame to paint and clear the pending render.
    pub fn render(&mut self) -> RenderFrame {
        self.scheduler.complete();
        let mode = if !self.options.use_2d || self.has_interaction || self.is_animating() {
            TransformMode::ThreeD
        } else {
            TransformMode::TwoD
        };
        RenderFrame::new(self.layout.initial_fit_factor() * self.zoom_factor, self.offset, mode)
    }

    // --- Notifications ---

    fn notify(&mut self, kind: NotificationKind, event: &InputEvent) {
        trace!(event = kind.event_name(), "notify");
        let snapshot = self.snapshot();
        self.listeners.dispatch(kind, &snapshot, event);
        self.pending.push(Action::Notify(kind));
    }
}
