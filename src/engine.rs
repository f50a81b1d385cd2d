use crate::animation::AnimationId;
use crate::bounds::Layout;
use crate::geometry::Size;
use crate::gesture::GestureClassifier;
use crate::input::{Action, Disposition, InputEvent, Interaction, TouchPhase};
use crate::notify::{Listeners, TransformSnapshot};
use crate::options::{OptionsError, ZoomOptions};
use crate::render::RenderFrame;
use crate::transform::TransformEngine;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// What the engine needs from the element it transforms.
///
/// Implementations measure the target and its container and apply painted
/// frames. Everything else about the host (listener wiring, custom events,
/// image loading) stays outside the engine.
pub trait Surface {
    /// Natural size of the target content, before any scaling.
    fn content_size(&self) -> Size;
    /// Size of the clipping container.
    fn container_size(&self) -> Size;
    /// Paint `frame` onto the target.
    fn apply_frame(&mut self, frame: &RenderFrame);
}

/// Engine state and logic that does not depend on a surface.
///
/// Separated from `Engine` so it can be tested without a host.
#[derive(Debug)]
pub struct EngineCore {
    pub classifier: GestureClassifier,
    pub transform: TransformEngine,
    enabled: bool,
}

impl EngineCore {
    pub fn new(options: ZoomOptions) -> Result<Self, OptionsError> {
        Ok(Self { classifier: GestureClassifier::new(), transform: TransformEngine::new(options)?, enabled: true })
    }

    #[must_use]
    pub fn with_listeners(mut self, listeners: Listeners) -> Self {
        self.transform.set_listeners(listeners);
        self
    }

    // --- Enable / disable ---

    /// Resume reacting to input. Contacts lifted while disabled were never
    /// seen, so the next start is treated as a fresh lifecycle.
    pub fn enable(&mut self) {
        if !self.enabled {
            self.classifier.forget_contacts();
        }
        self.enabled = true;
    }

    /// Stop reacting to input. An in-flight gesture is left as is until
    /// input resumes.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    // --- Layout ---

    /// Adopt new geometry, recompute the initial offset and repaint.
    pub fn set_layout(&mut self, layout: Layout) -> Vec<Action> {
        self.apply_layout(layout);
        self.transform.take_actions()
    }

    fn apply_layout(&mut self, layout: Layout) {
        self.transform.set_layout(layout);
        self.transform.setup_offsets();
        self.transform.request_render();
    }

    // --- Input events ---

    pub fn on_touch_start(&mut self, event: &InputEvent) -> Vec<Action> {
        if !self.enabled {
            return Vec::new();
        }
        let disposition = self.classifier.on_start(&mut self.transform, event);
        self.collect(disposition)
    }

    pub fn on_touch_move(&mut self, event: &InputEvent) -> Vec<Action> {
        if !self.enabled {
            return Vec::new();
        }
        let disposition = self.classifier.on_change(&mut self.transform, event);
        self.collect(disposition)
    }

    pub fn on_touch_end(&mut self, event: &InputEvent) -> Vec<Action> {
        if !self.enabled {
            return Vec::new();
        }
        let disposition = self.classifier.on_end(&mut self.transform, event);
        self.collect(disposition)
    }

    /// Dispatch on `event.phase`.
    pub fn on_input(&mut self, event: &InputEvent) -> Vec<Action> {
        match event.phase {
            TouchPhase::Start => self.on_touch_start(event),
            TouchPhase::Move => self.on_touch_move(event),
            TouchPhase::End => self.on_touch_end(event),
        }
    }

    // --- Frames ---

    /// Display-refresh callback for the animation `id`.
    pub fn on_frame(&mut self, id: AnimationId, now_ms: f64) -> Vec<Action> {
        self.transform.on_frame(id, now_ms);
        self.transform.take_actions()
    }

    /// Produce the frame for a scheduled render.
    pub fn render(&mut self) -> RenderFrame {
        self.transform.render()
    }

    // --- Queries ---

    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.classifier.interaction()
    }

    #[must_use]
    pub fn snapshot(&self) -> TransformSnapshot {
        self.transform.snapshot()
    }

    fn collect(&mut self, disposition: Disposition) -> Vec<Action> {
        let mut actions = Vec::new();
        if disposition == Disposition::Consumed {
            actions.push(Action::PreventDefault);
        }
        actions.extend(self.transform.take_actions());
        actions
    }
}

/// The full engine. Wraps `EngineCore` and owns the host surface.
pub struct Engine<S: Surface> {
    surface: S,
    pub core: EngineCore,
}

impl<S: Surface> Engine<S> {
    /// Create an engine bound to `surface`, measured and positioned.
    ///
    /// The returned engine has a render pending; the host should honour the
    /// [`Action::ScheduleRender`] from [`Self::take_initial_actions`].
    pub fn new(surface: S, options: ZoomOptions) -> Result<Self, OptionsError> {
        let mut core = EngineCore::new(options)?;
        core.apply_layout(Layout::new(surface.content_size(), surface.container_size()));
        Ok(Self { surface, core })
    }

    #[must_use]
    pub fn with_listeners(mut self, listeners: Listeners) -> Self {
        self.core.transform.set_listeners(listeners);
        self
    }

    /// Actions queued during construction.
    pub fn take_initial_actions(&mut self) -> Vec<Action> {
        self.core.transform.take_actions()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    // --- Delegated state changes ---

    pub fn enable(&mut self) {
        self.core.enable();
    }

    pub fn disable(&mut self) {
        self.core.disable();
    }

    /// Re-measure the surface after a resize or a content load.
    pub fn on_layout_change(&mut self) -> Vec<Action> {
        let layout = Layout::new(self.surface.content_size(), self.surface.container_size());
        self.core.set_layout(layout)
    }

    // --- Input events ---

    pub fn on_touch_start(&mut self, event: &InputEvent) -> Vec<Action> {
        self.core.on_touch_start(event)
    }

    pub fn on_touch_move(&mut self, event: &InputEvent) -> Vec<Action> {
        self.core.on_touch_move(event)
    }

    pub fn on_touch_end(&mut self, event: &InputEvent) -> Vec<Action> {
        self.core.on_touch_end(event)
    }

    pub fn on_input(&mut self, event: &InputEvent) -> Vec<Action> {
        self.core.on_input(event)
    }

    pub fn on_frame(&mut self, id: AnimationId, now_ms: f64) -> Vec<Action> {
        self.core.on_frame(id, now_ms)
    }

    // --- Render ---

    /// Paint the current transform onto the surface.
    pub fn render(&mut self) -> RenderFrame {
        let frame = self.core.render();
        self.surface.apply_frame(&frame);
        frame
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn snapshot(&self) -> TransformSnapshot {
        self.core.snapshot()
    }

    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.core.interaction()
    }
}
