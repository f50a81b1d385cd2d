//! Scripted replay: a simulated host driving an [`Engine`] from recorded input.
//!
//! The host clock only moves forward. Before each input event it paints any
//! pending render and steps requested animation frames every `frame_ms` up to
//! the event's timestamp. After the last event it keeps stepping until no
//! animation is left.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::cell::RefCell;
use std::rc::Rc;

use pinchzoom::animation::AnimationId;
use pinchzoom::engine::{Engine, Surface};
use pinchzoom::geometry::{Point, Size};
use pinchzoom::input::{Action, InputEvent};
use pinchzoom::notify::{Listeners, NotificationKind, TransformSnapshot};
use pinchzoom::options::{OptionsError, ZoomOptions};
use pinchzoom::render::RenderFrame;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error("frame interval must be positive and finite, got {0}")]
    FrameInterval(f64),
}

/// A recorded session: geometry, options and the input events in order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    #[serde(default)]
    pub options: ZoomOptions,
    pub content: Size,
    pub container: Size,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

impl Script {
    pub fn from_json(raw: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// One line of replay output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Line {
    /// The host suppressed the platform default for an input event.
    Consumed { time_ms: f64 },
    /// A lifecycle notification, with the state its listener saw.
    Notify { time_ms: f64, event: &'static str, state: TransformSnapshot },
    /// A painted frame.
    Frame { time_ms: f64, scale: f64, translate: Point, transform: String },
}

/// Fixed-size surface that only remembers what it was asked to paint.
#[derive(Debug)]
pub struct ScriptSurface {
    content: Size,
    container: Size,
    last_frame: Option<RenderFrame>,
}

impl ScriptSurface {
    #[must_use]
    pub fn new(content: Size, container: Size) -> Self {
        Self { content, container, last_frame: None }
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }
}

impl Surface for ScriptSurface {
    fn content_size(&self) -> Size {
        self.content
    }

    fn container_size(&self) -> Size {
        self.container
    }

    fn apply_frame(&mut self, frame: &RenderFrame) {
        self.last_frame = Some(*frame);
    }
}

pub struct Replay {
    engine: Engine<ScriptSurface>,
    frame_ms: f64,
    now_ms: f64,
    render_pending: bool,
    frame_pending: Option<AnimationId>,
    lines: Rc<RefCell<Vec<Line>>>,
}

impl Replay {
    pub fn new(script: &Script, frame_ms: f64) -> Result<Self, ReplayError> {
        if !(frame_ms.is_finite() && frame_ms > 0.0) {
            return Err(ReplayError::FrameInterval(frame_ms));
        }

        let lines = Rc::new(RefCell::new(Vec::new()));
        let listeners = NotificationKind::ALL.into_iter().fold(Listeners::default(), |listeners, kind| {
            let sink = Rc::clone(&lines);
            listeners.on(kind, move |state, event| {
                sink.borrow_mut().push(Line::Notify { time_ms: event.time_ms, event: kind.event_name(), state: *state });
            })
        });

        let surface = ScriptSurface::new(script.content, script.container);
        let engine = Engine::new(surface, script.options.clone())?.with_listeners(listeners);
        let start_ms = script.events.first().map_or(0.0, |event| event.time_ms);

        let mut replay =
            Self { engine, frame_ms, now_ms: start_ms, render_pending: false, frame_pending: None, lines };
        let initial = replay.engine.take_initial_actions();
        replay.handle(&initial);
        Ok(replay)
    }

    /// Feed one input event, first catching the host clock up to it.
    pub fn input(&mut self, event: &InputEvent) {
        self.advance_to(event.time_ms);
        let actions = self.engine.on_input(event);
        self.handle(&actions);
    }

    /// Step frames until no animation is left and the last render is painted.
    pub fn finish(&mut self) {
        while self.frame_pending.is_some() {
            self.advance_to(self.now_ms + self.frame_ms);
        }
        self.flush_render();
    }

    #[must_use]
    pub fn engine(&self) -> &Engine<ScriptSurface> {
        &self.engine
    }

    /// Drain the output produced so far.
    pub fn take_lines(&mut self) -> Vec<Line> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }

    fn advance_to(&mut self, target_ms: f64) {
        loop {
            self.flush_render();
            let Some(id) = self.frame_pending else {
                break;
            };
            let next = self.now_ms + self.frame_ms;
            if next > target_ms {
                break;
            }
            self.frame_pending = None;
            self.now_ms = next;
            let actions = self.engine.on_frame(id, next);
            self.handle(&actions);
        }
        self.now_ms = self.now_ms.max(target_ms);
    }

    fn flush_render(&mut self) {
        if !self.render_pending {
            return;
        }
        self.render_pending = false;
        let frame = self.engine.render();
        self.lines.borrow_mut().push(Line::Frame {
            time_ms: self.now_ms,
            scale: frame.scale,
            translate: frame.translate,
            transform: frame.css_transform(),
        });
    }

    fn handle(&mut self, actions: &[Action]) {
        for action in actions {
            match action {
                Action::PreventDefault => self.lines.borrow_mut().push(Line::Consumed { time_ms: self.now_ms }),
                Action::ScheduleRender => self.render_pending = true,
                Action::RequestFrame(id) => self.frame_pending = Some(*id),
                // Already recorded by the listener, with the state it saw.
                Action::Notify(kind) => debug!(event = kind.event_name(), "notification"),
            }
        }
    }
}

/// Replay `script` end to end and return every output line.
pub fn replay(script: &Script, frame_ms: f64) -> Result<Vec<Line>, ReplayError> {
    let mut replay = Replay::new(script, frame_ms)?;
    for event in &script.events {
        replay.input(event);
    }
    replay.finish();
    Ok(replay.take_lines())
}
