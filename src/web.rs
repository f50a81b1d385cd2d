//! DOM surface over `web-sys` (feature `web`).
//!
//! [`DomSurface`] measures a target element inside a clipping container and
//! writes painted frames to the target's `transform` style. [`input_event`]
//! converts a native `TouchEvent` into container-local [`InputEvent`]s. Wiring
//! the listeners and scheduling ticks and animation frames stays with the
//! host.

use tracing::warn;
use web_sys::{HtmlElement, TouchEvent};

use crate::engine::Surface;
use crate::geometry::{Point, Size};
use crate::input::{InputEvent, TouchPhase};
use crate::render::RenderFrame;

pub struct DomSurface {
    container: HtmlElement,
    target: HtmlElement,
}

impl DomSurface {
    /// Wrap `target` (already placed inside `container`) and apply the
    /// positioning styles the transform relies on.
    #[must_use]
    pub fn new(container: HtmlElement, target: HtmlElement) -> Self {
        set_style(&container, "overflow", "hidden");
        set_style(&container, "position", "relative");
        set_style(&target, "transform-origin", "0% 0%");
        set_style(&target, "position", "absolute");
        Self { container, target }
    }

    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    #[must_use]
    pub fn target(&self) -> &HtmlElement {
        &self.target
    }
}

impl Surface for DomSurface {
    fn content_size(&self) -> Size {
        Size::new(f64::from(self.target.offset_width()), f64::from(self.target.offset_height()))
    }

    fn container_size(&self) -> Size {
        Size::new(f64::from(self.container.offset_width()), f64::from(self.container.offset_height()))
    }

    fn apply_frame(&mut self, frame: &RenderFrame) {
        set_style(&self.target, "transform", &frame.css_transform());
    }
}

/// Container-local sample batch for a native touch event.
///
/// Uses `event.touches()`, so an end event carries the contacts still down.
#[must_use]
pub fn input_event(phase: TouchPhase, event: &TouchEvent, container: &HtmlElement) -> InputEvent {
    let rect = container.get_bounding_client_rect();
    let list = event.touches();
    let touches = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|touch| {
            Point::new(f64::from(touch.client_x()) - rect.left(), f64::from(touch.client_y()) - rect.top())
        })
        .collect();
    InputEvent::new(phase, event.time_stamp(), touches)
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        warn!(?err, property, "failed to set style");
    }
}
