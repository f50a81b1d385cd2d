//! Render frames and render coalescing.
//!
//! The engine never paints. It describes the current transform as a
//! [`RenderFrame`] and tells the host, at most once per tick, that a paint is
//! due. [`RenderScheduler`] tracks whether such a request is already in
//! flight so that bursts of mutations collapse into a single paint.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::geometry::Point;

/// Which CSS transform family the frame should be painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    /// `scale()` / `translate()`: crisp, used while idle.
    TwoD,
    /// `scale3d()` / `translate3d()`: GPU composited, used while moving.
    ThreeD,
}

/// A paintable snapshot of the transform.
///
/// The element is scaled about its top-left corner by `scale`, then
/// translated by `translate` in pre-scale pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderFrame {
    pub scale: f64,
    pub translate: Point,
    pub mode: TransformMode,
}

impl RenderFrame {
    /// Build a frame from the total scale (fit factor times zoom) and the offset.
    #[must_use]
    pub fn new(scale: f64, offset: Point, mode: TransformMode) -> Self {
        Self { scale, translate: Point::new(-offset.x / scale, -offset.y / scale), mode }
    }

    /// CSS `transform` value for this frame.
    #[must_use]
    pub fn css_transform(&self) -> String {
        let Self { scale, translate, mode } = *self;
        match mode {
            TransformMode::TwoD => {
                format!("scale({scale}, {scale}) translate({}px,{}px)", translate.x, translate.y)
            }
            TransformMode::ThreeD => {
                format!("scale3d({scale}, {scale},1) translate3d({}px,{}px,0px)", translate.x, translate.y)
            }
        }
    }
}

/// Coalesces render requests until the host paints.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderScheduler {
    planned: bool,
}

impl RenderScheduler {
    /// Record a render request. Returns `true` only when the host must be
    /// asked for a new tick; `false` while one is already pending.
    pub fn request(&mut self) -> bool {
        if self.planned {
            return false;
        }
        self.planned = true;
        true
    }

    /// Mark the pending render as executed.
    pub fn complete(&mut self) {
        self.planned = false;
    }

    #[must_use]
    pub fn is_planned(&self) -> bool {
        self.planned
    }
}
