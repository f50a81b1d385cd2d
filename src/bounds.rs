//! Layout geometry and the legal offset range for a given zoom factor.
//!
//! The target is first scaled by the *initial fit factor* so that it covers
//! the container, then by the user's zoom factor. The offset is the pixel
//! translation of that scaled content relative to the container's top-left
//! corner; positive values move the content up/left.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use crate::geometry::{Point, Size};

/// Natural content size and container size, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    pub content: Size,
    pub container: Size,
}

impl Layout {
    #[must_use]
    pub fn new(content: Size, container: Size) -> Self {
        Self { content, container }
    }

    /// Scale that makes the content cover the container on both axes.
    ///
    /// Falls back to 1.0 while either side has no measurable size (an image
    /// that has not loaded yet, a container that is hidden or collapsed).
    #[must_use]
    pub fn initial_fit_factor(&self) -> f64 {
        if self.content.is_degenerate() || self.container.is_degenerate() {
            return 1.0;
        }
        let x = self.container.width / self.content.width;
        let y = self.container.height / self.content.height;
        x.max(y)
    }

    /// Rendered content size at `zoom_factor`.
    #[must_use]
    pub fn scaled_content(&self, zoom_factor: f64) -> Size {
        let scale = self.initial_fit_factor() * zoom_factor;
        Size::new(self.content.width * scale, self.content.height * scale)
    }

    /// Offset the engine starts from, and returns to when zooming back to 1.
    #[must_use]
    pub fn initial_offset(&self, centered: bool) -> Point {
        if !centered {
            return Point::default();
        }
        let scaled = self.scaled_content(1.0);
        Point::new((scaled.width - self.container.width) / 2.0, (scaled.height - self.container.height) / 2.0)
    }
}

/// Inclusive per-axis offset range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetBounds {
    pub min: Point,
    pub max: Point,
}

impl OffsetBounds {
    /// Legal offsets for `layout` at `zoom_factor`.
    ///
    /// Content smaller than the container stays within `padding` of zero;
    /// larger content stays within `padding` of its overflow.
    #[must_use]
    pub fn for_zoom(layout: &Layout, zoom_factor: f64, horizontal_padding: f64, vertical_padding: f64) -> Self {
        let scaled = layout.scaled_content(zoom_factor);
        let overflow_x = scaled.width - layout.container.width;
        let overflow_y = scaled.height - layout.container.height;
        Self {
            min: Point::new(overflow_x.min(0.0) - horizontal_padding, overflow_y.min(0.0) - vertical_padding),
            max: Point::new(overflow_x.max(0.0) + horizontal_padding, overflow_y.max(0.0) + vertical_padding),
        }
    }

    /// Nearest legal offset to `offset`.
    #[must_use]
    pub fn clamp(&self, offset: Point) -> Point {
        Point::new(offset.x.max(self.min.x).min(self.max.x), offset.y.max(self.min.y).min(self.max.y))
    }

    /// Whether clamping would leave `offset` untouched.
    #[must_use]
    pub fn contains(&self, offset: Point) -> bool {
        self.clamp(offset) == offset
    }
}
