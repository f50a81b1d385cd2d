#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::UNIT_ZOOM_TOLERANCE;

/// A point in surface-local pixels. Also used for offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation towards `to`; `t = 0` is `self`, `t = 1` is `to`.
    #[must_use]
    pub fn lerp(self, to: Point, t: f64) -> Point {
        Point { x: self.x + t * (to.x - self.x), y: self.y + t * (to.y - self.y) }
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero, negative or not a number.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Average of a set of points, `None` for an empty set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point { x: sx / n, y: sy / n })
}

/// Distance between the first two points of a sample set.
///
/// Only defined for sets of exactly two points; anything else yields `None`.
#[must_use]
pub fn pair_distance(points: &[Point]) -> Option<f64> {
    match points {
        [a, b] => Some(a.distance(*b)),
        _ => None,
    }
}

/// Whether `value` lies strictly within [`UNIT_ZOOM_TOLERANCE`] of `expected`.
#[must_use]
pub fn is_close_to(value: f64, expected: f64) -> bool {
    value > expected - UNIT_ZOOM_TOLERANCE && value < expected + UNIT_ZOOM_TOLERANCE
}
