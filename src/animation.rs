//! Time-based eased animation runs.
//!
//! An [`AnimationRun`] is pure data: where it started, how long it lasts, how
//! progress is eased and what it interpolates. The transform engine holds at
//! most one run and advances it whenever the host reports a display refresh.
//! Each run has a fresh [`AnimationId`]; frame callbacks carry that id so a run
//! that has been replaced can never be stepped again.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Identity of one animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AnimationId(pub u64);

/// Progress curve applied to linear time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    /// Half a cosine wave: slow start, slow finish.
    #[default]
    Swing,
    Linear,
}

impl Easing {
    /// Map linear progress `p` in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, p: f64) -> f64 {
        match self {
            Self::Swing => 0.5 - (p * std::f64::consts::PI).cos() / 2.0,
            Self::Linear => p,
        }
    }
}

/// What an animation interpolates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationKind {
    /// Zoom factor from `from` to `to`, keeping `center` visually fixed.
    Zoom { from: f64, to: f64, center: Point },
    /// Offset from `from` to `to` at the current zoom factor.
    Offset { from: Point, to: Point },
}

/// Where a run stands at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameProgress {
    /// Eased progress in `[0, 1)`.
    Running(f64),
    /// The duration has elapsed; apply the end state and stop.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    pub id: AnimationId,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
    pub kind: AnimationKind,
}

impl AnimationRun {
    /// Progress of the run at `now_ms` on the host's monotonic clock.
    #[must_use]
    pub fn progress_at(&self, now_ms: f64) -> FrameProgress {
        let elapsed = now_ms - self.start_ms;
        if elapsed >= self.duration_ms {
            return FrameProgress::Finished;
        }
        let linear = (elapsed / self.duration_ms).max(0.0);
        FrameProgress::Running(self.easing.apply(linear))
    }
}
