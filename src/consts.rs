//! Shared numeric constants for the gesture engine.

// ── Gestures ────────────────────────────────────────────────────

/// Two single-finger starts closer than this (milliseconds) form a double tap.
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;

/// Pinch updates swallowed at the start of every zoom gesture.
pub const ZOOM_JITTER_STEPS: u32 = 3;

// ── Tolerances ──────────────────────────────────────────────────

/// How close a zoom factor must be to 1.0 to count as native scale.
pub const UNIT_ZOOM_TOLERANCE: f64 = 0.01;

/// Smallest `|1/zoom - 1|` for which the visual zoom centre is computed.
pub const ZOOM_CENTER_EPSILON: f64 = 1e-6;
