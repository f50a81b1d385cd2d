#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn zoom_run(start_ms: f64, duration_ms: f64, easing: Easing) -> AnimationRun {
    AnimationRun {
        id: AnimationId(1),
        start_ms,
        duration_ms,
        easing,
        kind: AnimationKind::Zoom { from: 0.8, to: 1.0, center: Point::new(0.0, 0.0) },
    }
}

// --- Easing ---

#[test]
fn swing_endpoints_and_midpoint() {
    assert!(approx_eq(Easing::Swing.apply(0.0), 0.0));
    assert!(approx_eq(Easing::Swing.apply(0.5), 0.5));
    assert!(approx_eq(Easing::Swing.apply(1.0), 1.0));
}

#[test]
fn swing_is_slow_at_the_edges() {
    assert!(Easing::Swing.apply(0.1) < 0.1);
    assert!(Easing::Swing.apply(0.9) > 0.9);
}

#[test]
fn swing_is_monotonic() {
    let mut last = Easing::Swing.apply(0.0);
    for i in 1..=100 {
        let v = Easing::Swing.apply(f64::from(i) / 100.0);
        assert!(v >= last);
        last = v;
    }
}

#[test]
fn linear_is_identity() {
    assert_eq!(Easing::Linear.apply(0.37), 0.37);
}

#[test]
fn default_easing_is_swing() {
    assert_eq!(Easing::default(), Easing::Swing);
}

// --- AnimationRun ---

#[test]
fn progress_at_start_is_zero() {
    let run = zoom_run(1000.0, 300.0, Easing::Linear);
    assert_eq!(run.progress_at(1000.0), FrameProgress::Running(0.0));
}

#[test]
fn progress_midway_is_eased() {
    let run = zoom_run(1000.0, 300.0, Easing::Swing);
    let FrameProgress::Running(p) = run.progress_at(1150.0) else {
        panic!("expected a running frame");
    };
    assert!(approx_eq(p, 0.5));
}

#[test]
fn progress_finishes_at_duration() {
    let run = zoom_run(1000.0, 300.0, Easing::Swing);
    assert_eq!(run.progress_at(1300.0), FrameProgress::Finished);
    assert_eq!(run.progress_at(5000.0), FrameProgress::Finished);
}

#[test]
fn progress_before_start_is_clamped_to_zero() {
    let run = zoom_run(1000.0, 300.0, Easing::Linear);
    assert_eq!(run.progress_at(900.0), FrameProgress::Running(0.0));
}

#[test]
fn zero_duration_finishes_immediately() {
    let run = zoom_run(1000.0, 0.0, Easing::Swing);
    assert_eq!(run.progress_at(1000.0), FrameProgress::Finished);
}
