#![allow(clippy::float_cmp)]

use super::*;

// --- RenderFrame ---

#[test]
fn translate_is_negated_offset_in_unscaled_pixels() {
    let frame = RenderFrame::new(2.0, Point::new(100.0, -40.0), TransformMode::TwoD);
    assert_eq!(frame.scale, 2.0);
    assert_eq!(frame.translate, Point::new(-50.0, 20.0));
}

#[test]
fn css_two_d() {
    let frame = RenderFrame::new(2.0, Point::new(100.0, 50.0), TransformMode::TwoD);
    assert_eq!(frame.css_transform(), "scale(2, 2) translate(-50px,-25px)");
}

#[test]
fn css_three_d() {
    let frame = RenderFrame::new(1.5, Point::new(-30.0, 0.0), TransformMode::ThreeD);
    assert_eq!(frame.css_transform(), "scale3d(1.5, 1.5,1) translate3d(20px,-0px,0px)");
}

#[test]
fn frame_serializes_mode_in_snake_case() {
    let frame = RenderFrame::new(1.0, Point::new(0.0, 0.0), TransformMode::ThreeD);
    let json = serde_json::to_value(frame).unwrap();
    assert_eq!(json["mode"], "three_d");
}

// --- RenderScheduler ---

#[test]
fn first_request_schedules() {
    let mut s = RenderScheduler::default();
    assert!(!s.is_planned());
    assert!(s.request());
    assert!(s.is_planned());
}

#[test]
fn repeated_requests_coalesce() {
    let mut s = RenderScheduler::default();
    assert!(s.request());
    assert!(!s.request());
    assert!(!s.request());
}

#[test]
fn request_after_complete_schedules_again() {
    let mut s = RenderScheduler::default();
    assert!(s.request());
    s.complete();
    assert!(!s.is_planned());
    assert!(s.request());
}
