#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn distance_three_four_five() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(-7.5, 2.0);
    let b = Point::new(4.0, -9.25);
    assert!(approx_eq(a.distance(b), b.distance(a)));
}

#[test]
fn lerp_endpoints_and_midpoint() {
    let a = Point::new(0.0, 10.0);
    let b = Point::new(20.0, -10.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Point::new(10.0, 0.0));
}

// --- Size ---

#[test]
fn size_degenerate_when_any_side_is_zero() {
    assert!(Size::new(0.0, 10.0).is_degenerate());
    assert!(Size::new(10.0, 0.0).is_degenerate());
    assert!(Size::default().is_degenerate());
}

#[test]
fn size_degenerate_when_nan() {
    assert!(Size::new(f64::NAN, 10.0).is_degenerate());
}

#[test]
fn size_positive_is_not_degenerate() {
    assert!(!Size::new(1.0, 1.0).is_degenerate());
}

// --- centroid ---

#[test]
fn centroid_of_empty_set_is_none() {
    assert_eq!(centroid(&[]), None);
}

#[test]
fn centroid_of_single_point_is_that_point() {
    assert_eq!(centroid(&[Point::new(4.0, -2.0)]), Some(Point::new(4.0, -2.0)));
}

#[test]
fn centroid_of_pair_is_midpoint() {
    assert_eq!(centroid(&[Point::new(0.0, 0.0), Point::new(200.0, 50.0)]), Some(Point::new(100.0, 25.0)));
}

#[test]
fn centroid_of_three_points() {
    let c = centroid(&[Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(0.0, 3.0)]);
    assert_eq!(c, Some(Point::new(1.0, 1.0)));
}

// --- pair_distance ---

#[test]
fn pair_distance_requires_exactly_two_points() {
    assert_eq!(pair_distance(&[]), None);
    assert_eq!(pair_distance(&[Point::new(1.0, 1.0)]), None);
    assert_eq!(pair_distance(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)]), None);
}

#[test]
fn pair_distance_of_two_points() {
    assert_eq!(pair_distance(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]), Some(100.0));
}

// --- is_close_to ---

#[test]
fn close_to_within_tolerance() {
    assert!(is_close_to(1.0, 1.0));
    assert!(is_close_to(1.009, 1.0));
    assert!(is_close_to(0.991, 1.0));
}

#[test]
fn not_close_to_outside_tolerance() {
    assert!(!is_close_to(1.02, 1.0));
    assert!(!is_close_to(0.98, 1.0));
}
