use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// InputEvent
// =============================================================

#[test]
fn constructors_set_phase() {
    assert_eq!(InputEvent::start(0.0, vec![]).phase, TouchPhase::Start);
    assert_eq!(InputEvent::moved(0.0, vec![]).phase, TouchPhase::Move);
    assert_eq!(InputEvent::end(0.0, vec![]).phase, TouchPhase::End);
}

#[test]
fn primary_is_first_touch() {
    let ev = InputEvent::moved(5.0, vec![pt(1.0, 2.0), pt(3.0, 4.0)]);
    assert_eq!(ev.primary(), Some(pt(1.0, 2.0)));
}

#[test]
fn primary_of_empty_batch_is_none() {
    assert_eq!(InputEvent::end(5.0, vec![]).primary(), None);
}

#[test]
fn deserializes_from_camel_case_json() {
    let ev: InputEvent =
        serde_json::from_str(r#"{"phase":"move","timeMs":16.5,"touches":[{"x":1,"y":2}]}"#).unwrap();
    assert_eq!(ev, InputEvent::moved(16.5, vec![pt(1.0, 2.0)]));
}

#[test]
fn missing_touches_deserialize_as_empty() {
    let ev: InputEvent = serde_json::from_str(r#"{"phase":"end","timeMs":3}"#).unwrap();
    assert!(ev.touches.is_empty());
}

// =============================================================
// Interaction
// =============================================================

#[test]
fn interaction_default_is_none() {
    assert_eq!(Interaction::default(), Interaction::None);
}

#[test]
fn two_fingers_zoom() {
    assert_eq!(Interaction::from_fingers(2, false), Interaction::Zoom);
    assert_eq!(Interaction::from_fingers(2, true), Interaction::Zoom);
}

#[test]
fn one_finger_drags_only_when_permitted() {
    assert_eq!(Interaction::from_fingers(1, true), Interaction::Drag);
    assert_eq!(Interaction::from_fingers(1, false), Interaction::None);
}

#[test]
fn other_finger_counts_are_none() {
    for n in [0, 3, 4, 10] {
        assert_eq!(Interaction::from_fingers(n, true), Interaction::None);
    }
}

#[test]
fn is_active() {
    assert!(!Interaction::None.is_active());
    assert!(Interaction::Drag.is_active());
    assert!(Interaction::Zoom.is_active());
}
