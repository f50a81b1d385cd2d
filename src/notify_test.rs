use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn snapshot() -> TransformSnapshot {
    TransformSnapshot { zoom_factor: 1.5, offset: Point::new(10.0, 20.0), has_interaction: true, animating: false }
}

#[test]
fn event_names() {
    assert_eq!(NotificationKind::ZoomStart.event_name(), "zoomstart");
    assert_eq!(NotificationKind::ZoomUpdate.event_name(), "zoomupdate");
    assert_eq!(NotificationKind::ZoomEnd.event_name(), "zoomend");
    assert_eq!(NotificationKind::DragStart.event_name(), "dragstart");
    assert_eq!(NotificationKind::DragUpdate.event_name(), "dragupdate");
    assert_eq!(NotificationKind::DragEnd.event_name(), "dragend");
    assert_eq!(NotificationKind::DoubleTap.event_name(), "doubletap");
}

#[test]
fn all_kinds_have_distinct_names() {
    let names: std::collections::HashSet<_> = NotificationKind::ALL.iter().map(|k| k.event_name()).collect();
    assert_eq!(names.len(), NotificationKind::ALL.len());
}

#[test]
fn dispatch_passes_snapshot_and_triggering_event() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut listeners = Listeners::default().on(NotificationKind::DragUpdate, move |state, event| {
        sink.borrow_mut().push((state.zoom_factor, event.time_ms));
    });

    let first = InputEvent::moved(100.0, vec![Point::new(1.0, 1.0)]);
    let second = InputEvent::moved(116.0, vec![Point::new(2.0, 2.0)]);
    listeners.dispatch(NotificationKind::DragUpdate, &snapshot(), &first);
    listeners.dispatch(NotificationKind::DragUpdate, &snapshot(), &second);

    assert_eq!(*seen.borrow(), vec![(1.5, 100.0), (1.5, 116.0)]);
}

#[test]
fn dispatch_only_reaches_matching_kind() {
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let mut listeners = Listeners::default().on(NotificationKind::ZoomEnd, move |_, _| *sink.borrow_mut() += 1);

    let ev = InputEvent::end(0.0, vec![]);
    listeners.dispatch(NotificationKind::ZoomStart, &snapshot(), &ev);
    listeners.dispatch(NotificationKind::DragEnd, &snapshot(), &ev);
    assert_eq!(*count.borrow(), 0);

    listeners.dispatch(NotificationKind::ZoomEnd, &snapshot(), &ev);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn debug_reports_registered_slots() {
    let listeners = Listeners::default().on(NotificationKind::ZoomStart, |_, _| {});
    let s = format!("{listeners:?}");
    assert!(s.contains("zoom_start: true"));
    assert!(s.contains("drag_end: false"));
}
