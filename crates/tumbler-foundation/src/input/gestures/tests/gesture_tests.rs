use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tumbler_ui_graphics::{Point, Size};
use web_time::Instant;

use crate::input::types::{PointerEvent, PointerEventKind};

const BOUNDS: Size = Size {
    width: 52.0,
    height: 32.0,
};

fn event(kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(kind, Point::new(x, y), Point::new(x, y))
}

#[test]
fn tap_commits_on_release_within_slop() {
    let taps = Rc::new(Cell::new(0));
    let count = Rc::clone(&taps);
    let mut tap = TapGesture::new().on_end(move || count.set(count.get() + 1));

    tap.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0), BOUNDS);
    tap.on_pointer_event(&event(PointerEventKind::Move, 12.0, 10.0), BOUNDS);
    let state = tap.on_pointer_event(&event(PointerEventKind::Up, 12.0, 10.0), BOUNDS);

    assert_eq!(state, RecognizerState::Committed);
    assert_eq!(taps.get(), 1);
}

#[test]
fn tap_cancels_beyond_slop() {
    let taps = Rc::new(Cell::new(0));
    let count = Rc::clone(&taps);
    let mut tap = TapGesture::new().on_end(move || count.set(count.get() + 1));

    tap.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0), BOUNDS);
    let state = tap.on_pointer_event(&event(PointerEventKind::Move, 30.0, 10.0), BOUNDS);
    assert_eq!(state, RecognizerState::Canceled);

    tap.on_pointer_event(&event(PointerEventKind::Up, 30.0, 10.0), BOUNDS);
    assert_eq!(taps.get(), 0);
}

#[test]
fn tap_rejects_press_and_hold() {
    let taps = Rc::new(Cell::new(0));
    let count = Rc::clone(&taps);
    let mut tap = TapGesture::new().on_end(move || count.set(count.get() + 1));

    let pressed_at = Instant::now();
    tap.on_pointer_event(
        &event(PointerEventKind::Down, 10.0, 10.0).with_timestamp(pressed_at),
        BOUNDS,
    );
    let state = tap.on_pointer_event(
        &event(PointerEventKind::Up, 10.0, 10.0)
            .with_timestamp(pressed_at + Duration::from_millis(800)),
        BOUNDS,
    );

    assert_eq!(state, RecognizerState::Canceled);
    assert_eq!(taps.get(), 0);
}

#[test]
fn pan_commits_after_slop_and_reports_translation() {
    let starts = Rc::new(Cell::new(0));
    let updates = Rc::new(RefCell::new(Vec::new()));
    let ended = Rc::new(Cell::new(None));

    let start_count = Rc::clone(&starts);
    let update_log = Rc::clone(&updates);
    let end_slot = Rc::clone(&ended);
    let mut pan = PanGesture::new()
        .on_start(move || start_count.set(start_count.get() + 1))
        .on_update(move |translation| update_log.borrow_mut().push(translation.x))
        .on_end(move |translation| end_slot.set(Some(translation.x)));

    pan.on_pointer_event(
        &event(PointerEventKind::Down, 4.0, 16.0).with_id(7),
        BOUNDS,
    );
    assert_eq!(pan.state(), RecognizerState::Tracking);

    let state = pan.on_pointer_event(&event(PointerEventKind::Move, 14.0, 16.0), BOUNDS);
    assert_eq!(state, RecognizerState::Committed);
    assert_eq!(starts.get(), 1);

    pan.on_pointer_event(&event(PointerEventKind::Move, 24.0, 16.0), BOUNDS);
    pan.on_pointer_event(&event(PointerEventKind::Up, 24.0, 16.0), BOUNDS);

    assert_eq!(updates.borrow().as_slice(), &[10.0, 20.0]);
    assert_eq!(ended.get(), Some(20.0));
    assert_eq!(starts.get(), 1);
}

#[test]
fn pan_below_slop_never_commits() {
    let ended = Rc::new(Cell::new(false));
    let end_flag = Rc::clone(&ended);
    let mut pan = PanGesture::new().on_end(move |_| end_flag.set(true));

    pan.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0), BOUNDS);
    pan.on_pointer_event(&event(PointerEventKind::Move, 13.0, 10.0), BOUNDS);
    let state = pan.on_pointer_event(&event(PointerEventKind::Up, 13.0, 10.0), BOUNDS);

    assert_eq!(state, RecognizerState::Canceled);
    assert!(!ended.get());
}

#[test]
fn pan_cancels_when_pointer_leaves_bounds_if_configured() {
    let ended = Rc::new(Cell::new(false));
    let end_flag = Rc::clone(&ended);
    let mut pan = PanGesture::new()
        .should_cancel_when_outside(true)
        .on_end(move |_| end_flag.set(true));

    pan.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0), BOUNDS);
    pan.on_pointer_event(&event(PointerEventKind::Move, 30.0, 10.0), BOUNDS);
    assert_eq!(pan.state(), RecognizerState::Committed);

    // Local position outside the 52x32 bounds.
    let state = pan.on_pointer_event(&event(PointerEventKind::Move, 30.0, 60.0), BOUNDS);
    assert_eq!(state, RecognizerState::Canceled);

    pan.on_pointer_event(&event(PointerEventKind::Up, 30.0, 60.0), BOUNDS);
    assert!(!ended.get(), "a canceled pan must not deliver on_end");
}

#[test]
fn pan_keeps_tracking_outside_bounds_by_default() {
    let ended = Rc::new(Cell::new(None));
    let end_slot = Rc::clone(&ended);
    let mut pan = PanGesture::new().on_end(move |translation| end_slot.set(Some(translation.x)));

    pan.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0), BOUNDS);
    pan.on_pointer_event(&event(PointerEventKind::Move, 30.0, 60.0), BOUNDS);
    assert_eq!(pan.state(), RecognizerState::Committed);
    pan.on_pointer_event(&event(PointerEventKind::Up, 40.0, 60.0), BOUNDS);

    assert_eq!(ended.get(), Some(30.0));
}

#[test]
fn disabled_recognizers_stay_idle() {
    let mut tap = TapGesture::new().enabled(false);
    let mut pan = PanGesture::new().enabled(false);

    tap.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0), BOUNDS);
    pan.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0), BOUNDS);

    assert_eq!(tap.state(), RecognizerState::Idle);
    assert_eq!(pan.state(), RecognizerState::Idle);
}

#[test]
fn race_routes_sequence_to_committed_pan_and_cancels_tap() {
    let taps = Rc::new(Cell::new(0));
    let ended = Rc::new(Cell::new(None));

    let tap_count = Rc::clone(&taps);
    let end_slot = Rc::clone(&ended);
    let mut race = GestureRace::new()
        .with(TapGesture::new().on_end(move || tap_count.set(tap_count.get() + 1)))
        .with(PanGesture::new().on_end(move |translation| end_slot.set(Some(translation.x))));

    race.on_pointer_event(&event(PointerEventKind::Down, 4.0, 16.0), BOUNDS);
    race.on_pointer_event(&event(PointerEventKind::Move, 24.0, 16.0), BOUNDS);
    race.on_pointer_event(&event(PointerEventKind::Up, 24.0, 16.0), BOUNDS);

    assert_eq!(taps.get(), 0, "tap lost the race and must not fire");
    assert_eq!(ended.get(), Some(20.0));
}

#[test]
fn race_commits_tap_on_quick_release() {
    let taps = Rc::new(Cell::new(0));
    let ended = Rc::new(Cell::new(false));

    let tap_count = Rc::clone(&taps);
    let end_flag = Rc::clone(&ended);
    let mut race = GestureRace::new()
        .with(TapGesture::new().on_end(move || tap_count.set(tap_count.get() + 1)))
        .with(PanGesture::new().on_end(move |_| end_flag.set(true)));

    race.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0), BOUNDS);
    race.on_pointer_event(&event(PointerEventKind::Up, 10.0, 10.0), BOUNDS);

    assert_eq!(taps.get(), 1);
    assert!(!ended.get());
}

#[test]
fn race_rearms_after_each_sequence() {
    let taps = Rc::new(Cell::new(0));
    let tap_count = Rc::clone(&taps);
    let mut race = GestureRace::new()
        .with(TapGesture::new().on_end(move || tap_count.set(tap_count.get() + 1)))
        .with(PanGesture::new());

    // A drag sequence, then a tap sequence: the second must still commit.
    race.on_pointer_event(&event(PointerEventKind::Down, 4.0, 16.0), BOUNDS);
    race.on_pointer_event(&event(PointerEventKind::Move, 30.0, 16.0), BOUNDS);
    race.on_pointer_event(&event(PointerEventKind::Up, 30.0, 16.0), BOUNDS);
    assert_eq!(taps.get(), 0);

    race.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0), BOUNDS);
    race.on_pointer_event(&event(PointerEventKind::Up, 10.0, 10.0), BOUNDS);
    assert_eq!(taps.get(), 1);
}

#[test]
fn race_set_enabled_reaches_every_recognizer() {
    let taps = Rc::new(Cell::new(0));
    let tap_count = Rc::clone(&taps);
    let mut race = GestureRace::new()
        .with(TapGesture::new().on_end(move || tap_count.set(tap_count.get() + 1)))
        .with(PanGesture::new());

    race.set_enabled(false);
    race.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0), BOUNDS);
    race.on_pointer_event(&event(PointerEventKind::Up, 10.0, 10.0), BOUNDS);
    assert_eq!(taps.get(), 0);

    race.set_enabled(true);
    race.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0), BOUNDS);
    race.on_pointer_event(&event(PointerEventKind::Up, 10.0, 10.0), BOUNDS);
    assert_eq!(taps.get(), 1);
}
