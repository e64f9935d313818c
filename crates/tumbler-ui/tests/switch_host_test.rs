//! End-to-end switch behavior through a minimal host loop: pointer events
//! in, frames pumped, proposed values accepted back into the widget the way
//! a real host would.

use std::cell::Cell;
use std::rc::Rc;

use tumbler_core::TestRuntime;
use tumbler_foundation::{PointerEvent, PointerEventKind};
use tumbler_ui::{Switch, SwitchColors, SwitchProps};
use tumbler_ui_graphics::Point;

const FRAME_NANOS: u64 = 16_666_667;

struct Host {
    runtime: TestRuntime,
    switch: Switch,
    value: Cell<bool>,
    pending: Rc<Cell<Option<bool>>>,
    frame_time: u64,
}

impl Host {
    fn new(initial: bool) -> Self {
        let runtime = TestRuntime::new();
        let value = Cell::new(initial);
        let pending = Rc::new(Cell::new(None));
        let proposals = Rc::clone(&pending);
        let switch = Switch::new(
            SwitchProps::new(initial, move |proposed| proposals.set(Some(proposed))),
            runtime.handle(),
        );
        Self {
            runtime,
            switch,
            value,
            pending,
            frame_time: 0,
        }
    }

    fn pointer(&mut self, kind: PointerEventKind, x: f32, y: f32) {
        let event = PointerEvent::new(kind, Point::new(x, y), Point::new(x, y));
        self.switch.on_pointer_event(&event);
    }

    /// One host update pass: accept any proposed value, then pump frames
    /// until the UI settles.
    fn update(&mut self) {
        if let Some(proposed) = self.pending.take() {
            self.value.set(proposed);
            self.switch.set_value(proposed);
        }
        let handle = self.runtime.handle();
        for _ in 0..64 {
            if !handle.has_frame_callbacks() {
                break;
            }
            self.frame_time += FRAME_NANOS;
            handle.drain_frame_callbacks(self.frame_time);
        }
    }
}

#[test]
fn tap_round_trip_settles_on_the_new_rail() {
    let mut host = Host::new(false);

    host.pointer(PointerEventKind::Down, 10.0, 16.0);
    host.pointer(PointerEventKind::Up, 10.0, 16.0);
    host.update();

    assert!(host.value.get());
    assert_eq!(host.switch.value(), true);
    assert_eq!(host.switch.track_offset(), 24.0);
    assert_eq!(
        host.switch.container_color(),
        SwitchColors::default().active
    );

    // The accepted value must not re-trigger any animation on the next
    // update pass.
    host.update();
    assert!(!host.runtime.handle().has_frame_callbacks());
}

#[test]
fn drag_round_trip_commits_by_midpoint_rule() {
    let mut host = Host::new(false);

    host.pointer(PointerEventKind::Down, 4.0, 16.0);
    for x in [9.0, 14.0, 20.0, 24.0] {
        host.pointer(PointerEventKind::Move, x, 16.0);
        assert!(host.switch.track_offset() >= 0.0);
        assert!(host.switch.track_offset() <= host.switch.track_width());
    }
    host.pointer(PointerEventKind::Up, 24.0, 16.0);
    host.update();

    // Final translation 20 > 12: committed on.
    assert!(host.value.get());
    assert_eq!(host.switch.track_offset(), 24.0);
}

#[test]
fn external_flip_reconciles_without_gestures() {
    let mut host = Host::new(false);

    host.value.set(true);
    host.switch.set_value(true);
    host.update();
    assert_eq!(host.switch.track_offset(), 24.0);

    host.value.set(false);
    host.switch.set_value(false);
    host.update();
    assert_eq!(host.switch.track_offset(), 0.0);
}

#[test]
fn reversed_drag_measures_from_the_original_rail() {
    let mut host = Host::new(false);

    // Out past the midpoint, then back to the start: translation ends at
    // zero because the anchor is the pre-gesture rail, not the live offset.
    host.pointer(PointerEventKind::Down, 4.0, 16.0);
    host.pointer(PointerEventKind::Move, 24.0, 16.0);
    assert_eq!(host.switch.track_offset(), 20.0);
    host.pointer(PointerEventKind::Move, 4.0, 16.0);
    assert_eq!(host.switch.track_offset(), 0.0);
    host.pointer(PointerEventKind::Up, 4.0, 16.0);
    host.update();

    assert!(!host.value.get());
    assert_eq!(host.switch.track_offset(), 0.0);
}
