use std::cell::Cell;
use std::rc::Rc;

use tumbler_ui_graphics::Point;
use web_time::Instant;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking for gesture disambiguation.
///
/// `position` is in the receiving component's local space; `global_position`
/// is in window space and is what translation deltas are measured against,
/// so a gesture survives its target moving under the pointer. Handlers that
/// claim a gesture consume events to keep other handlers from acting on
/// them; consumption is shared across copies via `Rc<Cell>`.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub global_position: Point,
    pub timestamp: Instant,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, global_position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            global_position,
            timestamp: Instant::now(),
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Override the event time; tests use this to exercise tap timing
    /// deterministically.
    pub fn with_timestamp(mut self, timestamp: Instant) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Mark this event as consumed, preventing other handlers from
    /// processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    /// Check if this event has been consumed by another handler.
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
