//! Pan (drag) gesture recognizer.

use std::rc::Rc;

use log::trace;
use tumbler_ui_graphics::{Point, Rect, Size};

use super::{GestureRecognizer, RecognizerState};
use crate::gesture_constants::DRAG_THRESHOLD;
use crate::input::types::{PointerEvent, PointerEventKind};

/// Recognizes a drag and reports cumulative translation from the press
/// position (window space). Commits once the slop threshold is passed;
/// from then on every move is consumed and delivered through `on_update`,
/// and release delivers the final translation through `on_end`. A cancel
/// (explicit, from the event stream, or from leaving the bounds when
/// `should_cancel_when_outside` is set) discards the pending gesture
/// without an `on_end`.
pub struct PanGesture {
    on_start: Option<Rc<dyn Fn()>>,
    on_update: Option<Rc<dyn Fn(Point)>>,
    on_end: Option<Rc<dyn Fn(Point)>>,
    enabled: bool,
    should_cancel_when_outside: bool,
    state: RecognizerState,
    pressed_at: Option<Point>,
}

impl PanGesture {
    pub fn new() -> Self {
        Self {
            on_start: None,
            on_update: None,
            on_end: None,
            enabled: true,
            should_cancel_when_outside: false,
            state: RecognizerState::Idle,
            pressed_at: None,
        }
    }

    /// Callback fired once, when the pan claims the sequence.
    pub fn on_start(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_start = Some(Rc::new(handler));
        self
    }

    /// Callback fired with the cumulative translation on every move after
    /// the pan commits (including the committing move itself).
    pub fn on_update(mut self, handler: impl Fn(Point) + 'static) -> Self {
        self.on_update = Some(Rc::new(handler));
        self
    }

    /// Callback fired with the final cumulative translation on release.
    pub fn on_end(mut self, handler: impl Fn(Point) + 'static) -> Self {
        self.on_end = Some(Rc::new(handler));
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Cancel the gesture when the pointer leaves the component bounds.
    pub fn should_cancel_when_outside(mut self, cancel: bool) -> Self {
        self.should_cancel_when_outside = cancel;
        self
    }

    fn translation(&self, event: &PointerEvent) -> Point {
        let origin = self.pressed_at.unwrap_or(Point::ZERO);
        Point::new(
            event.global_position.x - origin.x,
            event.global_position.y - origin.y,
        )
    }
}

impl Default for PanGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRecognizer for PanGesture {
    fn on_pointer_event(&mut self, event: &PointerEvent, bounds: Size) -> RecognizerState {
        if !self.enabled {
            return self.state;
        }
        match event.kind {
            PointerEventKind::Down => {
                if self.state == RecognizerState::Idle && !event.is_consumed() {
                    self.state = RecognizerState::Tracking;
                    self.pressed_at = Some(event.global_position);
                }
            }
            PointerEventKind::Move => {
                if self.state != RecognizerState::Tracking
                    && self.state != RecognizerState::Committed
                {
                    return self.state;
                }
                if self.should_cancel_when_outside
                    && !Rect::from_size(bounds).contains(event.position.x, event.position.y)
                {
                    trace!("pan canceled: pointer left bounds");
                    self.state = RecognizerState::Canceled;
                    return self.state;
                }
                let translation = self.translation(event);
                if self.state == RecognizerState::Tracking {
                    let distance = (translation.x * translation.x
                        + translation.y * translation.y)
                        .sqrt();
                    if distance > DRAG_THRESHOLD && !event.is_consumed() {
                        trace!("pan committed after {distance:.1}px");
                        self.state = RecognizerState::Committed;
                        if let Some(handler) = &self.on_start {
                            handler();
                        }
                    }
                }
                if self.state == RecognizerState::Committed {
                    event.consume();
                    if let Some(handler) = &self.on_update {
                        handler(translation);
                    }
                }
            }
            PointerEventKind::Up => {
                if self.state == RecognizerState::Committed {
                    event.consume();
                    let translation = self.translation(event);
                    if let Some(handler) = &self.on_end {
                        handler(translation);
                    }
                } else if self.state == RecognizerState::Tracking {
                    // Never passed the slop; the sequence was not a pan.
                    self.state = RecognizerState::Canceled;
                }
            }
            PointerEventKind::Cancel => {
                if self.state == RecognizerState::Tracking
                    || self.state == RecognizerState::Committed
                {
                    self.state = RecognizerState::Canceled;
                }
            }
        }
        self.state
    }

    fn state(&self) -> RecognizerState {
        self.state
    }

    fn cancel(&mut self) {
        if self.state == RecognizerState::Tracking || self.state == RecognizerState::Committed {
            self.state = RecognizerState::Canceled;
        }
    }

    fn reset(&mut self) {
        self.state = RecognizerState::Idle;
        self.pressed_at = None;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
