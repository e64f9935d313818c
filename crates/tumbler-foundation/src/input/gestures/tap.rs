//! Tap gesture recognizer.

use std::rc::Rc;

use log::trace;
use tumbler_ui_graphics::{Point, Size};
use web_time::Instant;

use super::{GestureRecognizer, RecognizerState};
use crate::gesture_constants::{DRAG_THRESHOLD, MAX_TAP_MILLIS};
use crate::input::types::{PointerEvent, PointerEventKind};

/// Recognizes a press-and-release that stays inside the touch slop and
/// under [`MAX_TAP_MILLIS`]. Commits on release, so a racing pan always
/// gets the chance to claim the sequence first.
pub struct TapGesture {
    on_end: Option<Rc<dyn Fn()>>,
    enabled: bool,
    state: RecognizerState,
    pressed: Option<(Point, Instant)>,
}

impl TapGesture {
    pub fn new() -> Self {
        Self {
            on_end: None,
            enabled: true,
            state: RecognizerState::Idle,
            pressed: None,
        }
    }

    /// Callback fired when the tap commits.
    pub fn on_end(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_end = Some(Rc::new(handler));
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for TapGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRecognizer for TapGesture {
    fn on_pointer_event(&mut self, event: &PointerEvent, _bounds: Size) -> RecognizerState {
        if !self.enabled {
            return self.state;
        }
        match event.kind {
            PointerEventKind::Down => {
                if self.state == RecognizerState::Idle && !event.is_consumed() {
                    self.state = RecognizerState::Tracking;
                    self.pressed = Some((event.global_position, event.timestamp));
                }
            }
            PointerEventKind::Move => {
                if self.state == RecognizerState::Tracking {
                    if let Some((origin, _)) = self.pressed {
                        let dx = event.global_position.x - origin.x;
                        let dy = event.global_position.y - origin.y;
                        if (dx * dx + dy * dy).sqrt() > DRAG_THRESHOLD {
                            trace!("tap canceled: pointer left slop radius");
                            self.state = RecognizerState::Canceled;
                        }
                    }
                }
            }
            PointerEventKind::Up => {
                if self.state == RecognizerState::Tracking {
                    let held_millis = self
                        .pressed
                        .map(|(_, pressed_at)| {
                            event
                                .timestamp
                                .saturating_duration_since(pressed_at)
                                .as_millis() as u64
                        })
                        .unwrap_or(u64::MAX);
                    if held_millis <= MAX_TAP_MILLIS && !event.is_consumed() {
                        self.state = RecognizerState::Committed;
                        if let Some(handler) = &self.on_end {
                            handler();
                        }
                    } else {
                        trace!("tap canceled: held {held_millis}ms");
                        self.state = RecognizerState::Canceled;
                    }
                }
            }
            PointerEventKind::Cancel => {
                if self.state == RecognizerState::Tracking {
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
        if self.state == RecognizerState::Tracking {
            self.state = RecognizerState::Canceled;
        }
    }

    fn reset(&mut self) {
        self.state = RecognizerState::Idle;
        self.pressed = None;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
