//! First-to-commit race composition of gesture recognizers.

use log::trace;
use smallvec::SmallVec;
use tumbler_ui_graphics::Size;

use super::{GestureRecognizer, RecognizerState};
use crate::input::types::{PointerEvent, PointerEventKind};

/// Composes recognizers so at most one of them owns a pointer sequence.
///
/// Events are fed to the recognizers in insertion order until one reaches
/// [`RecognizerState::Committed`]; every other recognizer then receives an
/// explicit cancel transition and the rest of the sequence is routed to the
/// winner only. The race re-arms itself after each Up or Cancel.
pub struct GestureRace {
    recognizers: SmallVec<[Box<dyn GestureRecognizer>; 2]>,
    winner: Option<usize>,
}

impl GestureRace {
    pub fn new() -> Self {
        Self {
            recognizers: SmallVec::new(),
            winner: None,
        }
    }

    pub fn with(mut self, recognizer: impl GestureRecognizer + 'static) -> Self {
        self.recognizers.push(Box::new(recognizer));
        self
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent, bounds: Size) {
        match self.winner {
            Some(index) => {
                self.recognizers[index].on_pointer_event(event, bounds);
            }
            None => {
                for index in 0..self.recognizers.len() {
                    let recognizer = &mut self.recognizers[index];
                    if !recognizer.is_enabled()
                        || recognizer.state() == RecognizerState::Canceled
                    {
                        continue;
                    }
                    if recognizer.on_pointer_event(event, bounds) == RecognizerState::Committed {
                        trace!("gesture race: recognizer {index} committed");
                        self.winner = Some(index);
                        self.cancel_losers(index);
                        break;
                    }
                }
            }
        }

        // A pointer sequence ends on Up or Cancel; re-arm for the next one.
        if matches!(event.kind, PointerEventKind::Up | PointerEventKind::Cancel) {
            self.reset();
        }
    }

    /// Forward an enabled/disabled flip to every recognizer.
    pub fn set_enabled(&mut self, enabled: bool) {
        for recognizer in &mut self.recognizers {
            recognizer.set_enabled(enabled);
        }
    }

    pub fn reset(&mut self) {
        self.winner = None;
        for recognizer in &mut self.recognizers {
            recognizer.reset();
        }
    }

    fn cancel_losers(&mut self, winner: usize) {
        for (index, recognizer) in self.recognizers.iter_mut().enumerate() {
            if index != winner {
                recognizer.cancel();
            }
        }
    }
}

impl Default for GestureRace {
    fn default() -> Self {
        Self::new()
    }
}
