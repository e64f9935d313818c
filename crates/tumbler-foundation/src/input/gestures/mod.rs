//! Gesture recognizer state machines and their race composition.

mod pan;
mod race;
mod tap;

pub use pan::PanGesture;
pub use race::GestureRace;
pub use tap::TapGesture;

use tumbler_ui_graphics::Size;

use crate::input::types::PointerEvent;

/// Lifecycle of a gesture recognizer.
///
/// Idle → Tracking → Committed | Canceled. A committed recognizer has
/// claimed the pointer sequence; a canceled one ignores the rest of it.
/// Both terminal states hold until [`GestureRecognizer::reset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecognizerState {
    Idle,
    Tracking,
    Committed,
    Canceled,
}

pub trait GestureRecognizer {
    /// Feed one pointer event and return the resulting state. `bounds` is
    /// the size of the component the recognizer is attached to, in the same
    /// space as `event.position`.
    fn on_pointer_event(&mut self, event: &PointerEvent, bounds: Size) -> RecognizerState;

    fn state(&self) -> RecognizerState;

    /// Explicit loser transition, used by the race arbiter.
    fn cancel(&mut self);

    /// Return to [`RecognizerState::Idle`] for the next pointer sequence.
    fn reset(&mut self);

    fn set_enabled(&mut self, enabled: bool);

    fn is_enabled(&self) -> bool;
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
