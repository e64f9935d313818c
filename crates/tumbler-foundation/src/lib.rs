//! Gesture recognition foundation for Tumbler
//!
//! Pointer event model, shared gesture constants, and explicit recognizer
//! state machines (tap, pan) composed by a first-to-commit race.

pub mod gesture_constants;
pub mod input;

pub use gesture_constants::{DRAG_THRESHOLD, MAX_TAP_MILLIS};
pub use input::*;

pub mod prelude {
    pub use crate::input::gestures::{
        GestureRace, GestureRecognizer, PanGesture, RecognizerState, TapGesture,
    };
    pub use crate::input::types::{PointerEvent, PointerEventKind, PointerId};
}
