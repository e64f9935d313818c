pub mod gestures;
pub mod types;

pub use gestures::{GestureRace, GestureRecognizer, PanGesture, RecognizerState, TapGesture};
pub use types::{PointerEvent, PointerEventKind, PointerId};
