//! Animation system for Tumbler
//!
//! Time-based tween animations with easing curves, driven by the runtime's
//! frame clock. Commands are fire-and-forget: callers say "animate to this
//! target over this duration" (or "set immediately") and read the animated
//! value back through its state.

#![allow(non_snake_case)]

pub mod animation;

pub use animation::*;

pub mod prelude {
    pub use crate::animation::{Animatable, AnimationSpec, Easing, Lerp};
}
