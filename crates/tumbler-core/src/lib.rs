//! Core runtime for Tumbler
//!
//! A single-threaded, host-driven runtime: widgets and animations register
//! one-shot frame callbacks, the host pumps them once per frame, and
//! observable state cells tell the host when a new frame is worth drawing.

mod runtime;
mod state;

pub use runtime::{
    DefaultScheduler, FrameCallbackId, FrameCallbackRegistration, FrameClock, Runtime,
    RuntimeHandle, RuntimeScheduler, TestRuntime, TestScheduler,
};
pub use state::{MutableState, State};

pub mod prelude {
    pub use crate::runtime::{FrameClock, Runtime, RuntimeHandle, TestRuntime};
    pub use crate::state::{MutableState, State};
}
