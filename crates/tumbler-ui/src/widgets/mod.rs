//! UI widget components

pub mod switch;

pub use switch::*;
