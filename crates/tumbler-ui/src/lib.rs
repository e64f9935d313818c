//! UI widgets for Tumbler
//!
//! The production surface is the animated [`Switch`]: a controlled
//! two-state widget whose knob position is one animatable scalar steered by
//! a tap/pan gesture race and reconciled against the externally owned
//! value.

pub mod style;
pub mod widgets;

pub use style::*;
pub use widgets::*;

pub mod prelude {
    pub use crate::style::{ContainerStyle, KnobStyle, SwitchColors, SwitchStyle};
    pub use crate::widgets::{Switch, SwitchProps};
}
