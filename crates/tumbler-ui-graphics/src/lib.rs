//! Pure math/data for drawing & units in Tumbler
//!
//! Geometry primitives, color definitions and interpolation, brushes, and
//! the primitive-recording draw scope widgets render into.

mod brush;
mod color;
mod draw;
mod geometry;

pub use brush::*;
pub use color::*;
pub use draw::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::{interpolate_color, Color};
    pub use crate::draw::{DrawPrimitive, DrawScope, DrawScopeDefault};
    pub use crate::geometry::{CornerRadii, EdgeInsets, Point, Rect, RoundedCornerShape, Size};
}
