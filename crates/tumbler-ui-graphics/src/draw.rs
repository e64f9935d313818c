//! Primitive-recording draw surface.
//!
//! Widgets describe themselves as a flat list of [`DrawPrimitive`]s; a
//! rendering backend replays them. Positions are in the widget's local
//! coordinate space.

use crate::brush::Brush;
use crate::geometry::{CornerRadii, Rect, Size};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect {
        rect: Rect,
        brush: Brush,
    },
    RoundRect {
        rect: Rect,
        brush: Brush,
        radii: CornerRadii,
    },
}

pub trait DrawScope {
    fn size(&self) -> Size;
    /// Fill the whole scope.
    fn draw_rect(&mut self, brush: Brush);
    fn draw_rect_at(&mut self, rect: Rect, brush: Brush);
    /// Fill the whole scope with rounded corners.
    fn draw_round_rect(&mut self, brush: Brush, radii: CornerRadii);
    fn draw_round_rect_at(&mut self, rect: Rect, brush: Brush, radii: CornerRadii);
}

/// Default recorder backing unit tests and software backends.
#[derive(Default)]
pub struct DrawScopeDefault {
    size: Size,
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_rect(&mut self, brush: Brush) {
        self.primitives.push(DrawPrimitive::Rect {
            rect: Rect::from_size(self.size),
            brush,
        });
    }

    fn draw_rect_at(&mut self, rect: Rect, brush: Brush) {
        self.primitives.push(DrawPrimitive::Rect { rect, brush });
    }

    fn draw_round_rect(&mut self, brush: Brush, radii: CornerRadii) {
        self.primitives.push(DrawPrimitive::RoundRect {
            rect: Rect::from_size(self.size),
            brush,
            radii,
        });
    }

    fn draw_round_rect_at(&mut self, rect: Rect, brush: Brush, radii: CornerRadii) {
        self.primitives
            .push(DrawPrimitive::RoundRect { rect, brush, radii });
    }
}
