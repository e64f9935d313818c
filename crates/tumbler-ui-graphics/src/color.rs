//! Color representation and interpolation utilities

/// RGBA color with non-premultiplied `f32` channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    /// Component-wise linear blend toward `target`. `fraction` is clamped to
    /// `[0, 1]`.
    pub fn lerp(&self, target: &Color, fraction: f32) -> Color {
        let t = fraction.clamp(0.0, 1.0);
        Color(
            self.0 + (target.0 - self.0) * t,
            self.1 + (target.1 - self.1) * t,
            self.2 + (target.2 - self.2) * t,
            self.3 + (target.3 - self.3) * t,
        )
    }

    // Common color constants
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color(0.0, 0.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);

    // CSS named values used as widget defaults.
    pub const DARK_BLUE: Color = Color::from_rgb_u8(0, 0, 139);
    pub const DARK_GRAY: Color = Color::from_rgb_u8(169, 169, 169);
    pub const GRAY: Color = Color::from_rgb_u8(128, 128, 128);
}

/// Maps `value` across `domain` into a linear blend of `colors`.
///
/// Values at or beyond a domain endpoint return that endpoint's color
/// exactly; a degenerate domain resolves to the first color.
pub fn interpolate_color(value: f32, domain: [f32; 2], colors: [Color; 2]) -> Color {
    let span = domain[1] - domain[0];
    if span.abs() < f32::EPSILON {
        return colors[0];
    }
    let fraction = ((value - domain[0]) / span).clamp(0.0, 1.0);
    if fraction <= 0.0 {
        return colors[0];
    }
    if fraction >= 1.0 {
        return colors[1];
    }
    colors[0].lerp(&colors[1], fraction)
}

#[cfg(test)]
#[path = "tests/color_tests.rs"]
mod tests;
