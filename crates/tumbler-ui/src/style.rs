//! Typed style configuration for widgets.

use log::warn;
use tumbler_ui_graphics::{Color, EdgeInsets};

/// Interpolation endpoints for the switch track, one pair per enabled
/// state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitchColors {
    pub active: Color,
    pub inactive: Color,
    pub disabled_active: Color,
    pub disabled_inactive: Color,
}

impl Default for SwitchColors {
    fn default() -> Self {
        Self {
            active: Color::DARK_BLUE,
            inactive: Color::DARK_GRAY,
            disabled_active: Color::BLUE,
            disabled_inactive: Color::GRAY,
        }
    }
}

/// Geometry and appearance of the switch track container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerStyle {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub padding: EdgeInsets,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self {
            width: 52.0,
            height: 32.0,
            corner_radius: 16.0,
            padding: EdgeInsets::horizontal(4.0),
        }
    }
}

/// Geometry and appearance of the knob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobStyle {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub color: Color,
}

impl Default for KnobStyle {
    fn default() -> Self {
        Self {
            width: 24.0,
            height: 24.0,
            corner_radius: 12.0,
            color: Color::RED,
        }
    }
}

/// Full switch styling. `track_width` overrides the travel distance derived
/// from the container and knob geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwitchStyle {
    pub container: ContainerStyle,
    pub knob: KnobStyle,
    pub track_width: Option<f32>,
}

impl SwitchStyle {
    /// Travel distance of the knob along the track.
    ///
    /// Derived as `container.width - knob.width - horizontal padding` unless
    /// overridden. Precondition: the result must be non-negative; a knob
    /// wider than its container is not validated, only reported.
    pub fn resolve_track_width(&self) -> f32 {
        let track_width = self.track_width.unwrap_or_else(|| {
            self.container.width - self.knob.width - self.container.padding.horizontal_sum()
        });
        if track_width < 0.0 {
            warn!(
                "switch track width is negative ({track_width:.1}); check container/knob geometry"
            );
        }
        track_width
    }
}

#[cfg(test)]
#[path = "tests/style_tests.rs"]
mod tests;
