//! Animated two-state switch widget.
//!
//! The knob position is a single animatable scalar, the track offset, in
//! `[0, track_width]`. At rest it sits on a rail: `0` for off,
//! `track_width` for on. Gestures and external value changes both steer
//! the offset; the container color and the knob transform are projections
//! of it.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use tumbler_animation::{Animatable, AnimationSpec, Easing};
use tumbler_core::RuntimeHandle;
use tumbler_foundation::{GestureRace, PanGesture, PointerEvent, TapGesture};
use tumbler_ui_graphics::{
    interpolate_color, Brush, Color, DrawScope, Point, Rect, RoundedCornerShape, Size,
};

use crate::style::{SwitchColors, SwitchStyle};

/// Snap-to-rail duration after a drag release, in milliseconds.
const SNAP_MILLIS: u64 = 100;

/// Construction-time configuration of a [`Switch`].
pub struct SwitchProps {
    /// Current switch state, owned by the host.
    pub value: bool,
    /// Invoked with the proposed value on a tap commit or a drag release.
    /// The host feeds the accepted value back through
    /// [`Switch::set_value`] on its next update pass.
    pub on_value_change: Rc<dyn Fn(bool)>,
    /// Suppresses gesture response while `true`.
    pub disabled: bool,
    pub colors: SwitchColors,
    pub style: SwitchStyle,
    /// Cancels an in-flight drag when the pointer leaves the bounds.
    pub should_cancel_when_outside: bool,
}

impl SwitchProps {
    pub fn new(value: bool, on_value_change: impl Fn(bool) + 'static) -> Self {
        Self {
            value,
            on_value_change: Rc::new(on_value_change),
            disabled: false,
            colors: SwitchColors::default(),
            style: SwitchStyle::default(),
            should_cancel_when_outside: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn colors(mut self, colors: SwitchColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn style(mut self, style: SwitchStyle) -> Self {
        self.style = style;
        self
    }

    pub fn should_cancel_when_outside(mut self, cancel: bool) -> Self {
        self.should_cancel_when_outside = cancel;
        self
    }
}

struct SwitchState {
    value: bool,
    disabled: bool,
    colors: SwitchColors,
    style: SwitchStyle,
    track_width: f32,
    offset: Animatable<f32>,
    on_value_change: Rc<dyn Fn(bool)>,
}

impl SwitchState {
    fn rail(&self, value: bool) -> f32 {
        if value {
            self.track_width
        } else {
            0.0
        }
    }
}

/// A controlled, animated two-state switch.
///
/// The host owns the boolean; the switch owns the visual position. Pointer
/// events go through [`Switch::on_pointer_event`], external value changes
/// through [`Switch::set_value`], and the rendered output comes from
/// [`Switch::draw`] (or the [`Switch::track_offset`] /
/// [`Switch::container_color`] projections directly).
pub struct Switch {
    state: Rc<RefCell<SwitchState>>,
    gesture: GestureRace,
}

impl Switch {
    pub fn new(props: SwitchProps, runtime: RuntimeHandle) -> Self {
        // Geometry resolves before any gesture or animation object exists
        // and stays fixed for the widget's lifetime.
        let track_width = props.style.resolve_track_width();
        let initial = if props.value { track_width } else { 0.0 };
        let state = Rc::new(RefCell::new(SwitchState {
            value: props.value,
            disabled: props.disabled,
            colors: props.colors,
            style: props.style,
            track_width,
            offset: Animatable::new(initial, runtime),
            on_value_change: props.on_value_change,
        }));

        let tap = {
            let state = Rc::clone(&state);
            TapGesture::new()
                .enabled(!props.disabled)
                .on_end(move || Self::commit_tap(&state))
        };
        let pan = {
            let update_state = Rc::clone(&state);
            let end_state = Rc::clone(&state);
            PanGesture::new()
                .enabled(!props.disabled)
                .should_cancel_when_outside(props.should_cancel_when_outside)
                .on_update(move |translation| Self::track_drag(&update_state, translation))
                .on_end(move |translation| Self::commit_drag(&end_state, translation))
        };

        Self {
            state,
            gesture: GestureRace::new().with(tap).with(pan),
        }
    }

    /// Feed a pointer event into the switch's tap/pan race.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        let bounds = self.bounds();
        self.gesture.on_pointer_event(event, bounds);
    }

    /// Lifecycle hook for external changes of the controlled value.
    ///
    /// Re-renders with an unchanged value are no-ops. A changed value
    /// animates the offset back to its rail unless the offset is already
    /// logically there — compared by truthiness (any nonzero offset counts
    /// as on), not numeric equality.
    pub fn set_value(&mut self, value: bool) {
        let mut state = self.state.borrow_mut();
        if state.value == value {
            return;
        }
        state.value = value;
        let rail = state.rail(value);
        let offset_on = state.offset.state().get() != 0.0;
        if (rail != 0.0) != offset_on {
            debug!("switch reconciling to rail {rail:.0}");
            state.offset.animateTo(rail, AnimationSpec::default());
        }
    }

    /// Enable or disable gesture response. External value changes still
    /// reconcile while disabled.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
        self.gesture.set_enabled(!disabled);
    }

    pub fn value(&self) -> bool {
        self.state.borrow().value
    }

    pub fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    pub fn track_width(&self) -> f32 {
        self.state.borrow().track_width
    }

    /// Current knob displacement from the off rail; the transform scalar
    /// applied to the knob when drawing.
    pub fn track_offset(&self) -> f32 {
        self.state.borrow().offset.state().get()
    }

    /// Container background: a linear blend of the color pair for the
    /// current enabled/disabled state, as a function of the track offset.
    pub fn container_color(&self) -> Color {
        let state = self.state.borrow();
        let (inactive, active) = if state.disabled {
            (
                state.colors.disabled_inactive,
                state.colors.disabled_active,
            )
        } else {
            (state.colors.inactive, state.colors.active)
        };
        interpolate_color(
            state.offset.state().get(),
            [0.0, state.track_width],
            [inactive, active],
        )
    }

    pub fn bounds(&self) -> Size {
        let container = self.state.borrow().style.container;
        Size::new(container.width, container.height)
    }

    /// Record the track and the knob into `scope`, in local coordinates.
    pub fn draw(&self, scope: &mut dyn DrawScope) {
        let track_color = self.container_color();
        let state = self.state.borrow();
        let container = state.style.container;
        let knob = state.style.knob;
        let offset = state.offset.state().get();

        let container_rect = Rect::from_size(Size::new(container.width, container.height));
        let container_radii = RoundedCornerShape::uniform(container.corner_radius)
            .resolve(container.width, container.height);
        scope.draw_round_rect_at(container_rect, Brush::solid(track_color), container_radii);

        let knob_rect = Rect {
            x: container.padding.left + offset,
            y: (container.height - knob.height) / 2.0,
            width: knob.width,
            height: knob.height,
        };
        let knob_radii =
            RoundedCornerShape::uniform(knob.corner_radius).resolve(knob.width, knob.height);
        scope.draw_round_rect_at(knob_rect, Brush::solid(knob.color), knob_radii);
    }

    fn commit_tap(state: &Rc<RefCell<SwitchState>>) {
        let (callback, proposed) = {
            let mut state = state.borrow_mut();
            let target = state.rail(!state.value);
            debug!("switch tap: animating to {target:.0}");
            state.offset.animateTo(target, AnimationSpec::default());
            (Rc::clone(&state.on_value_change), !state.value)
        };
        // Borrow released first; the callback may reach back into the host.
        callback(proposed);
    }

    fn track_drag(state: &Rc<RefCell<SwitchState>>, translation: Point) {
        let mut state = state.borrow_mut();
        // Anchor on the pre-gesture value's rail, not the live offset: a
        // drag that reverses back to its start measures zero translation.
        let anchor = state.rail(state.value);
        let track_width = state.track_width;
        let next = (anchor + translation.x).clamp(0.0, track_width);
        state.offset.snapTo(next);
    }

    fn commit_drag(state: &Rc<RefCell<SwitchState>>, translation: Point) {
        let (callback, proposed) = {
            let mut state = state.borrow_mut();
            let released_at = state.rail(state.value) + translation.x;
            let snap_point = if released_at > state.track_width / 2.0 {
                state.track_width
            } else {
                0.0
            };
            debug!("switch drag release: {released_at:.1} snaps to {snap_point:.0}");
            state.offset.animateTo(
                snap_point,
                AnimationSpec::tween(SNAP_MILLIS, Easing::FastOutSlowInEasing),
            );
            (Rc::clone(&state.on_value_change), snap_point != 0.0)
        };
        callback(proposed);
    }
}

#[cfg(test)]
#[path = "tests/switch_tests.rs"]
mod tests;
