//! Shared gesture constants for consistent touch/pointer handling.
//!
//! The slop threshold is intentionally shared between the tap and pan
//! recognizers to avoid "dead zones" where a movement is already dragging
//! but could still fire a tap on release.
//!
//! Values are in logical pixels; very high-density touch screens may want
//! to scale them by the device's DPI factor.

/// Drag threshold in logical pixels.
///
/// If the pointer moves more than this distance from the initial press
/// position:
/// - Pan gestures commit (drag tracking starts)
/// - Tap gestures are cancelled (release won't fire a tap)
///
/// 8.0 is large enough to ignore finger jitter on touch screens, small
/// enough to feel responsive, and matches common platform conventions
/// (Android uses ~8dp for ViewConfiguration.TOUCH_SLOP).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Press-to-release ceiling for a tap, in milliseconds.
///
/// A pointer held down longer than this is a press-and-hold, not a tap,
/// even if it never left the slop radius.
pub const MAX_TAP_MILLIS: u64 = 500;
