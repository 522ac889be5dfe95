//! Hover policy: pad tilt from the pointer contact point, and button depth
//! from hover state.

use crate::constants::{PRESS_DEPTH, TILT_GAIN, TILT_MAX};
use glam::Vec3;

/// Tilt targets in radians for the directional pad.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltTargets {
    pub x: f32,
    pub y: f32,
}

/// Tilt the pad away from the contact point like a rocker on its pivot.
///
/// `rest` and `contact` must be in the same space. Magnitude grows with the
/// lateral offset and is capped at [`TILT_MAX`].
pub fn pad_tilt(rest: Vec3, contact: Vec3) -> TiltTargets {
    let delta_x = rest.x - contact.x;
    let delta_y = rest.y - contact.y;
    TiltTargets {
        y: -capped(delta_x),
        x: capped(delta_y),
    }
}

#[inline]
fn capped(delta: f32) -> f32 {
    if delta == 0.0 || !delta.is_finite() {
        return 0.0;
    }
    delta.signum() * (delta.abs() * TILT_GAIN).min(TILT_MAX)
}

/// Change to a button's depth target when its hover state goes from
/// `was_pressed` to `pressed`. Repeating the current state changes nothing.
#[inline]
pub fn depth_delta(was_pressed: bool, pressed: bool) -> f32 {
    match (was_pressed, pressed) {
        (false, true) => -PRESS_DEPTH,
        (true, false) => PRESS_DEPTH,
        _ => 0.0,
    }
}
