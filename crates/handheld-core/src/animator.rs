//! Bounded-rate convergence of an animated scalar toward its target.
//!
//! Every animated attribute (button depth, pad tilt) moves linearly toward
//! its target at a fixed maximum speed and snaps once it is close enough.

use crate::constants::SNAP_EPSILON;

/// Move `actual` toward `target` by at most `elapsed * rate`.
///
/// Gaps at or below [`SNAP_EPSILON`] snap straight to `target`, and a step
/// that would pass the target lands on it instead. Negative or non-finite
/// `elapsed`/`rate` values are treated as zero.
#[inline]
pub fn advance(actual: f32, target: f32, elapsed: f32, rate: f32) -> f32 {
    let gap = target - actual;
    if gap.abs() <= SNAP_EPSILON {
        return target;
    }
    let step = finite_non_negative(elapsed) * finite_non_negative(rate);
    if step >= gap.abs() {
        target
    } else {
        actual + gap.signum() * step
    }
}

#[inline]
fn finite_non_negative(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// A target/actual pair advanced once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Animated {
    pub target: f32,
    pub actual: f32,
}

impl Animated {
    pub fn step(&mut self, elapsed: f32, rate: f32) -> f32 {
        self.actual = advance(self.actual, self.target, elapsed, rate);
        self.actual
    }

    pub fn settled(&self) -> bool {
        self.actual == self.target
    }
}
