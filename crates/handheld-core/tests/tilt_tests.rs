// Host-side tests for the hover/tilt policy.

use glam::Vec3;
use handheld_core::{depth_delta, pad_tilt, PRESS_DEPTH, TILT_MAX};

const REST: Vec3 = Vec3::new(-1.968, -2.041, 0.985);

#[test]
fn pad_tilts_away_from_contact_point() {
    // pointer right of the pad: deltaX < 0, so tilt about Y is positive
    let t = pad_tilt(REST, REST + Vec3::new(0.1, 0.0, 0.0));
    assert!((t.y - 0.04).abs() < 1e-6);
    assert_eq!(t.x, 0.0);

    // pointer above the pad: deltaY < 0, so tilt about X is negative
    let t = pad_tilt(REST, REST + Vec3::new(0.0, 0.1, 0.0));
    assert!((t.x + 0.04).abs() < 1e-6);
    assert_eq!(t.y, 0.0);
}

#[test]
fn mirrored_contact_negates_tilt() {
    for &(dx, dy) in &[(0.05_f32, 0.12_f32), (0.3, -0.02), (-0.2, 0.4), (0.0, 0.07)] {
        let base = pad_tilt(REST, REST + Vec3::new(dx, dy, 0.0));
        let mirror_x = pad_tilt(REST, REST + Vec3::new(-dx, dy, 0.0));
        let mirror_y = pad_tilt(REST, REST + Vec3::new(dx, -dy, 0.0));
        assert!((mirror_x.y + base.y).abs() < 1e-6);
        assert!((mirror_x.x - base.x).abs() < 1e-6);
        assert!((mirror_y.x + base.x).abs() < 1e-6);
        assert!((mirror_y.y - base.y).abs() < 1e-6);
    }
}

#[test]
fn tilt_is_capped_for_large_offsets() {
    for &dx in &[0.25_f32, 0.3, 1.0, 10.0, -0.25, -4.0] {
        let t = pad_tilt(Vec3::ZERO, Vec3::new(dx, 0.0, 0.0));
        assert_eq!(t.y.abs(), TILT_MAX, "dx={dx}");
        let t = pad_tilt(Vec3::ZERO, Vec3::new(0.0, dx, 0.0));
        assert_eq!(t.x.abs(), TILT_MAX, "dy={dx}");
    }
}

#[test]
fn contact_depth_is_ignored() {
    let a = pad_tilt(REST, Vec3::new(-1.8, -2.2, 0.0));
    let b = pad_tilt(REST, Vec3::new(-1.8, -2.2, 5.0));
    assert_eq!(a, b);
}

#[test]
fn depth_delta_only_changes_on_transitions() {
    assert_eq!(depth_delta(false, true), -PRESS_DEPTH);
    assert_eq!(depth_delta(true, false), PRESS_DEPTH);
    assert_eq!(depth_delta(true, true), 0.0);
    assert_eq!(depth_delta(false, false), 0.0);
}
