// Host-side tests for the bounded-rate convergence rule.

use handheld_core::{advance, Animated, CONVERGENCE_RATE, SNAP_EPSILON};

#[test]
fn step_moves_toward_target_by_elapsed_times_rate() {
    let next = advance(0.0, 1.0, 0.5, 0.6);
    assert!((next - 0.3).abs() < 1e-6);
    let next = advance(0.0, -1.0, 0.5, 0.6);
    assert!((next + 0.3).abs() < 1e-6);
}

#[test]
fn small_gap_snaps_exactly_to_target() {
    let target = 0.25;
    let next = advance(target - SNAP_EPSILON * 0.5, target, 0.0, CONVERGENCE_RATE);
    assert_eq!(next, target);
}

#[test]
fn convergence_bound_holds_without_overshoot() {
    let actuals = [-2.0_f32, -0.3, -0.05, 0.0, 0.004, 0.2, 1.7];
    let targets = [-1.0_f32, -0.1, 0.0, 0.1, 0.5];
    let elapsed = [0.0_f32, 0.001, 0.016, 0.1, 0.5, 3.0];
    let rates = [0.1_f32, 0.6, 2.0];
    for &a in &actuals {
        for &t in &targets {
            for &dt in &elapsed {
                for &r in &rates {
                    let n = advance(a, t, dt, r);
                    let bound = ((a - t).abs() - dt * r).max(0.0);
                    assert!(
                        (n - t).abs() <= bound + 1e-6,
                        "bound violated a={a} t={t} dt={dt} r={r} -> {n}"
                    );
                    let same_side = (n - t).signum() == (a - t).signum();
                    assert!(n == t || same_side, "overshoot a={a} t={t} dt={dt} r={r} -> {n}");
                }
            }
        }
    }
}

#[test]
fn repeated_advance_reaches_target_and_stays() {
    let mut v = Animated {
        target: -0.1,
        actual: 0.35,
    };
    let mut calls = 0;
    while !v.settled() {
        v.step(1.0 / 60.0, CONVERGENCE_RATE);
        calls += 1;
        assert!(calls < 10_000, "never converged");
    }
    assert_eq!(v.actual, -0.1);
    for _ in 0..100 {
        assert_eq!(v.step(1.0 / 60.0, CONVERGENCE_RATE), -0.1);
    }
}

#[test]
fn zero_or_invalid_elapsed_leaves_large_gap_untouched() {
    assert_eq!(advance(0.0, 1.0, 0.0, CONVERGENCE_RATE), 0.0);
    assert_eq!(advance(0.0, 1.0, -1.0, CONVERGENCE_RATE), 0.0);
    assert_eq!(advance(0.0, 1.0, f32::NAN, CONVERGENCE_RATE), 0.0);
}
