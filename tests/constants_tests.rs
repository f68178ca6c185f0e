// Host-side tests for constants and their mathematical relationships.
// The web crate is wasm-only, so its constants file is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use swing_core::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_consistent() {
    assert!(FIXED_TICK_SEC > 0.0);
    assert!(FIXED_TICK_SEC < MAX_FRAME_DELTA_SEC);
    assert!(ENGINE_MAX_DT_SEC >= FIXED_TICK_SEC);
    assert!(MAX_TICKS_PER_FRAME > 0);
    // A clamped worst-case frame owes more ticks than the cap allows.
    assert!(MAX_TICKS_PER_FRAME as f64 * FIXED_TICK_SEC < MAX_FRAME_DELTA_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn filter_constants_are_in_range() {
    assert!(FILTER_ALPHA > 0.0 && FILTER_ALPHA < 1.0);
    assert!(OMEGA_MAX > 0.0);
    assert!(DRAG_DEADBAND >= 0.0 && DRAG_DEADBAND < OMEGA_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sizing_constants_have_logical_relationships() {
    assert!(BOB_RADIUS_MIN_PX < BOB_RADIUS_MAX_PX);
    assert!(GRAB_RADIUS_MIN_PX <= BOB_RADIUS_MIN_PX);
    assert!(GRAB_SLACK_PX > 0.0);
    assert!(VIEW_MARGIN_PX >= 0.0);
    assert!(MIN_SCALE_DENOM > 0.0);
    assert!(PIVOT_RADIUS_PX > 0.0 && PIVOT_RADIUS_PX < BOB_RADIUS_MIN_PX);
    assert!(ROD_WIDTH_PX > 0.0);
}

#[test]
fn defaults_sit_inside_entry_ranges() {
    let d = SimParams::default();
    let inside = |v: f64, (lo, hi): (f64, f64)| v >= lo && v <= hi;
    assert!(inside(d.l1, LENGTH_RANGE) && inside(d.l2, LENGTH_RANGE));
    assert!(inside(d.m1, MASS_RANGE) && inside(d.m2, MASS_RANGE));
    assert!(inside(d.g, GRAVITY_RANGE));
    assert!(inside(d.damping, DAMPING_RANGE));
    assert_eq!(d.clamped(), Ok(d));
}

#[test]
fn reset_state_matches_constants() {
    let s = PendulumState::resting();
    assert_eq!(
        (s.theta1, s.omega1, s.theta2, s.omega2),
        (RESET_THETA1, RESET_OMEGA1, RESET_THETA2, RESET_OMEGA2)
    );
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        INPUT_L1_ID,
        INPUT_L2_ID,
        INPUT_M1_ID,
        INPUT_M2_ID,
        INPUT_G_ID,
        INPUT_DAMPING_ID,
        APPLY_BUTTON_ID,
        DEFAULTS_BUTTON_ID,
        RESET_BUTTON_ID,
        READOUT_ID,
        STATUS_ID,
        KE_BAR_ID,
        PE_BAR_ID,
        ENERGY_DIVIDER_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
