// Host-side tests for the session: control actions, drag gating and halting.

mod support;

use glam::DVec2;
use instant::Instant;
use std::time::Duration;
use support::RecordingEngine;
use swing_core::{
    ControlOutcome, DriverConfig, Grab, PendulumEngine, PendulumState, Session, SessionStatus,
    SimError, SimParams,
};

const DT: f64 = 1.0 / 240.0;

fn session() -> Session<RecordingEngine> {
    Session::new(
        RecordingEngine::resting(),
        SimParams::default(),
        DriverConfig::default(),
    )
}

fn grab_bob1<E: PendulumEngine>(s: &mut Session<E>) -> Option<Grab> {
    let (bob1, _) = s.mapper().bob_pixels(&s.snapshot().positions);
    s.pointer_down(1, bob1)
}

#[test]
fn new_mirrors_params_into_engine() {
    let params = SimParams {
        l1: 1.5,
        m2: 3.0,
        g: 1.62,
        ..SimParams::default()
    };
    let engine = RecordingEngine::new(&SimParams::default(), PendulumState::resting());
    let s = Session::new(engine, params, DriverConfig::default());
    assert_eq!(s.engine().inner.params(), &params);
    assert_eq!(s.params(), &params);
}

#[test]
fn pointer_down_hits_bobs_at_their_drawn_position() {
    let mut s = session();
    let (_, bob2) = s.mapper().bob_pixels(&s.snapshot().positions);
    assert_eq!(s.pointer_down(4, bob2), Some(Grab::Bob2));
    assert_eq!(s.drag().pointer_id(), Some(4));
    assert_eq!(s.snapshot().grabbed, Grab::Bob2);
}

#[test]
fn pointer_down_far_away_misses() {
    let mut s = session();
    assert_eq!(s.pointer_down(1, DVec2::new(5.0, 5.0)), None);
    assert!(s.drag().is_idle());
}

#[test]
fn hit_test_follows_viewport_changes() {
    let mut s = session();
    s.set_viewport(1200.0, 900.0);
    let (bob1, bob2) = s.mapper().bob_pixels(&s.snapshot().positions);
    assert!(bob1.distance(bob2) > 61.0);
    assert_eq!(s.pointer_down(1, bob1), Some(Grab::Bob1));
}

#[test]
fn small_viewport_overlap_gives_bob2_priority() {
    let mut s = session();
    s.set_viewport(400.0, 300.0);
    let (bob1, bob2) = s.mapper().bob_pixels(&s.snapshot().positions);
    // 29.5 px/m puts the bobs ~59 px apart, inside Bob 2's 61 px grab radius.
    assert!(bob1.distance(bob2) < 61.0);
    assert_eq!(s.pointer_down(1, bob1), Some(Grab::Bob2));
}

#[test]
fn apply_clamps_and_keeps_dynamic_state() {
    let mut s = session();
    s.advance(0.05).unwrap();
    let state_before = s.engine().state();

    let entered = SimParams {
        l1: 100.0,
        m1: 0.0,
        g: -3.0,
        damping: 9.0,
        ..SimParams::default()
    };
    assert_eq!(s.apply_params(entered), Ok(ControlOutcome::Applied));

    let p = *s.params();
    assert_eq!(p.l1, 50.0);
    assert_eq!(p.m1, 0.01);
    assert_eq!(p.g, 0.0);
    assert_eq!(p.damping, 5.0);
    assert_eq!(s.engine().inner.params(), &p);
    assert_eq!(s.engine().state(), state_before);
}

#[test]
fn apply_rejects_non_finite_entry() {
    let mut s = session();
    let entered = SimParams {
        m2: f64::NAN,
        ..SimParams::default()
    };
    match s.apply_params(entered) {
        Err(SimError::InvalidParams { field, .. }) => assert_eq!(field, "m2"),
        other => panic!("expected InvalidParams, got {:?}", other),
    }
    assert_eq!(s.params(), &SimParams::default());
}

#[test]
fn apply_while_dragging_has_no_effect() {
    let mut s = session();
    s.advance(0.5 * DT).unwrap();
    assert!(grab_bob1(&mut s).is_some());
    let banked = s.clock().accumulated();
    let state = s.engine().state();
    assert!(banked > 0.0);

    let entered = SimParams {
        l1: 3.0,
        ..SimParams::default()
    };
    assert_eq!(
        s.apply_params(entered),
        Ok(ControlOutcome::IgnoredWhileDragging)
    );
    assert_eq!(s.params(), &SimParams::default());
    assert_eq!(s.engine().inner.params(), &SimParams::default());

    assert_eq!(s.restore_defaults(), ControlOutcome::IgnoredWhileDragging);
    assert_eq!(s.reset(), ControlOutcome::IgnoredWhileDragging);
    assert_eq!(s.drag().grabbed(), Grab::Bob1);
    assert_eq!(s.clock().accumulated(), banked);
    assert_eq!(s.engine().state(), state);
}

#[test]
fn halted_session_ignores_pointer_down() {
    let mut s = Session::new(
        RecordingEngine::poisoned_after(1),
        SimParams::default(),
        DriverConfig::default(),
    );
    let (_, bob2) = s.mapper().bob_pixels(&s.snapshot().positions);
    assert!(s.advance(DT).is_err());
    let refreshes = s.engine().refreshes;

    assert_eq!(s.pointer_down(1, bob2), None);
    assert!(s.drag().is_idle());
    // No hit test ran against the diverged engine.
    assert_eq!(s.engine().refreshes, refreshes);
}

#[test]
fn apply_resets_timing_and_filter() {
    let mut s = session();
    s.advance(0.5 * DT).unwrap();
    assert!(s.clock().accumulated() > 0.0);

    s.apply_params(SimParams::default()).unwrap();
    assert_eq!(s.clock().accumulated(), 0.0);
    assert!(!s.drag().filter.has_previous());
}

#[test]
fn restore_defaults_resets_params_and_state() {
    let mut s = session();
    s.apply_params(SimParams {
        l2: 7.0,
        ..SimParams::default()
    })
    .unwrap();
    s.advance(0.06).unwrap();

    assert_eq!(s.restore_defaults(), ControlOutcome::Applied);
    assert_eq!(s.params(), &SimParams::default());
    assert_eq!(s.engine().inner.params(), &SimParams::default());
    assert_eq!(s.engine().state(), PendulumState::resting());
}

#[test]
fn reset_keeps_params() {
    let mut s = session();
    let custom = SimParams {
        m1: 4.0,
        ..SimParams::default()
    };
    s.apply_params(custom).unwrap();
    s.advance(0.06).unwrap();

    assert_eq!(s.reset(), ControlOutcome::Applied);
    assert_eq!(s.params(), &custom);
    assert_eq!(s.engine().state(), PendulumState::resting());
    assert_eq!(
        s.snapshot().positions,
        s.engine().inner.bob_positions()
    );
}

#[test]
fn release_ends_drag_and_unblocks_controls() {
    let mut s = session();
    grab_bob1(&mut s);
    assert!(!s.pointer_up(2));
    assert!(s.pointer_cancel(1));
    assert!(s.drag().is_idle());
    assert_eq!(s.reset(), ControlOutcome::Applied);
}

#[test]
fn first_frame_has_zero_delta() {
    let mut s = session();
    let t0 = Instant::now();
    let r = s.frame(t0).unwrap();
    assert_eq!(r.ticks, 0);

    let r = s.frame(t0 + Duration::from_millis(10)).unwrap();
    assert_eq!(r.ticks, 2);
}

#[test]
fn divergence_halts_the_session_for_good() {
    let mut s = Session::new(
        RecordingEngine::poisoned_after(1),
        SimParams::default(),
        DriverConfig::default(),
    );
    let err = s.advance(DT).unwrap_err();
    assert!(matches!(err, SimError::EngineDiverged { .. }));
    assert!(s.is_halted());
    assert_eq!(s.status(), &SessionStatus::Halted(err.clone()));

    let calls = s.engine().calls.len();
    assert_eq!(s.advance(0.05), Err(err.clone()));
    assert_eq!(s.engine().calls.len(), calls);

    assert_eq!(
        s.apply_params(SimParams::default()),
        Ok(ControlOutcome::IgnoredWhileHalted)
    );
    assert_eq!(s.reset(), ControlOutcome::IgnoredWhileHalted);
    assert_eq!(s.restore_defaults(), ControlOutcome::IgnoredWhileHalted);
    assert!(matches!(s.snapshot().status, SessionStatus::Halted(_)));
}

#[test]
fn native_session_runs_free_swing() {
    let mut s = Session::native(
        SimParams::default(),
        PendulumState::resting(),
        DriverConfig::default(),
    );
    for _ in 0..120 {
        s.advance(1.0 / 60.0).unwrap();
    }
    let snap = s.snapshot();
    assert_eq!(snap.status, SessionStatus::Running);
    assert!(snap.positions.is_finite());
    assert!(snap.energy.total() > 0.0);
}
