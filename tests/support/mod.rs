// Shared helpers for host-side tests: a call-recording engine wrapper.

#![allow(dead_code)]

use swing_core::{
    BobPositions, PendulumEngine, PendulumState, RkEngine, SimParams,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Call {
    Step(f64),
    Override {
        dt: f64,
        theta1: f64,
        omega1: f64,
        alpha1: f64,
    },
    SetTheta2(f64),
    SetOmega2(f64),
}

/// Wraps a real [`RkEngine`] and records every driving call.
///
/// With `poison_after` set, the state turns NaN once that many steps
/// (plain or override) have run.
pub struct RecordingEngine {
    pub inner: RkEngine,
    pub calls: Vec<Call>,
    pub refreshes: usize,
    pub poison_after: Option<usize>,
}

impl RecordingEngine {
    pub fn new(params: &SimParams, initial: PendulumState) -> Self {
        Self {
            inner: RkEngine::create(params, initial),
            calls: Vec::new(),
            refreshes: 0,
            poison_after: None,
        }
    }

    pub fn resting() -> Self {
        Self::new(&SimParams::default(), PendulumState::resting())
    }

    pub fn poisoned_after(steps: usize) -> Self {
        let mut e = Self::resting();
        e.poison_after = Some(steps);
        e
    }

    pub fn steps(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Step(dt) => Some(*dt),
                _ => None,
            })
            .collect()
    }

    pub fn overrides(&self) -> Vec<(f64, f64, f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                Call::Override {
                    dt,
                    theta1,
                    omega1,
                    alpha1,
                } => Some((dt, theta1, omega1, alpha1)),
                _ => None,
            })
            .collect()
    }

    pub fn advancing_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Step(_) | Call::Override { .. }))
            .count()
    }

    fn maybe_poison(&mut self) {
        if let Some(n) = self.poison_after {
            if self.advancing_calls() >= n {
                self.inner
                    .reset(PendulumState::new(f64::NAN, 0.0, 0.0, 0.0));
            }
        }
    }
}

impl PendulumEngine for RecordingEngine {
    fn step(&mut self, dt: f64) {
        self.calls.push(Call::Step(dt));
        self.inner.step(dt);
        self.maybe_poison();
    }

    fn step_drag_override_bob1(&mut self, dt: f64, theta1: f64, omega1: f64, alpha1: f64) {
        self.calls.push(Call::Override {
            dt,
            theta1,
            omega1,
            alpha1,
        });
        self.inner.step_drag_override_bob1(dt, theta1, omega1, alpha1);
        self.maybe_poison();
    }

    fn refresh_position_cache(&mut self) {
        self.refreshes += 1;
        self.inner.refresh_position_cache();
    }

    fn cached_positions(&self) -> BobPositions {
        self.inner.cached_positions()
    }

    fn set_theta2(&mut self, theta2: f64) {
        self.calls.push(Call::SetTheta2(theta2));
        self.inner.set_theta2(theta2);
    }

    fn set_omega2(&mut self, omega2: f64) {
        self.calls.push(Call::SetOmega2(omega2));
        self.inner.set_omega2(omega2);
    }

    fn set_l1(&mut self, l1: f64) {
        self.inner.set_l1(l1);
    }

    fn set_l2(&mut self, l2: f64) {
        self.inner.set_l2(l2);
    }

    fn set_m1(&mut self, m1: f64) {
        self.inner.set_m1(m1);
    }

    fn set_m2(&mut self, m2: f64) {
        self.inner.set_m2(m2);
    }

    fn set_damping(&mut self, damping: f64) {
        self.inner.set_damping(damping);
    }

    fn set_gravity(&mut self, g: f64) {
        self.inner.set_gravity(g);
    }

    fn state(&self) -> PendulumState {
        self.inner.state()
    }

    fn kinetic_energy(&self) -> f64 {
        self.inner.kinetic_energy()
    }

    fn potential_energy(&self) -> f64 {
        self.inner.potential_energy()
    }

    fn reset(&mut self, state: PendulumState) {
        self.inner.reset(state);
    }
}

pub fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
