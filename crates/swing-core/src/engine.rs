//! Contract between the driver and a physics integrator.
//!
//! The driver never looks inside the integrator. It advances it by fixed
//! ticks, overrides bob state while a bob is dragged, and reads positions,
//! state and energies back once per frame. Positions go through an explicit
//! cache that must be refreshed before the cached values are trusted.

use crate::constants::{RESET_OMEGA1, RESET_OMEGA2, RESET_THETA1, RESET_THETA2};
use glam::DVec2;

/// Angles from the downward vertical (radians) and their rates (rad/s).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PendulumState {
    pub theta1: f64,
    pub omega1: f64,
    pub theta2: f64,
    pub omega2: f64,
}

impl PendulumState {
    pub fn new(theta1: f64, omega1: f64, theta2: f64, omega2: f64) -> Self {
        Self {
            theta1,
            omega1,
            theta2,
            omega2,
        }
    }

    /// State used at startup and by reset.
    pub fn resting() -> Self {
        Self::new(RESET_THETA1, RESET_OMEGA1, RESET_THETA2, RESET_OMEGA2)
    }

    pub fn is_finite(&self) -> bool {
        self.theta1.is_finite()
            && self.omega1.is_finite()
            && self.theta2.is_finite()
            && self.omega2.is_finite()
    }
}

/// Cached Cartesian bob positions in meters, pivot at the origin, +y down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BobPositions {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BobPositions {
    pub fn bob1(&self) -> DVec2 {
        DVec2::new(self.x1, self.y1)
    }

    pub fn bob2(&self) -> DVec2 {
        DVec2::new(self.x2, self.y2)
    }

    pub fn is_finite(&self) -> bool {
        self.bob1().is_finite() && self.bob2().is_finite()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EnergyBreakdown {
    pub kinetic: f64,
    pub potential: f64,
}

impl EnergyBreakdown {
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }

    pub fn is_finite(&self) -> bool {
        self.kinetic.is_finite() && self.potential.is_finite()
    }
}

/// A live double pendulum integrator.
///
/// Creation is the implementor's constructor and destruction is `Drop`, so
/// an engine value can never be used before it exists or after it is gone.
pub trait PendulumEngine {
    /// Advance the coupled dynamics by `dt` seconds.
    fn step(&mut self, dt: f64);

    /// Advance by `dt` with bob 1 kinematically driven to `(theta1, omega1)`
    /// and angular acceleration `alpha1`.
    fn step_drag_override_bob1(&mut self, dt: f64, theta1: f64, omega1: f64, alpha1: f64);

    fn refresh_position_cache(&mut self);

    /// Positions as of the last [`refresh_position_cache`](Self::refresh_position_cache).
    fn cached_positions(&self) -> BobPositions;

    fn set_theta2(&mut self, theta2: f64);
    fn set_omega2(&mut self, omega2: f64);
    fn set_l1(&mut self, l1: f64);
    fn set_l2(&mut self, l2: f64);
    fn set_m1(&mut self, m1: f64);
    fn set_m2(&mut self, m2: f64);
    fn set_damping(&mut self, damping: f64);
    fn set_gravity(&mut self, g: f64);

    fn state(&self) -> PendulumState;
    fn kinetic_energy(&self) -> f64;
    fn potential_energy(&self) -> f64;

    /// Re-initialize dynamic state; physical parameters are kept.
    fn reset(&mut self, state: PendulumState);

    fn theta1(&self) -> f64 {
        self.state().theta1
    }

    fn omega1(&self) -> f64 {
        self.state().omega1
    }

    fn theta2(&self) -> f64 {
        self.state().theta2
    }

    fn omega2(&self) -> f64 {
        self.state().omega2
    }

    fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    fn energy(&self) -> EnergyBreakdown {
        EnergyBreakdown {
            kinetic: self.kinetic_energy(),
            potential: self.potential_energy(),
        }
    }
}
