use crate::constants::{
    DAMPING_RANGE, DEFAULT_DAMPING, DEFAULT_GRAVITY, DEFAULT_L1, DEFAULT_L2, DEFAULT_M1,
    DEFAULT_M2, GRAVITY_RANGE, LENGTH_RANGE, MASS_RANGE,
};
use crate::engine::{PendulumEngine, PendulumState};
use crate::error::SimError;

/// User-editable physical parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    /// Arm lengths, meters.
    pub l1: f64,
    pub l2: f64,
    /// Bob masses, kg.
    pub m1: f64,
    pub m2: f64,
    /// Gravitational acceleration, m/s².
    pub g: f64,
    /// Viscous damping on both angular velocities, 1/s.
    pub damping: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            l1: DEFAULT_L1,
            l2: DEFAULT_L2,
            m1: DEFAULT_M1,
            m2: DEFAULT_M2,
            g: DEFAULT_GRAVITY,
            damping: DEFAULT_DAMPING,
        }
    }
}

impl SimParams {
    /// Clamp entered values into their accepted ranges.
    ///
    /// Non-finite fields are rejected rather than clamped.
    pub fn clamped(self) -> Result<Self, SimError> {
        let fields = [
            ("l1", self.l1),
            ("l2", self.l2),
            ("m1", self.m1),
            ("m2", self.m2),
            ("g", self.g),
            ("damping", self.damping),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::InvalidParams { field, value });
        }
        Ok(Self {
            l1: clamp_range(self.l1, LENGTH_RANGE),
            l2: clamp_range(self.l2, LENGTH_RANGE),
            m1: clamp_range(self.m1, MASS_RANGE),
            m2: clamp_range(self.m2, MASS_RANGE),
            g: clamp_range(self.g, GRAVITY_RANGE),
            damping: clamp_range(self.damping, DAMPING_RANGE),
        })
    }

    pub fn total_length(&self) -> f64 {
        self.l1 + self.l2
    }
}

#[inline]
fn clamp_range(v: f64, (lo, hi): (f64, f64)) -> f64 {
    v.clamp(lo, hi)
}

/// Mirror every scalar of `params` into the engine.
pub fn sync_engine_params<E: PendulumEngine + ?Sized>(engine: &mut E, params: &SimParams) {
    engine.set_l1(params.l1);
    engine.set_l2(params.l2);
    engine.set_m1(params.m1);
    engine.set_m2(params.m2);
    engine.set_damping(params.damping);
    engine.set_gravity(params.g);
}

/// Re-initialize angles and angular velocities; physical parameters are untouched.
pub fn reset_dynamics<E: PendulumEngine + ?Sized>(engine: &mut E, state: PendulumState) {
    engine.reset(state);
    engine.refresh_position_cache();
}
