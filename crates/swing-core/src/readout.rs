//! Text readout and energy bar values derived from a frame snapshot.

use crate::constants::ENERGY_BAR_MIN_TOTAL;
use crate::engine::EnergyBreakdown;
use crate::params::SimParams;
use crate::session::{SessionStatus, Snapshot};
use std::fmt::Write;

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Kinetic and potential shares of the total energy, each in `[0, 1]` when
/// both energies are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyBar {
    pub kinetic_frac: f64,
    pub potential_frac: f64,
}

impl EnergyBar {
    pub fn from_energy(energy: &EnergyBreakdown) -> Self {
        let total = energy.total();
        if total > ENERGY_BAR_MIN_TOTAL {
            Self {
                kinetic_frac: energy.kinetic / total,
                potential_frac: energy.potential / total,
            }
        } else {
            Self {
                kinetic_frac: 0.5,
                potential_frac: 0.5,
            }
        }
    }

    pub fn kinetic_percent(&self) -> f64 {
        self.kinetic_frac * 100.0
    }

    pub fn potential_percent(&self) -> f64 {
        self.potential_frac * 100.0
    }
}

/// Multi-line readout; y is shown with "up" positive.
pub fn format_readout(params: &SimParams, snap: &Snapshot) -> String {
    let s = &snap.state;
    let p = &snap.positions;
    let mut out = String::with_capacity(512);
    _ = writeln!(
        out,
        "L1={:.2}  L2={:.2}  M1={:.2}  M2={:.2}",
        params.l1, params.l2, params.m1, params.m2
    );
    _ = writeln!(out, "g={:.3}  damping={:.3}", params.g, params.damping);
    _ = writeln!(out);
    _ = writeln!(
        out,
        "θ1: {:.2} deg   ω1: {:.3} rad/s",
        rad_to_deg(s.theta1),
        s.omega1
    );
    _ = writeln!(
        out,
        "θ2: {:.2} deg   ω2: {:.3} rad/s",
        rad_to_deg(s.theta2),
        s.omega2
    );
    _ = writeln!(out);
    _ = writeln!(out, "x1: {:.3}  y1: {:.3}", p.x1, -p.y1);
    _ = writeln!(out, "x2: {:.3}  y2: {:.3}", p.x2, -p.y2);
    _ = writeln!(out);
    _ = writeln!(out, "Total Energy (J): {:.4}", snap.energy.total());
    _ = writeln!(out, "Kinetic Energy (J): {:.4}", snap.energy.kinetic);
    _ = writeln!(out, "Potential Energy (J): {:.4}", snap.energy.potential);
    _ = write!(out, "Currently dragging: {}", snap.grabbed.label());
    if let SessionStatus::Halted(e) = &snap.status {
        _ = write!(out, "\nHALTED: {}", e);
    }
    out
}
