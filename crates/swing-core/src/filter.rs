//! Angle helpers and the drag angular-velocity estimator.
//!
//! A dragged bob only reports positions; the engine needs an angular velocity
//! too. [`AngleFilter`] differentiates successive angles across the branch cut
//! and smooths the result with a single-pole low-pass filter.

use crate::constants::{FILTER_ALPHA, OMEGA_MAX};
use crate::error::SimError;
use std::f64::consts::{PI, TAU};

/// Wrap an angle into `(-π, π]`.
///
/// Non-finite input is returned as NaN rather than looping.
pub fn normalize_angle(a: f64) -> f64 {
    if a > -PI && a <= PI {
        return a;
    }
    if !a.is_finite() {
        return f64::NAN;
    }
    let r = (a + PI).rem_euclid(TAU) - PI;
    if r <= -PI {
        r + TAU
    } else {
        r
    }
}

/// Shortest signed rotation from `old` to `new`, in `(-π, π]`.
#[inline]
pub fn unwrap_delta(new: f64, old: f64) -> f64 {
    normalize_angle(new - old)
}

#[inline]
pub fn clamp_abs(v: f64, vmax: f64) -> f64 {
    v.clamp(-vmax, vmax)
}

/// Responsiveness/noise trade-off of the estimator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterTuning {
    /// Weight of the newest sample, in (0, 1).
    pub alpha: f64,
    /// Clamp on the raw derivative, rad/s.
    pub omega_max: f64,
}

impl Default for FilterTuning {
    fn default() -> Self {
        Self {
            alpha: FILTER_ALPHA,
            omega_max: OMEGA_MAX,
        }
    }
}

/// Estimator state scoped to one continuous grab.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AngleFilter {
    has_previous: bool,
    previous_angle: f64,
    filtered_omega: f64,
}

impl AngleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous sample; the next update returns exactly zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_previous(&self) -> bool {
        self.has_previous
    }

    pub fn previous_angle(&self) -> Option<f64> {
        self.has_previous.then_some(self.previous_angle)
    }

    pub fn omega(&self) -> f64 {
        self.filtered_omega
    }

    /// Feed one angle sample taken `dt` seconds after the previous one and
    /// return the filtered angular velocity.
    ///
    /// A non-positive `dt` leaves the state untouched and returns the current
    /// estimate.
    pub fn update(&mut self, angle: f64, dt: f64, tuning: FilterTuning) -> Result<f64, SimError> {
        if !angle.is_finite() {
            return Err(SimError::NonFiniteInput(angle));
        }
        if dt.is_nan() || dt <= 0.0 {
            return Ok(self.filtered_omega);
        }
        let angle = normalize_angle(angle);

        if !self.has_previous {
            self.previous_angle = angle;
            self.filtered_omega = 0.0;
            self.has_previous = true;
            return Ok(0.0);
        }

        let raw = unwrap_delta(angle, self.previous_angle) / dt;
        let clamped = clamp_abs(raw, tuning.omega_max);
        let alpha = tuning.alpha.clamp(0.0, 1.0);
        self.filtered_omega = alpha * clamped + (1.0 - alpha) * self.filtered_omega;
        self.previous_angle = angle;
        Ok(self.filtered_omega)
    }
}
