//! Fixed-step accumulator loop.
//!
//! Render frames arrive at whatever rate the host manages; the engine only
//! ever sees `fixed_tick`. Each frame banks its (clamped) wall time and pays
//! it out in whole ticks, at most `max_ticks_per_frame` of them, choosing per
//! tick between a plain coupled step and a drag-override step.

use crate::clock::AccumulatorClock;
use crate::constants::{
    DRAG_DEADBAND, FIXED_TICK_SEC, MAX_FRAME_DELTA_SEC, MAX_TICKS_PER_FRAME, VIEW_MARGIN_PX,
};
use crate::drag::{DragState, Grab};
use crate::engine::PendulumEngine;
use crate::error::SimError;
use crate::filter::{AngleFilter, FilterTuning};
use crate::viewport::{angle_about, CoordinateMapper};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriverConfig {
    pub fixed_tick: f64,
    pub max_frame_delta: f64,
    pub max_ticks_per_frame: u32,
    pub filter: FilterTuning,
    /// Bob 1 drag velocities below this snap to zero.
    pub drag_deadband: f64,
    pub view_margin: f64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            fixed_tick: FIXED_TICK_SEC,
            max_frame_delta: MAX_FRAME_DELTA_SEC,
            max_ticks_per_frame: MAX_TICKS_PER_FRAME,
            filter: FilterTuning::default(),
            drag_deadband: DRAG_DEADBAND,
            view_margin: VIEW_MARGIN_PX,
        }
    }
}

impl DriverConfig {
    pub fn clamp_frame_delta(&self, frame_delta: f64) -> f64 {
        if frame_delta.is_nan() || frame_delta <= 0.0 {
            0.0
        } else {
            frame_delta.min(self.max_frame_delta)
        }
    }
}

/// What one render callback did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub clamped_delta: f64,
    pub ticks: u32,
    /// True when the tick cap stopped the loop with time still owed.
    pub capped: bool,
}

/// Run one render frame's worth of fixed ticks against `engine`.
///
/// On return the engine's position cache is fresh whether zero or more ticks
/// ran. A non-finite engine readback is reported as
/// [`SimError::EngineDiverged`].
pub fn advance<E: PendulumEngine + ?Sized>(
    clock: &mut AccumulatorClock,
    drag: &mut DragState,
    engine: &mut E,
    mapper: &CoordinateMapper,
    config: &DriverConfig,
    frame_delta: f64,
) -> Result<FrameReport, SimError> {
    let clamped_delta = config.clamp_frame_delta(frame_delta);
    clock.deposit(clamped_delta);

    let grabbed = drag.grabbed();
    let pointer = drag.last_pointer_pos();
    let dt = config.fixed_tick;

    // Bob 1's pixel position is taken once per frame and reused for every tick.
    let bob2_support = match (grabbed, pointer) {
        (Grab::Bob2, Some(_)) => {
            engine.refresh_position_cache();
            Some(mapper.to_pixels(engine.cached_positions().bob1()))
        }
        _ => None,
    };

    let mut ticks = 0;
    while ticks < config.max_ticks_per_frame && clock.take_tick(dt) {
        match (grabbed, pointer, bob2_support) {
            (Grab::Bob1, Some(p), _) => {
                let theta = angle_about(mapper.origin(), p);
                let (theta, mut omega) =
                    filtered_sample(&mut drag.filter, theta, engine.theta1(), dt, config.filter);
                if omega.abs() < config.drag_deadband {
                    omega = 0.0;
                }
                engine.step_drag_override_bob1(dt, theta, omega, 0.0);
            }
            (Grab::Bob2, Some(p), Some(support)) => {
                let theta = angle_about(support, p);
                let (theta, omega) =
                    filtered_sample(&mut drag.filter, theta, engine.theta2(), dt, config.filter);
                engine.set_theta2(theta);
                engine.set_omega2(omega);
                engine.step(dt);
            }
            _ => engine.step(dt),
        }
        ticks += 1;
    }

    let capped = ticks == config.max_ticks_per_frame && clock.accumulated() >= dt;
    if capped {
        log::debug!(
            "[driver] tick cap reached; {:.4}s still owed",
            clock.accumulated()
        );
    }

    engine.refresh_position_cache();
    check_finite(engine)?;

    Ok(FrameReport {
        clamped_delta,
        ticks,
        capped,
    })
}

/// Filter a pointer-derived angle. A glitched sample holds `fallback` with
/// zero velocity for this tick.
fn filtered_sample(
    filter: &mut AngleFilter,
    theta: f64,
    fallback: f64,
    dt: f64,
    tuning: FilterTuning,
) -> (f64, f64) {
    match filter.update(theta, dt, tuning) {
        Ok(omega) => (theta, omega),
        Err(e) => {
            log::warn!("[driver] {}; holding angle", e);
            (fallback, 0.0)
        }
    }
}

fn check_finite<E: PendulumEngine + ?Sized>(engine: &E) -> Result<(), SimError> {
    if !engine.cached_positions().is_finite() {
        return Err(SimError::EngineDiverged { what: "position" });
    }
    if !engine.state().is_finite() {
        return Err(SimError::EngineDiverged { what: "state" });
    }
    if !engine.energy().is_finite() {
        return Err(SimError::EngineDiverged { what: "energy" });
    }
    Ok(())
}
