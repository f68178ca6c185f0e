//! One running simulation: engine, parameters and all per-run interaction state.

use crate::clock::AccumulatorClock;
use crate::drag::{DragState, Grab, HitTest, PointerId, PointerRelease};
use crate::driver::{self, DriverConfig, FrameReport};
use crate::engine::{BobPositions, EnergyBreakdown, PendulumEngine, PendulumState};
use crate::error::SimError;
use crate::integrator::RkEngine;
use crate::params::{reset_dynamics, sync_engine_params, SimParams};
use crate::viewport::{grab_radius_px, CoordinateMapper, Viewport};
use glam::DVec2;
use instant::Instant;

#[derive(Clone, Debug, PartialEq)]
pub enum SessionStatus {
    Running,
    /// The engine produced garbage; stepping has stopped for good.
    Halted(SimError),
}

/// Result of a parameter/reset control action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlOutcome {
    Applied,
    IgnoredWhileDragging,
    IgnoredWhileHalted,
}

/// Everything readers outside the driver may look at, taken after a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub positions: BobPositions,
    pub state: PendulumState,
    pub energy: EnergyBreakdown,
    pub grabbed: Grab,
    pub status: SessionStatus,
}

pub struct Session<E: PendulumEngine> {
    engine: E,
    params: SimParams,
    config: DriverConfig,
    viewport: Viewport,
    drag: DragState,
    clock: AccumulatorClock,
    status: SessionStatus,
}

impl Session<RkEngine> {
    pub fn native(params: SimParams, initial: PendulumState, config: DriverConfig) -> Self {
        Self::new(RkEngine::create(&params, initial), params, config)
    }
}

impl<E: PendulumEngine> Session<E> {
    pub fn new(mut engine: E, params: SimParams, config: DriverConfig) -> Self {
        sync_engine_params(&mut engine, &params);
        engine.refresh_position_cache();
        Self {
            engine,
            params,
            config,
            viewport: Viewport::default(),
            drag: DragState::new(),
            clock: AccumulatorClock::new(),
            status: SessionStatus::Running,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn clock(&self) -> &AccumulatorClock {
        &self.clock
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn is_halted(&self) -> bool {
        matches!(self.status, SessionStatus::Halted(_))
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width.max(1.0), height.max(1.0));
    }

    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::with_margin(&self.params, self.viewport, self.config.view_margin)
    }

    /// Hit-test against freshly refreshed bob positions and start a grab.
    pub fn pointer_down(&mut self, id: PointerId, pos: DVec2) -> Option<Grab> {
        if self.is_halted() || !self.drag.is_idle() {
            return None;
        }
        self.engine.refresh_position_cache();
        let (bob1, bob2) = self.mapper().bob_pixels(&self.engine.cached_positions());
        let hit = HitTest {
            bob1,
            bob2,
            grab_radius1: grab_radius_px(self.params.m1),
            grab_radius2: grab_radius_px(self.params.m2),
        };
        self.drag.pointer_down(id, pos, &hit)
    }

    pub fn pointer_move(&mut self, id: PointerId, pos: DVec2) -> bool {
        self.drag.pointer_move(id, pos)
    }

    pub fn pointer_up(&mut self, id: PointerId) -> bool {
        self.drag.pointer_release(id, PointerRelease::Up)
    }

    pub fn pointer_cancel(&mut self, id: PointerId) -> bool {
        self.drag.pointer_release(id, PointerRelease::Cancel)
    }

    pub fn pointer_leave(&mut self, id: PointerId) -> bool {
        self.drag.pointer_release(id, PointerRelease::Leave)
    }

    /// Advance by the wall time elapsed since the previous call.
    pub fn frame(&mut self, now: Instant) -> Result<FrameReport, SimError> {
        let dt = self.clock.frame_delta(now);
        self.advance(dt)
    }

    pub fn advance(&mut self, frame_delta: f64) -> Result<FrameReport, SimError> {
        if let SessionStatus::Halted(e) = &self.status {
            return Err(e.clone());
        }
        let mapper = self.mapper();
        let result = driver::advance(
            &mut self.clock,
            &mut self.drag,
            &mut self.engine,
            &mapper,
            &self.config,
            frame_delta,
        );
        if let Err(e) = &result {
            log::error!("[session] halted: {}", e);
            self.status = SessionStatus::Halted(e.clone());
        }
        result
    }

    /// Clamp, store and mirror new parameters. Dynamic state is kept.
    pub fn apply_params(&mut self, params: SimParams) -> Result<ControlOutcome, SimError> {
        if let Some(blocked) = self.blocked("apply") {
            return Ok(blocked);
        }
        let params = params.clamped()?;
        self.params = params;
        sync_engine_params(&mut self.engine, &self.params);
        self.engine.refresh_position_cache();
        self.reset_timing();
        log::info!(
            "[params] applied l=({:.2},{:.2}) m=({:.2},{:.2}) g={:.3} damping={:.3}",
            params.l1,
            params.l2,
            params.m1,
            params.m2,
            params.g,
            params.damping
        );
        Ok(ControlOutcome::Applied)
    }

    pub fn restore_defaults(&mut self) -> ControlOutcome {
        if let Some(blocked) = self.blocked("restore defaults") {
            return blocked;
        }
        reset_dynamics(&mut self.engine, PendulumState::resting());
        self.params = SimParams::default();
        sync_engine_params(&mut self.engine, &self.params);
        self.engine.refresh_position_cache();
        self.reset_timing();
        log::info!("[params] restored defaults");
        ControlOutcome::Applied
    }

    /// Put the pendulum back to its resting state without touching parameters.
    pub fn reset(&mut self) -> ControlOutcome {
        if let Some(blocked) = self.blocked("reset") {
            return blocked;
        }
        reset_dynamics(&mut self.engine, PendulumState::resting());
        self.reset_timing();
        log::info!("[params] reset animation");
        ControlOutcome::Applied
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            positions: self.engine.cached_positions(),
            state: self.engine.state(),
            energy: self.engine.energy(),
            grabbed: self.drag.grabbed(),
            status: self.status.clone(),
        }
    }

    fn blocked(&self, action: &str) -> Option<ControlOutcome> {
        if self.is_halted() {
            log::warn!("[params] {} ignored; session halted", action);
            Some(ControlOutcome::IgnoredWhileHalted)
        } else if !self.drag.is_idle() {
            log::info!("[params] {} ignored while dragging", action);
            Some(ControlOutcome::IgnoredWhileDragging)
        } else {
            None
        }
    }

    fn reset_timing(&mut self) {
        self.clock.reset();
        self.drag.filter.reset();
    }
}
