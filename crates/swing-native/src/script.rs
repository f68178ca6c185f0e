//! Scripted pointer gesture: grab a bob, swing it back and forth, let go.

use clap::ValueEnum;
use glam::DVec2;
use swing_core::{PendulumEngine, PointerId, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DragTarget {
    None,
    Bob1,
    Bob2,
}

const POINTER_ID: PointerId = 1;

#[derive(Clone, Copy, Debug)]
pub struct DragScript {
    pub target: DragTarget,
    pub start: f64,
    pub duration: f64,
    /// Peak swing angle, radians.
    pub amplitude: f64,
    /// Swing frequency, Hz.
    pub frequency: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Waiting,
    Holding,
    Done,
}

pub struct DragPlayer {
    script: DragScript,
    phase: Phase,
}

impl DragPlayer {
    pub fn new(script: DragScript) -> Self {
        let phase = if script.target == DragTarget::None {
            Phase::Done
        } else {
            Phase::Waiting
        };
        Self { script, phase }
    }

    /// Feed pointer events for simulated time `t` (seconds since start).
    pub fn drive<E: PendulumEngine>(&mut self, session: &mut Session<E>, t: f64) {
        match self.phase {
            Phase::Done => {}
            Phase::Waiting if t >= self.script.start => {
                let (bob1, bob2) = bob_pixels(session);
                let at = match self.script.target {
                    DragTarget::Bob2 => bob2,
                    _ => bob1,
                };
                match session.pointer_down(POINTER_ID, at) {
                    Some(g) => {
                        log::info!("[script] grabbed {} at t={:.3}s", g.label(), t);
                        self.phase = Phase::Holding;
                    }
                    None => {
                        log::warn!("[script] nothing under pointer at t={:.3}s", t);
                        self.phase = Phase::Done;
                    }
                }
            }
            Phase::Waiting => {}
            Phase::Holding if t >= self.script.start + self.script.duration => {
                session.pointer_up(POINTER_ID);
                log::info!("[script] released at t={:.3}s", t);
                self.phase = Phase::Done;
            }
            Phase::Holding => {
                let local = t - self.script.start;
                let angle = self.script.amplitude
                    * (std::f64::consts::TAU * self.script.frequency * local).sin();
                let pos = self.pointer_for(session, angle);
                session.pointer_move(POINTER_ID, pos);
            }
        }
    }

    fn pointer_for<E: PendulumEngine>(&self, session: &Session<E>, angle: f64) -> DVec2 {
        let mapper = session.mapper();
        let params = session.params();
        let (support, arm) = match self.script.target {
            DragTarget::Bob2 => (bob_pixels(session).0, params.l2),
            _ => (mapper.origin(), params.l1),
        };
        // Arm angle is atan2(dx, dy) with +y down, so sin goes to x and cos to y.
        let r = arm * mapper.pixels_per_meter();
        support + DVec2::new(r * angle.sin(), r * angle.cos())
    }
}

fn bob_pixels<E: PendulumEngine>(session: &Session<E>) -> (DVec2, DVec2) {
    session.mapper().bob_pixels(&session.snapshot().positions)
}
