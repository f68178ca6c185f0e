//! Single-pointer grab tracking.
//!
//! At most one pointer drives the pendulum at a time. Events from any other
//! pointer id are ignored, and a grab only ends through an explicit
//! up/cancel/leave for the captured id.

use crate::filter::AngleFilter;
use glam::DVec2;

pub type PointerId = i32;

/// Which bob, if any, is kinematically held by the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Grab {
    #[default]
    None,
    Bob1,
    Bob2,
}

impl Grab {
    pub fn is_active(self) -> bool {
        self != Grab::None
    }

    pub fn label(self) -> &'static str {
        match self {
            Grab::None => "none",
            Grab::Bob1 => "Bob 1",
            Grab::Bob2 => "Bob 2",
        }
    }
}

/// How a captured pointer went away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerRelease {
    Up,
    Cancel,
    Leave,
}

/// Bob pixel positions and grab radii at the moment of a pointer-down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitTest {
    pub bob1: DVec2,
    pub bob2: DVec2,
    pub grab_radius1: f64,
    pub grab_radius2: f64,
}

impl HitTest {
    /// Bob 2 is drawn on top and wins whenever both radii contain `pos`.
    pub fn pick(&self, pos: DVec2) -> Grab {
        if pos.distance(self.bob2) <= self.grab_radius2 {
            Grab::Bob2
        } else if pos.distance(self.bob1) <= self.grab_radius1 {
            Grab::Bob1
        } else {
            Grab::None
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
    grabbed: Grab,
    pointer_id: Option<PointerId>,
    last_pointer_pos: Option<DVec2>,
    pub filter: AngleFilter,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grabbed(&self) -> Grab {
        self.grabbed
    }

    pub fn is_idle(&self) -> bool {
        !self.grabbed.is_active()
    }

    pub fn pointer_id(&self) -> Option<PointerId> {
        self.pointer_id
    }

    pub fn last_pointer_pos(&self) -> Option<DVec2> {
        self.last_pointer_pos
    }

    /// Try to start a grab. Returns the bob grabbed, or `None` when a grab
    /// is already active or nothing is under the pointer.
    pub fn pointer_down(&mut self, id: PointerId, pos: DVec2, hit: &HitTest) -> Option<Grab> {
        if self.grabbed.is_active() {
            log::debug!("[drag] pointer {} ignored; {} already held", id, self.grabbed.label());
            return None;
        }
        let target = hit.pick(pos);
        if !target.is_active() {
            return None;
        }
        self.grabbed = target;
        self.pointer_id = Some(id);
        self.last_pointer_pos = Some(pos);
        self.filter.reset();
        log::info!("[drag] grab {} with pointer {}", target.label(), id);
        Some(target)
    }

    /// Track the captured pointer. Moves from other pointers are no-ops.
    pub fn pointer_move(&mut self, id: PointerId, pos: DVec2) -> bool {
        if !self.grabbed.is_active() || self.pointer_id != Some(id) {
            return false;
        }
        self.last_pointer_pos = Some(pos);
        true
    }

    pub fn pointer_release(&mut self, id: PointerId, how: PointerRelease) -> bool {
        if !self.grabbed.is_active() || self.pointer_id != Some(id) {
            return false;
        }
        log::info!("[drag] release {} ({:?})", self.grabbed.label(), how);
        self.grabbed = Grab::None;
        self.pointer_id = None;
        self.last_pointer_pos = None;
        self.filter.reset();
        true
    }
}
