//! Physical <-> viewport pixel mapping.
//!
//! Physical coordinates are meters with the pivot at the origin and +y
//! pointing down. Pixel coordinates share the +y-down convention, so the
//! mapping is a uniform scale plus a translation to the viewport center and
//! never flips an axis.

use crate::constants::{
    BOB_RADIUS_BASE_PX, BOB_RADIUS_MAX_PX, BOB_RADIUS_MIN_PX, BOB_RADIUS_PER_SQRT_KG,
    GRAB_RADIUS_MIN_PX, GRAB_SLACK_PX, MIN_SCALE_DENOM, VIEW_MARGIN_PX,
};
use crate::engine::BobPositions;
use crate::filter::normalize_angle;
use crate::params::SimParams;
use glam::DVec2;

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 800.0)
    }
}

pub fn pixels_per_meter(params: &SimParams, width: f64, height: f64, margin: f64) -> f64 {
    let usable_half = 0.5 * (width.min(height) - 2.0 * margin);
    usable_half.max(MIN_SCALE_DENOM) / params.total_length().max(MIN_SCALE_DENOM)
}

/// Forward mapping for one frame's params and viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    origin: DVec2,
    ppm: f64,
}

impl CoordinateMapper {
    pub fn new(params: &SimParams, viewport: Viewport) -> Self {
        Self::with_margin(params, viewport, VIEW_MARGIN_PX)
    }

    pub fn with_margin(params: &SimParams, viewport: Viewport, margin: f64) -> Self {
        Self {
            origin: viewport.center(),
            ppm: pixels_per_meter(params, viewport.width, viewport.height, margin),
        }
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn pixels_per_meter(&self) -> f64 {
        self.ppm
    }

    pub fn to_pixels(&self, physical: DVec2) -> DVec2 {
        self.origin + physical * self.ppm
    }

    pub fn bob_pixels(&self, positions: &BobPositions) -> (DVec2, DVec2) {
        (
            self.to_pixels(positions.bob1()),
            self.to_pixels(positions.bob2()),
        )
    }
}

/// Arm angle from the downward vertical for a pointer held at `pointer`
/// around `support`, both in pixels.
pub fn angle_about(support: DVec2, pointer: DVec2) -> f64 {
    let d = pointer - support;
    normalize_angle(d.x.atan2(d.y))
}

pub fn bob_radius_px(mass: f64) -> f64 {
    (BOB_RADIUS_BASE_PX + BOB_RADIUS_PER_SQRT_KG * mass.sqrt())
        .clamp(BOB_RADIUS_MIN_PX, BOB_RADIUS_MAX_PX)
}

/// Hit radius for grabbing a bob: its size plus a fixed slack.
pub fn grab_radius_px(mass: f64) -> f64 {
    let size = (BOB_RADIUS_BASE_PX + BOB_RADIUS_PER_SQRT_KG * mass.sqrt())
        .clamp(GRAB_RADIUS_MIN_PX, BOB_RADIUS_MAX_PX);
    GRAB_SLACK_PX + size
}
