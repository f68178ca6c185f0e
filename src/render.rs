use crate::constants::*;
use glam::DVec2;
use swing_core::{bob_radius_px, BobPositions, CoordinateMapper, SimParams, Viewport};
use web_sys as web;

/// Everything one canvas paint needs, read out of the session beforehand so
/// no borrow is held while drawing.
pub struct Scene {
    pub viewport: Viewport,
    pub mapper: CoordinateMapper,
    pub params: SimParams,
    pub positions: BobPositions,
    pub halt_message: Option<String>,
}

/// Round to the pixel grid and offset by half a pixel for crisp 1-2 px lines.
#[inline]
fn snap(p: DVec2) -> DVec2 {
    DVec2::new(p.x.round() + 0.5, p.y.round() + 0.5)
}

pub fn draw(ctx: &web::CanvasRenderingContext2d, scene: &Scene) {
    ctx.clear_rect(0.0, 0.0, scene.viewport.width, scene.viewport.height);

    let p0 = snap(scene.mapper.origin());
    let (p1, p2) = scene.mapper.bob_pixels(&scene.positions);
    let (p1, p2) = (snap(p1), snap(p2));

    ctx.set_line_width(ROD_WIDTH_PX);
    ctx.set_stroke_style_str(ROD_COLOR);
    ctx.begin_path();
    ctx.move_to(p0.x, p0.y);
    ctx.line_to(p1.x, p1.y);
    ctx.line_to(p2.x, p2.y);
    ctx.stroke();

    filled_circle(ctx, p0, PIVOT_RADIUS_PX, PIVOT_COLOR);
    filled_circle(ctx, p1, bob_radius_px(scene.params.m1), BOB1_COLOR);
    filled_circle(ctx, p2, bob_radius_px(scene.params.m2), BOB2_COLOR);

    if let Some(msg) = &scene.halt_message {
        ctx.set_fill_style_str(HALT_BANNER_COLOR);
        ctx.set_font(HALT_BANNER_FONT);
        ctx.set_text_align("center");
        _ = ctx.fill_text(msg, scene.viewport.width * 0.5, HALT_BANNER_OFFSET_PX);
    }
}

fn filled_circle(ctx: &web::CanvasRenderingContext2d, p: DVec2, r: f64, fill: &str) {
    ctx.begin_path();
    _ = ctx.arc(p.x, p.y, r, 0.0, std::f64::consts::TAU);
    ctx.set_fill_style_str(fill);
    ctx.fill();
    ctx.set_line_width(OUTLINE_WIDTH_PX);
    ctx.set_stroke_style_str(OUTLINE_COLOR);
    ctx.stroke();
}
