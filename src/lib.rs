#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use swing_core::{DriverConfig, PendulumState, RkEngine, Session, SimParams};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

pub(crate) type SharedSession = Rc<RefCell<Session<RkEngine>>>;

fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    session: &SharedSession,
) {
    let (w, h) = dom::sync_canvas_backing_size(canvas, ctx);
    session.borrow_mut().set_viewport(w, h);

    let canvas_resize = canvas.clone();
    let ctx_resize = ctx.clone();
    let session_resize = session.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize, &ctx_resize);
        session_resize.borrow_mut().set_viewport(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("swing-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = canvas.style().set_property("touch-action", "none");

    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let params = SimParams::default();
    let session: SharedSession = Rc::new(RefCell::new(Session::native(
        params,
        PendulumState::resting(),
        DriverConfig::default(),
    )));

    wire_canvas_resize(&canvas, &ctx, &session);
    controls::write_params(&document, &params);
    controls::wire_control_buttons(&document, &session);
    events::wire_global_keydown(session.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        session: session.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        ctx,
        document,
        halt_reported: false,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
