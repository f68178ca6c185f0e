use crate::overlay;
use crate::render;
use crate::SharedSession;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use swing_core::SessionStatus;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: SharedSession,
    pub ctx: web::CanvasRenderingContext2d,
    pub document: web::Document,
    /// Set once the halt message has been pushed to the status line.
    pub halt_reported: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let result = self.session.borrow_mut().frame(Instant::now());
        if let Err(e) = &result {
            if !self.halt_reported {
                crate::controls::set_status(
                    &self.document,
                    &format!("Simulation halted: {}", e),
                    crate::constants::STATUS_ERROR_CLASS,
                );
                self.halt_reported = true;
            }
        }

        let (scene, params, snap) = {
            let s = self.session.borrow();
            let snap = s.snapshot();
            let halt_message = match &snap.status {
                SessionStatus::Halted(e) => Some(format!("Simulation halted: {}", e)),
                SessionStatus::Running => None,
            };
            let scene = render::Scene {
                viewport: s.viewport(),
                mapper: s.mapper(),
                params: *s.params(),
                positions: snap.positions,
                halt_message,
            };
            (scene, *s.params(), snap)
        };

        render::draw(&self.ctx, &scene);
        overlay::update(&self.document, &params, &snap);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
