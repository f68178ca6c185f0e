use crate::input;
use crate::SharedSession;
use swing_core::PointerId;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: SharedSession,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_release(&w, "pointerup", |s, id| s.pointer_up(id));
    wire_release(&w, "pointercancel", |s, id| s.pointer_cancel(id));
    wire_release(&w, "pointerleave", |s, id| s.pointer_leave(id));
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let id: PointerId = ev.pointer_id();
        let grabbed = w.session.borrow_mut().pointer_down(id, pos);
        // Only a hit captures the pointer; a miss leaves the page scrollable.
        if grabbed.is_some() {
            _ = w.canvas.set_pointer_capture(id);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        if w.session.borrow_mut().pointer_move(ev.pointer_id(), pos) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_release(
    w: &InputWiring,
    event_name: &'static str,
    release: fn(&mut swing_core::Session<swing_core::RkEngine>, PointerId) -> bool,
) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let id = ev.pointer_id();
        let released = release(&mut w.session.borrow_mut(), id);
        if released {
            if w.canvas.has_pointer_capture(id) {
                _ = w.canvas.release_pointer_capture(id);
            }
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    closure.forget();
}
