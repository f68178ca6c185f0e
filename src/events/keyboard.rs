use crate::controls;
use crate::SharedSession;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, session: &SharedSession) {
    // Typing into a parameter field must not reset the pendulum.
    let in_input = ev
        .target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .is_some();
    if in_input {
        return;
    }
    if let "r" | "R" = ev.key().as_str() {
        if let Some(doc) = crate::dom::window_document() {
            controls::reset(&doc, session);
            log::info!("[keys] reset");
        }
    }
}

pub fn wire_global_keydown(session: SharedSession) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &session);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
