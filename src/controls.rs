use crate::constants::*;
use crate::dom;
use crate::SharedSession;
use swing_core::{ControlOutcome, SimError, SimParams};
use web_sys as web;

pub fn wire_control_buttons(document: &web::Document, session: &SharedSession) {
    let s = session.clone();
    dom::add_click_listener(document, APPLY_BUTTON_ID, move || {
        if let Some(doc) = dom::window_document() {
            apply(&doc, &s);
        }
    });

    let s = session.clone();
    dom::add_click_listener(document, DEFAULTS_BUTTON_ID, move || {
        if let Some(doc) = dom::window_document() {
            restore_defaults(&doc, &s);
        }
    });

    let s = session.clone();
    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        if let Some(doc) = dom::window_document() {
            reset(&doc, &s);
        }
    });
}

pub fn apply(document: &web::Document, session: &SharedSession) {
    let entered = match read_params(document) {
        Ok(p) => p,
        Err(e) => {
            set_status(document, &format!("Invalid input: {}", e), STATUS_ERROR_CLASS);
            return;
        }
    };
    let result = session.borrow_mut().apply_params(entered);
    match result {
        Ok(ControlOutcome::Applied) => {
            let params = *session.borrow().params();
            write_params(document, &params);
            set_status(document, "Applied parameters.", STATUS_OK_CLASS);
        }
        Ok(other) => report_ignored(document, other),
        Err(e) => set_status(document, &format!("Invalid input: {}", e), STATUS_ERROR_CLASS),
    }
}

pub fn restore_defaults(document: &web::Document, session: &SharedSession) {
    let outcome = session.borrow_mut().restore_defaults();
    if outcome == ControlOutcome::Applied {
        write_params(document, &SimParams::default());
        set_status(document, "Restored default parameters.", STATUS_OK_CLASS);
    } else {
        report_ignored(document, outcome);
    }
}

pub fn reset(document: &web::Document, session: &SharedSession) {
    let outcome = session.borrow_mut().reset();
    if outcome == ControlOutcome::Applied {
        set_status(document, "Reset animation.", STATUS_OK_CLASS);
    } else {
        report_ignored(document, outcome);
    }
}

fn report_ignored(document: &web::Document, outcome: ControlOutcome) {
    match outcome {
        ControlOutcome::IgnoredWhileDragging => {
            set_status(document, "Release the bob first.", STATUS_WARN_CLASS)
        }
        ControlOutcome::IgnoredWhileHalted => set_status(
            document,
            "Simulation halted; reload the page.",
            STATUS_ERROR_CLASS,
        ),
        ControlOutcome::Applied => {}
    }
}

pub fn set_status(document: &web::Document, msg: &str, kind: &str) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        el.set_text_content(Some(msg));
        el.set_class_name(&format!("status {}", kind));
    }
}

/// Fill the number inputs from `params`.
pub fn write_params(document: &web::Document, params: &SimParams) {
    for (id, value) in param_fields(params) {
        if let Some(input) = dom::input_by_id(document, id) {
            input.set_value(&format!("{}", value));
        }
    }
}

fn read_params(document: &web::Document) -> Result<SimParams, SimError> {
    Ok(SimParams {
        l1: read_field(document, INPUT_L1_ID, "l1")?,
        l2: read_field(document, INPUT_L2_ID, "l2")?,
        m1: read_field(document, INPUT_M1_ID, "m1")?,
        m2: read_field(document, INPUT_M2_ID, "m2")?,
        g: read_field(document, INPUT_G_ID, "g")?,
        damping: read_field(document, INPUT_DAMPING_ID, "damping")?,
    })
}

fn read_field(document: &web::Document, id: &str, field: &'static str) -> Result<f64, SimError> {
    let value = dom::input_by_id(document, id)
        .map(|input| input.value_as_number())
        .unwrap_or(f64::NAN);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::InvalidParams { field, value })
    }
}

fn param_fields(p: &SimParams) -> [(&'static str, f64); 6] {
    [
        (INPUT_L1_ID, p.l1),
        (INPUT_L2_ID, p.l2),
        (INPUT_M1_ID, p.m1),
        (INPUT_M2_ID, p.m2),
        (INPUT_G_ID, p.g),
        (INPUT_DAMPING_ID, p.damping),
    ]
}
