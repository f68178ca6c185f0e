use crate::constants::*;
use crate::dom;
use swing_core::{format_readout, EnergyBar, SimParams, Snapshot};
use web_sys as web;

/// Refresh the text readout and the kinetic/potential energy bar.
pub fn update(document: &web::Document, params: &SimParams, snap: &Snapshot) {
    dom::set_text(document, READOUT_ID, &format_readout(params, snap));

    let bar = EnergyBar::from_energy(&snap.energy);
    let ke = bar.kinetic_percent();
    let pe = bar.potential_percent();
    dom::set_style(document, KE_BAR_ID, &format!("width:{:.2}%", ke));
    dom::set_style(document, PE_BAR_ID, &format!("width:{:.2}%", pe));
    dom::set_style(document, ENERGY_DIVIDER_ID, &format!("left:{:.2}%", ke));
}
