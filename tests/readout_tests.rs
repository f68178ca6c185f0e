// Host-side tests for the text readout and energy bar.

use std::f64::consts::PI;
use swing_core::{
    format_readout, rad_to_deg, BobPositions, EnergyBar, EnergyBreakdown, Grab, PendulumState,
    SessionStatus, SimError, SimParams, Snapshot,
};

fn snapshot(grabbed: Grab, status: SessionStatus) -> Snapshot {
    Snapshot {
        positions: BobPositions {
            x1: 0.5,
            y1: 1.9,
            x2: -0.25,
            y2: 3.5,
        },
        state: PendulumState::new(PI / 6.0, 0.25, -PI / 4.0, -1.5),
        energy: EnergyBreakdown {
            kinetic: 3.0,
            potential: 1.0,
        },
        grabbed,
        status,
    }
}

#[test]
fn degrees_conversion() {
    assert!((rad_to_deg(PI) - 180.0).abs() < 1e-12);
    assert!((rad_to_deg(-PI / 2.0) + 90.0).abs() < 1e-12);
}

#[test]
fn energy_bar_splits_total() {
    let bar = EnergyBar::from_energy(&EnergyBreakdown {
        kinetic: 3.0,
        potential: 1.0,
    });
    assert!((bar.kinetic_frac - 0.75).abs() < 1e-12);
    assert!((bar.potential_frac - 0.25).abs() < 1e-12);
    assert!((bar.kinetic_percent() + bar.potential_percent() - 100.0).abs() < 1e-9);
}

#[test]
fn energy_bar_falls_back_to_even_split_near_rest() {
    for e in [
        EnergyBreakdown::default(),
        EnergyBreakdown {
            kinetic: 0.0005,
            potential: 0.0004,
        },
        EnergyBreakdown {
            kinetic: 0.0,
            potential: 1e-3,
        },
    ] {
        let bar = EnergyBar::from_energy(&e);
        assert_eq!(bar.kinetic_frac, 0.5);
        assert_eq!(bar.potential_frac, 0.5);
    }
}

#[test]
fn readout_shows_degrees_and_energies() {
    let text = format_readout(
        &SimParams::default(),
        &snapshot(Grab::None, SessionStatus::Running),
    );
    assert!(text.contains("θ1: 30.00 deg"), "{}", text);
    assert!(text.contains("θ2: -45.00 deg"), "{}", text);
    assert!(text.contains("ω2: -1.500 rad/s"), "{}", text);
    assert!(text.contains("Total Energy (J): 4.0000"));
    assert!(text.contains("Kinetic Energy (J): 3.0000"));
    assert!(text.contains("Potential Energy (J): 1.0000"));
    assert!(text.contains("Currently dragging: none"));
    assert!(!text.contains("HALTED"));
}

#[test]
fn readout_flips_y_so_up_is_positive() {
    let text = format_readout(
        &SimParams::default(),
        &snapshot(Grab::None, SessionStatus::Running),
    );
    assert!(text.contains("x1: 0.500  y1: -1.900"), "{}", text);
    assert!(text.contains("x2: -0.250  y2: -3.500"), "{}", text);
}

#[test]
fn readout_names_the_held_bob() {
    let text = format_readout(
        &SimParams::default(),
        &snapshot(Grab::Bob2, SessionStatus::Running),
    );
    assert!(text.ends_with("Currently dragging: Bob 2"), "{}", text);
}

#[test]
fn readout_reports_halt() {
    let halted = SessionStatus::Halted(SimError::EngineDiverged { what: "state" });
    let text = format_readout(&SimParams::default(), &snapshot(Grab::None, halted));
    assert!(text.contains("HALTED: engine diverged: non-finite state"), "{}", text);
}

#[test]
fn readout_lists_parameters() {
    let text = format_readout(
        &SimParams::default(),
        &snapshot(Grab::Bob1, SessionStatus::Running),
    );
    assert!(text.starts_with("L1=2.00  L2=2.00  M1=1.00  M2=1.00"), "{}", text);
    assert!(text.contains("g=9.807  damping=0.020"));
}
