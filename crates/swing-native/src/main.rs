use anyhow::{bail, Context, Result};
use clap::Parser;
use instant::Instant;
use rand::prelude::*;
use std::time::Duration;
use swing_core::{format_readout, DriverConfig, PendulumState, Session, SimParams};

mod script;

use script::{DragPlayer, DragScript, DragTarget};

#[derive(Parser, Debug)]
#[command(
    name = "swing-native",
    about = "Run the double pendulum headless on a synthetic frame clock"
)]
struct Args {
    /// Simulated run length in seconds
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,

    /// Nominal render frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Frame period jitter as a fraction of the period (0 disables)
    #[arg(long, default_value_t = 0.0)]
    jitter: f64,

    /// Inject a 250 ms stall every N frames (0 disables)
    #[arg(long, default_value_t = 0)]
    stall_every: u64,

    /// RNG seed for frame jitter
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Canvas size in CSS pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Bob to grab with the scripted pointer
    #[arg(long, value_enum, default_value_t = DragTarget::None)]
    drag: DragTarget,

    /// When the scripted grab starts, seconds
    #[arg(long, default_value_t = 1.0)]
    drag_start: f64,

    /// How long the scripted grab is held, seconds
    #[arg(long, default_value_t = 2.0)]
    drag_seconds: f64,

    /// Scripted swing amplitude in degrees
    #[arg(long, default_value_t = 45.0)]
    drag_amplitude: f64,

    /// Scripted swing frequency, Hz
    #[arg(long, default_value_t = 0.5)]
    drag_hz: f64,

    /// Seconds between readout log lines
    #[arg(long, default_value_t = 1.0)]
    log_interval: f64,

    #[arg(long)]
    l1: Option<f64>,
    #[arg(long)]
    l2: Option<f64>,
    #[arg(long)]
    m1: Option<f64>,
    #[arg(long)]
    m2: Option<f64>,
    #[arg(long)]
    g: Option<f64>,
    #[arg(long)]
    damping: Option<f64>,
}

impl Args {
    fn params(&self) -> Result<SimParams> {
        let d = SimParams::default();
        let entered = SimParams {
            l1: self.l1.unwrap_or(d.l1),
            l2: self.l2.unwrap_or(d.l2),
            m1: self.m1.unwrap_or(d.m1),
            m2: self.m2.unwrap_or(d.m2),
            g: self.g.unwrap_or(d.g),
            damping: self.damping.unwrap_or(d.damping),
        };
        entered.clamped().context("invalid parameter override")
    }

    fn drag_script(&self) -> DragScript {
        DragScript {
            target: self.drag,
            start: self.drag_start,
            duration: self.drag_seconds,
            amplitude: self.drag_amplitude.to_radians(),
            frequency: self.drag_hz,
        }
    }
}

/// Synthetic frame clock: nominal period with optional seeded jitter and stalls.
struct FrameClock {
    period: f64,
    jitter: f64,
    stall_every: u64,
    rng: StdRng,
    frames: u64,
}

impl FrameClock {
    const STALL_SEC: f64 = 0.25;

    fn next_delta(&mut self) -> f64 {
        self.frames += 1;
        if self.stall_every > 0 && self.frames % self.stall_every == 0 {
            return Self::STALL_SEC;
        }
        if self.jitter > 0.0 {
            let j = self.rng.gen_range(-self.jitter..=self.jitter);
            (self.period * (1.0 + j)).max(0.0)
        } else {
            self.period
        }
    }
}

#[derive(Default)]
struct RunStats {
    frames: u64,
    ticks: u64,
    capped_frames: u64,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    if !(args.fps.is_finite() && args.fps > 0.0) {
        bail!("--fps must be positive, got {}", args.fps);
    }
    let params = args.params()?;
    log::info!("[native] {:?}", params);

    let mut session = Session::native(params, PendulumState::resting(), DriverConfig::default());
    session.set_viewport(args.width, args.height);

    let mut clock = FrameClock {
        period: 1.0 / args.fps,
        jitter: args.jitter.clamp(0.0, 1.0),
        stall_every: args.stall_every,
        rng: StdRng::seed_from_u64(args.seed),
        frames: 0,
    };
    let mut player = DragPlayer::new(args.drag_script());
    let mut stats = RunStats::default();

    let mut now = Instant::now();
    let mut sim_time = 0.0;
    let mut next_log = 0.0;
    // Prime the frame clock so the first real frame sees a proper delta.
    session.frame(now)?;

    while sim_time < args.seconds {
        player.drive(&mut session, sim_time);

        let dt = clock.next_delta();
        now += Duration::from_secs_f64(dt);
        sim_time += dt;

        let report = session
            .frame(now)
            .with_context(|| format!("simulation halted at t={:.3}s", sim_time))?;
        stats.frames += 1;
        stats.ticks += u64::from(report.ticks);
        if report.capped {
            stats.capped_frames += 1;
        }

        if args.log_interval > 0.0 && sim_time >= next_log {
            log::info!(
                "[native] t={:.2}s\n{}",
                sim_time,
                format_readout(session.params(), &session.snapshot())
            );
            next_log += args.log_interval;
        }
    }

    let snap = session.snapshot();
    log::info!(
        "[native] done: frames={} ticks={} capped_frames={} total_energy={:.4}",
        stats.frames,
        stats.ticks,
        stats.capped_frames,
        snap.energy.total()
    );
    Ok(())
}
