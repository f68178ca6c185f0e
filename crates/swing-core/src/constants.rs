// Shared simulation and interaction tuning constants used by both web and native frontends.

// Fixed-step timing
pub const FIXED_TICK_SEC: f64 = 1.0 / 240.0; // physics step, independent of display refresh
pub const MAX_FRAME_DELTA_SEC: f64 = 1.0 / 15.0; // clamp after suspend / tab-out
pub const MAX_TICKS_PER_FRAME: u32 = 8; // bound on catch-up work per render callback
pub const ENGINE_MAX_DT_SEC: f64 = 1.0 / 15.0; // the integrator refuses larger steps

// Drag angular-velocity estimator
pub const FILTER_ALPHA: f64 = 0.18; // new = α*raw + (1-α)*old
pub const OMEGA_MAX: f64 = 15.0; // rad/s clamp on the raw derivative
pub const DRAG_DEADBAND: f64 = 0.05; // rad/s, bob1 drag path only

// Viewport mapping
pub const VIEW_MARGIN_PX: f64 = 32.0; // padding inside the viewport
pub const MIN_SCALE_DENOM: f64 = 0.1; // keeps pixels-per-meter finite as arms shrink

// Bob sizing (pixels)
pub const BOB_RADIUS_BASE_PX: f64 = 6.0;
pub const BOB_RADIUS_PER_SQRT_KG: f64 = 5.0;
pub const BOB_RADIUS_MIN_PX: f64 = 10.0;
pub const BOB_RADIUS_MAX_PX: f64 = 40.0;
pub const GRAB_RADIUS_MIN_PX: f64 = 6.0;
pub const GRAB_SLACK_PX: f64 = 50.0; // generous target acquisition

// Default physical parameters
pub const DEFAULT_L1: f64 = 2.0;
pub const DEFAULT_L2: f64 = 2.0;
pub const DEFAULT_M1: f64 = 1.0;
pub const DEFAULT_M2: f64 = 1.0;
pub const DEFAULT_GRAVITY: f64 = 9.80665;
pub const DEFAULT_DAMPING: f64 = 0.02;

// Dynamic state used at startup and on reset
pub const RESET_THETA1: f64 = -0.1;
pub const RESET_OMEGA1: f64 = 0.0;
pub const RESET_THETA2: f64 = 0.0;
pub const RESET_OMEGA2: f64 = 0.0;

// Parameter entry ranges (inclusive)
pub const LENGTH_RANGE: (f64, f64) = (0.1, 50.0);
pub const MASS_RANGE: (f64, f64) = (0.01, 100.0);
pub const GRAVITY_RANGE: (f64, f64) = (0.0, 50.0);
pub const DAMPING_RANGE: (f64, f64) = (0.0, 5.0);

// Energy bar falls back to an even split below this total
pub const ENERGY_BAR_MIN_TOTAL: f64 = 1e-3;
