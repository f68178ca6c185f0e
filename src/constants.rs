/// Canvas drawing and DOM wiring constants for the web front-end.
///
/// Physics and driver tuning lives in `swing_core::constants`; this file only
/// holds what the browser side needs to paint and find its elements.
// Canvas element that receives pointer input and the 2D drawing
pub const CANVAS_ID: &str = "app-canvas";

// Parameter inputs (number fields), in SimParams field order
pub const INPUT_L1_ID: &str = "l1";
pub const INPUT_L2_ID: &str = "l2";
pub const INPUT_M1_ID: &str = "m1";
pub const INPUT_M2_ID: &str = "m2";
pub const INPUT_G_ID: &str = "g";
pub const INPUT_DAMPING_ID: &str = "damping";

// Buttons
pub const APPLY_BUTTON_ID: &str = "apply";
pub const DEFAULTS_BUTTON_ID: &str = "defaults";
pub const RESET_BUTTON_ID: &str = "reset";

// Text outputs
pub const READOUT_ID: &str = "readout";
pub const STATUS_ID: &str = "status";

// Energy bar segments
pub const KE_BAR_ID: &str = "keBar";
pub const PE_BAR_ID: &str = "peBar";
pub const ENERGY_DIVIDER_ID: &str = "eDivider";

// Geometry (CSS pixels)
pub const PIVOT_RADIUS_PX: f64 = 6.0;
pub const ROD_WIDTH_PX: f64 = 2.0;
pub const OUTLINE_WIDTH_PX: f64 = 2.0;

// Colors
pub const ROD_COLOR: &str = "#cbd5e1";
pub const OUTLINE_COLOR: &str = "rgb(255,255,255)";
pub const PIVOT_COLOR: &str = "#34d399";
pub const BOB1_COLOR: &str = "#7dd3fc";
pub const BOB2_COLOR: &str = "#fda4af";
pub const HALT_BANNER_COLOR: &str = "#f87171";
pub const HALT_BANNER_FONT: &str = "16px system-ui";
pub const HALT_BANNER_OFFSET_PX: f64 = 24.0; // from the top edge

// Status line CSS modifiers
pub const STATUS_OK_CLASS: &str = "ok";
pub const STATUS_WARN_CLASS: &str = "warn";
pub const STATUS_ERROR_CLASS: &str = "error";
