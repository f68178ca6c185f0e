pub mod clock;
pub mod constants;
pub mod drag;
pub mod driver;
pub mod engine;
pub mod error;
pub mod filter;
pub mod integrator;
pub mod params;
pub mod readout;
pub mod session;
pub mod viewport;

pub use clock::*;
pub use constants::*;
pub use drag::*;
pub use driver::{advance, DriverConfig, FrameReport};
pub use engine::*;
pub use error::*;
pub use filter::*;
pub use integrator::*;
pub use params::*;
pub use readout::*;
pub use session::*;
pub use viewport::*;
