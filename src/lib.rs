pub mod dsp; // Tone oscillator
pub mod error;
pub mod io;
pub mod message;
pub mod model; // Driver geometry, motion and field
pub mod params;

pub use error::{Result, SimError};

pub const MAX_BLOCK_SIZE: usize = 2048;
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
