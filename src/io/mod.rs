// Purpose - external interfaces: the live output stream and offline rendering

pub mod bounce;
#[cfg(feature = "rtrb")]
pub mod output;

pub use bounce::bounce_to_wav;
#[cfg(feature = "rtrb")]
pub use output::ToneOutput;
