//! Low-level tone generation used by the live output stream and the offline
//! renderer.
//!
//! The oscillator is allocation-free and realtime-safe, so it can be owned by
//! the audio callback directly. Parameter changes arrive through
//! [`crate::message::ToneMessage`] rather than shared mutable state.

/// Continuous sine oscillator driven by frequency and voltage.
pub mod oscillator;

pub use oscillator::ToneOscillator;
