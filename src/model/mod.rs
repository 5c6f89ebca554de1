//! Kinematic and field model of the driver.
//!
//! Everything here is evaluated once per animation tick from the same drive
//! parameters that feed the tone oscillator. Coordinates are in metres with
//! the magnet's bottom-centre at the origin and y pointing up.

/// Fixed driver geometry and the shapes it produces.
pub mod dimensions;
/// Approximate magnetic-field profile along the driver's width.
pub mod field;
/// Coil and diaphragm motion per animation frame.
pub mod kinematics;
/// Samples for the waveform plot.
pub mod waveform;

pub use dimensions::{Circle, Polygon, Rectangle, SpeakerDimensions, SpeakerShapes};
pub use field::FieldModel;
pub use kinematics::{FrameState, SpeakerModel};

/// Horizontal extent of the cross-section view.
pub const SCENE_X_BOUNDS: [f64; 2] = [-0.15, 0.15];
/// Vertical extent of the cross-section view.
pub const SCENE_Y_BOUNDS: [f64; 2] = [-0.02, 0.25];
