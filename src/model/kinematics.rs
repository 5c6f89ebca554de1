//! Per-frame motion of the voice coil and diaphragm.

/*
Coil Motion
===========

The coil is modelled as a rigid ring that moves vertically on a sinusoid:

    s(t)    = A × sin(2π × f × t)
    y_coil  = coil_height / 2 + s(t)

The diaphragm is a triangle whose outer corners ride on the coil and whose
apex moves twice as far, which exaggerates the cone flexing:

    (-r, y_coil)   (0, 0.15 + 2 s(t))   (r, y_coil)

Animation Timing
----------------

Real audio frequencies are far too fast to watch, so the animation runs on a
slowed clock. The timer fires every 50 ms and cycles through 200 frames:

    t          = frame / 20
    A          = 0.005 × (voltage / 5)
    speed      = max(1, frequency / 100)
    f_anim     = frequency × speed / 50

Higher tones therefore still look faster, but stay within what a 20 fps
animation can draw.
*/

use std::f64::consts::TAU;

use super::dimensions::{Circle, Polygon, SpeakerDimensions, SpeakerShapes, DIAPHRAGM_APEX};
use crate::params::DriveParams;

/// Animation timer interval in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 50;
/// Number of frames before the animation loops.
pub const FRAME_COUNT: u32 = 200;
/// Frames per second of simulated time.
pub const FRAMES_PER_SECOND: f64 = 20.0;

/// Coil excursion in metres at the reference voltage.
const AMPLITUDE_PER_REFERENCE: f64 = 0.005;
const REFERENCE_VOLTS: f64 = 5.0;

/// Simulated time for an animation frame.
#[inline]
pub fn frame_time(frame: u32) -> f64 {
    frame as f64 / FRAMES_PER_SECOND
}

/// Coil excursion for a drive voltage.
#[inline]
pub fn drive_amplitude(voltage: f64) -> f64 {
    AMPLITUDE_PER_REFERENCE * (voltage / REFERENCE_VOLTS)
}

#[inline]
pub fn speed_factor(frequency: f64) -> f64 {
    (frequency / 100.0).max(1.0)
}

/// Slowed-down frequency the animation oscillates at.
#[inline]
pub fn animation_frequency(frequency: f64) -> f64 {
    frequency * speed_factor(frequency) / 50.0
}

/// Coil offset from rest: `amplitude × sin(2π f t)`.
#[inline]
pub fn coil_displacement(amplitude: f64, frequency: f64, time: f64) -> f64 {
    amplitude * (TAU * frequency * time).sin()
}

/// Snapshot of the moving parts after one animation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    pub time: f64,
    pub amplitude: f64,
    pub frequency: f64,
    /// Coil offset from rest.
    pub displacement: f64,
    pub coil: Circle,
    pub diaphragm: Polygon<3>,
}

impl FrameState {
    /// Coil position normalised to `[-1, 1]`; zero when there is no drive.
    pub fn drive(&self) -> f64 {
        if self.amplitude > 0.0 {
            self.displacement / self.amplitude
        } else {
            0.0
        }
    }
}

pub struct SpeakerModel {
    dims: SpeakerDimensions,
    shapes: SpeakerShapes,
}

impl SpeakerModel {
    pub fn new(dims: SpeakerDimensions) -> Self {
        Self {
            dims,
            shapes: SpeakerShapes::new(&dims),
        }
    }

    pub fn dimensions(&self) -> &SpeakerDimensions {
        &self.dims
    }

    /// Current shapes; coil and diaphragm reflect the last update.
    pub fn shapes(&self) -> &SpeakerShapes {
        &self.shapes
    }

    /// Move the coil and diaphragm to their position at `time`.
    pub fn update_position(
        &mut self,
        amplitude: f64,
        frequency: f64,
        time: f64,
    ) -> (Circle, Polygon<3>) {
        let offset = coil_displacement(amplitude, frequency, time);
        let y_coil = self.dims.coil_rest() + offset;
        let r = self.dims.diaphragm_radius;

        self.shapes.coil.x = 0.0;
        self.shapes.coil.y = y_coil;
        self.shapes.diaphragm = Polygon::new([
            (-r, y_coil),
            (0.0, DIAPHRAGM_APEX + 2.0 * offset),
            (r, y_coil),
        ]);

        (self.shapes.coil, self.shapes.diaphragm)
    }

    /// Advance to animation frame `frame` using the current slider values.
    pub fn tick(&mut self, frame: u32, params: &DriveParams) -> FrameState {
        let time = frame_time(frame);
        let amplitude = drive_amplitude(params.volts() as f64);
        let frequency = animation_frequency(params.frequency_hz() as f64);

        let (coil, diaphragm) = self.update_position(amplitude, frequency, time);

        FrameState {
            time,
            amplitude,
            frequency,
            displacement: coil.y - self.dims.coil_rest(),
            coil,
            diaphragm,
        }
    }
}

impl Default for SpeakerModel {
    fn default() -> Self {
        Self::new(SpeakerDimensions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_scaling() {
        assert!((frame_time(30) - 1.5).abs() < 1e-12);
        assert!((drive_amplitude(5.0) - 0.005).abs() < 1e-12);
        assert!((drive_amplitude(20.0) - 0.02).abs() < 1e-12);
        assert_eq!(speed_factor(50.0), 1.0);
        assert_eq!(speed_factor(440.0), 4.4);
        assert!((animation_frequency(50.0) - 1.0).abs() < 1e-12);
        assert!((animation_frequency(440.0) - 38.72).abs() < 1e-9);
    }

    #[test]
    fn coil_offset_is_sinusoid() {
        let mut model = SpeakerModel::default();
        let (coil, _) = model.update_position(0.01, 2.0, 0.125);
        // sin(2π · 2 · 0.125) = sin(π/2) = 1
        assert!((coil.y - (0.005 + 0.01)).abs() < 1e-12);

        let (coil, _) = model.update_position(0.01, 2.0, 0.375);
        assert!((coil.y - (0.005 - 0.01)).abs() < 1e-12);
    }

    #[test]
    fn coil_offset_has_zero_mean() {
        let amplitude = 0.004;
        let frequency = 3.0;
        let samples = 3000;
        let period = 1.0 / frequency;

        let mean = (0..samples)
            .map(|i| coil_displacement(amplitude, frequency, period * i as f64 / samples as f64))
            .sum::<f64>()
            / samples as f64;
        assert!(mean.abs() < 1e-12, "mean {mean}");

        let peak = (0..samples)
            .map(|i| coil_displacement(amplitude, frequency, period * i as f64 / samples as f64))
            .fold(0.0f64, |acc, x| acc.max(x.abs()));
        assert!((peak - amplitude).abs() < 1e-9);
    }

    #[test]
    fn diaphragm_follows_coil() {
        let mut model = SpeakerModel::default();
        let (coil, diaphragm) = model.update_position(0.01, 2.0, 0.125);

        let [left, apex, right] = diaphragm.vertices;
        assert_eq!(left, (-0.1, coil.y));
        assert_eq!(right, (0.1, coil.y));
        assert!((apex.1 - (0.15 + 0.02)).abs() < 1e-12);
        assert_eq!(model.shapes().coil, coil);
    }

    #[test]
    fn tick_at_frame_zero_is_at_rest() {
        let mut model = SpeakerModel::default();
        let state = model.tick(0, &DriveParams::default());

        assert_eq!(state.time, 0.0);
        assert!(state.displacement.abs() < 1e-12);
        assert!((state.coil.y - 0.005).abs() < 1e-12);
        assert!(state.drive().abs() < 1e-9);
    }

    #[test]
    fn tick_uses_slider_values() {
        let mut model = SpeakerModel::default();
        let params = DriveParams::default().with_frequency(50.0).with_voltage(10.0);
        // 50 Hz animates at 1 Hz; frame 5 is t = 0.25 s, the top of the swing
        let state = model.tick(5, &params);

        assert!((state.amplitude - 0.01).abs() < 1e-9);
        assert!((state.frequency - 1.0).abs() < 1e-9);
        assert!((state.displacement - 0.01).abs() < 1e-9);
        assert!((state.drive() - 1.0).abs() < 1e-6);
    }
}
