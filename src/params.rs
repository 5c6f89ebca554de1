//! Live drive parameters and the slider ranges that bound them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A bounded, stepped value (the model behind an on-screen slider).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    value: f32,
}

impl Slider {
    pub fn new(min: f32, max: f32, step: f32, initial: f32) -> Self {
        let mut slider = Self {
            min,
            max,
            step,
            value: min,
        };
        slider.set(initial);
        slider
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Clamp into range and snap to the nearest step counted from `min`.
    /// Non-finite input leaves the value unchanged.
    pub fn set(&mut self, value: f32) -> f32 {
        if !value.is_finite() {
            return self.value;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        // Round away float drift from the step multiplication (0.1 steps)
        let snapped = ((self.min + steps * self.step) * 1e4).round() / 1e4;
        self.value = snapped.clamp(self.min, self.max);
        self.value
    }

    pub fn increment(&mut self) -> f32 {
        self.set(self.value + self.step)
    }

    pub fn decrement(&mut self) -> f32 {
        self.set(self.value - self.step)
    }

    /// Position of the value within the range, 0.0 at `min` and 1.0 at `max`.
    pub fn fraction(&self) -> f64 {
        if self.max > self.min {
            ((self.value - self.min) / (self.max - self.min)) as f64
        } else {
            0.0
        }
    }
}

/// Frequency and voltage driving both the tone and the animation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveParams {
    pub frequency: Slider,
    pub voltage: Slider,
}

impl DriveParams {
    pub const FREQUENCY_MIN: f32 = 50.0;
    pub const FREQUENCY_MAX: f32 = 2000.0;
    pub const FREQUENCY_STEP: f32 = 10.0;
    pub const FREQUENCY_INIT: f32 = 440.0;

    pub const VOLTAGE_MIN: f32 = 0.1;
    pub const VOLTAGE_MAX: f32 = 20.0;
    pub const VOLTAGE_STEP: f32 = 0.1;
    pub const VOLTAGE_INIT: f32 = 5.0;

    pub fn new() -> Self {
        Self {
            frequency: Slider::new(
                Self::FREQUENCY_MIN,
                Self::FREQUENCY_MAX,
                Self::FREQUENCY_STEP,
                Self::FREQUENCY_INIT,
            ),
            voltage: Slider::new(
                Self::VOLTAGE_MIN,
                Self::VOLTAGE_MAX,
                Self::VOLTAGE_STEP,
                Self::VOLTAGE_INIT,
            ),
        }
    }

    pub fn with_frequency(mut self, hz: f32) -> Self {
        self.frequency.set(hz);
        self
    }

    pub fn with_voltage(mut self, volts: f32) -> Self {
        self.voltage.set(volts);
        self
    }

    pub fn frequency_hz(&self) -> f32 {
        self.frequency.value()
    }

    pub fn volts(&self) -> f32 {
        self.voltage.value()
    }
}

impl Default for DriveParams {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_slider_init() {
        let params = DriveParams::default();
        assert_eq!(params.frequency_hz(), 440.0);
        assert_eq!(params.volts(), 5.0);
    }

    #[test]
    fn set_clamps_to_range() {
        let mut params = DriveParams::default();
        assert_eq!(params.frequency.set(10.0), 50.0);
        assert_eq!(params.frequency.set(5000.0), 2000.0);
        assert_eq!(params.voltage.set(-3.0), 0.1);
        assert_eq!(params.voltage.set(25.0), 20.0);
    }

    #[test]
    fn set_snaps_to_step() {
        let mut freq = DriveParams::default().frequency;
        assert_eq!(freq.set(443.0), 440.0);
        assert_eq!(freq.set(446.0), 450.0);

        let mut volts = DriveParams::default().voltage;
        let v = volts.set(5.04);
        assert!((v - 5.0).abs() < 1e-6, "got {v}");
    }

    #[test]
    fn set_ignores_non_finite_input() {
        let mut params = DriveParams::default();
        assert_eq!(params.frequency.set(f32::NAN), 440.0);
        assert_eq!(params.voltage.set(f32::INFINITY), 5.0);
        assert_eq!(params.voltage.set(f32::NEG_INFINITY), 5.0);
        assert!((0.0..=1.0).contains(&params.frequency.fraction()));

        let params = DriveParams::default().with_frequency(f32::NAN);
        assert_eq!(params.frequency_hz(), 440.0);
    }

    #[test]
    fn increment_and_decrement_move_one_step() {
        let mut params = DriveParams::default();
        assert_eq!(params.frequency.increment(), 450.0);
        assert_eq!(params.frequency.decrement(), 440.0);

        let v = params.voltage.increment();
        assert!((v - 5.1).abs() < 1e-5, "got {v}");
    }

    #[test]
    fn increment_stops_at_max() {
        let mut params = DriveParams::default().with_frequency(2000.0);
        assert_eq!(params.frequency.increment(), 2000.0);
    }

    #[test]
    fn fraction_spans_unit_range() {
        let params = DriveParams::default().with_frequency(50.0).with_voltage(20.0);
        assert!(params.frequency.fraction().abs() < 1e-9);
        assert!((params.voltage.fraction() - 1.0).abs() < 1e-9);
    }
}
