//! Approximate magnetic-field profile across the driver.

/*
Field Profile
=============

This is a picture, not a field solver. The curve plotted under the
cross-section is the sum of two bell shapes over horizontal position x:

Permanent field - the magnet's fixed contribution:

    B_perm(x) = B0 × exp(-x² / (2 σm²))           σm = magnet_width / 2

Coil field - the voice coil acts as an electromagnet whose strength follows
the current through it. The coil is treated as a resistor in series with an
inductor, so the current falls as frequency rises:

    |Z|  = sqrt(R² + (2π f L)²)
    I    = V / |Z|

    B_coil(x) = k × I × d × exp(-x² / (2 σc²))    σc = coil_radius

where d is the coil position normalised to [-1, 1]. When the coil is pushed
up the two fields add; when it is pulled down the coil field opposes the
magnet. With no drive (d = 0) only the permanent field remains.

Default values
--------------

    B0 = 1.0 T      typical gap flux for a small driver
    k  = 0.1 T/A    coil field per amp
    R  = 8 Ω        nominal speaker impedance
    L  = 0.5 mH     voice-coil inductance
*/

use std::f64::consts::TAU;

use super::dimensions::SpeakerDimensions;
use super::SCENE_X_BOUNDS;
use crate::params::DriveParams;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of points in the plotted curve.
pub const FIELD_POINTS: usize = 200;

/// Magnitude of a series RL impedance at `frequency`.
#[inline]
pub fn coil_impedance(frequency: f64, resistance: f64, inductance: f64) -> f64 {
    let reactance = TAU * frequency * inductance;
    (resistance * resistance + reactance * reactance).sqrt()
}

/// Current through the coil for a drive voltage.
#[inline]
pub fn coil_current(voltage: f64, frequency: f64, resistance: f64, inductance: f64) -> f64 {
    voltage / coil_impedance(frequency, resistance, inductance)
}

#[inline]
fn gaussian(x: f64, sigma: f64) -> f64 {
    (-(x * x) / (2.0 * sigma * sigma)).exp()
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldModel {
    /// Peak permanent-magnet field (T).
    pub permanent_peak: f64,
    /// Width of the permanent field (m).
    pub magnet_sigma: f64,
    /// Width of the coil field (m).
    pub coil_sigma: f64,
    /// Coil field per unit current (T/A).
    pub coil_gain: f64,
    /// Coil DC resistance (Ω).
    pub resistance: f64,
    /// Coil inductance (H).
    pub inductance: f64,
}

impl FieldModel {
    pub fn new(dims: &SpeakerDimensions) -> Self {
        Self {
            permanent_peak: 1.0,
            magnet_sigma: dims.magnet_width / 2.0,
            coil_sigma: dims.coil_radius,
            coil_gain: 0.1,
            resistance: 8.0,
            inductance: 0.5e-3,
        }
    }

    pub fn with_resistance(mut self, ohms: f64) -> Self {
        self.resistance = ohms;
        self
    }

    pub fn with_inductance(mut self, henries: f64) -> Self {
        self.inductance = henries;
        self
    }

    pub fn impedance(&self, frequency: f64) -> f64 {
        coil_impedance(frequency, self.resistance, self.inductance)
    }

    pub fn current(&self, voltage: f64, frequency: f64) -> f64 {
        coil_current(voltage, frequency, self.resistance, self.inductance)
    }

    pub fn permanent_field(&self, x: f64) -> f64 {
        self.permanent_peak * gaussian(x, self.magnet_sigma)
    }

    /// Coil contribution at `x` for a current and normalised coil position.
    pub fn coil_field(&self, x: f64, current: f64, drive: f64) -> f64 {
        self.coil_gain * current * drive * gaussian(x, self.coil_sigma)
    }

    /// Total field sampled at `points` positions across the scene.
    ///
    /// `drive` is the coil position normalised to `[-1, 1]`, see
    /// [`crate::model::FrameState::drive`].
    pub fn field_curve(&self, params: &DriveParams, drive: f64, points: usize) -> Vec<(f64, f64)> {
        let current = self.current(params.volts() as f64, params.frequency_hz() as f64);
        let [x_min, x_max] = SCENE_X_BOUNDS;
        let last = points.saturating_sub(1).max(1) as f64;

        (0..points)
            .map(|i| {
                let x = x_min + (x_max - x_min) * i as f64 / last;
                let b = self.permanent_field(x) + self.coil_field(x, current, drive);
                (x, b)
            })
            .collect()
    }

    /// Largest field the curve can reach for the given parameters.
    pub fn peak(&self, params: &DriveParams) -> f64 {
        let current = self.current(params.volts() as f64, params.frequency_hz() as f64);
        self.permanent_peak + self.coil_gain * current.abs()
    }
}

impl Default for FieldModel {
    fn default() -> Self {
        Self::new(&SpeakerDimensions::default())
    }
}
