//! Continuous sine tone with live frequency and voltage.

/*
Tone Oscillator
===============

The speaker is driven by a single sine tone. Two parameters control it:

  frequency     Pitch in Hz, set from the frequency slider (50 - 2000 Hz).

  voltage       Drive voltage in volts (0.1 - 20 V). The output amplitude is
                voltage / 20, so the top of the slider is full scale.

The Math
--------

The oscillator keeps a running phase counted in samples. For a buffer of N
frames starting at phase p:

    t[n]   = (p + n) / sample_rate
    out[n] = (voltage / 20) × sin(2π × frequency × t[n])

After the buffer the phase advances by N and wraps:

    p = (p + N) mod sample_rate

Wrapping at one second of samples keeps the counter small. For whole-number
frequencies sin(2π f (p + sample_rate) / sample_rate) equals
sin(2π f p / sample_rate), so the wrap is inaudible and consecutive buffers
join without a click. The frequency slider steps in 10 Hz, so every value it
produces is a whole number.
*/

use std::f64::consts::TAU;

use crate::message::{MessageReceiver, ToneMessage};
use crate::params::DriveParams;
use crate::MAX_BLOCK_SIZE;

/// Voltage that maps to full-scale output.
pub const FULL_SCALE_VOLTS: f32 = 20.0;

pub struct ToneOscillator {
    sample_rate: f64,
    /// Sample counter, kept in `[0, sample_rate)`.
    phase: f64,
    frequency: f32,
    voltage: f32,
}

impl ToneOscillator {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate: sample_rate as f64,
            phase: 0.0,
            frequency: DriveParams::FREQUENCY_INIT,
            voltage: DriveParams::VOLTAGE_INIT,
        }
    }

    /// Start from the current slider values instead of the defaults.
    pub fn with_params(mut self, params: &DriveParams) -> Self {
        self.frequency = params.frequency_hz();
        self.voltage = params.volts();
        self
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate as f32
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn voltage(&self) -> f32 {
        self.voltage
    }

    pub fn set_frequency(&mut self, hz: f32) {
        self.frequency = hz;
    }

    pub fn set_voltage(&mut self, volts: f32) {
        self.voltage = volts;
    }

    /// Peak output level for the current voltage.
    pub fn amplitude(&self) -> f32 {
        self.voltage / FULL_SCALE_VOLTS
    }

    pub fn apply(&mut self, message: ToneMessage) {
        match message {
            ToneMessage::SetFrequency(hz) => self.set_frequency(hz),
            ToneMessage::SetVoltage(volts) => self.set_voltage(volts),
        }
    }

    /// Apply every pending parameter update.
    pub fn drain<R: MessageReceiver + ?Sized>(&mut self, rx: &mut R) {
        while let Some(message) = rx.pop() {
            self.apply(message);
        }
    }

    /// Fill `out` with the next mono block and advance the phase.
    pub fn render(&mut self, out: &mut [f32]) {
        let amplitude = self.amplitude() as f64;
        let omega = TAU * self.frequency as f64;

        for (n, sample) in out.iter_mut().enumerate() {
            let t = (self.phase + n as f64) / self.sample_rate;
            *sample = (amplitude * (omega * t).sin()) as f32;
        }

        self.phase = (self.phase + out.len() as f64) % self.sample_rate;
    }

    /// Render into an interleaved device buffer, duplicating mono to every
    /// channel.
    pub fn render_interleaved(&mut self, data: &mut [f32], channels: usize) {
        let channels = channels.max(1);
        let total_frames = data.len() / channels;
        let mut frames_written = 0;
        let mut render_buf = [0.0f32; MAX_BLOCK_SIZE];

        while frames_written < total_frames {
            let frames_remaining = total_frames - frames_written;
            let frames_to_render = frames_remaining.min(MAX_BLOCK_SIZE);

            let block = &mut render_buf[..frames_to_render];
            self.render(block);

            let out_off = frames_written * channels;
            for (i, &s) in block.iter().enumerate() {
                for ch in 0..channels {
                    data[out_off + i * channels + ch] = s;
                }
            }

            frames_written += frames_to_render;
        }
    }
}
