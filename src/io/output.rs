//! Live tone playback through the default output device.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{debug, info, warn};
use rtrb::{Producer, RingBuffer};

use crate::dsp::ToneOscillator;
use crate::error::{Result, SimError};
use crate::message::ToneMessage;
use crate::params::DriveParams;

/// Capacity of the UI → audio parameter ring.
const MESSAGE_CAPACITY: usize = 64;

struct ActiveStream {
    // Dropping the stream closes it
    stream: cpal::Stream,
    tx: Producer<ToneMessage>,
    sample_rate: f32,
    channels: usize,
}

/// Plays the tone on demand and forwards slider changes to the audio thread.
///
/// Every call to [`ToneOutput::play`] opens a fresh stream, so the phase
/// restarts at zero while frequency and voltage carry over.
pub struct ToneOutput {
    frequency: f32,
    voltage: f32,
    active: Option<ActiveStream>,
}

impl ToneOutput {
    pub fn new() -> Self {
        Self {
            frequency: DriveParams::FREQUENCY_INIT,
            voltage: DriveParams::VOLTAGE_INIT,
            active: None,
        }
    }

    pub fn with_params(mut self, params: &DriveParams) -> Self {
        self.frequency = params.frequency_hz();
        self.voltage = params.volts();
        self
    }

    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    /// Sample rate of the open stream, if any.
    pub fn sample_rate(&self) -> Option<f32> {
        self.active.as_ref().map(|a| a.sample_rate)
    }

    pub fn channels(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.channels)
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn voltage(&self) -> f32 {
        self.voltage
    }

    /// Open the default device and start the tone. Does nothing if already
    /// playing.
    pub fn play(&mut self) -> Result<()> {
        if self.active.is_some() {
            return Ok(());
        }

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(SimError::NoOutputDevice)?;
        let config = device.default_output_config()?;

        if config.sample_format() != cpal::SampleFormat::F32 {
            warn!(
                "default output format is {:?}, requesting f32 anyway",
                config.sample_format()
            );
        }

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        let (tx, mut rx) = RingBuffer::<ToneMessage>::new(MESSAGE_CAPACITY);
        let mut osc = ToneOscillator::new(sample_rate);
        osc.set_frequency(self.frequency);
        osc.set_voltage(self.voltage);

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                osc.drain(&mut rx);
                osc.render_interleaved(data, channels);
            },
            |err| warn!("output stream status: {err}"),
            None,
        )?;

        stream.play()?;

        info!(
            "playing {:.0} Hz at {:.1} V ({} Hz, {} ch)",
            self.frequency, self.voltage, sample_rate, channels
        );

        self.active = Some(ActiveStream {
            stream,
            tx,
            sample_rate,
            channels,
        });
        Ok(())
    }

    /// Stop and close the stream. Does nothing if not playing.
    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            if let Err(err) = active.stream.pause() {
                warn!("failed to pause output stream: {err}");
            }
            info!("stopped");
        }
    }

    pub fn update_frequency(&mut self, hz: f32) {
        self.frequency = hz;
        self.send(ToneMessage::SetFrequency(hz));
    }

    pub fn update_voltage(&mut self, volts: f32) {
        self.voltage = volts;
        self.send(ToneMessage::SetVoltage(volts));
    }

    fn send(&mut self, message: ToneMessage) {
        debug!("{message:?}");
        if let Some(active) = self.active.as_mut() {
            // A full ring only drops the update; the stored value is used by
            // the next stream.
            if active.tx.push(message).is_err() {
                warn!("parameter ring full, dropped {message:?}");
            }
        }
    }
}

impl Default for ToneOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ToneOutput {
    fn drop(&mut self) {
        self.stop();
    }
}
