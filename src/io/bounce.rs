//! Offline render of the tone to a WAV file.

use std::path::Path;

use log::info;

use crate::dsp::ToneOscillator;
use crate::error::Result;
use crate::params::DriveParams;
use crate::MAX_BLOCK_SIZE;

/// Render `seconds` of the tone into a mono 32-bit float WAV file.
///
/// The tone is rendered block by block exactly as the live stream does, so
/// the file also shows whether phase stays continuous across blocks.
/// Returns the number of frames written.
pub fn bounce_to_wav<P: AsRef<Path>>(
    path: P,
    params: &DriveParams,
    sample_rate: u32,
    seconds: f32,
) -> Result<usize> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path.as_ref(), spec)?;

    let mut osc = ToneOscillator::new(sample_rate as f32).with_params(params);
    let total_frames = (seconds.max(0.0) as f64 * sample_rate as f64).round() as usize;
    let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];
    let mut frames_written = 0;

    while frames_written < total_frames {
        let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
        let block = &mut render_buf[..frames_to_render];
        osc.render(block);

        for &s in block.iter() {
            writer.write_sample(s)?;
        }
        frames_written += frames_to_render;
    }

    writer.finalize()?;
    info!(
        "bounced {} frames ({:.0} Hz, {:.1} V) to {}",
        frames_written,
        params.frequency_hz(),
        params.volts(),
        path.as_ref().display()
    );
    Ok(frames_written)
}
