//! Command-line argument parsing and logging set-up.

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use speaker_sim::params::DriveParams;
use speaker_sim::DEFAULT_SAMPLE_RATE;

/// Accept only finite numbers for slider values and durations.
fn parse_finite(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{s} is not a finite number"))
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "speaker-sim")]
#[command(about = "Animated loudspeaker driver with a live sine tone", long_about = None)]
pub struct Args {
    /// Initial tone frequency (50 - 2000 Hz, 10 Hz steps)
    #[arg(
        long,
        value_name = "HZ",
        default_value_t = DriveParams::FREQUENCY_INIT,
        value_parser = parse_finite
    )]
    pub frequency: f32,

    /// Initial drive voltage (0.1 - 20 V, 0.1 V steps)
    #[arg(
        long,
        value_name = "VOLTS",
        default_value_t = DriveParams::VOLTAGE_INIT,
        value_parser = parse_finite
    )]
    pub voltage: f32,

    /// Show the magnetic-field panel on start
    #[arg(long)]
    pub field: bool,

    /// Start the tone immediately
    #[arg(long)]
    pub play: bool,

    /// Render the tone to a WAV file and exit instead of opening the UI
    #[arg(long, value_name = "PATH")]
    pub bounce: Option<PathBuf>,

    /// Length of the bounced file
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = 2.0,
        requires = "bounce",
        value_parser = parse_finite
    )]
    pub seconds: f32,

    /// Sample rate of the bounced file
    #[arg(long, value_name = "HZ", default_value_t = DEFAULT_SAMPLE_RATE, requires = "bounce")]
    pub sample_rate: u32,

    /// Write log output to this file (the UI owns the terminal)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log parameter changes as well
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Slider values from the command line, clamped and snapped to step.
    pub fn drive_params(&self) -> DriveParams {
        DriveParams::default()
            .with_frequency(self.frequency)
            .with_voltage(self.voltage)
    }

    /// Log to a file when asked, to the terminal when bouncing, and nowhere
    /// otherwise.
    pub fn init_logging(&self) -> EyreResult<()> {
        let level = if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        if let Some(path) = &self.log_file {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
            WriteLogger::init(level, Config::default(), file)
                .wrap_err("failed to start file logger")?;
        } else if self.bounce.is_some() {
            TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
                .wrap_err("failed to start terminal logger")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sliders() {
        let args = Args::parse_from(["speaker-sim"]);
        assert_eq!(args.drive_params(), DriveParams::default());
        assert!(!args.field);
        assert!(args.bounce.is_none());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let args = Args::parse_from(["speaker-sim", "--frequency", "5", "--voltage", "99"]);
        let params = args.drive_params();
        assert_eq!(params.frequency_hz(), 50.0);
        assert_eq!(params.volts(), 20.0);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(Args::try_parse_from(["speaker-sim", "--frequency", "NaN"]).is_err());
        assert!(Args::try_parse_from(["speaker-sim", "--voltage", "inf"]).is_err());
        assert!(Args::try_parse_from(["speaker-sim", "--frequency", "abc"]).is_err());
    }

    #[test]
    fn bounce_options() {
        let args = Args::parse_from([
            "speaker-sim",
            "--bounce",
            "tone.wav",
            "--seconds",
            "0.5",
            "--sample-rate",
            "48000",
        ]);
        assert_eq!(args.bounce, Some(PathBuf::from("tone.wav")));
        assert_eq!(args.seconds, 0.5);
        assert_eq!(args.sample_rate, 48_000);
    }

    #[test]
    fn seconds_requires_bounce() {
        assert!(Args::try_parse_from(["speaker-sim", "--seconds", "1"]).is_err());
    }
}
