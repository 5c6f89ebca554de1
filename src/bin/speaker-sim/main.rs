//! speaker-sim - loudspeaker driver simulation in the terminal
//!
//! Run with: cargo run -- --help

mod app;
mod cli;
mod ui;

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};

use app::App;
use cli::Args;
use speaker_sim::io::bounce_to_wav;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = Args::parse();
    args.init_logging()?;

    let params = args.drive_params();

    if let Some(path) = &args.bounce {
        let frames = bounce_to_wav(path, &params, args.sample_rate, args.seconds)
            .wrap_err_with(|| format!("failed to bounce to {}", path.display()))?;
        println!(
            "Wrote {} frames of {:.0} Hz at {:.1} V to {}",
            frames,
            params.frequency_hz(),
            params.volts(),
            path.display()
        );
        return Ok(());
    }

    let mut app = App::new(params).with_field(args.field);
    let mut terminal = ratatui::init();

    let res = app.run(&mut terminal, args.play);

    ratatui::restore();
    res
}
