//! Application state and the event/animation loop

use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::error;
use ratatui::DefaultTerminal;

use speaker_sim::{
    io::ToneOutput,
    model::{
        kinematics::{FRAME_COUNT, FRAME_INTERVAL_MS},
        FieldModel, FrameState, SpeakerModel,
    },
    params::DriveParams,
};

use crate::ui;

pub struct App {
    params: DriveParams,
    model: SpeakerModel,
    field: FieldModel,
    output: ToneOutput,
    /// Animation frame, cycles through `FRAME_COUNT`.
    frame_index: u32,
    state: FrameState,
    show_field: bool,
    /// Last audio failure, shown in the transport bar.
    audio_error: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(params: DriveParams) -> Self {
        let mut model = SpeakerModel::default();
        let field = FieldModel::new(model.dimensions());
        let state = model.tick(0, &params);

        Self {
            params,
            model,
            field,
            output: ToneOutput::new().with_params(&params),
            frame_index: 0,
            state,
            show_field: false,
            audio_error: None,
            should_quit: false,
        }
    }

    pub fn with_field(mut self, show: bool) -> Self {
        self.show_field = show;
        self
    }

    pub fn params(&self) -> &DriveParams {
        &self.params
    }

    pub fn model(&self) -> &SpeakerModel {
        &self.model
    }

    pub fn field(&self) -> &FieldModel {
        &self.field
    }

    pub fn state(&self) -> &FrameState {
        &self.state
    }

    pub fn output(&self) -> &ToneOutput {
        &self.output
    }

    pub fn show_field(&self) -> bool {
        self.show_field
    }

    pub fn audio_error(&self) -> Option<&str> {
        self.audio_error.as_deref()
    }

    /// Run until the user quits. The animation advances every
    /// `FRAME_INTERVAL_MS`; key presses are handled in between.
    pub fn run(&mut self, terminal: &mut DefaultTerminal, autoplay: bool) -> EyreResult<()> {
        if autoplay {
            self.play();
        }

        let tick_rate = Duration::from_millis(FRAME_INTERVAL_MS);
        let mut last_tick = Instant::now();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.advance();
                last_tick = Instant::now();
            }
        }

        self.output.stop();
        Ok(())
    }

    /// Move to the next animation frame.
    fn advance(&mut self) {
        self.frame_index = (self.frame_index + 1) % FRAME_COUNT;
        self.state = self.model.tick(self.frame_index, &self.params);
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                let hz = self.params.frequency.increment();
                self.output.update_frequency(hz);
            }
            KeyCode::Down => {
                let hz = self.params.frequency.decrement();
                self.output.update_frequency(hz);
            }
            KeyCode::Right => {
                let volts = self.params.voltage.increment();
                self.output.update_voltage(volts);
            }
            KeyCode::Left => {
                let volts = self.params.voltage.decrement();
                self.output.update_voltage(volts);
            }
            KeyCode::Char('p') | KeyCode::Char(' ') => self.play(),
            KeyCode::Char('s') => self.output.stop(),
            KeyCode::Char('f') => self.show_field = !self.show_field,
            _ => {}
        }
    }

    fn play(&mut self) {
        match self.output.play() {
            Ok(()) => self.audio_error = None,
            Err(err) => {
                error!("{err}");
                self.audio_error = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_cycles_through_frames() {
        let mut app = App::new(DriveParams::default());
        for _ in 0..FRAME_COUNT {
            app.advance();
        }
        assert_eq!(app.frame_index, 0);
        assert_eq!(app.state().time, 0.0);
    }

    #[test]
    fn arrow_keys_move_sliders() {
        let mut app = App::new(DriveParams::default());
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);

        assert_eq!(app.params().frequency_hz(), 460.0);
        assert_eq!(app.output().frequency(), 460.0);
        assert!((app.params().volts() - 4.9).abs() < 1e-5);
        assert!((app.output().voltage() - 4.9).abs() < 1e-5);
    }

    #[test]
    fn field_toggle_and_quit() {
        let mut app = App::new(DriveParams::default());
        assert!(!app.show_field());
        app.handle_key(KeyCode::Char('f'));
        assert!(app.show_field());

        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn stop_without_play_is_harmless() {
        let mut app = App::new(DriveParams::default());
        app.handle_key(KeyCode::Char('s'));
        assert!(!app.output().is_playing());
    }
}
