//! TUI module for speaker-sim
//!
//! Lays out the cross-section, the optional field panel, the waveform plot,
//! the two sliders and the transport/help bars.

mod controls;
mod field;
mod speaker;
mod transport;
mod waveform;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use speaker_sim::model::waveform::wave_samples;

use crate::app::App;

use controls::render_sliders;
use field::render_field;
use speaker::render_speaker;
use transport::render_transport;
use waveform::render_waveform;

/// Render the whole UI for the current animation frame
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: transport, scene, waveform, sliders, help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Transport bar
            Constraint::Percentage(45), // Cross-section (+ field)
            Constraint::Min(8),         // Waveform
            Constraint::Length(6),      // Sliders
            Constraint::Length(1),      // Help bar
        ])
        .split(area);

    render_transport(frame, chunks[0], app);

    if app.show_field() {
        let scene = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        render_speaker(frame, scene[0], app.model().shapes());
        render_field(frame, scene[1], app.field(), app.params(), app.state());
    } else {
        render_speaker(frame, chunks[1], app.model().shapes());
    }

    let wave = wave_samples(app.params(), app.state().time);
    render_waveform(frame, chunks[2], &wave);

    render_sliders(frame, chunks[3], app.params());

    let help = Paragraph::new(
        " [↑/↓] Frequency  [←/→] Voltage  [P/Space] Play  [S] Stop  [F] Field  [Q] Quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use speaker_sim::params::DriveParams;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn field_panel_follows_toggle() {
        let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();

        let app = App::new(DriveParams::default());
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Speaker"));
        assert!(text.contains("Sound waveform"));
        assert!(!text.contains("Magnetic field"));

        let app = app.with_field(true);
        terminal.draw(|frame| render(frame, &app)).unwrap();
        assert!(screen_text(&terminal).contains("Magnetic field"));
    }

    #[test]
    fn sliders_show_current_values() {
        let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
        let app = App::new(DriveParams::default().with_frequency(1230.0).with_voltage(7.5));
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("1230 Hz"));
        assert!(text.contains("7.5 V"));
        assert!(text.contains("Stopped"));
    }
}
