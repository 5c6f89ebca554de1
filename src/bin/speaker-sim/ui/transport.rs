//! Transport bar widget - shows play state, stream format and coil motion

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the transport bar
pub fn render_transport(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" speaker-sim ")
        .borders(Borders::ALL);

    let output = app.output();
    let playing = output.is_playing();
    let play_symbol = if playing { "▶" } else { "■" };
    let play_state_str = if playing { "Playing" } else { "Stopped" };

    let mut spans = vec![
        Span::styled(
            format!(" {} {}  ", play_symbol, play_state_str),
            Style::default().fg(if playing { Color::Green } else { Color::Yellow }),
        ),
        Span::styled(
            format!(
                "{:.0} Hz  {:.1} V  ",
                app.params().frequency_hz(),
                app.params().volts()
            ),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if let (Some(sample_rate), Some(channels)) = (output.sample_rate(), output.channels()) {
        spans.push(Span::styled(
            format!("{:.1}kHz {}ch  ", sample_rate / 1000.0, channels),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let state = app.state();
    spans.push(Span::styled(
        format!(
            "t {:.2}s  coil {:+.1} mm",
            state.time,
            state.displacement * 1000.0
        ),
        Style::default().fg(Color::Magenta),
    ));

    if let Some(err) = app.audio_error() {
        spans.push(Span::styled(
            format!("  audio: {err}"),
            Style::default().fg(Color::Red),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
