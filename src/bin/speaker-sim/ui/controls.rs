//! Slider gauges for frequency and voltage

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use speaker_sim::params::{DriveParams, Slider};

fn slider_gauge<'a>(title: &'a str, slider: &Slider, label: String, color: Color) -> Gauge<'a> {
    Gauge::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(slider.fraction().clamp(0.0, 1.0))
        .label(label)
}

/// Render the frequency and voltage sliders
pub fn render_sliders(frame: &mut Frame, area: Rect, params: &DriveParams) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let frequency = slider_gauge(
        " Frequency (Hz) ",
        &params.frequency,
        format!("{:.0} Hz", params.frequency_hz()),
        Color::Cyan,
    );
    let voltage = slider_gauge(
        " Voltage (V) ",
        &params.voltage,
        format!("{:.1} V", params.volts()),
        Color::Green,
    );

    frame.render_widget(frequency, rows[0]);
    frame.render_widget(voltage, rows[1]);
}
