//! Sound waveform plot

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use speaker_sim::model::waveform::{WAVE_WINDOW, WAVE_Y_BOUNDS};

/// Render the waveform chart from precomputed `(time, amplitude)` points
pub fn render_waveform(frame: &mut Frame, area: Rect, points: &[(f64, f64)]) {
    let block = Block::default()
        .title(" Sound waveform ")
        .borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Blue))
        .data(points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title("Time (s)")
                .bounds([0.0, WAVE_WINDOW])
                .labels(["0", "0.01", "0.02"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("Amplitude")
                .bounds(WAVE_Y_BOUNDS)
                .labels(["-1.2", "0", "1.2"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
