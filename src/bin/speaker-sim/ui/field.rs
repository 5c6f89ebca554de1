//! Magnetic-field profile chart

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use speaker_sim::{
    model::{field::FIELD_POINTS, FieldModel, FrameState, SCENE_X_BOUNDS},
    params::DriveParams,
};

/// Render total field and the permanent-magnet baseline across the driver
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldModel,
    params: &DriveParams,
    state: &FrameState,
) {
    let block = Block::default()
        .title(" Magnetic field ")
        .borders(Borders::ALL);

    let total = field.field_curve(params, state.drive(), FIELD_POINTS);
    let permanent = field.field_curve(params, 0.0, FIELD_POINTS);

    // Keep the axis fixed for a given setting so the curve visibly breathes
    let peak = field.peak(params);
    let floor = (field.permanent_peak - (peak - field.permanent_peak)).min(0.0);
    let top = peak * 1.1;

    let datasets = vec![
        Dataset::default()
            .name("magnet")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&permanent),
        Dataset::default()
            .name("magnet + coil")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&total),
    ];

    let current = field.current(params.volts() as f64, params.frequency_hz() as f64);

    let chart = Chart::new(datasets)
        .block(block.title_bottom(format!(
            " |Z| {:.2} Ω  I {:.2} A ",
            field.impedance(params.frequency_hz() as f64),
            current
        )))
        .x_axis(
            Axis::default()
                .title("x (m)")
                .bounds(SCENE_X_BOUNDS)
                .labels(["-0.15", "0", "0.15"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("B (T)")
                .bounds([floor, top])
                .labels([format!("{floor:.1}"), format!("{top:.2}")])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
