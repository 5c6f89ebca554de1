//! Cross-section canvas of the driver

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::Line,
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Rectangle},
        Block, Borders,
    },
    Frame,
};

use speaker_sim::model::{self, Polygon, SpeakerShapes, SCENE_X_BOUNDS, SCENE_Y_BOUNDS};

fn rectangle(shape: &model::Rectangle, color: Color) -> Rectangle {
    Rectangle {
        x: shape.x,
        y: shape.y,
        width: shape.width,
        height: shape.height,
        color,
    }
}

fn draw_polygon<const N: usize>(ctx: &mut Context, polygon: &Polygon<N>, color: Color) {
    for ((x1, y1), (x2, y2)) in polygon.edges() {
        ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
    }
}

/// Render the magnet, frame, suspension, coil and diaphragm
pub fn render_speaker(frame: &mut Frame, area: Rect, shapes: &SpeakerShapes) {
    let block = Block::default()
        .title(" Speaker ")
        .borders(Borders::ALL);

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds(SCENE_X_BOUNDS)
        .y_bounds(SCENE_Y_BOUNDS)
        .paint(|ctx| {
            // Static parts
            ctx.draw(&rectangle(&shapes.magnet, Color::Red));
            ctx.draw(&rectangle(&shapes.frame_top, Color::Gray));
            ctx.draw(&rectangle(&shapes.frame_bottom, Color::Gray));
            draw_polygon(ctx, &shapes.suspension, Color::LightYellow);
            ctx.layer();

            // Moving parts on top
            draw_polygon(ctx, &shapes.diaphragm, Color::LightBlue);
            ctx.draw(&Circle {
                x: shapes.coil.x,
                y: shapes.coil.y,
                radius: shapes.coil.radius,
                color: Color::Yellow,
            });

            ctx.print(
                shapes.magnet.x,
                shapes.magnet.y + shapes.magnet.height / 2.0,
                Line::styled("magnet", Style::default().fg(Color::Red)),
            );
            ctx.print(
                shapes.coil.x + shapes.coil.radius,
                shapes.coil.y,
                "coil".yellow(),
            );
        });

    frame.render_widget(canvas, area);
}
