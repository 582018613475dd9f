use game_core::{Colour, PaddleView, Snapshot};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Rectangle},
        Block, Paragraph,
    },
    Frame,
};

pub fn to_color(colour: Colour) -> Color {
    let (r, g, b) = colour.rgb();
    Color::Rgb(r, g, b)
}

/// Draw one tick: the field and scores, or the winner banner while a
/// decided match is being announced
pub fn draw_frame(frame: &mut Frame, snapshot: &Snapshot) {
    let area = frame.area();
    let background = to_color(snapshot.background);
    frame.render_widget(Block::default().style(Style::default().bg(background)), area);

    if let Some(text) = snapshot.announcement() {
        draw_announcement(frame, area, &text);
        return;
    }

    draw_field(frame, area, snapshot);
    draw_scores(frame, area, snapshot);
}

fn draw_field(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let width = f64::from(snapshot.field.width);
    let height = f64::from(snapshot.field.height);

    let canvas = Canvas::default()
        .background_color(to_color(snapshot.background))
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for paddle in [&snapshot.left_paddle, &snapshot.right_paddle] {
                ctx.draw(&paddle_shape(paddle, height));
            }
            // Canvas y grows upwards, field y grows downwards
            ctx.draw(&Circle {
                x: f64::from(snapshot.ball.pos.x),
                y: height - f64::from(snapshot.ball.pos.y),
                radius: f64::from(snapshot.ball.radius),
                color: to_color(snapshot.ball.colour),
            });
        });
    frame.render_widget(canvas, area);
}

fn paddle_shape(paddle: &PaddleView, field_height: f64) -> Rectangle {
    let rect = paddle.rect;
    Rectangle {
        x: f64::from(rect.min.x),
        y: field_height - f64::from(rect.max.y),
        width: f64::from(rect.width()),
        height: f64::from(rect.height()),
        color: to_color(paddle.colour),
    }
}

fn draw_scores(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let row = Rect {
        height: area.height.min(1),
        ..area
    };
    let halves = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(row);
    let style = Style::default().fg(to_color(Colour::White));

    for (player, half) in [&snapshot.left_player, &snapshot.right_player]
        .into_iter()
        .zip(halves.iter())
    {
        let text = format!("{}: {}", player.name, player.score);
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).style(style),
            *half,
        );
    }
}

fn draw_announcement(frame: &mut Frame, area: Rect, text: &str) {
    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);
    frame.render_widget(
        Paragraph::new(text.to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(to_color(Colour::White))),
        rows[1],
    );
}
