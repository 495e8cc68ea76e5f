use svg::Document;
use svg::node::element::{Line, Rectangle, Text};

use crate::plot::{AXIS_COLOR, FONT, Frame, GRID_COLOR};

const WIDTH: f32 = 600.0;
const HEIGHT: f32 = 400.0;
const BAR_FILL: &str = "#87ceeb";

/// Bar chart with a fixed [0, 1] score axis and a value label above each bar.
pub fn metrics_bar_chart(title: &str, bars: &[(&str, f64)]) -> String {
    let frame = Frame::new(WIDTH, HEIGHT);
    let mut doc = Document::new()
        .set("viewBox", (0, 0, WIDTH, HEIGHT))
        .set("width", WIDTH)
        .set("height", HEIGHT)
        .add(
            Rectangle::new()
                .set("width", WIDTH)
                .set("height", HEIGHT)
                .set("fill", "#ffffff"),
        )
        .add(
            Text::new(title)
                .set("x", WIDTH / 2.0)
                .set("y", 30)
                .set("text-anchor", "middle")
                .set("font-family", FONT)
                .set("font-size", 16)
                .set("fill", AXIS_COLOR),
        );

    for step in 0..=5 {
        let value = step as f64 * 0.2;
        let y = frame.y_for(value, 1.0);
        doc = doc
            .add(
                Line::new()
                    .set("x1", frame.left)
                    .set("y1", y)
                    .set("x2", frame.right)
                    .set("y2", y)
                    .set("stroke", GRID_COLOR)
                    .set("stroke-width", 1),
            )
            .add(
                Text::new(format!("{:.1}", value))
                    .set("x", frame.left - 8.0)
                    .set("y", y + 4.0)
                    .set("text-anchor", "end")
                    .set("font-family", FONT)
                    .set("font-size", 11)
                    .set("fill", AXIS_COLOR),
            );
    }

    let slot = (frame.right - frame.left) / bars.len().max(1) as f32;
    let bar_w = slot * 0.6;
    for (i, (name, value)) in bars.iter().enumerate() {
        let cx = frame.left + slot * (i as f32 + 0.5);
        let y = frame.y_for(*value, 1.0);
        doc = doc
            .add(
                Rectangle::new()
                    .set("x", cx - bar_w / 2.0)
                    .set("y", y)
                    .set("width", bar_w)
                    .set("height", frame.bottom - y)
                    .set("fill", BAR_FILL),
            )
            .add(
                Text::new(format!("{:.2}", value))
                    .set("x", cx)
                    .set("y", y - 6.0)
                    .set("text-anchor", "middle")
                    .set("font-family", FONT)
                    .set("font-size", 12)
                    .set("fill", AXIS_COLOR),
            )
            .add(
                Text::new(*name)
                    .set("x", cx)
                    .set("y", frame.bottom + 20.0)
                    .set("text-anchor", "middle")
                    .set("font-family", FONT)
                    .set("font-size", 12)
                    .set("fill", AXIS_COLOR),
            );
    }

    doc = doc
        .add(
            Line::new()
                .set("x1", frame.left)
                .set("y1", frame.bottom)
                .set("x2", frame.right)
                .set("y2", frame.bottom)
                .set("stroke", AXIS_COLOR)
                .set("stroke-width", 1.2),
        )
        .add(
            Line::new()
                .set("x1", frame.left)
                .set("y1", frame.top)
                .set("x2", frame.left)
                .set("y2", frame.bottom)
                .set("stroke", AXIS_COLOR)
                .set("stroke-width", 1.2),
        )
        .add(
            Text::new("Score")
                .set("x", 18)
                .set("y", (frame.top + frame.bottom) / 2.0)
                .set("text-anchor", "middle")
                .set(
                    "transform",
                    format!("rotate(-90 18 {})", (frame.top + frame.bottom) / 2.0),
                )
                .set("font-family", FONT)
                .set("font-size", 12)
                .set("fill", AXIS_COLOR),
        );

    doc.to_string()
}
