use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Line, Path, Rectangle, Text};

use crate::plot::{AXIS_COLOR, FONT, Frame, GRID_COLOR};

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 400.0;
const LINE_COLOR: &str = "#1f77b4";

pub fn entropy_line_chart(values: &[f64]) -> String {
    let frame = Frame::new(WIDTH, HEIGHT);
    let y_max = values.iter().copied().fold(0.0f64, f64::max).ceil().max(1.0);
    let n = values.len();
    let x_for = |i: usize| -> f32 {
        if n <= 1 {
            frame.left
        } else {
            frame.left + (frame.right - frame.left) * i as f32 / (n - 1) as f32
        }
    };

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
            Text::new("Entropy Plot (Per-Column)")
                .set("x", WIDTH / 2.0)
                .set("y", 30)
                .set("text-anchor", "middle")
                .set("font-family", FONT)
                .set("font-size", 16)
                .set("fill", AXIS_COLOR),
        );

    let ticks = y_max as usize;
    for t in 0..=ticks {
        let y = frame.y_for(t as f64, y_max);
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
                Text::new(t.to_string())
                    .set("x", frame.left - 8.0)
                    .set("y", y + 4.0)
                    .set("text-anchor", "end")
                    .set("font-family", FONT)
                    .set("font-size", 11)
                    .set("fill", AXIS_COLOR),
            );
    }

    if let Some(first) = values.first() {
        let mut data = Data::new().move_to((x_for(0), frame.y_for(*first, y_max)));
        for (i, v) in values.iter().enumerate().skip(1) {
            data = data.line_to((x_for(i), frame.y_for(*v, y_max)));
        }
        doc = doc.add(
            Path::new()
                .set("d", data)
                .set("fill", "none")
                .set("stroke", LINE_COLOR)
                .set("stroke-width", 1.5),
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
            Text::new("Position in Alignment")
                .set("x", (frame.left + frame.right) / 2.0)
                .set("y", frame.bottom + 40.0)
                .set("text-anchor", "middle")
                .set("font-family", FONT)
                .set("font-size", 12)
                .set("fill", AXIS_COLOR),
        )
        .add(
            Text::new(format!("{}", n))
                .set("x", frame.right)
                .set("y", frame.bottom + 18.0)
                .set("text-anchor", "end")
                .set("font-family", FONT)
                .set("font-size", 11)
                .set("fill", AXIS_COLOR),
        )
        .add(
            Text::new("Entropy")
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
