use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use resvg::{tiny_skia, usvg};

pub mod bar;
pub mod line;

pub use bar::metrics_bar_chart;
pub use line::entropy_line_chart;

pub(crate) const FONT: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";
pub(crate) const AXIS_COLOR: &str = "#333333";
pub(crate) const GRID_COLOR: &str = "#e4e4e4";

/// Plot area inside a fixed-size canvas.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Frame {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            left: 70.0,
            right: width - 20.0,
            top: 50.0,
            bottom: height - 55.0,
        }
    }

    pub fn y_for(&self, value: f64, max: f64) -> f32 {
        let f = if max <= 0.0 {
            0.0
        } else {
            (value / max).clamp(0.0, 1.0) as f32
        };
        self.bottom - f * (self.bottom - self.top)
    }
}

pub fn write_svg(path: &Path, svg_text: &str) -> Result<()> {
    std::fs::write(path, svg_text).with_context(|| format!("failed to write {}", path.display()))
}

pub fn render_png(svg_text: &str, path: &Path) -> Result<()> {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    let opt = usvg::Options {
        fontdb: Arc::new(fontdb),
        ..usvg::Options::default()
    };

    let tree = usvg::Tree::from_str(svg_text, &opt)
        .map_err(|e| anyhow!("failed to parse chart SVG: {}", e))?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .context("chart has an empty canvas")?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap
        .save_png(path)
        .map_err(|e| anyhow!("failed to write {}: {}", path.display(), e))
}

/// Writes `<stem>.svg` next to `png_path`, then rasterizes it when `png` is set.
pub fn save_chart(svg_text: &str, png_path: &Path, png: bool) -> Result<()> {
    write_svg(&png_path.with_extension("svg"), svg_text)?;
    if png {
        render_png(svg_text, png_path)?;
    }
    Ok(())
}
