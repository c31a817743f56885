//! PNG output through the `plotters` bitmap backend.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::prelude::*;
use tracing::{debug, info};

use super::{ChartRenderer, LineChart};

/// Writes each chart to `{output_dir}/{file_stem}.png`.
#[derive(Debug, Clone)]
pub struct PngRenderer {
    output_dir: PathBuf,
    size: (u32, u32),
}

impl PngRenderer {
    pub fn new(output_dir: impl Into<PathBuf>, size: (u32, u32)) -> Self {
        Self {
            output_dir: output_dir.into(),
            size,
        }
    }

    pub fn path_for(&self, chart: &LineChart) -> PathBuf {
        self.output_dir.join(format!("{}.png", chart.file_stem))
    }
}

impl ChartRenderer for PngRenderer {
    fn render(&mut self, chart: &LineChart) -> Result<PathBuf> {
        let path = self.path_for(chart);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        draw(chart, &path, self.size).with_context(|| format!("drawing {}", path.display()))?;
        info!(path = %path.display(), lines = chart.lines.len(), "wrote chart");
        Ok(path)
    }
}

fn draw(chart: &LineChart, path: &Path, size: (u32, u32)) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_range, y_range) = chart.resolved_ranges();
    debug!(?x_range, ?y_range, file = %chart.file_stem, "axis ranges");

    let mut builder = ChartBuilder::on(&root);
    builder.margin(15).x_label_area_size(50).y_label_area_size(70);
    if let Some(title) = &chart.labels.title {
        builder.caption(title, ("sans-serif", 28).into_font());
    }
    let mut ctx = builder.build_cartesian_2d(x_range, y_range)?;

    ctx.configure_mesh()
        .disable_mesh()
        .set_all_tick_mark_size(-5)
        .x_desc(chart.labels.x_label.as_str())
        .y_desc(chart.labels.y_label.as_str())
        .draw()?;

    for line in &chart.lines {
        let (r, g, b) = line.color.rgb();
        let color = RGBColor(r, g, b);
        ctx.draw_series(LineSeries::new(
            line.points.iter().copied(),
            color.stroke_width(2),
        ))?
        .label(line.label.as_str())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
        });
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
