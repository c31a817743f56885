//! Backend-agnostic chart descriptions and the renderer seam.

pub mod labels;
pub mod png;

use std::{ops::Range, path::PathBuf};

use anyhow::Result;
use serde::Serialize;

pub use labels::{days_axis_label, plot_template, plot_template_since, ChartLabels};
pub use png::PngRenderer;

/// Named palette shared by every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineColor {
    Blue,
    Green,
    Red,
    Purple,
    Orange,
    Black,
}

impl LineColor {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Blue => (31, 119, 180),
            Self::Green => (44, 160, 44),
            Self::Red => (214, 39, 40),
            Self::Purple => (148, 103, 189),
            Self::Orange => (255, 127, 14),
            Self::Black => (0, 0, 0),
        }
    }
}

/// One labelled polyline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub label: String,
    pub color: LineColor,
    pub points: Vec<(f64, f64)>,
}

impl Line {
    /// Pair `xs` with `ys` element by element; the shorter side bounds the line.
    pub fn from_xy<X>(label: impl Into<String>, color: LineColor, xs: X, ys: &[f64]) -> Self
    where
        X: IntoIterator<Item = f64>,
    {
        Self {
            label: label.into(),
            color,
            points: xs.into_iter().zip(ys.iter().copied()).collect(),
        }
    }
}

/// Everything a renderer needs to draw and save one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    /// File name without extension.
    pub file_stem: String,
    pub labels: ChartLabels,
    /// Fixed x range; fitted to the data when `None`.
    pub x_range: Option<Range<f64>>,
    /// Fixed y range; fitted to the data when `None`.
    pub y_range: Option<Range<f64>>,
    pub lines: Vec<Line>,
}

impl LineChart {
    pub fn new(file_stem: impl Into<String>, labels: ChartLabels) -> Self {
        Self {
            file_stem: file_stem.into(),
            labels,
            x_range: None,
            y_range: None,
            lines: Vec::new(),
        }
    }

    pub fn with_x_range(mut self, range: Range<f64>) -> Self {
        self.x_range = Some(range);
        self
    }

    pub fn with_y_range(mut self, range: Range<f64>) -> Self {
        self.y_range = Some(range);
        self
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Axis ranges to draw, preferring fixed ranges over fitted ones.
    pub fn resolved_ranges(&self) -> (Range<f64>, Range<f64>) {
        let points = || self.lines.iter().flat_map(|line| line.points.iter());
        let x = self
            .x_range
            .clone()
            .unwrap_or_else(|| fit_range(points().map(|(x, _)| *x), 0.0));
        let y = self
            .y_range
            .clone()
            .unwrap_or_else(|| fit_range(points().map(|(_, y)| *y), 0.05));
        (x, y)
    }
}

/// Min/max of `values` widened by `margin` of the span on each side. A flat or
/// empty input still yields a non-empty range.
fn fit_range(values: impl Iterator<Item = f64>, margin: f64) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    if span <= f64::EPSILON {
        return (min - 1.0)..(max + 1.0);
    }
    (min - span * margin)..(max + span * margin)
}

/// Output collaborator: draws a chart and persists it, returning where it went.
pub trait ChartRenderer {
    fn render(&mut self, chart: &LineChart) -> Result<PathBuf>;
}
