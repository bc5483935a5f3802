//! Box-plot figures: one box per sample size, fliers as hollow points

use crate::layout::{size_label, value_range};
use lab_core::Result;
use lab_experiments::Panel;
use lab_spread::{BoxplotBuilder, BoxplotStats};
use plotters::prelude::*;
use std::error::Error as StdError;
use std::path::Path;

/// Half the width of a box in category units
const BOX_HALF_WIDTH: f64 = 0.25;

/// Half the width of a whisker cap in category units
const CAP_HALF_WIDTH: f64 = 0.1;

/// Box-plot statistics of every panel plus the shared value axis
#[derive(Debug, Clone, PartialEq)]
pub struct BoxplotFigure {
    pub sample_sizes: Vec<usize>,
    pub boxes: Vec<BoxplotStats>,
    pub y_range: (f64, f64),
}

impl BoxplotFigure {
    /// Compute 1.5×IQR box-plot statistics for every panel
    pub fn build(panels: &[Panel<'_>]) -> Result<Self> {
        let builder = BoxplotBuilder::default();
        let boxes = panels
            .iter()
            .map(|&(_, sample)| builder.compute(sample))
            .collect::<Result<Vec<_>>>()?;
        let samples: Vec<&[f64]> = panels.iter().map(|&(_, sample)| sample).collect();
        Ok(Self {
            sample_sizes: panels.iter().map(|&(n, _)| n).collect(),
            boxes,
            y_range: value_range(&samples),
        })
    }
}

pub(crate) fn draw(
    path: &Path,
    size: (u32, u32),
    title: &str,
    figure: &BoxplotFigure,
) -> std::result::Result<(), Box<dyn StdError>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let (y_min, y_max) = figure.y_range;
    let categories = figure.boxes.len().max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..categories as f64 - 0.5, y_min..y_max)?;

    let label = |x: &f64| size_label(*x, &figure.sample_sizes);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(categories)
        .x_label_formatter(&label)
        .x_desc("Sample size")
        .y_desc("Value")
        .draw()?;

    for (i, stats) in figure.boxes.iter().enumerate() {
        let x = i as f64;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x - BOX_HALF_WIDTH, stats.q1), (x + BOX_HALF_WIDTH, stats.q3)],
            BLUE.stroke_width(2),
        )))?;

        let cap = |y: f64| vec![(x - CAP_HALF_WIDTH, y), (x + CAP_HALF_WIDTH, y)];
        chart.draw_series([
            PathElement::new(
                vec![(x - BOX_HALF_WIDTH, stats.median), (x + BOX_HALF_WIDTH, stats.median)],
                RED.stroke_width(2),
            ),
            PathElement::new(vec![(x, stats.q3), (x, stats.whisker_high)], BLACK),
            PathElement::new(vec![(x, stats.q1), (x, stats.whisker_low)], BLACK),
            PathElement::new(cap(stats.whisker_high), BLACK),
            PathElement::new(cap(stats.whisker_low), BLACK),
        ])?;

        chart.draw_series(stats.fliers.iter().map(|&v| Circle::new((x, v), 3, BLACK)))?;
    }

    root.present()?;
    Ok(())
}
