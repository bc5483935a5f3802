//! Histogram figures: one panel per sample size with the density on top

use crate::layout::{clip_bins, density_y_max, histogram_x_range};
use lab_core::Result;
use lab_distributions::Distribution;
use lab_experiments::Panel;
use lab_histogram::auto_histogram;
use plotters::prelude::*;
use std::error::Error as StdError;
use std::path::Path;

/// Everything one histogram panel draws, in data coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramPanel {
    pub sample_size: usize,
    pub x_range: (f64, f64),
    pub y_max: f64,
    /// `(left, right, density)` per bar
    pub bars: Vec<(f64, f64, f64)>,
    /// Theoretical density at the plot range points
    pub curve: Vec<(f64, f64)>,
}

impl HistogramPanel {
    /// Bin the sample with the automatic rule and evaluate the density
    pub fn build(distribution: &Distribution, sample_size: usize, sample: &[f64]) -> Result<Self> {
        let x_range = histogram_x_range(distribution);
        let curve = distribution.density_curve(&distribution.plot_range())?;
        let bars = clip_bins(&auto_histogram(sample)?, x_range);
        let y_max = density_y_max(&bars, &curve);
        Ok(Self {
            sample_size,
            x_range,
            y_max,
            bars,
            curve,
        })
    }
}

pub(crate) fn build_panels(
    distribution: &Distribution,
    panels: &[Panel<'_>],
) -> Result<Vec<HistogramPanel>> {
    panels
        .iter()
        .map(|&(sample_size, sample)| HistogramPanel::build(distribution, sample_size, sample))
        .collect()
}

pub(crate) fn draw(
    path: &Path,
    size: (u32, u32),
    panels: &[HistogramPanel],
) -> std::result::Result<(), Box<dyn StdError>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((1, panels.len().max(1)));

    for (area, panel) in areas.iter().zip(panels) {
        let (x_min, x_max) = panel.x_range;
        let mut chart = ChartBuilder::on(area)
            .caption(format!("Sample size: {}", panel.sample_size), ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, 0.0..panel.y_max)?;

        chart
            .configure_mesh()
            .x_desc("Value")
            .y_desc("Density")
            .draw()?;

        let fill = BLUE.mix(0.4);
        chart
            .draw_series(panel.bars.iter().map(|&(left, right, density)| {
                Rectangle::new([(left, 0.0), (right, density)], fill.filled())
            }))?
            .label("Histogram")
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], fill.filled()));

        chart
            .draw_series(LineSeries::new(panel.curve.iter().copied(), &RED))?
            .label("PDF")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
