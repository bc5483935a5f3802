//! PNG figures for the distribution lab, drawn with plotters
//!
//! [`PlottersVisualizer`] implements [`SampleVisualizer`] and writes one
//! file per distribution and figure kind into its output directory:
//!
//! - `histogram_<name>.png`: one panel per sample size, density-normalized
//!   bars with the theoretical density superimposed
//! - `boxplot_<name>.png`: one box per sample size with fliers as points
//!
//! The figure data is computed first (see [`HistogramPanel`] and
//! [`BoxplotFigure`]); only the drawing itself touches the backend, and its
//! failures surface as [`lab_core::Error::Render`].

pub mod boxplot;
pub mod histogram;
pub mod layout;

pub use boxplot::BoxplotFigure;
pub use histogram::HistogramPanel;

use lab_core::{Error, Result};
use lab_distributions::Distribution;
use lab_experiments::{LabConfig, Panel, SampleVisualizer};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes histogram and box-plot figures as PNG files
#[derive(Debug, Clone)]
pub struct PlottersVisualizer {
    output_dir: PathBuf,
    histogram_size: (u32, u32),
    boxplot_size: (u32, u32),
}

impl PlottersVisualizer {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        let defaults = LabConfig::default();
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            histogram_size: defaults.histogram_figure_size,
            boxplot_size: defaults.boxplot_figure_size,
        }
    }

    /// Output directory and figure sizes taken from a run configuration
    pub fn from_config(config: &LabConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            histogram_size: config.histogram_figure_size,
            boxplot_size: config.boxplot_figure_size,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the figure of `kind` for `distribution`, creating the directory
    fn prepare(&self, kind: &str, distribution: &Distribution) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(layout::figure_path(&self.output_dir, kind, distribution))
    }
}

impl SampleVisualizer for PlottersVisualizer {
    fn histogram_figure(&self, distribution: &Distribution, panels: &[Panel<'_>]) -> Result<()> {
        let figure = histogram::build_panels(distribution, panels)?;
        let path = self.prepare("histogram", distribution)?;
        debug!(
            distribution = distribution.name(),
            panels = figure.len(),
            "drawing histograms"
        );
        histogram::draw(&path, self.histogram_size, &figure).map_err(Error::render)?;
        info!(path = %path.display(), "wrote histogram figure");
        Ok(())
    }

    fn boxplot_figure(&self, distribution: &Distribution, panels: &[Panel<'_>]) -> Result<()> {
        let figure = BoxplotFigure::build(panels)?;
        let path = self.prepare("boxplot", distribution)?;
        debug!(
            distribution = distribution.name(),
            boxes = figure.boxes.len(),
            "drawing box plots"
        );
        boxplot::draw(&path, self.boxplot_size, distribution.name(), &figure)
            .map_err(Error::render)?;
        info!(path = %path.display(), "wrote box-plot figure");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = LabConfig::outliers().with_output_dir("figures");
        let viz = PlottersVisualizer::from_config(&config);
        assert_eq!(viz.output_dir(), Path::new("figures"));
        assert_eq!(viz.boxplot_size, (1000, 600));
    }

    #[test]
    fn test_invalid_sample_fails_before_drawing() {
        let dir = std::env::temp_dir().join("lab-viz-invalid-sample");
        let viz = PlottersVisualizer::new(&dir);
        let normal = Distribution::normal(0.0, 1.0).unwrap();
        let bad: &[f64] = &[1.0, f64::NAN];
        assert!(viz.histogram_figure(&normal, &[(2, bad)]).is_err());
        assert!(viz.boxplot_figure(&normal, &[(2, bad)]).is_err());
        assert!(!layout::figure_path(&dir, "histogram", &normal).exists());
    }
}
