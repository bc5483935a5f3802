//! Visualization interface for the display samples
//!
//! Stages hand their samples to a [`SampleVisualizer`] and never touch a
//! drawing backend themselves. The plotters implementation lives in the
//! `lab-viz` crate; [`NullVisualizer`] keeps headless runs and tests free of
//! any rendering.

use crate::outliers::{by_distribution, SampleSet};
use lab_core::Result;
use lab_distributions::Distribution;
use tracing::instrument;

/// One panel of a figure: a sample size and the sample drawn at that size
pub type Panel<'a> = (usize, &'a [f64]);

/// Receives per-distribution samples and turns them into figures
pub trait SampleVisualizer {
    /// Histograms with the theoretical density superimposed, one panel per sample
    fn histogram_figure(&self, distribution: &Distribution, panels: &[Panel<'_>]) -> Result<()>;

    /// Box plots of all samples of one distribution, grouped by sample size
    fn boxplot_figure(&self, distribution: &Distribution, panels: &[Panel<'_>]) -> Result<()>;
}

/// Discards every figure
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVisualizer;

impl SampleVisualizer for NullVisualizer {
    fn histogram_figure(&self, _distribution: &Distribution, _panels: &[Panel<'_>]) -> Result<()> {
        Ok(())
    }

    fn boxplot_figure(&self, _distribution: &Distribution, _panels: &[Panel<'_>]) -> Result<()> {
        Ok(())
    }
}

fn panels(group: &[SampleSet]) -> Vec<Panel<'_>> {
    group
        .iter()
        .map(|set| (set.scenario.sample_size, set.sample.as_slice()))
        .collect()
}

/// One histogram figure per distribution
#[instrument(skip_all)]
pub fn visualize_histograms<V: SampleVisualizer + ?Sized>(
    visualizer: &V,
    sets: &[SampleSet],
) -> Result<()> {
    for group in by_distribution(sets) {
        visualizer.histogram_figure(&group[0].scenario.distribution, &panels(group))?;
    }
    Ok(())
}

/// One box-plot figure per distribution
#[instrument(skip_all)]
pub fn visualize_boxplots<V: SampleVisualizer + ?Sized>(
    visualizer: &V,
    sets: &[SampleSet],
) -> Result<()> {
    for group in by_distribution(sets) {
        visualizer.boxplot_figure(&group[0].scenario.distribution, &panels(group))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outliers::draw_samples;
    use crate::LabConfig;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(&'static str, &'static str, Vec<usize>)>>,
    }

    impl SampleVisualizer for Recorder {
        fn histogram_figure(&self, distribution: &Distribution, panels: &[Panel<'_>]) -> Result<()> {
            let sizes = panels.iter().map(|(n, sample)| {
                assert_eq!(*n, sample.len());
                *n
            });
            self.calls
                .borrow_mut()
                .push(("histogram", distribution.name(), sizes.collect()));
            Ok(())
        }

        fn boxplot_figure(&self, distribution: &Distribution, panels: &[Panel<'_>]) -> Result<()> {
            let sizes = panels.iter().map(|(n, _)| *n).collect();
            self.calls.borrow_mut().push(("boxplot", distribution.name(), sizes));
            Ok(())
        }
    }

    #[test]
    fn test_one_figure_per_distribution() {
        let config = LabConfig::characteristics();
        let sets = draw_samples(&config, 2).unwrap();
        let recorder = Recorder::default();
        visualize_histograms(&recorder, &sets).unwrap();

        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0], ("histogram", "Cauchy", vec![10, 50, 1000]));
        assert_eq!(calls[3].1, "Uniform");
    }

    #[test]
    fn test_boxplots_follow_outlier_order() {
        let sets = draw_samples(&LabConfig::outliers(), 2).unwrap();
        let recorder = Recorder::default();
        visualize_boxplots(&recorder, &sets).unwrap();

        let names: Vec<_> = recorder.calls.borrow().iter().map(|c| c.1).collect();
        assert_eq!(names, ["Normal", "Cauchy", "Poisson", "Uniform"]);
    }

    #[test]
    fn test_null_visualizer() {
        let sets = draw_samples(&LabConfig::outliers(), 0).unwrap();
        visualize_histograms(&NullVisualizer, &sets).unwrap();
        visualize_boxplots(&NullVisualizer, &sets).unwrap();
    }
}
