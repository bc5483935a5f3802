//! Histograms with densities, then Monte-Carlo moments of three location
//! estimators for Cauchy, Normal, Poisson and Uniform samples.

use anyhow::{Context, Result};
use distribution_lab::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = LabConfig::characteristics();
    let seed = resolve_seed(&config);
    info!(seed, output_dir = %config.output_dir.display(), "starting characteristics run");
    let config = config.with_seed(seed);

    let sets = draw_samples(&config, seed)?;
    let visualizer = PlottersVisualizer::from_config(&config);
    visualize_histograms(&visualizer, &sets).context("rendering histograms")?;

    let records = run_characteristics(&config)?;
    print!("{}", format_characteristics(&records));
    Ok(())
}
