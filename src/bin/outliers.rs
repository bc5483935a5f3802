//! Box plots and box-plot outlier counts for Normal, Cauchy, Poisson and
//! Uniform samples.

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

    let config = LabConfig::outliers();
    let seed = resolve_seed(&config);
    info!(seed, output_dir = %config.output_dir.display(), "starting outliers run");

    let sets = draw_samples(&config, seed)?;
    let visualizer = PlottersVisualizer::from_config(&config);
    visualize_boxplots(&visualizer, &sets).context("rendering box plots")?;

    let counts = count_outliers(&sets)?;
    let table = outlier_table(&counts, &config.sample_sizes)?;
    println!("Outlier table:");
    println!("{table}");
    Ok(())
}
