//! Console reports of both programs

use crate::characteristics::StatisticsRecord;
use crate::outliers::OutlierCount;
use crate::Result;
use polars::prelude::*;

/// Name of the first column of the outlier table
pub const DISTRIBUTION_COLUMN: &str = "distribution";

/// Column label for a sample size
pub fn size_column(sample_size: usize) -> String {
    format!("n={sample_size}")
}

/// Render the characteristics records as the indented text report
///
/// Records of one distribution must be adjacent, as produced by
/// [`run_characteristics`](crate::run_characteristics).
pub fn format_characteristics(records: &[StatisticsRecord]) -> String {
    let mut lines: Vec<String> = Vec::new();
    for group in records.chunk_by(|a, b| a.distribution_name == b.distribution_name) {
        lines.push(format!("Distribution: {}", group[0].distribution_name));
        for record in group {
            lines.push(format!("  Sample size: {}", record.sample_size));
            lines.extend(
                [
                    ("Mean", record.mean_of_means),
                    ("Median", record.mean_of_medians),
                    ("z_q", record.mean_of_quartile_midpoint),
                    ("Mean square", record.mean_of_squared_means),
                    ("Median square", record.mean_of_squared_medians),
                    ("Z_q square", record.mean_of_squared_quartile_midpoint),
                    ("Dispersion", record.dispersion),
                ]
                .map(|(label, value)| format!("    {label}: {value:.4}")),
            );
        }
        lines.push(String::new());
    }
    lines.into_iter().map(|line| line + "\n").collect()
}

/// Pivot outlier counts into one row per distribution and one column per size
///
/// Rows follow the first appearance of each distribution in `counts`;
/// a size without a count for some distribution is null.
pub fn outlier_table(counts: &[OutlierCount], sample_sizes: &[usize]) -> Result<DataFrame> {
    if sample_sizes.is_empty() {
        let err = lab_core::Error::Report("outlier table needs at least one sample size".into());
        return Err(err.into());
    }
    let mut names: Vec<&str> = Vec::new();
    for count in counts {
        if !names.contains(&count.distribution_name) {
            names.push(count.distribution_name);
        }
    }

    let mut columns: Vec<Column> = Vec::with_capacity(sample_sizes.len() + 1);
    columns.push(Series::new(DISTRIBUTION_COLUMN.into(), names.clone()).into());
    for &size in sample_sizes {
        let values: Vec<Option<i64>> = names
            .iter()
            .map(|name| {
                counts
                    .iter()
                    .find(|c| c.distribution_name == *name && c.sample_size == size)
                    .map(|c| c.count as i64)
            })
            .collect();
        columns.push(Series::new(size_column(size).as_str().into(), values).into());
    }

    Ok(DataFrame::new(columns)?)
}
