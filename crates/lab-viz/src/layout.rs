//! Axis and geometry helpers shared by the figures

use lab_distributions::Distribution;
use lab_histogram::Histogram;
use std::path::{Path, PathBuf};

/// Headroom above the tallest bar or curve point
const Y_HEADROOM: f64 = 1.1;

/// File a figure of the given kind is written to
pub fn figure_path(dir: &Path, kind: &str, distribution: &Distribution) -> PathBuf {
    dir.join(format!("{kind}_{}.png", distribution.name().to_lowercase()))
}

/// Horizontal extent of a histogram panel: the density plot range
pub fn histogram_x_range(distribution: &Distribution) -> (f64, f64) {
    match distribution.plot_range().bounds() {
        Some((lo, hi)) if hi > lo => (lo, hi),
        Some((x, _)) => (x - 0.5, x + 0.5),
        None => (-1.0, 1.0),
    }
}

/// Histogram bars as `(left, right, density)`, cut to `[lo, hi]`
///
/// Bars entirely outside the range are dropped.
pub fn clip_bins(histogram: &Histogram, (lo, hi): (f64, f64)) -> Vec<(f64, f64, f64)> {
    histogram
        .bins()
        .iter()
        .filter(|bin| bin.right > lo && bin.left < hi)
        .map(|bin| (bin.left.max(lo), bin.right.min(hi), bin.density))
        .collect()
}

/// Upper y limit covering both the bars and the density curve
pub fn density_y_max(bars: &[(f64, f64, f64)], curve: &[(f64, f64)]) -> f64 {
    let top = bars
        .iter()
        .map(|&(_, _, d)| d)
        .chain(curve.iter().map(|&(_, y)| y))
        .filter(|y| y.is_finite())
        .fold(0.0, f64::max);
    if top > 0.0 {
        top * Y_HEADROOM
    } else {
        1.0
    }
}

/// Vertical extent of a box-plot figure, padded by 5% on each side
pub fn value_range(samples: &[&[f64]]) -> (f64, f64) {
    let (lo, hi) = samples
        .iter()
        .flat_map(|s| s.iter().copied())
        .filter(|x| x.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| (lo.min(x), hi.max(x)));
    if !lo.is_finite() {
        return (-1.0, 1.0);
    }
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 0.5 };
    (lo - pad, hi + pad)
}

/// Tick label for box position `x`: the sample size of the box at that index
pub fn size_label(x: f64, sizes: &[usize]) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    sizes
        .get(index as usize)
        .map(|n| n.to_string())
        .unwrap_or_default()
}
