//! Density-normalized histogram values

use std::fmt;

/// One bar: `[left, right)`, the last bar also holds its right edge
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub left: f64,
    pub right: f64,
    pub count: usize,
    /// `count / (n · width)`, so the bars integrate to one
    pub density: f64,
}

impl HistogramBin {
    pub fn new(left: f64, right: f64, count: usize, total_count: usize) -> Self {
        let width = right - left;
        let density = match (width > 0.0, total_count) {
            (true, n) if n > 0 => count as f64 / (n as f64 * width),
            _ => 0.0,
        };
        Self {
            left,
            right,
            count,
            density,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Bars of a sample plus the sample extent they cover
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    min: f64,
    max: f64,
}

impl Histogram {
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, min: f64, max: f64) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
        }
    }

    /// Histogram of an empty sample: no bars
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 0.0, 0.0)
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Left edge of the first bar
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Right edge of the last bar
    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Area under the bars; one for any non-empty sample
    pub fn total_mass(&self) -> f64 {
        self.bins.iter().map(|bin| bin.density * bin.width()).sum()
    }

    /// Index of the bar holding `value`, if any
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        let last = self.bins.len().checked_sub(1)?;
        self.bins.iter().enumerate().position(|(i, bin)| {
            value >= bin.left && (value < bin.right || (i == last && value == bin.right))
        })
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bins over [{:.3}, {:.3}], n={}",
            self.len(),
            self.min,
            self.max,
            self.total_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_bars() -> Histogram {
        let bins = vec![
            HistogramBin::new(0.0, 1.0, 2, 10),
            HistogramBin::new(1.0, 2.0, 5, 10),
            HistogramBin::new(2.0, 3.0, 3, 10),
        ];
        Histogram::new(bins, 10, 0.0, 3.0)
    }

    #[test]
    fn test_bin_density() {
        let bin = HistogramBin::new(0.0, 0.5, 5, 10);
        assert_eq!(bin.width(), 0.5);
        assert_eq!(bin.density, 1.0);
        assert_eq!(HistogramBin::new(2.0, 2.0, 4, 4).density, 0.0);
    }

    #[test]
    fn test_find_bin_edges() {
        let hist = three_bars();
        assert_eq!(hist.find_bin(0.0), Some(0));
        assert_eq!(hist.find_bin(1.0), Some(1));
        assert_eq!(hist.find_bin(3.0), Some(2));
        assert_eq!(hist.find_bin(3.5), None);
        assert_eq!(hist.find_bin(-1.0), None);
        assert_eq!(Histogram::empty().find_bin(0.0), None);
    }

    #[test]
    fn test_mass_and_display() {
        let hist = three_bars();
        assert!((hist.total_mass() - 1.0).abs() < 1e-12);
        assert_eq!(hist.counts(), vec![2, 5, 3]);
        assert_eq!(hist.to_string(), "3 bins over [0.000, 3.000], n=10");
    }
}
