//! Plotting ranges for theoretical densities

/// Points at which a density curve is evaluated
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlotRange {
    /// `points` evenly spaced values from `start` to `end`, both included
    Continuous { start: f64, end: f64, points: usize },
    /// Integers `start..end`, end excluded
    Discrete { start: i64, end: i64 },
}

impl PlotRange {
    pub fn linspace(start: f64, end: f64, points: usize) -> Self {
        Self::Continuous { start, end, points }
    }

    pub fn arange(start: i64, end: i64) -> Self {
        Self::Discrete { start, end }
    }

    /// Materialise the evaluation points
    pub fn points(&self) -> Vec<f64> {
        match *self {
            Self::Continuous { points: 0, .. } => vec![],
            Self::Continuous { start, points: 1, .. } => vec![start],
            Self::Continuous { start, end, points } => {
                let step = (end - start) / (points - 1) as f64;
                (0..points)
                    .map(|i| if i == points - 1 { end } else { start + i as f64 * step })
                    .collect()
            }
            Self::Discrete { start, end } => (start..end).map(|k| k as f64).collect(),
        }
    }

    /// First and last evaluation point, used as x-axis limits
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let points = self.points();
        Some((*points.first()?, *points.last()?))
    }

    pub fn len(&self) -> usize {
        match *self {
            Self::Continuous { points, .. } => points,
            Self::Discrete { start, end } => (end - start).max(0) as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
