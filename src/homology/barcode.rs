//! Barcodes: Persistence Intervals Grouped by Dimension
//!
//! A persistence interval `[start, end)` records a homology class born at
//! filtration value `start` and killed at `end`; a right-infinite interval
//! (`end` absent) persists to the top of the filtration. The barcode
//! collection groups intervals by homology dimension.

use std::fmt;

/// A persistence interval in one homology dimension.
///
/// `end` is `None` for right-infinite intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub dimension: usize,
    pub start: f64,
    pub end: Option<f64>,
}

impl Interval {
    /// A finite interval `[start, end)`.
    pub fn finite(dimension: usize, start: f64, end: f64) -> Self {
        Self {
            dimension,
            start,
            end: Some(end),
        }
    }

    /// A right-infinite interval `[start, ∞)`.
    pub fn right_infinite(dimension: usize, start: f64) -> Self {
        Self {
            dimension,
            start,
            end: None,
        }
    }

    /// Whether the class never dies.
    pub fn is_right_infinite(&self) -> bool {
        self.end.is_none()
    }

    /// Lifetime of the class; infinite for right-infinite intervals.
    pub fn persistence(&self) -> f64 {
        match self.end {
            Some(end) => end - self.start,
            None => f64::INFINITY,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "[{}, {})", self.start, end),
            None => write!(f, "[{}, infinity)", self.start),
        }
    }
}

/// All persistence intervals of one computation, queryable by dimension.
///
/// Intervals within a dimension carry no ordering contract; callers must
/// treat `intervals_at_dimension` as an unordered collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarcodeCollection {
    intervals: Vec<Interval>,
    max_dimension: usize,
}

impl BarcodeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, interval: Interval) {
        if interval.dimension > self.max_dimension {
            self.max_dimension = interval.dimension;
        }
        self.intervals.push(interval);
    }

    /// All intervals across dimensions.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Intervals born in homology dimension `k` (unordered).
    pub fn intervals_at_dimension(&self, k: usize) -> Vec<&Interval> {
        self.intervals.iter().filter(|i| i.dimension == k).collect()
    }

    /// Number of finite intervals in dimension `k`.
    pub fn finite_count(&self, k: usize) -> usize {
        self.intervals
            .iter()
            .filter(|i| i.dimension == k && !i.is_right_infinite())
            .count()
    }

    /// Number of right-infinite intervals in dimension `k`.
    pub fn infinite_count(&self, k: usize) -> usize {
        self.intervals
            .iter()
            .filter(|i| i.dimension == k && i.is_right_infinite())
            .count()
    }

    /// Largest dimension holding any interval.
    pub fn max_dimension(&self) -> usize {
        self.max_dimension
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl fmt::Display for BarcodeCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dim in 0..=self.max_dimension {
            let at_dim = self.intervals_at_dimension(dim);
            if at_dim.is_empty() {
                continue;
            }
            writeln!(f, "dimension {dim}:")?;
            for interval in at_dim {
                writeln!(f, "  {interval}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_queries() {
        let finite = Interval::finite(0, 0.0, 0.7);
        assert!(!finite.is_right_infinite());
        assert!((finite.persistence() - 0.7).abs() < 1e-12);

        let essential = Interval::right_infinite(1, 2.1);
        assert!(essential.is_right_infinite());
        assert!(essential.persistence().is_infinite());
    }

    #[test]
    fn test_collection_grouping() {
        let mut barcode = BarcodeCollection::new();
        barcode.add(Interval::finite(0, 0.0, 1.0));
        barcode.add(Interval::right_infinite(0, 0.0));
        barcode.add(Interval::finite(1, 0.7, 1.0));

        assert_eq!(barcode.len(), 3);
        assert_eq!(barcode.max_dimension(), 1);
        assert_eq!(barcode.intervals_at_dimension(0).len(), 2);
        assert_eq!(barcode.finite_count(0), 1);
        assert_eq!(barcode.infinite_count(0), 1);
        assert_eq!(barcode.intervals_at_dimension(2).len(), 0);
    }

    #[test]
    fn test_display() {
        let mut barcode = BarcodeCollection::new();
        barcode.add(Interval::finite(0, 0.0, 1.0));
        barcode.add(Interval::right_infinite(0, 0.0));
        let text = barcode.to_string();
        assert!(text.contains("dimension 0:"));
        assert!(text.contains("[0, 1)"));
        assert!(text.contains("[0, infinity)"));
    }
}
