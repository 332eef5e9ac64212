//! Betti Numbers Read Off a Barcode
//!
//! β_k at a filtration value `t` counts the dimension-k intervals alive at
//! `t`, i.e. those with `start ≤ t` and (`end > t` or no end). This gives
//! the homology ranks of the complex at any snapshot of the filtration
//! without re-running the reduction.

use super::BarcodeCollection;

/// Betti numbers of the filtration at one value.
#[derive(Debug, Clone, PartialEq)]
pub struct BettiNumbers {
    counts: Vec<usize>,
    /// Filtration value the counts were taken at.
    pub value: f64,
}

impl BettiNumbers {
    /// Count intervals alive at `value` in every dimension of the barcode.
    pub fn at_value(barcode: &BarcodeCollection, value: f64) -> Self {
        let mut counts = vec![0usize; barcode.max_dimension() + 1];
        for interval in barcode.intervals() {
            let alive = interval.start <= value
                && interval.end.map_or(true, |end| end > value);
            if alive {
                counts[interval.dimension] += 1;
            }
        }
        Self { counts, value }
    }

    /// β_k; zero beyond the barcode's maximum dimension.
    pub fn beta(&self, k: usize) -> usize {
        self.counts.get(k).copied().unwrap_or(0)
    }

    /// Sum of all Betti numbers.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Euler characteristic χ = Σ (−1)^k β_k.
    pub fn euler_characteristic(&self) -> i64 {
        self.counts
            .iter()
            .enumerate()
            .map(|(k, &c)| if k % 2 == 0 { c as i64 } else { -(c as i64) })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::homology::Interval;

    fn sample_barcode() -> BarcodeCollection {
        let mut barcode = BarcodeCollection::new();
        barcode.add(Interval::finite(0, 0.0, 1.0));
        barcode.add(Interval::finite(0, 0.0, 2.0));
        barcode.add(Interval::right_infinite(0, 0.0));
        barcode.add(Interval::right_infinite(1, 1.5));
        barcode
    }

    #[test]
    fn test_counts_along_filtration() {
        let barcode = sample_barcode();

        let start = BettiNumbers::at_value(&barcode, 0.0);
        assert_eq!(start.beta(0), 3);
        assert_eq!(start.beta(1), 0);

        let mid = BettiNumbers::at_value(&barcode, 1.5);
        assert_eq!(mid.beta(0), 2);
        assert_eq!(mid.beta(1), 1);
        assert_eq!(mid.euler_characteristic(), 1);

        let late = BettiNumbers::at_value(&barcode, 10.0);
        assert_eq!(late.beta(0), 1);
        assert_eq!(late.beta(1), 1);
        assert_eq!(late.total(), 2);
        assert_eq!(late.beta(7), 0);
    }

    #[test]
    fn test_interval_is_half_open() {
        let barcode = sample_barcode();
        // An interval [0, 1) is already dead at its end value.
        let at_one = BettiNumbers::at_value(&barcode, 1.0);
        assert_eq!(at_one.beta(0), 2);
    }
}
