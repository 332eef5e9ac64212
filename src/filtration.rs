//! Filtration Converters: Increasing and Decreasing Edge-Weight Order
//!
//! A converter maps a raw edge weight to the filtration value used to order
//! simplices. Two orderings are supported:
//!
//! - **Increasing**: identity; smaller weights enter the filtration first.
//! - **Decreasing**: `w ↦ M − w` for a fixed maximum `M`; larger weights
//!   enter first. On a finite weight set this is a strictly order-reversing
//!   bijection, so simplices sharing a raw weight still compare under the
//!   deterministic tie-break the reduction relies on.
//!
//! The direction is a tagged variant rather than a trait object: the
//! pipeline is monomorphic and a two-case enum keeps the conversion
//! inlined and `Copy`.
//!
//! ## Precondition
//!
//! The decreasing converter requires `M ≥ max(W)` over the graph's weight
//! set `W`. A smaller `M` converts some edge below the vertices' filtration
//! value 0, which the flag complex builder rejects as
//! `InconsistentFiltration`.

use crate::graph::WeightedGraph;
use crate::homology::Interval;

/// Mapping from raw edge weights to filtration values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FiltrationConverter {
    /// Filtration value equals the raw weight.
    Increasing,
    /// Filtration value is `max_weight − w`, reversing the weight order.
    Decreasing { max_weight: f64 },
}

impl FiltrationConverter {
    /// Increasing edge-weight order.
    pub fn increasing() -> Self {
        Self::Increasing
    }

    /// Decreasing edge-weight order with an explicit maximum `M ≥ max(W)`.
    pub fn decreasing(max_weight: f64) -> Self {
        Self::Decreasing { max_weight }
    }

    /// Decreasing order with the maximum derived from the graph's largest
    /// edge weight. The largest-weight edges then share filtration value 0
    /// with the vertices; the dimension tie-break keeps faces first.
    pub fn decreasing_from(graph: &WeightedGraph) -> Self {
        Self::Decreasing {
            max_weight: graph.max_weight().unwrap_or(0.0),
        }
    }

    /// Convert a raw edge weight to its filtration value.
    pub fn convert(&self, w: f64) -> f64 {
        match *self {
            Self::Increasing => w,
            Self::Decreasing { max_weight } => max_weight - w,
        }
    }

    /// Map a filtration value back to the raw weight domain
    /// (`convert` is an involution in both modes).
    pub fn restore(&self, value: f64) -> f64 {
        self.convert(value)
    }

    /// Filtration value of vertices. Vertices are present from the start of
    /// the filtration in either mode: `convert(0) = 0` increasing,
    /// `convert(M) = 0` decreasing.
    pub fn vertex_value(&self) -> f64 {
        0.0
    }

    /// Whether this converter reverses the weight order.
    pub fn is_decreasing(&self) -> bool {
        matches!(self, Self::Decreasing { .. })
    }

    /// Translate a reduction pair into a reported interval.
    ///
    /// `birth` and `death` are in the converted (internal ascending) domain;
    /// `top` is the largest filtration value in the stream. Pairs with zero
    /// persistence are dropped and yield `None`.
    ///
    /// Increasing mode reports values as-is. Decreasing mode restores the
    /// raw weight domain: a finite pair `[b, d)` becomes `(M−d, M−b)`. A
    /// class that never dies is reported right-infinite with start 0 when
    /// born at the start of the filtration (internal value 0, i.e. always
    /// present); a never-dying class born later persists exactly to the top
    /// of the finite filtration and is reported as the finite pair
    /// `(M−top, M−birth)`.
    pub fn make_interval(
        &self,
        dimension: usize,
        birth: f64,
        death: Option<f64>,
        top: f64,
    ) -> Option<Interval> {
        match (*self, death) {
            (_, Some(d)) if d <= birth => None,
            (Self::Increasing, Some(d)) => Some(Interval::finite(dimension, birth, d)),
            (Self::Increasing, None) => Some(Interval::right_infinite(dimension, birth)),
            (Self::Decreasing { max_weight }, Some(d)) => {
                Some(Interval::finite(dimension, max_weight - d, max_weight - birth))
            }
            (Self::Decreasing { max_weight }, None) => {
                if birth == 0.0 {
                    Some(Interval::right_infinite(dimension, 0.0))
                } else {
                    Some(Interval::finite(
                        dimension,
                        max_weight - top,
                        max_weight - birth,
                    ))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increasing_identity() {
        let c = FiltrationConverter::increasing();
        assert_eq!(c.convert(0.7), 0.7);
        assert_eq!(c.vertex_value(), 0.0);
        assert!(!c.is_decreasing());
    }

    #[test]
    fn test_decreasing_reverses_order() {
        let c = FiltrationConverter::decreasing(5.0);
        assert!((c.convert(2.1) - 2.9).abs() < 1e-12);
        assert!((c.convert(0.7) - 4.3).abs() < 1e-12);
        assert!(c.convert(2.1) < c.convert(0.7));
        assert_eq!(c.vertex_value(), 0.0);
        assert_eq!(c.restore(c.convert(1.0)), 1.0);
    }

    #[test]
    fn test_zero_persistence_dropped() {
        let c = FiltrationConverter::increasing();
        assert_eq!(c.make_interval(1, 2.0, Some(2.0), 3.0), None);
        let c = FiltrationConverter::decreasing(5.0);
        assert_eq!(c.make_interval(1, 2.9, Some(2.9), 4.3), None);
    }

    #[test]
    fn test_decreasing_interval_restoration() {
        let c = FiltrationConverter::decreasing(5.0);
        // Finite pair [0, 2.9) in the internal domain: reported (2.1, 5)
        let i = c.make_interval(0, 0.0, Some(2.9), 4.3).unwrap();
        assert!((i.start - 2.1).abs() < 1e-12);
        assert_eq!(i.end, Some(5.0));

        // Essential class present from the start stays right-infinite
        let i = c.make_interval(0, 0.0, None, 4.3).unwrap();
        assert!(i.is_right_infinite());
        assert_eq!(i.start, 0.0);

        // Essential class born mid-filtration closes at the top
        let i = c.make_interval(1, 4.0, None, 4.3).unwrap();
        assert!(!i.is_right_infinite());
        assert!((i.start - 0.7).abs() < 1e-12);
        assert!((i.end.unwrap() - 1.0).abs() < 1e-12);
    }
}
