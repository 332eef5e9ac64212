//! Persistence API: One Call from Graph to Barcode
//!
//! Orchestrates the pipeline: pick the filtration converter, build and
//! finalize the flag complex, run the reduction. The computation is
//! single-threaded, synchronous, and deterministic; calling it twice on the
//! same graph yields identical barcodes.

use tracing::debug;

use crate::complex::FlagComplexBuilder;
use crate::error::PersistenceError;
use crate::filtration::FiltrationConverter;
use crate::graph::WeightedGraph;
use crate::homology::{reduce, BarcodeCollection};

/// Compute the persistence barcode of the graph's flag complex up to
/// `max_dimension`, filtered by increasing (`increasing = true`) or
/// decreasing edge weight.
///
/// In decreasing mode the converter maximum is derived from the graph's
/// largest edge weight; use [`compute_persistence_with_converter`] to
/// supply an explicit maximum.
pub fn compute_persistence(
    graph: &WeightedGraph,
    max_dimension: usize,
    increasing: bool,
) -> Result<BarcodeCollection, PersistenceError> {
    let converter = if increasing {
        FiltrationConverter::increasing()
    } else {
        FiltrationConverter::decreasing_from(graph)
    };
    compute_persistence_with_converter(graph, max_dimension, converter)
}

/// Compute the persistence barcode with an explicit filtration converter.
///
/// Fails with `EmptyGraph` for a graph without vertices, `InvalidDimension`
/// for an unrepresentable dimension, and `InconsistentFiltration` when the
/// converter breaks face-before-coface monotonicity (for example a
/// decreasing maximum below the largest edge weight).
pub fn compute_persistence_with_converter(
    graph: &WeightedGraph,
    max_dimension: usize,
    converter: FiltrationConverter,
) -> Result<BarcodeCollection, PersistenceError> {
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        max_dimension,
        decreasing = converter.is_decreasing(),
        "computing persistence"
    );

    let mut builder = FlagComplexBuilder::new(graph, max_dimension, converter)?;
    let stream = builder.finalize()?;
    Ok(reduce(&stream))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let g = WeightedGraph::new(0);
        assert_eq!(
            compute_persistence(&g, 2, true),
            Err(PersistenceError::EmptyGraph)
        );
    }

    #[test]
    fn test_unrepresentable_dimension() {
        let g = WeightedGraph::new(1);
        assert_eq!(
            compute_persistence(&g, usize::MAX, true),
            Err(PersistenceError::InvalidDimension {
                max_dimension: usize::MAX
            })
        );
    }

    #[test]
    fn test_isolated_vertices() {
        let g = WeightedGraph::new(3);
        let barcode = compute_persistence(&g, 2, true).unwrap();
        assert_eq!(barcode.infinite_count(0), 3);
        assert_eq!(barcode.len(), 3);
    }

    #[test]
    fn test_idempotent() {
        let mut g = WeightedGraph::new(4);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 2.0).unwrap();
        g.add_edge(2, 3, 3.0).unwrap();
        g.add_edge(0, 3, 4.0).unwrap();

        let first = compute_persistence(&g, 2, true).unwrap();
        let second = compute_persistence(&g, 2, true).unwrap();
        assert_eq!(first, second);

        let first = compute_persistence(&g, 2, false).unwrap();
        let second = compute_persistence(&g, 2, false).unwrap();
        assert_eq!(first, second);
    }
}
