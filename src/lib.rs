//! # graph-persistence
//!
//! Persistent homology of weighted graphs via filtered flag complexes.
//!
//! ## Pipeline
//!
//! 1. **Weighted graph**: vertices `[0, n)` and undirected weighted edges.
//! 2. **Filtration converter**: orders the filtration by increasing or
//!    decreasing edge weight (`w ↦ w` or `w ↦ M − w`).
//! 3. **Flag complex**: every clique up to a maximum dimension becomes a
//!    simplex whose filtration value is the largest converted weight among
//!    its edges, sorted into a finalize-once stream.
//! 4. **Reduction**: the standard boundary-matrix algorithm over Z/2Z
//!    extracts birth/death pairs.
//! 5. **Barcode**: intervals per homology dimension, finite or
//!    right-infinite.
//!
//! ## Example
//!
//! ```
//! use graph_persistence::{compute_persistence, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new(3);
//! graph.add_edge(0, 1, 1.0)?;
//! graph.add_edge(1, 2, 2.0)?;
//!
//! let barcode = compute_persistence(&graph, 2, true)?;
//! // One component survives forever, two die when the edges merge them.
//! assert_eq!(barcode.infinite_count(0), 1);
//! assert_eq!(barcode.finite_count(0), 2);
//! # Ok::<(), graph_persistence::PersistenceError>(())
//! ```
//!
//! ## References
//!
//! - Edelsbrunner, Letscher, Zomorodian (2002). "Topological Persistence
//!   and Simplification". Discrete & Computational Geometry.
//! - Zomorodian, Carlsson (2005). "Computing Persistent Homology".
//!   Discrete & Computational Geometry.

pub mod api;
pub mod complex;
pub mod error;
pub mod filtration;
pub mod graph;
pub mod homology;

pub use api::{compute_persistence, compute_persistence_with_converter};
pub use complex::{FilteredSimplex, FilteredStream, FlagComplexBuilder, Simplex};
pub use error::PersistenceError;
pub use filtration::FiltrationConverter;
pub use graph::WeightedGraph;
pub use homology::{BarcodeCollection, BettiNumbers, Interval};
