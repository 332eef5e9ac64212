//! Error Taxonomy for the Persistence Pipeline
//!
//! Every failure in this crate is local, synchronous, and surfaced to the
//! caller immediately. The computation is deterministic and pure, so nothing
//! is retried internally, and a failed construction or reduction leaves no
//! partial barcode behind.

use thiserror::Error;

/// Errors raised by graph construction, complex building, and reduction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// A vertex identifier is outside `[0, n)`.
    #[error("invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    /// An edge connects a vertex to itself.
    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop { vertex: usize },

    /// An edge weight is NaN or infinite.
    #[error("edge ({u}, {v}) has a non-finite weight")]
    InvalidWeight { u: usize, v: usize },

    /// The filtered stream was already finalized; no further simplices may
    /// be added and it cannot be finalized twice.
    #[error("filtered stream already finalized")]
    AlreadyFinalized,

    /// The requested maximum homology dimension cannot be represented
    /// (clique size `max_dimension + 1` overflows).
    #[error("invalid maximum dimension {max_dimension}")]
    InvalidDimension { max_dimension: usize },

    /// Persistence of an empty graph is undefined.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// The filtration converter broke the face-before-coface monotonicity
    /// invariant (for example, a decreasing converter constructed with a
    /// maximum below the largest edge weight).
    #[error("filtration monotonicity violated: {detail}")]
    InconsistentFiltration { detail: String },

    /// A distance matrix passed to graph construction is not square.
    #[error("distance matrix is {rows}x{cols}, expected square")]
    NonSquareMatrix { rows: usize, cols: usize },
}
