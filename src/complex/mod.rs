//! Filtered Flag Complexes of Weighted Graphs
//!
//! Turns a weighted graph and a filtration converter into the sorted
//! simplex stream consumed by the reduction engine:
//!
//! - `simplex.rs`: the simplex type (sorted vertex set, boundary faces).
//! - `flag.rs`: clique enumeration, filtration assignment, and the
//!   finalize-once `FilteredStream`.

mod flag;
mod simplex;

pub use flag::{FilteredSimplex, FilteredStream, FlagComplexBuilder};
pub use simplex::Simplex;
