//! Persistent Homology: Reduction Engine and Barcodes
//!
//! - `reduction.rs`: the boundary-matrix reduction over Z/2Z that turns a
//!   finalized filtered stream into birth/death pairs.
//! - `barcode.rs`: intervals and the per-dimension barcode collection.
//! - `betti.rs`: Betti-number snapshots derived from a barcode.

mod barcode;
mod betti;
mod reduction;

pub use barcode::{BarcodeCollection, Interval};
pub use betti::BettiNumbers;
pub use reduction::reduce;
