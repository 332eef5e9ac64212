//! Boundary Matrix Reduction over Z/2Z
//!
//! The standard persistence algorithm: index the simplices of the finalized
//! stream in filtration order, express each boundary as a sparse column over
//! earlier simplices, and reduce columns left to right. A column that
//! reduces to zero marks a birth; a column whose pivot survives kills the
//! class born at its pivot row, closing an interval. Births never killed
//! become right-infinite intervals.
//!
//! With mod-2 coefficients column addition is symmetric difference, so
//! columns are kept as `BTreeSet<usize>` and the pivot is the largest
//! remaining row index. Faces precede cofaces in the stream, hence every
//! boundary column is strictly lower-triangular in the simplex index.
//!
//! Given the stream's documented total order the reduction is fully
//! deterministic; there is no randomness and no dependence on enumeration
//! order.
//!
//! ## Reference
//!
//! Edelsbrunner, Letscher, Zomorodian (2002). "Topological Persistence
//! and Simplification". Discrete & Computational Geometry.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::complex::{FilteredStream, Simplex};

use super::BarcodeCollection;

/// Sparse mod-2 column: the set of non-zero row indices.
#[derive(Debug, Clone)]
struct SparseColumn {
    rows: BTreeSet<usize>,
}

impl SparseColumn {
    fn new() -> Self {
        Self {
            rows: BTreeSet::new(),
        }
    }

    fn is_zero(&self) -> bool {
        self.rows.is_empty()
    }

    /// The pivot: largest non-zero row index.
    fn low(&self) -> Option<usize> {
        self.rows.iter().next_back().copied()
    }

    /// Toggle a single entry (addition of a unit vector in Z/2Z).
    fn toggle(&mut self, row: usize) {
        if !self.rows.remove(&row) {
            self.rows.insert(row);
        }
    }

    /// Column addition in Z/2Z: symmetric difference of row sets.
    fn add_assign(&mut self, other: &SparseColumn) {
        for &row in &other.rows {
            self.toggle(row);
        }
    }
}

/// Reduce the boundary matrix of a finalized stream and collect the
/// barcode. Interval values are reported through the stream's converter,
/// which drops zero-persistence pairs and restores the raw weight domain
/// in decreasing mode.
pub fn reduce(stream: &FilteredStream) -> BarcodeCollection {
    let simplices = stream.simplices();
    let m = simplices.len();
    let converter = stream.converter();
    let top = stream.max_filtration_value();

    let index: HashMap<&Simplex, usize> = simplices
        .iter()
        .enumerate()
        .map(|(i, fs)| (&fs.simplex, i))
        .collect();

    let mut columns: Vec<SparseColumn> = Vec::with_capacity(m);
    let mut pivot_of_row: HashMap<usize, usize> = HashMap::new();

    for fs in simplices.iter() {
        let mut column = SparseColumn::new();
        for face in fs.simplex.boundary() {
            if let Some(&face_index) = index.get(&face) {
                column.toggle(face_index);
            }
        }

        // Eliminate the pivot while an earlier column claims the same row.
        while let Some(low) = column.low() {
            match pivot_of_row.get(&low) {
                Some(&earlier) => column.add_assign(&columns[earlier]),
                None => break,
            }
        }

        if let Some(low) = column.low() {
            pivot_of_row.insert(low, columns.len());
        }
        columns.push(column);
    }

    let mut paired = vec![false; m];
    let mut barcode = BarcodeCollection::new();

    for (death_index, column) in columns.iter().enumerate() {
        if let Some(birth_index) = column.low() {
            paired[birth_index] = true;
            paired[death_index] = true;

            let birth = &simplices[birth_index];
            let death = &simplices[death_index];
            if let Some(interval) = converter.make_interval(
                birth.simplex.dimension(),
                birth.value,
                Some(death.value),
                top,
            ) {
                barcode.add(interval);
            }
        }
    }

    for (i, fs) in simplices.iter().enumerate() {
        if !paired[i] && columns[i].is_zero() {
            if let Some(interval) =
                converter.make_interval(fs.simplex.dimension(), fs.value, None, top)
            {
                barcode.add(interval);
            }
        }
    }

    debug!(
        simplices = m,
        intervals = barcode.len(),
        "boundary matrix reduced"
    );
    barcode
}
