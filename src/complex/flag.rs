//! Flag Complex Construction and the Filtered Stream
//!
//! The flag (clique) complex of a weighted graph contains a k-simplex for
//! every (k+1)-clique. Filtration values follow the standard flag-complex
//! rule:
//!
//! - vertices enter at the start of the filtration (value 0),
//! - an edge enters at the converted value of its weight,
//! - a higher simplex enters at the maximum converted weight among its
//!   constituent edges, which equals the maximum of its facets' values.
//!
//! This makes filtration values monotone along face inclusion: a face never
//! enters after its coface. The builder checks the invariant while
//! enumerating and again when the stream is finalized, failing with
//! `InconsistentFiltration` if a converter breaks it.
//!
//! Cliques are enumerated with an explicit worklist of
//! (clique, candidate-extension) pairs instead of recursion, so dense
//! graphs cannot exhaust the call stack. Candidates are restricted to
//! common neighbors greater than the largest clique member, which emits
//! every vertex set exactly once.

use std::collections::HashMap;

use tracing::debug;

use crate::error::PersistenceError;
use crate::filtration::FiltrationConverter;
use crate::graph::WeightedGraph;

use super::Simplex;

/// A simplex tagged with its filtration value.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredSimplex {
    pub simplex: Simplex,
    pub value: f64,
}

/// Builds the filtered flag complex of a graph up to a maximum dimension.
///
/// Construction enumerates all cliques immediately; `finalize` sorts the
/// accumulated simplices into filtration order and freezes them. After
/// finalization the builder rejects further additions with
/// `AlreadyFinalized`.
#[derive(Debug)]
pub struct FlagComplexBuilder<'a> {
    graph: &'a WeightedGraph,
    converter: FiltrationConverter,
    simplices: Vec<FilteredSimplex>,
    finalized: bool,
}

impl<'a> FlagComplexBuilder<'a> {
    /// Enumerate every clique of the graph with at most
    /// `max_dimension + 1` vertices and assign filtration values.
    pub fn new(
        graph: &'a WeightedGraph,
        max_dimension: usize,
        converter: FiltrationConverter,
    ) -> Result<Self, PersistenceError> {
        if graph.vertex_count() == 0 {
            return Err(PersistenceError::EmptyGraph);
        }
        if max_dimension.checked_add(1).is_none() {
            return Err(PersistenceError::InvalidDimension { max_dimension });
        }

        let mut builder = Self {
            graph,
            converter,
            simplices: Vec::new(),
            finalized: false,
        };
        builder.enumerate_cliques(max_dimension)?;
        Ok(builder)
    }

    /// Converted filtration value of an edge, checked against the vertex
    /// value so an order-breaking converter is caught at the source.
    fn converted_edge(&self, u: usize, v: usize, w: f64) -> Result<f64, PersistenceError> {
        let value = self.converter.convert(w);
        if value < self.converter.vertex_value() {
            return Err(PersistenceError::InconsistentFiltration {
                detail: format!(
                    "edge ({u}, {v}) converts to {value}, below the vertex value"
                ),
            });
        }
        Ok(value)
    }

    fn enumerate_cliques(&mut self, max_dimension: usize) -> Result<(), PersistenceError> {
        let n = self.graph.vertex_count();
        let vertex_value = self.converter.vertex_value();

        // Worklist entries: (clique, filtration value, extension candidates).
        // Candidates are common neighbors of the clique, all greater than
        // its largest member.
        let mut work: Vec<(Vec<usize>, f64, Vec<usize>)> = Vec::new();

        for v in 0..n {
            self.simplices.push(FilteredSimplex {
                simplex: Simplex::vertex(v),
                value: vertex_value,
            });
            if max_dimension >= 1 {
                let candidates: Vec<usize> =
                    self.graph.neighbors(v).filter(|&u| u > v).collect();
                if !candidates.is_empty() {
                    work.push((vec![v], vertex_value, candidates));
                }
            }
        }

        while let Some((clique, value, candidates)) = work.pop() {
            'candidate: for (i, &c) in candidates.iter().enumerate() {
                let mut extended_value = value;
                for &u in &clique {
                    // A candidate not adjacent to every member does not
                    // extend the clique.
                    let Some(w) = self.graph.weight(u, c) else {
                        continue 'candidate;
                    };
                    extended_value = extended_value.max(self.converted_edge(u, c, w)?);
                }

                let mut extended = clique.clone();
                extended.push(c);
                self.simplices.push(FilteredSimplex {
                    simplex: Simplex::from_vertices(extended.clone()),
                    value: extended_value,
                });

                // extended has dimension extended.len() - 1; keep extending
                // only below the dimension cap.
                if extended.len() <= max_dimension {
                    let next: Vec<usize> = candidates[i + 1..]
                        .iter()
                        .copied()
                        .filter(|&u| self.graph.has_edge(c, u))
                        .collect();
                    if !next.is_empty() {
                        work.push((extended, extended_value, next));
                    }
                }
            }
        }

        Ok(())
    }

    /// Add a simplex outside the flag enumeration, e.g. to augment the
    /// complex before finalization. Fails with `AlreadyFinalized` once the
    /// stream has been frozen and `InvalidVertex` for out-of-range
    /// vertices. Faces must be present by the time the stream is finalized.
    pub fn add_simplex(
        &mut self,
        simplex: Simplex,
        value: f64,
    ) -> Result<(), PersistenceError> {
        if self.finalized {
            return Err(PersistenceError::AlreadyFinalized);
        }
        for &v in simplex.vertices() {
            if v >= self.graph.vertex_count() {
                return Err(PersistenceError::InvalidVertex {
                    vertex: v,
                    vertex_count: self.graph.vertex_count(),
                });
            }
        }
        self.simplices.push(FilteredSimplex { simplex, value });
        Ok(())
    }

    /// Number of simplices accumulated so far.
    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    /// Whether no simplices have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// Sort the accumulated simplices into filtration order, verify the
    /// face-before-coface invariant, and freeze the stream.
    ///
    /// The total order is (filtration value, dimension, lexicographic
    /// vertex order); the reduction result is deterministic with respect to
    /// it. A second call fails with `AlreadyFinalized`.
    pub fn finalize(&mut self) -> Result<FilteredStream, PersistenceError> {
        if self.finalized {
            return Err(PersistenceError::AlreadyFinalized);
        }
        self.finalized = true;

        let mut simplices = std::mem::take(&mut self.simplices);
        simplices.sort_by(|a, b| {
            a.value
                .total_cmp(&b.value)
                .then(a.simplex.dimension().cmp(&b.simplex.dimension()))
                .then(a.simplex.cmp(&b.simplex))
        });

        let positions: HashMap<&Simplex, usize> = simplices
            .iter()
            .enumerate()
            .map(|(i, fs)| (&fs.simplex, i))
            .collect();

        for (i, fs) in simplices.iter().enumerate() {
            for face in fs.simplex.boundary() {
                match positions.get(&face) {
                    Some(&j) if j < i => {}
                    Some(_) => {
                        return Err(PersistenceError::InconsistentFiltration {
                            detail: format!(
                                "face {:?} of {:?} enters the filtration later",
                                face.vertices(),
                                fs.simplex.vertices()
                            ),
                        });
                    }
                    None => {
                        return Err(PersistenceError::InconsistentFiltration {
                            detail: format!(
                                "face {:?} of {:?} is missing from the stream",
                                face.vertices(),
                                fs.simplex.vertices()
                            ),
                        });
                    }
                }
            }
        }

        let max_value = simplices.last().map(|fs| fs.value).unwrap_or(0.0);
        debug!(
            simplices = simplices.len(),
            max_value, "filtered stream finalized"
        );

        Ok(FilteredStream {
            simplices,
            converter: self.converter,
            max_value,
        })
    }
}

/// The finalized, immutable filtration-sorted simplex stream.
///
/// Produced once by [`FlagComplexBuilder::finalize`] and consumed read-only
/// by the reduction engine.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredStream {
    simplices: Vec<FilteredSimplex>,
    converter: FiltrationConverter,
    max_value: f64,
}

impl FilteredStream {
    /// Simplices in filtration order.
    pub fn simplices(&self) -> &[FilteredSimplex] {
        &self.simplices
    }

    /// Iterate simplices in filtration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FilteredSimplex> {
        self.simplices.iter()
    }

    /// Number of simplices.
    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    /// Whether the stream holds no simplices.
    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// The converter the stream was built with.
    pub fn converter(&self) -> FiltrationConverter {
        self.converter
    }

    /// Largest filtration value in the stream (the top of the filtration).
    pub fn max_filtration_value(&self) -> f64 {
        self.max_value
    }
}
