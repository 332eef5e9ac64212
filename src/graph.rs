//! Weighted Undirected Graph Model
//!
//! The input to the persistence pipeline: a fixed vertex set `[0, n)` and
//! undirected weighted edges keyed by vertex pair. The graph is built once
//! and borrowed immutably by the flag complex builder; weights need not be
//! unique.
//!
//! Adjacency is stored per vertex in a `BTreeMap`, so neighbor iteration is
//! always in ascending vertex order. Clique enumeration relies on this for
//! deterministic output.

use ndarray::Array2;
use std::collections::BTreeMap;

use crate::error::PersistenceError;

/// Undirected graph with floating-point edge weights.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph {
    n: usize,
    adjacency: Vec<BTreeMap<usize, f64>>,
    edge_count: usize,
}

impl WeightedGraph {
    /// Create a graph with `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            adjacency: vec![BTreeMap::new(); n],
            edge_count: 0,
        }
    }

    /// Build a graph from a square pairwise-distance matrix, keeping every
    /// pair at distance ≤ `max_distance` as an edge weighted by its
    /// distance. This is the 1-skeleton of the Vietoris-Rips complex at
    /// scale `max_distance`.
    pub fn from_distance_matrix(
        distances: &Array2<f64>,
        max_distance: f64,
    ) -> Result<Self, PersistenceError> {
        let (rows, cols) = (distances.nrows(), distances.ncols());
        if rows != cols {
            return Err(PersistenceError::NonSquareMatrix { rows, cols });
        }

        let mut graph = Self::new(rows);
        for i in 0..rows {
            for j in i + 1..rows {
                let d = distances[[i, j]];
                if d <= max_distance {
                    graph.add_edge(i, j, d)?;
                }
            }
        }
        Ok(graph)
    }

    /// Add the undirected edge `{u, v}` with weight `w`.
    ///
    /// Fails with `InvalidVertex` if either endpoint is out of range,
    /// `SelfLoop` if `u == v`, and `InvalidWeight` if `w` is NaN or
    /// infinite. Adding an edge that already exists overwrites its weight.
    pub fn add_edge(&mut self, u: usize, v: usize, w: f64) -> Result<(), PersistenceError> {
        for vertex in [u, v] {
            if vertex >= self.n {
                return Err(PersistenceError::InvalidVertex {
                    vertex,
                    vertex_count: self.n,
                });
            }
        }
        if u == v {
            return Err(PersistenceError::SelfLoop { vertex: u });
        }
        if !w.is_finite() {
            return Err(PersistenceError::InvalidWeight { u, v });
        }

        let fresh = self.adjacency[u].insert(v, w).is_none();
        self.adjacency[v].insert(u, w);
        if fresh {
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Weight of the edge `{u, v}`, if present.
    pub fn weight(&self, u: usize, v: usize) -> Option<f64> {
        self.adjacency.get(u).and_then(|adj| adj.get(&v).copied())
    }

    /// Whether the edge `{u, v}` is present.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v).is_some()
    }

    /// Neighbors of `v` in ascending vertex order. Empty for an
    /// out-of-range vertex.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(v)
            .into_iter()
            .flat_map(|adj| adj.keys().copied())
    }

    /// All edges as `(u, v, weight)` with `u < v`, in lexicographic order.
    pub fn edges(&self) -> Vec<(usize, usize, f64)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for u in 0..self.n {
            for (&v, &w) in &self.adjacency[u] {
                if u < v {
                    edges.push((u, v, w));
                }
            }
        }
        edges
    }

    /// Distinct edge weights in ascending order (size ≤ edge count).
    pub fn weights(&self) -> Vec<f64> {
        let mut weights: Vec<f64> = self.edges().iter().map(|&(_, _, w)| w).collect();
        weights.sort_by(f64::total_cmp);
        weights.dedup();
        weights
    }

    /// Largest edge weight, if the graph has any edges.
    pub fn max_weight(&self) -> Option<f64> {
        self.weights().last().copied()
    }

    /// Number of connected components, via union-find.
    pub fn connected_components(&self) -> usize {
        let mut parent: Vec<usize> = (0..self.n).collect();
        let mut rank = vec![0usize; self.n];

        fn find(parent: &mut [usize], i: usize) -> usize {
            if parent[i] != i {
                parent[i] = find(parent, parent[i]);
            }
            parent[i]
        }

        for (u, v, _) in self.edges() {
            let ru = find(&mut parent, u);
            let rv = find(&mut parent, v);
            if ru != rv {
                if rank[ru] < rank[rv] {
                    parent[ru] = rv;
                } else {
                    parent[rv] = ru;
                    if rank[ru] == rank[rv] {
                        rank[ru] += 1;
                    }
                }
            }
        }

        let mut roots = std::collections::HashSet::new();
        for i in 0..self.n {
            roots.insert(find(&mut parent, i));
        }
        roots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_add_edge_validation() {
        let mut g = WeightedGraph::new(3);
        assert!(g.add_edge(0, 1, 1.0).is_ok());
        assert_eq!(
            g.add_edge(0, 3, 1.0),
            Err(PersistenceError::InvalidVertex {
                vertex: 3,
                vertex_count: 3
            })
        );
        assert_eq!(
            g.add_edge(2, 2, 1.0),
            Err(PersistenceError::SelfLoop { vertex: 2 })
        );
        assert_eq!(
            g.add_edge(0, 2, f64::NAN),
            Err(PersistenceError::InvalidWeight { u: 0, v: 2 })
        );
    }

    #[test]
    fn test_edge_overwrite() {
        let mut g = WeightedGraph::new(2);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 0, 2.5).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight(0, 1), Some(2.5));
        assert_eq!(g.weight(1, 0), Some(2.5));
    }

    #[test]
    fn test_distinct_weights() {
        let mut g = WeightedGraph::new(4);
        g.add_edge(0, 1, 2.1).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(2, 3, 2.1).unwrap();
        assert_eq!(g.weights(), vec![1.0, 2.1]);
        assert_eq!(g.max_weight(), Some(2.1));
    }

    #[test]
    fn test_neighbors_sorted() {
        let mut g = WeightedGraph::new(5);
        g.add_edge(2, 4, 1.0).unwrap();
        g.add_edge(2, 0, 1.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();
        let nbrs: Vec<usize> = g.neighbors(2).collect();
        assert_eq!(nbrs, vec![0, 3, 4]);
        assert_eq!(g.neighbors(17).count(), 0);
    }

    #[test]
    fn test_connected_components() {
        let mut g = WeightedGraph::new(6);
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(3, 4, 1.0).unwrap();
        assert_eq!(g.connected_components(), 3);
    }

    #[test]
    fn test_from_distance_matrix() {
        // Two close points and one far away
        let dm = array![
            [0.0, 1.0, 9.0],
            [1.0, 0.0, 9.0],
            [9.0, 9.0, 0.0]
        ];
        let g = WeightedGraph::from_distance_matrix(&dm, 2.0).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight(0, 1), Some(1.0));

        let bad = Array2::<f64>::zeros((2, 3));
        assert_eq!(
            WeightedGraph::from_distance_matrix(&bad, 1.0),
            Err(PersistenceError::NonSquareMatrix { rows: 2, cols: 3 })
        );
    }
}
