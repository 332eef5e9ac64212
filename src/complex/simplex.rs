//! Simplices: Vertex Sets of the Flag Complex
//!
//! A k-simplex is an unordered set of k+1 vertex identifiers. Vertices are
//! stored sorted ascending, so equality, hashing, and the lexicographic
//! tie-break used by the filtered stream all come from the derived impls.

/// A simplex identified by its sorted vertex set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Simplex {
    vertices: Vec<usize>,
}

impl Simplex {
    /// Build a simplex from a vertex list; duplicates are collapsed and the
    /// list is sorted. An empty list is not a simplex and panics.
    pub fn from_vertices(mut vertices: Vec<usize>) -> Self {
        assert!(!vertices.is_empty(), "a simplex has at least one vertex");
        vertices.sort_unstable();
        vertices.dedup();
        Self { vertices }
    }

    /// The 0-simplex `[v]`.
    pub fn vertex(v: usize) -> Self {
        Self { vertices: vec![v] }
    }

    /// The 1-simplex `[u, v]`.
    pub fn edge(u: usize, v: usize) -> Self {
        Self::from_vertices(vec![u, v])
    }

    /// Dimension: one less than the number of vertices.
    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Sorted vertex identifiers.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// The (k−1)-dimensional faces, each obtained by deleting one vertex.
    /// Empty for a 0-simplex.
    pub fn boundary(&self) -> Vec<Simplex> {
        if self.vertices.len() < 2 {
            return Vec::new();
        }
        (0..self.vertices.len())
            .map(|i| {
                let mut face = self.vertices.clone();
                face.remove(i);
                Simplex { vertices: face }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let s = Simplex::from_vertices(vec![3, 1, 2, 1]);
        assert_eq!(s.vertices(), &[1, 2, 3]);
        assert_eq!(s.dimension(), 2);
        assert_eq!(s, Simplex::from_vertices(vec![2, 3, 1]));
    }

    #[test]
    fn test_boundary_faces() {
        let s = Simplex::from_vertices(vec![0, 1, 2]);
        let faces = s.boundary();
        assert_eq!(
            faces,
            vec![
                Simplex::edge(1, 2),
                Simplex::edge(0, 2),
                Simplex::edge(0, 1),
            ]
        );
        assert!(Simplex::vertex(4).boundary().is_empty());
    }

    #[test]
    fn test_lexicographic_order() {
        assert!(Simplex::edge(0, 1) < Simplex::edge(0, 2));
        assert!(Simplex::vertex(0) < Simplex::from_vertices(vec![0, 1]));
    }
}
