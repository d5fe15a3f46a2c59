use serde::Serialize;

/// Identity of a vertex within one graph.
///
/// Equality is identity: two vertices carrying equal labels are still
/// distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VertexId(usize);

impl VertexId {
    pub fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Dense index of this vertex in its graph
    pub fn index(self) -> usize {
        self.0
    }
}

/// Identity of an edge within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId(usize);

impl EdgeId {
    pub fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Dense index of this edge in its graph
    pub fn index(self) -> usize {
        self.0
    }
}

/// Marker trait for graph edge directionality.
pub trait EdgeKind {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;
}

/// Marker for directed graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Directed;

/// Marker for undirected graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Undirected;

impl EdgeKind for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl EdgeKind for Undirected {
    fn is_directed() -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_compare_by_index() {
        assert_eq!(VertexId::new(3), VertexId::new(3));
        assert!(VertexId::new(1) < VertexId::new(2));
        assert_eq!(EdgeId::new(5).index(), 5);
    }

    #[test]
    fn test_edge_kind_markers() {
        assert!(Directed::is_directed());
        assert!(!Undirected::is_directed());
    }
}
