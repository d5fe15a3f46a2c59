use super::types::{EdgeId, VertexId};

/// Trait for providing graph adjacency and labels to the traversal engine.
///
/// Undirected graphs report each edge among the out-edges of both
/// endpoints; the engine never needs to know which flavor it is walking.
pub trait Graph {
    /// Label carried by every vertex
    type VertexLabel;
    /// Label carried by every edge
    type EdgeLabel;

    /// Number of vertices
    fn vertex_count(&self) -> usize;

    /// All vertices, in insertion order
    fn vertices(&self) -> Vec<VertexId>;

    /// Edges leaving `vertex`, in insertion order
    fn out_edges(&self, vertex: VertexId) -> Vec<EdgeId>;

    /// The endpoint of `edge` that is not `vertex` (or `vertex` itself for a self-loop)
    fn other_end(&self, edge: EdgeId, vertex: VertexId) -> VertexId;

    /// The first edge leading from `from` to `to`, if any
    fn edge_between(&self, from: VertexId, to: VertexId) -> Option<EdgeId>;

    fn vertex_label(&self, vertex: VertexId) -> &Self::VertexLabel;

    fn edge_label(&self, edge: EdgeId) -> &Self::EdgeLabel;

    fn is_directed(&self) -> bool;

    /// Successors of `vertex`, one entry per out-edge
    fn successors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.out_edges(vertex)
            .into_iter()
            .map(|edge| self.other_end(edge, vertex))
            .collect()
    }
}
