//! A labeled adjacency-list graph.
//!
//! Vertices and edges live in insertion-ordered vectors and are addressed by
//! [`VertexId`]/[`EdgeId`]. Each vertex keeps the list of edges leaving it;
//! for undirected graphs an edge is listed at both endpoints (a self-loop
//! once). Out-edge order is insertion order, which is the "discovery order"
//! the traversal engine preserves.

use std::marker::PhantomData;

use super::provider::Graph;
use super::types::{Directed, EdgeId, EdgeKind, Undirected, VertexId};

#[derive(Debug)]
struct VertexSlot<V> {
    label: V,
    out: Vec<EdgeId>,
}

#[derive(Debug)]
struct EdgeSlot<E> {
    label: E,
    from: VertexId,
    to: VertexId,
}

/// A graph whose vertices carry `V` labels and whose edges carry `E` labels.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `add_vertex` | \(O(1)\) amortized |
/// | `add_edge` | \(O(1)\) amortized |
/// | `out_edges` | \(O(\text{out-degree})\) |
/// | `edge_between` | \(O(\text{out-degree})\) |
#[derive(Debug)]
pub struct LabeledGraph<V, E, K = Directed> {
    vertices: Vec<VertexSlot<V>>,
    edges: Vec<EdgeSlot<E>>,
    kind: PhantomData<K>,
}

/// Directed labeled graph
pub type DirectedGraph<V, E> = LabeledGraph<V, E, Directed>;

/// Undirected labeled graph
pub type UndirectedGraph<V, E> = LabeledGraph<V, E, Undirected>;

impl<V, E, K: EdgeKind> Default for LabeledGraph<V, E, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, K: EdgeKind> LabeledGraph<V, E, K> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            kind: PhantomData,
        }
    }

    /// Adds a vertex and returns its identity.
    pub fn add_vertex(&mut self, label: V) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(VertexSlot {
            label,
            out: Vec::new(),
        });
        id
    }

    /// Adds an edge `from -> to` (or `from -- to` when undirected).
    ///
    /// Parallel edges are allowed.
    ///
    /// # Panics
    /// Panics if `from` or `to` are not vertices of this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, label: E) -> EdgeId {
        assert!(self.contains(from), "from vertex {from:?} out of bounds");
        assert!(self.contains(to), "to vertex {to:?} out of bounds");

        let id = EdgeId::new(self.edges.len());
        self.edges.push(EdgeSlot { label, from, to });
        self.vertices[from.index()].out.push(id);
        if !K::is_directed() && from != to {
            self.vertices[to.index()].out.push(id);
        }
        id
    }

    /// Returns true if `vertex` belongs to this graph.
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// The `(from, to)` endpoints an edge was created with.
    pub fn endpoints(&self, edge: EdgeId) -> (VertexId, VertexId) {
        let slot = &self.edges[edge.index()];
        (slot.from, slot.to)
    }

    pub fn vertex_label_mut(&mut self, vertex: VertexId) -> &mut V {
        &mut self.vertices[vertex.index()].label
    }

    pub fn edge_label_mut(&mut self, edge: EdgeId) -> &mut E {
        &mut self.edges[edge.index()].label
    }

    /// Finds the first vertex whose label satisfies `predicate`.
    pub fn find_vertex(&self, mut predicate: impl FnMut(&V) -> bool) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|slot| predicate(&slot.label))
            .map(VertexId::new)
    }
}

impl<V, E, K: EdgeKind> Graph for LabeledGraph<V, E, K> {
    type VertexLabel = V;
    type EdgeLabel = E;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> Vec<VertexId> {
        (0..self.vertices.len()).map(VertexId::new).collect()
    }

    fn out_edges(&self, vertex: VertexId) -> Vec<EdgeId> {
        self.vertices[vertex.index()].out.clone()
    }

    fn other_end(&self, edge: EdgeId, vertex: VertexId) -> VertexId {
        let slot = &self.edges[edge.index()];
        if slot.from == vertex {
            slot.to
        } else {
            slot.from
        }
    }

    fn edge_between(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.vertices[from.index()]
            .out
            .iter()
            .copied()
            .find(|&edge| self.other_end(edge, from) == to)
    }

    fn vertex_label(&self, vertex: VertexId) -> &V {
        &self.vertices[vertex.index()].label
    }

    fn edge_label(&self, edge: EdgeId) -> &E {
        &self.edges[edge.index()].label
    }

    fn is_directed(&self) -> bool {
        K::is_directed()
    }
}
