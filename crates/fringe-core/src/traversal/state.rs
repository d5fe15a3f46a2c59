use std::collections::HashSet;

use crate::graph::{EdgeId, VertexId};

use super::Outcome;

/// Bookkeeping for one run, kept across pause/resume.
#[derive(Debug, Default)]
pub(crate) struct RunState {
    visited: HashSet<VertexId>,
    post_visited: HashSet<VertexId>,
    stop_vertex: Option<VertexId>,
    stop_edge: Option<EdgeId>,
}

impl RunState {
    /// Forget everything; used when a fresh run starts.
    pub(crate) fn reset(&mut self) {
        self.visited.clear();
        self.post_visited.clear();
        self.clear_stop();
    }

    pub(crate) fn clear_stop(&mut self) {
        self.stop_vertex = None;
        self.stop_edge = None;
    }

    /// Record where the run halted and report it as paused.
    pub(crate) fn pause(&mut self, vertex: VertexId, edge: Option<EdgeId>) -> Outcome {
        tracing::debug!(vertex = vertex.index(), edge = ?edge.map(EdgeId::index), "traversal stopped");
        self.stop_vertex = Some(vertex);
        self.stop_edge = edge;
        Outcome::Paused
    }

    pub(crate) fn is_visited(&self, vertex: VertexId) -> bool {
        self.visited.contains(&vertex)
    }

    pub(crate) fn mark_visited(&mut self, vertex: VertexId) {
        self.visited.insert(vertex);
    }

    pub(crate) fn is_post_visited(&self, vertex: VertexId) -> bool {
        self.post_visited.contains(&vertex)
    }

    pub(crate) fn mark_post_visited(&mut self, vertex: VertexId) {
        self.post_visited.insert(vertex);
    }

    pub(crate) fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub(crate) fn stop_vertex(&self) -> Option<VertexId> {
        self.stop_vertex
    }

    pub(crate) fn stop_edge(&self) -> Option<EdgeId> {
        self.stop_edge
    }
}
