//! The three fringe disciplines.
//!
//! Each algorithm is a free function over disjoint borrows of the graph, the
//! visitor and the run state, so the traversal can hold its stored
//! comparator while handing the visitor out mutably.

pub(crate) mod breadth_first;
pub(crate) mod depth_first;
pub(crate) mod ordered;

use crate::graph::VertexId;

use super::state::RunState;

/// Fringe entry for the two-phase (stack/queue) traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pending {
    /// Vertex waiting for its visit
    Visit(VertexId),
    /// Visited vertex waiting for its post-visit
    Finish(VertexId),
}

impl Pending {
    /// Seed entry for a run starting at `start`.
    ///
    /// When resuming from a vertex that was visited but never finished,
    /// the run begins with its post-visit.
    pub(crate) fn first(state: &RunState, start: VertexId) -> Self {
        if state.is_visited(start) && !state.is_post_visited(start) {
            Pending::Finish(start)
        } else {
            Pending::Visit(start)
        }
    }
}
