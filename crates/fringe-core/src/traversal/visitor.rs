use crate::graph::{EdgeId, Graph, VertexId};

/// Signal returned by every visitor hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Continue normally
    #[default]
    Proceed,
    /// Skip this edge (from `pre_visit`) or this vertex's expansion (from `visit`)
    Reject,
    /// Halt the whole traversal, leaving it resumable
    Stop,
}

/// Client hooks invoked by a [`Traversal`](super::Traversal).
///
/// Every hook defaults to [`Action::Proceed`], so a visitor only overrides
/// the points it cares about.
pub trait Visitor<G: Graph + ?Sized> {
    /// Called before the far end of `edge` (leaving `from`) joins the fringe.
    fn pre_visit(&mut self, _graph: &G, _edge: EdgeId, _from: VertexId) -> Action {
        Action::Proceed
    }

    /// Called once per vertex, when it is accepted from the fringe.
    fn visit(&mut self, _graph: &G, _vertex: VertexId) -> Action {
        Action::Proceed
    }

    /// Called once all admitted successors of `vertex` are done.
    ///
    /// Depth-first and breadth-first traversals only.
    fn post_visit(&mut self, _graph: &G, _vertex: VertexId) -> Action {
        Action::Proceed
    }
}

impl<G, T> Visitor<G> for &mut T
where
    G: Graph + ?Sized,
    T: Visitor<G> + ?Sized,
{
    fn pre_visit(&mut self, graph: &G, edge: EdgeId, from: VertexId) -> Action {
        (**self).pre_visit(graph, edge, from)
    }

    fn visit(&mut self, graph: &G, vertex: VertexId) -> Action {
        (**self).visit(graph, vertex)
    }

    fn post_visit(&mut self, graph: &G, vertex: VertexId) -> Action {
        (**self).post_visit(graph, vertex)
    }
}
