use std::cmp::Ordering;

use crate::graph::{Graph, VertexId};
use crate::traversal::fringe::OrderedFringe;
use crate::traversal::state::RunState;
use crate::traversal::{Action, Outcome, Visitor};

/// Ordered traversal: always expand the minimal fringe vertex under `compare`.
///
/// There is no post-visit phase, and an expanded vertex is not re-inserted.
pub(crate) fn run<G, V>(
    graph: &G,
    visitor: &mut V,
    state: &mut RunState,
    start: VertexId,
    compare: &dyn Fn(&G::VertexLabel, &G::VertexLabel) -> Ordering,
) -> Outcome
where
    G: Graph + ?Sized,
    V: Visitor<G>,
{
    let mut fringe = OrderedFringe::new();
    fringe.push(start);

    while let Some(vertex) =
        fringe.pop_min(|a, b| compare(graph.vertex_label(a), graph.vertex_label(b)))
    {
        if state.is_visited(vertex) {
            continue;
        }

        match visitor.visit(graph, vertex) {
            Action::Stop => return state.pause(vertex, None),
            Action::Reject => {
                state.mark_visited(vertex);
                continue;
            }
            Action::Proceed => state.mark_visited(vertex),
        }

        for edge in graph.out_edges(vertex) {
            let next = graph.other_end(edge, vertex);
            if state.is_visited(next) {
                continue;
            }
            match visitor.pre_visit(graph, edge, vertex) {
                Action::Stop => return state.pause(vertex, Some(edge)),
                Action::Reject => {}
                Action::Proceed => fringe.push(next),
            }
        }
    }

    Outcome::Completed
}
