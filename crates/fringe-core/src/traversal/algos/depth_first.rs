use crate::graph::{Graph, VertexId};
use crate::traversal::state::RunState;
use crate::traversal::{Action, Outcome, Visitor};

use super::Pending;

/// Depth-first traversal with a post-visit once a vertex's subtree is done.
///
/// Accepted successors are pushed in reverse so they pop in discovery order.
pub(crate) fn run<G, V>(graph: &G, visitor: &mut V, state: &mut RunState, start: VertexId) -> Outcome
where
    G: Graph + ?Sized,
    V: Visitor<G>,
{
    let mut stack = vec![Pending::first(state, start)];

    while let Some(entry) = stack.pop() {
        match entry {
            Pending::Finish(vertex) => {
                if state.is_post_visited(vertex) {
                    continue;
                }
                if visitor.post_visit(graph, vertex) == Action::Stop {
                    return state.pause(vertex, None);
                }
                state.mark_post_visited(vertex);
            }
            Pending::Visit(vertex) => {
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
                stack.push(Pending::Finish(vertex));

                let mut accepted = Vec::new();
                for edge in graph.out_edges(vertex) {
                    let next = graph.other_end(edge, vertex);
                    if state.is_visited(next) {
                        continue;
                    }
                    match visitor.pre_visit(graph, edge, vertex) {
                        Action::Stop => return state.pause(vertex, Some(edge)),
                        Action::Reject => {}
                        Action::Proceed => accepted.push(next),
                    }
                }
                stack.extend(accepted.into_iter().rev().map(Pending::Visit));
            }
        }
    }

    Outcome::Completed
}
