use std::collections::VecDeque;

use crate::graph::{Graph, VertexId};
use crate::traversal::state::RunState;
use crate::traversal::{Action, Outcome, Visitor};

use super::Pending;

/// Breadth-first traversal; a visited vertex is re-queued for its post-visit
/// behind the successors it admitted, so each post-visit comes after those
/// successors have been visited.
///
/// Successors are enumerated first and the connecting edge looked up
/// afterwards, so among parallel edges the first one is reported.
pub(crate) fn run<G, V>(graph: &G, visitor: &mut V, state: &mut RunState, start: VertexId) -> Outcome
where
    G: Graph + ?Sized,
    V: Visitor<G>,
{
    let mut queue = VecDeque::from([Pending::first(state, start)]);

    while let Some(entry) = queue.pop_front() {
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
                for next in graph.successors(vertex) {
                    if state.is_visited(next) {
                        continue;
                    }
                    let Some(edge) = graph.edge_between(vertex, next) else {
                        continue;
                    };
                    match visitor.pre_visit(graph, edge, vertex) {
                        Action::Stop => return state.pause(vertex, Some(edge)),
                        Action::Reject => {}
                        Action::Proceed => queue.push_back(Pending::Visit(next)),
                    }
                }
                queue.push_back(Pending::Finish(vertex));
            }
        }
    }

    Outcome::Completed
}
