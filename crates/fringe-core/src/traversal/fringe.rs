use std::cmp::Ordering;
use std::collections::HashSet;

use crate::graph::VertexId;

/// Priority fringe for the ordered traversal.
///
/// The minimum is found by scanning at removal time, so the comparator sees
/// labels as they are at that moment rather than when the vertex was
/// inserted. A vertex already waiting is not queued twice, which keeps the
/// fringe at most one entry per vertex: removal is \(O(n)\) comparator
/// calls for `n` waiting vertices. Among equal elements the earliest
/// inserted wins.
#[derive(Debug, Default)]
pub(crate) struct OrderedFringe {
    entries: Vec<(u64, VertexId)>,
    queued: HashSet<VertexId>,
    next_seq: u64,
}

impl OrderedFringe {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues `vertex` unless it is already waiting.
    pub(crate) fn push(&mut self, vertex: VertexId) {
        if self.queued.insert(vertex) {
            self.entries.push((self.next_seq, vertex));
            self.next_seq += 1;
        }
    }

    /// Removes and returns the minimal vertex under `compare`.
    pub(crate) fn pop_min<F>(&mut self, mut compare: F) -> Option<VertexId>
    where
        F: FnMut(VertexId, VertexId) -> Ordering,
    {
        let mut best = 0;
        for idx in 1..self.entries.len() {
            let (seq, vertex) = self.entries[idx];
            let (best_seq, best_vertex) = self.entries[best];
            let order = compare(vertex, best_vertex).then(seq.cmp(&best_seq));
            if order == Ordering::Less {
                best = idx;
            }
        }
        if self.entries.is_empty() {
            return None;
        }
        let (_, vertex) = self.entries.swap_remove(best);
        self.queued.remove(&vertex);
        Some(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    #[test]
    fn test_pop_min_empty() {
        let mut fringe = OrderedFringe::new();
        assert_eq!(fringe.pop_min(|a, b| a.cmp(&b)), None);
    }

    #[test]
    fn test_pop_min_orders_by_comparator() {
        let mut fringe = OrderedFringe::new();
        for index in [4, 1, 3] {
            fringe.push(v(index));
        }
        let reversed = |a: VertexId, b: VertexId| b.cmp(&a);
        assert_eq!(fringe.pop_min(reversed), Some(v(4)));
        assert_eq!(fringe.pop_min(reversed), Some(v(3)));
        assert_eq!(fringe.pop_min(reversed), Some(v(1)));
        assert_eq!(fringe.pop_min(reversed), None);
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let mut fringe = OrderedFringe::new();
        for index in [7, 2, 9] {
            fringe.push(v(index));
        }
        let all_equal = |_: VertexId, _: VertexId| Ordering::Equal;
        assert_eq!(fringe.pop_min(all_equal), Some(v(7)));
        assert_eq!(fringe.pop_min(all_equal), Some(v(2)));
        assert_eq!(fringe.pop_min(all_equal), Some(v(9)));
    }

    #[test]
    fn test_comparator_is_consulted_at_removal() {
        let mut priorities = vec![5, 1];
        let mut fringe = OrderedFringe::new();
        fringe.push(v(0));
        fringe.push(v(1));
        priorities[0] = 0;
        let by_priority = |a: VertexId, b: VertexId| priorities[a.index()].cmp(&priorities[b.index()]);
        assert_eq!(fringe.pop_min(by_priority), Some(v(0)));
    }

    #[test]
    fn test_waiting_vertex_is_not_queued_twice() {
        let mut fringe = OrderedFringe::new();
        fringe.push(v(3));
        fringe.push(v(1));
        fringe.push(v(3));
        let by_index = |a: VertexId, b: VertexId| a.cmp(&b);
        assert_eq!(fringe.pop_min(by_index), Some(v(1)));
        assert_eq!(fringe.pop_min(by_index), Some(v(3)));
        assert_eq!(fringe.pop_min(by_index), None);

        // Once removed, a vertex can be queued again.
        fringe.push(v(3));
        assert_eq!(fringe.pop_min(by_index), Some(v(3)));
    }

    #[test]
    fn test_ties_keep_insertion_order_after_removals() {
        let mut fringe = OrderedFringe::new();
        for index in [0, 5, 6, 8] {
            fringe.push(v(index));
        }
        // Removing 0 moves 8 into its slot; 5 and 6 still come first.
        let zero_first = |a: VertexId, b: VertexId| (a.index() != 0).cmp(&(b.index() != 0));
        assert_eq!(fringe.pop_min(zero_first), Some(v(0)));
        assert_eq!(fringe.pop_min(zero_first), Some(v(5)));
        assert_eq!(fringe.pop_min(zero_first), Some(v(6)));
        assert_eq!(fringe.pop_min(zero_first), Some(v(8)));
    }
}
