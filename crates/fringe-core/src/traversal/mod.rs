//! Pausable graph traversal
//!
//! A [`Traversal`] owns a [`Visitor`] and walks any [`Graph`] in one of three
//! fringe disciplines:
//! - depth-first (stack), with a post-visit after each vertex's subtree
//! - breadth-first (queue), with the same two-phase contract
//! - ordered (priority by a label comparator), without post-visit
//!
//! A hook returning [`Action::Stop`] pauses the run. The traversal keeps its
//! visited sets and the algorithm in use, so [`Traversal::resume`] continues
//! from any vertex without revisiting what was already seen.

mod algos;
mod fringe;
mod state;
mod visitor;


use std::cmp::Ordering;
use std::fmt;

use crate::graph::{EdgeId, Graph, VertexId};

use state::RunState;
pub use visitor::{Action, Visitor};

/// Label comparator stored for the ordered traversal
pub type Comparator<'g, L> = Box<dyn Fn(&L, &L) -> Ordering + 'g>;

/// Which fringe discipline a run used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Ordered,
    DepthFirst,
    BreadthFirst,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::Ordered => write!(f, "ordered"),
            AlgorithmKind::DepthFirst => write!(f, "depth-first"),
            AlgorithmKind::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

/// Lifecycle of a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalStatus {
    /// No run has started yet
    #[default]
    Idle,
    /// The last run drained its fringe
    Completed(AlgorithmKind),
    /// The last run was halted by a visitor and can be resumed
    Paused(AlgorithmKind),
}

/// Result of one run (or one resumption)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Paused,
}

enum Algorithm<'g, L> {
    Ordered(Comparator<'g, L>),
    DepthFirst,
    BreadthFirst,
}

impl<L> Algorithm<'_, L> {
    fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::Ordered(_) => AlgorithmKind::Ordered,
            Algorithm::DepthFirst => AlgorithmKind::DepthFirst,
            Algorithm::BreadthFirst => AlgorithmKind::BreadthFirst,
        }
    }
}

/// A resumable traversal driving a visitor over a borrowed graph.
///
/// The graph is borrowed for `'g` so a paused run can be resumed later
/// against the same graph. Hooks only ever see `&G`; a hook cannot reach the
/// traversal itself, so re-entrant calls are impossible.
///
/// # Example
///
/// ```
/// use fringe_core::graph::{DirectedGraph, Graph, VertexId};
/// use fringe_core::traversal::{Action, Outcome, Traversal, Visitor};
///
/// #[derive(Default)]
/// struct Order(Vec<&'static str>);
///
/// impl Visitor<DirectedGraph<&'static str, ()>> for Order {
///     fn visit(&mut self, graph: &DirectedGraph<&'static str, ()>, v: VertexId) -> Action {
///         self.0.push(*graph.vertex_label(v));
///         Action::Proceed
///     }
/// }
///
/// let mut graph = DirectedGraph::new();
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
/// graph.add_edge(a, b, ());
///
/// let mut traversal = Traversal::new(Order::default());
/// assert_eq!(traversal.traverse_depth_first(&graph, a), Outcome::Completed);
/// assert_eq!(traversal.visitor().0, vec!["a", "b"]);
/// ```
pub struct Traversal<'g, G, V>
where
    G: Graph + ?Sized,
{
    visitor: V,
    graph: Option<&'g G>,
    algorithm: Option<Algorithm<'g, G::VertexLabel>>,
    state: RunState,
    status: TraversalStatus,
}

impl<'g, G, V> Traversal<'g, G, V>
where
    G: Graph + ?Sized,
    V: Visitor<G>,
{
    pub fn new(visitor: V) -> Self {
        Self {
            visitor,
            graph: None,
            algorithm: None,
            state: RunState::default(),
            status: TraversalStatus::Idle,
        }
    }

    /// Ordered traversal from `start`, expanding the vertex whose label is
    /// smallest under `comparator` first.
    ///
    /// The comparator is consulted each time a vertex is removed, so hooks
    /// may change labels (through interior mutability) mid-run.
    ///
    /// Like every entry point, this starts a fresh run: a paused run is
    /// abandoned and its visited sets are cleared. Use
    /// [`resume`](Self::resume) to continue a paused run instead.
    pub fn traverse_ordered<F>(&mut self, graph: &'g G, start: VertexId, comparator: F) -> Outcome
    where
        F: Fn(&G::VertexLabel, &G::VertexLabel) -> Ordering + 'g,
    {
        self.start(graph, Algorithm::Ordered(Box::new(comparator)), start)
    }

    /// Depth-first traversal from `start`.
    ///
    /// Starts a fresh run even when paused; see [`resume`](Self::resume).
    pub fn traverse_depth_first(&mut self, graph: &'g G, start: VertexId) -> Outcome {
        self.start(graph, Algorithm::DepthFirst, start)
    }

    /// Breadth-first traversal from `start`.
    ///
    /// Starts a fresh run even when paused; see [`resume`](Self::resume).
    pub fn traverse_breadth_first(&mut self, graph: &'g G, start: VertexId) -> Outcome {
        self.start(graph, Algorithm::BreadthFirst, start)
    }

    /// Continue a paused traversal from `vertex`, with the same algorithm and
    /// graph, skipping every vertex visited so far.
    ///
    /// Returns `None` (and does nothing) unless the traversal is paused.
    pub fn resume(&mut self, vertex: VertexId) -> Option<Outcome> {
        match self.status {
            TraversalStatus::Paused(_) => Some(self.run(vertex)),
            TraversalStatus::Idle | TraversalStatus::Completed(_) => None,
        }
    }

    /// Vertex being processed when the last run paused
    pub fn last_stopping_vertex(&self) -> Option<VertexId> {
        self.state.stop_vertex()
    }

    /// Edge being pre-visited when the last run paused, if the stop came from
    /// `pre_visit`
    pub fn last_stopping_edge(&self) -> Option<EdgeId> {
        self.state.stop_edge()
    }

    pub fn status(&self) -> TraversalStatus {
        self.status
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.status, TraversalStatus::Paused(_))
    }

    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.state.is_visited(vertex)
    }

    pub fn is_post_visited(&self, vertex: VertexId) -> bool {
        self.state.is_post_visited(vertex)
    }

    /// Number of vertices visited in the current run
    pub fn visited_count(&self) -> usize {
        self.state.visited_count()
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    fn start(&mut self, graph: &'g G, algorithm: Algorithm<'g, G::VertexLabel>, start: VertexId) -> Outcome {
        self.graph = Some(graph);
        self.algorithm = Some(algorithm);
        self.state.reset();
        self.run(start)
    }

    fn run(&mut self, start: VertexId) -> Outcome {
        let (Some(graph), Some(algorithm)) = (self.graph, self.algorithm.as_ref()) else {
            return Outcome::Completed;
        };
        let kind = algorithm.kind();
        let span = tracing::debug_span!("traversal", algorithm = %kind, start = start.index());
        let _guard = span.enter();

        self.state.clear_stop();
        let outcome = match algorithm {
            Algorithm::Ordered(compare) => algos::ordered::run(
                graph,
                &mut self.visitor,
                &mut self.state,
                start,
                compare.as_ref(),
            ),
            Algorithm::DepthFirst => {
                algos::depth_first::run(graph, &mut self.visitor, &mut self.state, start)
            }
            Algorithm::BreadthFirst => {
                algos::breadth_first::run(graph, &mut self.visitor, &mut self.state, start)
            }
        };

        self.status = match outcome {
            Outcome::Completed => TraversalStatus::Completed(kind),
            Outcome::Paused => TraversalStatus::Paused(kind),
        };
        tracing::trace!(visited = self.state.visited_count(), outcome = ?outcome, "traversal finished");
        outcome
    }
}
