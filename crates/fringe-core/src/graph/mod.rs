//! Graph abstraction consumed by the traversal engine
//!
//! - `provider`: the [`Graph`] capability trait
//! - `labeled`: an adjacency-list implementation, directed or undirected
//! - `types`: vertex/edge identities and directionality markers

pub mod labeled;
pub mod provider;
pub mod types;

pub use labeled::{DirectedGraph, LabeledGraph, UndirectedGraph};
pub use provider::Graph;
pub use types::{Directed, EdgeId, EdgeKind, Undirected, VertexId};
