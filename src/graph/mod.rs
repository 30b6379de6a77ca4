//! Directed and undirected graphs over hashable vertices.
//!
//! - [`LabeledGraph`]: every edge carries a label of type `L`
//! - [`Graph`]: edges carry no data
//!
//! Whether a graph is directed is fixed at construction. Directed vertices
//! store their outgoing edges and, separately, the set of their predecessors;
//! undirected vertices store one symmetric neighbour map, so successors,
//! predecessors and neighbours coincide.
//!
//! Traversal methods return lazy iterators. A query about a vertex that is not
//! in the graph yields an empty iterator, and degree queries return `None`.
//!
//! # Examples
//!
//! ```rust
//! use corral::graph::{Graph, GraphConfig};
//!
//! let mut graph = Graph::with_config(GraphConfig { directed: true });
//! graph.add_edge('a', 'b');
//! graph.add_edge('b', 'c');
//! graph.add_edge('c', 'a');
//!
//! assert_eq!(graph.degree(&'a'), Some(2));
//! assert_eq!(graph.size(), 3);
//!
//! graph.remove_vertex(&'b');
//! assert_eq!(graph.size(), 1);
//! ```

mod adjacency;
mod labeled;
mod unlabeled;

pub use adjacency::Neighbors;
pub use labeled::{Edges, LabeledGraph, Vertices};
pub use unlabeled::Graph;

/// Construction options of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GraphConfig {
    /// Whether edges have a direction. Defaults to `false`.
    pub directed: bool,
}
