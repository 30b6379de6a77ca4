//! Graph without edge labels.

use std::hash::Hash;

use super::adjacency::Neighbors;
use super::labeled::{Edges, LabeledGraph, Vertices};
use super::GraphConfig;

/// A directed or undirected graph whose edges carry no data.
///
/// Thin wrapper over [`LabeledGraph<V, ()>`](LabeledGraph).
///
/// # Examples
///
/// ```rust
/// use corral::graph::Graph;
///
/// let mut graph = Graph::directed();
/// assert!(graph.add_edge(1, 2));
/// assert!(!graph.add_edge(1, 2));
///
/// assert_eq!(graph.out_degree(&1), Some(1));
/// assert_eq!(graph.in_degree(&1), Some(0));
/// assert_eq!(graph.predecessors(&2).collect::<Vec<_>>(), vec![&1]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V> {
    inner: LabeledGraph<V, ()>,
}

impl<V> Graph<V> {
    /// Creates an empty undirected graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: LabeledGraph::new(),
        }
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self {
            inner: LabeledGraph::directed(),
        }
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self {
            inner: LabeledGraph::undirected(),
        }
    }

    /// Creates an empty graph from a configuration record.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            inner: LabeledGraph::with_config(config),
        }
    }

    /// Returns `true` if edges have a direction.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.inner.is_directed()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.inner.order()
    }

    /// Returns the number of edges.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.inner.size()
    }

    /// Iterates the vertices in unspecified order.
    pub fn vertices(&self) -> Vertices<'_, V, ()> {
        self.inner.vertices()
    }

    /// Iterates every edge once as a `(source, target)` pair.
    pub fn edges(&self) -> Edges<'_, V, ()> {
        self.inner.edges()
    }
}

impl<V> Graph<V>
where
    V: Hash + Eq,
{
    /// Returns `true` if `vertex` is in the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.inner.contains_vertex(vertex)
    }

    /// Returns `true` if there is an edge from `source` to `target`.
    pub fn contains_edge(&self, source: &V, target: &V) -> bool {
        self.inner.contains_edge(source, target)
    }

    /// See [`LabeledGraph::degree`].
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.inner.degree(vertex)
    }

    /// See [`LabeledGraph::in_degree`].
    pub fn in_degree(&self, vertex: &V) -> Option<usize> {
        self.inner.in_degree(vertex)
    }

    /// See [`LabeledGraph::out_degree`].
    pub fn out_degree(&self, vertex: &V) -> Option<usize> {
        self.inner.out_degree(vertex)
    }

    /// Iterates the targets of edges leaving `vertex`.
    pub fn successors(&self, vertex: &V) -> Neighbors<'_, V, ()> {
        self.inner.successors(vertex)
    }

    /// Iterates the sources of edges ending at `vertex`.
    pub fn predecessors(&self, vertex: &V) -> Neighbors<'_, V, ()> {
        self.inner.predecessors(vertex)
    }

    /// Iterates the vertices adjacent to `vertex`.
    pub fn neighbors(&self, vertex: &V) -> Neighbors<'_, V, ()> {
        self.inner.neighbors(vertex)
    }

    /// See [`LabeledGraph::out_edges`].
    pub fn out_edges<'a>(
        &'a self,
        vertex: &V,
    ) -> impl Iterator<Item = (&'a V, &'a V)> + use<'a, V> {
        self.inner.out_edges(vertex)
    }

    /// See [`LabeledGraph::in_edges`].
    pub fn in_edges<'a>(
        &'a self,
        vertex: &V,
    ) -> impl Iterator<Item = (&'a V, &'a V)> + use<'a, V> {
        self.inner.in_edges(vertex)
    }

    /// See [`LabeledGraph::incident_edges`].
    pub fn incident_edges<'a>(
        &'a self,
        vertex: &V,
    ) -> impl Iterator<Item = (&'a V, &'a V)> + use<'a, V> {
        self.inner.incident_edges(vertex)
    }

    /// Removes the edge from `source` to `target`, returning `true` if it existed.
    pub fn remove_edge(&mut self, source: &V, target: &V) -> bool {
        self.inner.remove_edge(source, target).is_some()
    }

    /// Removes `vertex` and every edge touching it.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        self.inner.remove_vertex(vertex)
    }
}

impl<V> Graph<V>
where
    V: Hash + Eq + Clone,
{
    /// Adds `vertex`, returning `true` if it was not already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.inner.add_vertex(vertex)
    }

    /// Adds an edge, returning `true` if it did not already exist.
    pub fn add_edge(&mut self, source: V, target: V) -> bool {
        self.inner.add_edge(source, target, ()).is_none()
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<LabeledGraph<V, ()>> for Graph<V> {
    fn from(inner: LabeledGraph<V, ()>) -> Self {
        Self { inner }
    }
}
