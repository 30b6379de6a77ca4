//! Graph whose edges carry labels.

use std::hash::Hash;

use super::GraphConfig;
use super::adjacency::{Adjacency, Neighbors};
use crate::hashed::{HashMap, HashMapIterator, HashSet, Keys};

/// A directed or undirected graph with one label per edge.
///
/// Vertices are any `Hash + Eq + Clone` value. Each vertex owns its adjacency
/// data; an undirected edge is recorded at both endpoints with the same label.
/// There is at most one edge per ordered pair (per unordered pair when
/// undirected): adding an existing edge replaces its label.
///
/// # Time Complexity
///
/// | Operation       | Complexity                   |
/// |-----------------|------------------------------|
/// | `add_vertex`    | O(1) average                 |
/// | `add_edge`      | O(1) average                 |
/// | `contains_edge` | O(1) average                 |
/// | `remove_edge`   | O(1) average                 |
/// | `remove_vertex` | O(degree) average            |
/// | `edges`         | O(V + E) to exhaust          |
///
/// # Examples
///
/// ```rust
/// use corral::graph::LabeledGraph;
///
/// let mut roads = LabeledGraph::undirected();
/// roads.add_edge("paris", "lyon", 465);
/// roads.add_edge("lyon", "nice", 470);
///
/// assert_eq!(roads.label(&"nice", &"lyon"), Some(&470));
/// assert_eq!(roads.degree(&"lyon"), Some(2));
/// assert_eq!(roads.size(), 2);
/// assert_eq!(roads.edges().count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LabeledGraph<V, L> {
    vertices: HashMap<V, Adjacency<V, L>>,
    directed: bool,
    edge_count: usize,
}

impl<V, L> LabeledGraph<V, L> {
    /// Creates an empty undirected graph.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::with_config(GraphConfig { directed: true })
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::with_config(GraphConfig { directed: false })
    }

    /// Creates an empty graph from a configuration record.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: HashMap::new(),
            directed: config.directed,
            edge_count: 0,
        }
    }

    /// Returns `true` if edges have a direction.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.edge_count
    }

    /// Iterates the vertices in unspecified order.
    pub fn vertices(&self) -> Vertices<'_, V, L> {
        Vertices {
            keys: self.vertices.keys(),
        }
    }

    /// Iterates every edge as a `(source, target)` pair.
    ///
    /// Undirected edges are yielded once, oriented from whichever endpoint
    /// the vertex walk reaches first, so `edges().count() == size()` for
    /// both kinds of graph.
    pub fn edges(&self) -> Edges<'_, V, L> {
        Edges {
            sources: self.vertices.iter(),
            current: None,
            visited: if self.directed {
                None
            } else {
                Some(HashSet::new())
            },
        }
    }
}

impl<V, L> LabeledGraph<V, L>
where
    V: Hash + Eq,
{
    /// Returns `true` if `vertex` is in the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// Returns `true` if there is an edge from `source` to `target`.
    ///
    /// In an undirected graph the order of the endpoints does not matter.
    pub fn contains_edge(&self, source: &V, target: &V) -> bool {
        self.vertices
            .get(source)
            .is_some_and(|adjacency| adjacency.contains_successor(target))
    }

    /// Returns the label of the edge from `source` to `target`.
    pub fn label(&self, source: &V, target: &V) -> Option<&L> {
        self.vertices.get(source)?.label(target)
    }

    /// Returns the number of edges touching `vertex`, or `None` if it is absent.
    ///
    /// For a directed graph this is `in_degree + out_degree`.
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        let adjacency = self.vertices.get(vertex)?;
        Some(if self.directed {
            adjacency.in_degree() + adjacency.out_degree()
        } else {
            adjacency.out_degree()
        })
    }

    /// Returns the number of edges ending at `vertex`, or `None` if it is absent.
    pub fn in_degree(&self, vertex: &V) -> Option<usize> {
        self.vertices.get(vertex).map(Adjacency::in_degree)
    }

    /// Returns the number of edges leaving `vertex`, or `None` if it is absent.
    pub fn out_degree(&self, vertex: &V) -> Option<usize> {
        self.vertices.get(vertex).map(Adjacency::out_degree)
    }

    /// Iterates the targets of edges leaving `vertex`.
    pub fn successors(&self, vertex: &V) -> Neighbors<'_, V, L> {
        self.vertices
            .get(vertex)
            .map_or_else(Neighbors::empty, |adjacency| {
                Neighbors::labeled(adjacency.successors())
            })
    }

    /// Iterates the sources of edges ending at `vertex`.
    pub fn predecessors(&self, vertex: &V) -> Neighbors<'_, V, L> {
        self.vertices
            .get(vertex)
            .map_or_else(Neighbors::empty, Adjacency::predecessors)
    }

    /// Iterates the vertices adjacent to `vertex`.
    ///
    /// Same as [`successors`](Self::successors); for an undirected graph
    /// successors and predecessors coincide.
    pub fn neighbors(&self, vertex: &V) -> Neighbors<'_, V, L> {
        self.successors(vertex)
    }

    /// Iterates the edges leaving `vertex` as `(vertex, target)` pairs.
    pub fn out_edges<'a>(
        &'a self,
        vertex: &V,
    ) -> impl Iterator<Item = (&'a V, &'a V)> + use<'a, V, L> {
        let source = self.stored_vertex(vertex);
        self.successors(vertex)
            .filter_map(move |target| source.map(|source| (source, target)))
    }

    /// Iterates the edges ending at `vertex` as `(source, vertex)` pairs.
    pub fn in_edges<'a>(
        &'a self,
        vertex: &V,
    ) -> impl Iterator<Item = (&'a V, &'a V)> + use<'a, V, L> {
        let target = self.stored_vertex(vertex);
        self.predecessors(vertex)
            .filter_map(move |source| target.map(|target| (source, target)))
    }

    /// Iterates every edge touching `vertex`, each exactly once.
    ///
    /// A directed self-loop appears among the outgoing edges only. For an
    /// undirected graph this is the same as [`out_edges`](Self::out_edges).
    pub fn incident_edges<'a>(
        &'a self,
        vertex: &V,
    ) -> impl Iterator<Item = (&'a V, &'a V)> + use<'a, V, L> {
        let directed = self.directed;
        self.out_edges(vertex).chain(
            self.in_edges(vertex)
                .filter(move |(source, target)| directed && source != target),
        )
    }

    /// Removes the edge from `source` to `target` and returns its label.
    pub fn remove_edge(&mut self, source: &V, target: &V) -> Option<L> {
        let label = self.vertices.get_mut(source)?.remove_successor(target)?;
        if let Some(adjacency) = self.vertices.get_mut(target) {
            adjacency.remove_predecessor(source);
        }
        self.edge_count -= 1;
        Some(label)
    }

    /// Removes `vertex` and every edge touching it.
    ///
    /// Returns `false` if the vertex was not in the graph.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(adjacency) = self.vertices.remove(vertex) else {
            return false;
        };
        for target in adjacency.successors() {
            if target != vertex
                && let Some(neighbor) = self.vertices.get_mut(target)
            {
                neighbor.remove_predecessor(vertex);
            }
        }
        if self.directed {
            for source in adjacency.predecessors() {
                if source != vertex
                    && let Some(neighbor) = self.vertices.get_mut(source)
                {
                    neighbor.remove_successor(vertex);
                }
            }
        }
        let removed = adjacency.incident_edge_count(vertex);
        self.edge_count -= removed;
        tracing::trace!(
            removed_edges = removed,
            remaining_vertices = self.vertices.len(),
            "removed graph vertex"
        );
        true
    }

    fn stored_vertex(&self, vertex: &V) -> Option<&V> {
        self.vertices.get_key_value(vertex).map(|(stored, _)| stored)
    }
}

impl<V, L> LabeledGraph<V, L>
where
    V: Hash + Eq + Clone,
{
    /// Adds `vertex`, returning `true` if it was not already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.vertices.contains_key(&vertex) {
            return false;
        }
        self.vertices.put(vertex, Adjacency::new(self.directed));
        true
    }

    /// Adds an edge from `source` to `target`, creating missing endpoints.
    ///
    /// Returns the label the edge carried before if it already existed; the
    /// edge count only grows for new edges.
    ///
    /// An undirected edge stores its label at both endpoints, hence the
    /// `L: Clone` bound. Directed edges move the label without cloning it.
    pub fn add_edge(&mut self, source: V, target: V, label: L) -> Option<L>
    where
        L: Clone,
    {
        self.add_vertex(source.clone());
        self.add_vertex(target.clone());
        let previous = if self.directed {
            self.adjacency_mut(&target).add_predecessor(source.clone());
            self.adjacency_mut(&source).add_successor(target, label)
        } else {
            let previous = self
                .adjacency_mut(&source)
                .add_successor(target.clone(), label.clone());
            self.adjacency_mut(&target).add_successor(source, label);
            previous
        };
        if previous.is_none() {
            self.edge_count += 1;
        }
        previous
    }

    fn adjacency_mut(&mut self, vertex: &V) -> &mut Adjacency<V, L> {
        match self.vertices.get_mut(vertex) {
            Some(adjacency) => adjacency,
            None => unreachable!("edge endpoint was added before linking"),
        }
    }
}

impl<V, L> Default for LabeledGraph<V, L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the vertices of a [`LabeledGraph`].
pub struct Vertices<'a, V, L> {
    keys: Keys<'a, V, Adjacency<V, L>>,
}

impl<'a, V, L> Iterator for Vertices<'a, V, L> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<V, L> ExactSizeIterator for Vertices<'_, V, L> {}

/// Iterator over the edges of a [`LabeledGraph`].
pub struct Edges<'a, V, L> {
    sources: HashMapIterator<'a, V, Adjacency<V, L>>,
    current: Option<(&'a V, Keys<'a, V, L>)>,
    /// Sources already exhausted; present only for undirected graphs.
    visited: Option<HashSet<&'a V>>,
}

impl<'a, V, L> Iterator for Edges<'a, V, L>
where
    V: Hash + Eq,
{
    type Item = (&'a V, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((source, targets)) = &mut self.current {
                let source = *source;
                for target in targets.by_ref() {
                    let seen = self
                        .visited
                        .as_ref()
                        .is_some_and(|visited| visited.contains(&target));
                    if !seen {
                        return Some((source, target));
                    }
                }
                if let Some(visited) = &mut self.visited {
                    visited.add(source);
                }
                self.current = None;
            }
            let (source, adjacency) = self.sources.next()?;
            self.current = Some((source, adjacency.successors()));
        }
    }
}
