//! Per-vertex adjacency data.
//!
//! A directed vertex keeps its outgoing edges (with labels) and the set of
//! vertices that point at it. An undirected vertex keeps one symmetric map of
//! neighbours; the same label is stored at both endpoints.

use std::hash::Hash;

use crate::hashed::{HashMap, HashSet, HashSetIterator, Keys};

#[derive(Debug, Clone)]
pub(crate) enum Adjacency<V, L> {
    Directed {
        successors: HashMap<V, L>,
        predecessors: HashSet<V>,
    },
    Undirected {
        neighbors: HashMap<V, L>,
    },
}

impl<V, L> Adjacency<V, L> {
    pub(crate) fn new(directed: bool) -> Self {
        if directed {
            Self::Directed {
                successors: HashMap::new(),
                predecessors: HashSet::new(),
            }
        } else {
            Self::Undirected {
                neighbors: HashMap::new(),
            }
        }
    }

    pub(crate) const fn out_degree(&self) -> usize {
        match self {
            Self::Directed { successors, .. } => successors.len(),
            Self::Undirected { neighbors } => neighbors.len(),
        }
    }

    pub(crate) const fn in_degree(&self) -> usize {
        match self {
            Self::Directed { predecessors, .. } => predecessors.len(),
            Self::Undirected { neighbors } => neighbors.len(),
        }
    }

    pub(crate) fn successors(&self) -> Keys<'_, V, L> {
        match self {
            Self::Directed { successors, .. } => successors.keys(),
            Self::Undirected { neighbors } => neighbors.keys(),
        }
    }

    pub(crate) fn predecessors(&self) -> Neighbors<'_, V, L> {
        let inner = match self {
            Self::Directed { predecessors, .. } => NeighborsInner::Unlabeled(predecessors.iter()),
            Self::Undirected { neighbors } => NeighborsInner::Labeled(neighbors.keys()),
        };
        Neighbors { inner }
    }
}

impl<V: Hash + Eq, L> Adjacency<V, L> {
    /// Records an outgoing edge to `target`, returning the label it replaced.
    pub(crate) fn add_successor(&mut self, target: V, label: L) -> Option<L> {
        match self {
            Self::Directed { successors, .. } => successors.put(target, label),
            Self::Undirected { neighbors } => neighbors.put(target, label),
        }
    }

    /// Records an incoming edge from `source` on a directed vertex.
    ///
    /// Undirected vertices record both ends through
    /// [`add_successor`](Self::add_successor), since each end carries the label.
    pub(crate) fn add_predecessor(&mut self, source: V) {
        match self {
            Self::Directed { predecessors, .. } => {
                predecessors.add(source);
            }
            Self::Undirected { .. } => {
                unreachable!("undirected edges are linked with add_successor at both ends")
            }
        }
    }

    pub(crate) fn label(&self, target: &V) -> Option<&L> {
        match self {
            Self::Directed { successors, .. } => successors.get(target),
            Self::Undirected { neighbors } => neighbors.get(target),
        }
    }

    pub(crate) fn contains_successor(&self, target: &V) -> bool {
        self.label(target).is_some()
    }

    pub(crate) fn contains_predecessor(&self, source: &V) -> bool {
        match self {
            Self::Directed { predecessors, .. } => predecessors.contains(source),
            Self::Undirected { neighbors } => neighbors.contains_key(source),
        }
    }

    pub(crate) fn remove_successor(&mut self, target: &V) -> Option<L> {
        match self {
            Self::Directed { successors, .. } => successors.remove(target),
            Self::Undirected { neighbors } => neighbors.remove(target),
        }
    }

    pub(crate) fn remove_predecessor(&mut self, source: &V) -> bool {
        match self {
            Self::Directed { predecessors, .. } => predecessors.remove(source),
            Self::Undirected { neighbors } => neighbors.remove(source).is_some(),
        }
    }

    /// Number of distinct edges touching `owner`, the vertex this adjacency belongs to.
    pub(crate) fn incident_edge_count(&self, owner: &V) -> usize {
        match self {
            Self::Directed {
                successors,
                predecessors,
            } => {
                let self_loop = usize::from(successors.contains_key(owner));
                successors.len() + predecessors.len() - self_loop
            }
            Self::Undirected { neighbors } => neighbors.len(),
        }
    }
}

/// Lazy iterator over the vertices adjacent to one vertex.
///
/// Returned by [`LabeledGraph::successors`](super::LabeledGraph::successors),
/// [`LabeledGraph::predecessors`](super::LabeledGraph::predecessors) and
/// [`LabeledGraph::neighbors`](super::LabeledGraph::neighbors). A vertex that
/// is not in the graph yields nothing.
pub struct Neighbors<'a, V, L> {
    inner: NeighborsInner<'a, V, L>,
}

enum NeighborsInner<'a, V, L> {
    Labeled(Keys<'a, V, L>),
    Unlabeled(HashSetIterator<'a, V>),
    Empty,
}

impl<'a, V, L> Neighbors<'a, V, L> {
    pub(crate) const fn labeled(keys: Keys<'a, V, L>) -> Self {
        Self {
            inner: NeighborsInner::Labeled(keys),
        }
    }

    pub(crate) const fn empty() -> Self {
        Self {
            inner: NeighborsInner::Empty,
        }
    }
}

impl<'a, V, L> Iterator for Neighbors<'a, V, L> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            NeighborsInner::Labeled(keys) => keys.next(),
            NeighborsInner::Unlabeled(members) => members.next(),
            NeighborsInner::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            NeighborsInner::Labeled(keys) => keys.size_hint(),
            NeighborsInner::Unlabeled(members) => members.size_hint(),
            NeighborsInner::Empty => (0, Some(0)),
        }
    }
}

impl<V, L> ExactSizeIterator for Neighbors<'_, V, L> {}
