#![cfg(feature = "graph")]
//! Integration tests for LabeledGraph and Graph.

use corral::graph::{Graph, GraphConfig, LabeledGraph};
use rstest::rstest;

fn sorted<'a, I>(vertices: I) -> Vec<char>
where
    I: Iterator<Item = &'a char>,
{
    let mut vertices: Vec<char> = vertices.copied().collect();
    vertices.sort_unstable();
    vertices
}

fn sorted_pairs<'a, I>(edges: I) -> Vec<(char, char)>
where
    I: Iterator<Item = (&'a char, &'a char)>,
{
    let mut edges: Vec<(char, char)> = edges.map(|(source, target)| (*source, *target)).collect();
    edges.sort_unstable();
    edges
}

/// a -> b -> c -> a, plus a -> d and a self-loop on d.
fn directed_sample() -> Graph<char> {
    let mut graph = Graph::directed();
    for (source, target) in [('a', 'b'), ('b', 'c'), ('c', 'a'), ('a', 'd'), ('d', 'd')] {
        graph.add_edge(source, target);
    }
    graph
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case(GraphConfig::default(), false)]
#[case(GraphConfig { directed: true }, true)]
fn test_config_picks_direction(#[case] config: GraphConfig, #[case] directed: bool) {
    let graph: Graph<u8> = Graph::with_config(config);
    assert_eq!(graph.is_directed(), directed);
    assert_eq!(graph.order(), 0);
    assert_eq!(graph.size(), 0);
}

#[rstest]
fn test_add_edge_creates_endpoints() {
    let mut graph = Graph::undirected();
    assert!(graph.add_edge('x', 'y'));
    assert!(!graph.add_edge('y', 'x'));

    assert_eq!(graph.order(), 2);
    assert_eq!(graph.size(), 1);
    assert!(!graph.add_vertex('x'));
    assert!(graph.add_vertex('z'));
    assert_eq!(graph.degree(&'z'), Some(0));
}

// =============================================================================
// Undirected symmetry
// =============================================================================

#[rstest]
fn test_undirected_edges_are_symmetric() {
    let mut graph = LabeledGraph::undirected();
    graph.add_edge('a', 'b', 5);
    graph.add_edge('b', 'c', 7);

    assert!(graph.contains_edge(&'b', &'a'));
    assert_eq!(graph.label(&'c', &'b'), Some(&7));
    assert_eq!(sorted(graph.successors(&'b')), vec!['a', 'c']);
    assert_eq!(sorted(graph.predecessors(&'b')), vec!['a', 'c']);
    assert_eq!(graph.in_degree(&'b'), graph.out_degree(&'b'));
}

#[rstest]
fn test_undirected_relabel_updates_both_endpoints() {
    let mut graph = LabeledGraph::undirected();
    graph.add_edge(1, 2, "first");
    assert_eq!(graph.add_edge(2, 1, "second"), Some("first"));

    assert_eq!(graph.label(&1, &2), Some(&"second"));
    assert_eq!(graph.size(), 1);
}

#[rstest]
fn test_undirected_remove_edge_from_either_end() {
    let mut graph = LabeledGraph::undirected();
    graph.add_edge('a', 'b', ());
    assert_eq!(graph.remove_edge(&'b', &'a'), Some(()));

    assert!(!graph.contains_edge(&'a', &'b'));
    assert_eq!(graph.degree(&'a'), Some(0));
    assert_eq!(graph.size(), 0);
}

// =============================================================================
// Directed degrees and traversal
// =============================================================================

#[rstest]
#[case('a', 1, 2)]
#[case('b', 1, 1)]
#[case('d', 2, 1)]
fn test_directed_degree_is_in_plus_out(
    #[case] vertex: char,
    #[case] in_degree: usize,
    #[case] out_degree: usize,
) {
    let graph = directed_sample();
    assert_eq!(graph.in_degree(&vertex), Some(in_degree));
    assert_eq!(graph.out_degree(&vertex), Some(out_degree));
    assert_eq!(graph.degree(&vertex), Some(in_degree + out_degree));
}

#[rstest]
fn test_directed_edges_and_neighbors() {
    let graph = directed_sample();

    assert_eq!(graph.size(), 5);
    assert_eq!(graph.edges().count(), 5);
    assert_eq!(sorted(graph.successors(&'a')), vec!['b', 'd']);
    assert_eq!(sorted(graph.predecessors(&'a')), vec!['c']);
    assert_eq!(sorted_pairs(graph.out_edges(&'a')), vec![('a', 'b'), ('a', 'd')]);
    assert_eq!(sorted_pairs(graph.in_edges(&'d')), vec![('a', 'd'), ('d', 'd')]);
    assert_eq!(
        sorted_pairs(graph.incident_edges(&'d')),
        vec![('a', 'd'), ('d', 'd')]
    );
}

/// A label that refuses to be copied.
#[derive(Debug, PartialEq)]
struct UniqueLabel(u32);

impl Clone for UniqueLabel {
    fn clone(&self) -> Self {
        panic!("label {} was cloned", self.0)
    }
}

#[rstest]
fn test_directed_add_edge_moves_label() {
    let mut graph = LabeledGraph::directed();
    graph.add_edge('a', 'b', UniqueLabel(1));
    graph.add_edge('b', 'b', UniqueLabel(2));
    let previous = graph.add_edge('a', 'b', UniqueLabel(3));

    assert_eq!(previous, Some(UniqueLabel(1)));
    assert_eq!(graph.label(&'a', &'b'), Some(&UniqueLabel(3)));
    assert_eq!(graph.in_degree(&'b'), Some(2));
    assert_eq!(graph.size(), 2);
}

// =============================================================================
// Missing vertices
// =============================================================================

#[rstest]
fn test_missing_vertex_queries_are_empty() {
    let graph = directed_sample();
    let missing = 'q';

    assert_eq!(graph.degree(&missing), None);
    assert_eq!(graph.in_degree(&missing), None);
    assert_eq!(graph.out_degree(&missing), None);
    assert_eq!(graph.successors(&missing).count(), 0);
    assert_eq!(graph.predecessors(&missing).count(), 0);
    assert_eq!(graph.neighbors(&missing).count(), 0);
    assert_eq!(graph.out_edges(&missing).count(), 0);
    assert_eq!(graph.incident_edges(&missing).count(), 0);
    assert!(!graph.contains_edge(&missing, &'a'));
}

#[rstest]
fn test_removing_missing_things_is_a_no_op() {
    let mut graph = directed_sample();
    assert!(!graph.remove_vertex(&'q'));
    assert!(!graph.remove_edge(&'b', &'a'));
    assert!(!graph.remove_edge(&'q', &'a'));
    assert_eq!(graph.size(), 5);
}

// =============================================================================
// Cascading removal
// =============================================================================

#[rstest]
fn test_directed_remove_vertex_cascades() {
    let mut graph = directed_sample();
    assert!(graph.remove_vertex(&'a'));

    assert_eq!(graph.order(), 3);
    assert_eq!(graph.size(), 2);
    assert_eq!(sorted_pairs(graph.edges()), vec![('b', 'c'), ('d', 'd')]);
    assert_eq!(graph.out_degree(&'c'), Some(0));
    assert_eq!(graph.in_degree(&'b'), Some(0));
    assert_eq!(graph.in_degree(&'d'), Some(1));
}

#[rstest]
fn test_undirected_remove_vertex_cascades() {
    let mut graph = Graph::undirected();
    for (source, target) in [('h', 'a'), ('h', 'b'), ('h', 'c'), ('a', 'b'), ('h', 'h')] {
        graph.add_edge(source, target);
    }
    assert_eq!(graph.size(), 5);
    assert_eq!(graph.edges().count(), 5);

    assert!(graph.remove_vertex(&'h'));
    assert_eq!(graph.size(), 1);
    assert_eq!(sorted(graph.vertices()), vec!['a', 'b', 'c']);
    assert_eq!(graph.degree(&'c'), Some(0));
    assert!(graph.contains_edge(&'b', &'a'));
}

#[rstest]
fn test_remove_vertex_then_readd() {
    let mut graph = directed_sample();
    graph.remove_vertex(&'d');
    assert!(graph.add_vertex('d'));

    assert_eq!(graph.degree(&'d'), Some(0));
    assert_eq!(graph.out_degree(&'a'), Some(1));
}
