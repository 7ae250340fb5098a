// Functional tests that verify builder and matrix invariants on fixture edge lists.
use adjmst::graph::Graph;
use adjmst::init::{from_edge_list, graph_from_edge_list, parse_edge_list};
use adjmst::matrix::AdjacencyMatrix;
use adjmst::spanning_tree::{
    KruskalBuilder, KruskalVariant, PrimBuilder, SpanningTree, SpanningTreeBuilder,
};
use approx::assert_relative_eq;
use rstest::rstest;
use std::collections::BTreeSet;
use test_fixtures::{default_fixture, fixture_path};

fn builder(key: &str) -> Box<dyn SpanningTreeBuilder> {
    match key {
        "kruskal" => Box::new(KruskalBuilder::new(KruskalVariant::Touched)),
        "kruskal-uf" => Box::new(KruskalBuilder::new(KruskalVariant::UnionFind)),
        "prim" => Box::new(PrimBuilder::new()),
        bad => panic!("Unknown builder '{}'", bad),
    }
}

/// Verifies that every tree edge is an edge of the graph (with the same weight).
fn subset_invariant(graph: &Graph, tree: &SpanningTree) -> bool {
    return tree
        .edges
        .iter()
        .all(|e| graph.weight_between(&e.start, &e.end) == Some(e.weight));
}

/// Verifies that a set of edges reaches every vertex from the first one.
fn spans(graph: &Graph, tree: &SpanningTree) -> bool {
    let mut reached = BTreeSet::new();
    let mut stack: Vec<&String> = graph.vertices.iter().take(1).collect();
    while let Some(next) = stack.pop() {
        if !reached.insert(next.clone()) {
            continue;
        }
        for edge in tree.edges.iter() {
            if &edge.start == next {
                stack.push(&edge.end);
            } else if &edge.end == next {
                stack.push(&edge.start);
            }
        }
    }
    return reached.len() == graph.num_vertices();
}

#[rstest]
fn original_matrix_is_symmetric(#[values("triangle", "single", "ties", "cities")] key: &str) {
    let graph = default_fixture(key);
    let matrix = AdjacencyMatrix::new(&graph.edges, &graph.vertices);
    assert!(matrix.is_symmetric());
    for v in 0..graph.num_vertices() {
        assert_eq!(matrix.get(v, v), None);
    }
}

#[test]
fn triangle_matrix_weights() {
    let graph = default_fixture("triangle");
    let matrix = AdjacencyMatrix::new(&graph.edges, &graph.vertices);
    assert_eq!(matrix.labels(), &["A", "B", "C"]);
    assert_eq!(matrix.get(0, 1), Some(1.));
    assert_eq!(matrix.get(1, 2), Some(2.));
    assert_eq!(matrix.get(0, 2), Some(3.));
}

#[rstest]
fn triangle_drops_costliest_edge(#[values("kruskal", "kruskal-uf", "prim")] key: &str) {
    let graph = default_fixture("triangle");
    let tree = builder(key).spanning_tree(&graph).unwrap();
    let weights: Vec<f32> = tree.edges.iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![1., 2.]);
}

#[rstest]
fn single_edge_tree(#[values("kruskal", "kruskal-uf", "prim")] key: &str) {
    let graph = default_fixture("single");
    let tree = builder(key).spanning_tree(&graph).unwrap();
    assert_eq!(tree.edges, graph.edges);
}

#[test]
fn load_is_deterministic() {
    let path = fixture_path("cities");
    let a = from_edge_list(&path).unwrap();
    let b = from_edge_list(&path).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.num_vertices(), 10);
    assert_eq!(a.num_edges(), 13);
}

#[test]
fn loader_returns_contents_it_parsed() {
    let path = fixture_path("cities");
    let (graph, raw) = graph_from_edge_list(&path).unwrap();
    assert_eq!(raw, std::fs::read_to_string(&path).unwrap());
    assert_eq!(parse_edge_list(&raw).unwrap(), graph);
    assert_eq!(from_edge_list(&path).unwrap(), graph);
}

#[rstest]
fn builders_are_deterministic(
    #[values("kruskal", "kruskal-uf", "prim")] key: &str,
    #[values("triangle", "ties", "cities")] fixture: &str,
) {
    let graph = default_fixture(fixture);
    let first = builder(key).spanning_tree(&graph.clone()).unwrap();
    let second = builder(key).spanning_tree(&graph.clone()).unwrap();
    assert_eq!(first, second);
    assert!(subset_invariant(&graph, &first));
}

#[test]
fn equal_weight_edges_are_not_collapsed() {
    let graph = default_fixture("ties");
    assert_eq!(graph.num_edges(), 4);
    let uf = builder("kruskal-uf").spanning_tree(&graph).unwrap();
    assert_eq!(uf.len(), 3);
    assert_relative_eq!(uf.total_weight(), 3.0);
    // B-C has both endpoints touched by the time it is considered.
    let touched = builder("kruskal").spanning_tree(&graph).unwrap();
    assert_eq!(touched.len(), 2);
}

#[test]
fn union_find_kruskal_is_minimum_spanning_tree() {
    let graph = default_fixture("cities");
    let tree = builder("kruskal-uf").spanning_tree(&graph).unwrap();
    assert_eq!(tree.len(), graph.num_vertices() - 1);
    assert!(spans(&graph, &tree));
    assert_relative_eq!(tree.total_weight(), 1294.0);
}

#[rstest]
fn touched_heuristics_on_cities(#[values("kruskal", "prim")] key: &str) {
    let graph = default_fixture("cities");
    let tree = builder(key).spanning_tree(&graph).unwrap();
    // Philadelphia-Baltimore is rejected (both endpoints touched), leaving
    // three disconnected pieces.
    assert_eq!(tree.len(), 7);
    assert!(!tree.contains("Philadelphia", "Baltimore"));
    assert!(!spans(&graph, &tree));
    assert_relative_eq!(tree.total_weight(), 948.0);
}
