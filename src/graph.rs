//! A lightweight undirected graph with weighted edges and string labels.
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// A weighted undirected edge between two labeled vertices.
///
/// The endpoints are stored in the order they were first seen, but
/// `(start, end)` and `(end, start)` denote the same connection.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// The first endpoint label.
    pub start: String,
    /// The second endpoint label.
    pub end: String,
    /// The edge weight. Self-loops and negative weights are accepted as-is.
    pub weight: f32,
}

impl Edge {
    /// Creates an edge between `start` and `end` with weight `weight`.
    pub fn new(start: &str, end: &str, weight: f32) -> Edge {
        return Edge {
            start: start.to_owned(),
            end: end.to_owned(),
            weight: weight,
        };
    }

    /// Determines whether the edge joins `a` and `b` (in either direction).
    pub fn connects(&self, a: &str, b: &str) -> bool {
        return (self.start == a && self.end == b) || (self.start == b && self.end == a);
    }

    /// Orders edges by weight alone. Edges of equal weight compare `Equal`,
    /// so stable sorts keep them in insertion order.
    pub fn cmp_weight(&self, other: &Edge) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

/// An undirected weighted graph: an edge sequence plus the set of all
/// endpoint labels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    /// The graph's edges, in insertion order. Each unordered endpoint
    /// pair appears at most once.
    pub edges: Vec<Edge>,
    /// The graph's vertex labels (ordered lexicographically).
    pub vertices: BTreeSet<String>,
}

impl Graph {
    /// Returns an empty graph.
    pub fn new() -> Graph {
        return Graph::default();
    }

    /// Adds an edge, registering both endpoints as vertices.
    ///
    /// If the graph already has an edge joining `start` and `end`, its weight
    /// is overwritten (last write wins); the edge keeps its position.
    pub fn add_edge(&mut self, start: &str, end: &str, weight: f32) {
        self.vertices.insert(start.to_owned());
        self.vertices.insert(end.to_owned());
        match self.edges.iter_mut().find(|e| e.connects(start, end)) {
            Some(existing) => existing.weight = weight,
            None => self.edges.push(Edge::new(start, end, weight)),
        }
    }

    /// Returns a copy of the edges sorted by ascending weight.
    /// Ties keep insertion order.
    pub fn edges_by_weight(&self) -> Vec<Edge> {
        let mut edges = self.edges.clone();
        edges.sort_by(|a, b| a.cmp_weight(b));
        return edges;
    }

    /// Returns the weight of the edge joining `a` and `b`, if any.
    pub fn weight_between(&self, a: &str, b: &str) -> Option<f32> {
        return self
            .edges
            .iter()
            .find(|e| e.connects(a, b))
            .map(|e| e.weight);
    }

    /// The length (in characters) of the longest vertex label.
    pub fn longest_label(&self) -> usize {
        return self
            .vertices
            .iter()
            .map(|v| v.chars().count())
            .max()
            .unwrap_or(0);
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Builds a graph from `(start, end, weight)` triples.
    pub fn from_triples(triples: &[(&str, &str, f32)]) -> Graph {
        let mut graph = Graph::new();
        for &(start, end, weight) in triples.iter() {
            graph.add_edge(start, end, weight);
        }
        return graph;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_registers_vertices() {
        let graph = Graph::from_triples(&[("B", "C", 2.), ("A", "B", 1.)]);
        let labels: Vec<&str> = graph.vertices.iter().map(|v| v.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn duplicate_pair_last_write_wins() {
        let graph = Graph::from_triples(&[("A", "B", 1.), ("B", "C", 2.), ("B", "A", 7.)]);
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.edges[0], Edge::new("A", "B", 7.));
        assert_eq!(graph.weight_between("A", "B"), Some(7.));
    }

    #[test]
    fn equal_weights_are_all_kept_in_order() {
        let graph = Graph::from_triples(&[("C", "D", 1.), ("A", "B", 1.), ("B", "C", 0.5)]);
        let sorted = graph.edges_by_weight();
        assert_eq!(
            sorted,
            vec![
                Edge::new("B", "C", 0.5),
                Edge::new("C", "D", 1.),
                Edge::new("A", "B", 1.)
            ]
        );
    }

    #[test]
    fn connects_is_undirected() {
        let edge = Edge::new("A", "B", 3.);
        assert!(edge.connects("A", "B"));
        assert!(edge.connects("B", "A"));
        assert!(!edge.connects("A", "C"));
    }

    #[test]
    fn longest_label_counts_chars() {
        let graph = Graph::from_triples(&[("Boston", "NYC", 215.)]);
        assert_eq!(graph.longest_label(), 6);
        assert_eq!(Graph::new().longest_label(), 0);
    }
}
