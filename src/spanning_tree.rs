//! Greedy spanning tree builders (Kruskal-style and Prim-style).
//!
//! Both builders work on a weight-sorted copy of the graph's edges and
//! track which vertices have been "touched" (are an endpoint of an
//! accepted edge). They are deliberately greedy heuristics: neither one
//! tracks connected components, so on graphs with many more edges than
//! vertices the result may not be a true minimum spanning tree. Use
//! [KruskalVariant::UnionFind] for a textbook MST.
use crate::error::{MstError, Result};
use crate::graph::{Edge, Graph};
use log::debug;
use std::collections::BTreeSet;

/// The result of a builder: edges in acceptance order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
}

impl SpanningTree {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The sum of all edge weights in the tree.
    pub fn total_weight(&self) -> f64 {
        return self.edges.iter().map(|e| e.weight as f64).sum();
    }

    /// Determines whether the tree has an edge joining `a` and `b`.
    pub fn contains(&self, a: &str, b: &str) -> bool {
        return self.edges.iter().any(|e| e.connects(a, b));
    }
}

pub trait SpanningTreeBuilder {
    /// A short human-readable name for the builder (used in reports).
    fn name(&self) -> &'static str;

    /// Builds a spanning tree of `graph`. The graph is not modified.
    fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree>;
}

pub use crate::spanning_tree::kruskal::{KruskalBuilder, KruskalVariant};
pub use crate::spanning_tree::prim::PrimBuilder;

/// Rejects graphs with no edges before any loop bound is computed.
fn check_size(graph: &Graph) -> Result<()> {
    if graph.edges.is_empty() {
        return Err(MstError::GraphTooSmall {
            edges: graph.edges.len(),
        });
    }
    Ok(())
}

/// The set of vertices not yet touched by an accepted edge.
struct Untouched(BTreeSet<String>);

impl Untouched {
    fn new(graph: &Graph) -> Untouched {
        Untouched(graph.vertices.clone())
    }

    /// Determines whether at least one endpoint of `edge` is untouched.
    fn touches_new(&self, edge: &Edge) -> bool {
        self.0.contains(&edge.start) || self.0.contains(&edge.end)
    }

    /// Marks both endpoints of `edge` as touched.
    fn cover(&mut self, edge: &Edge) {
        self.0.remove(&edge.start);
        self.0.remove(&edge.end);
    }
}

/// Kruskal-style spanning trees.
mod kruskal {
    use super::*;
    use petgraph::unionfind::UnionFind;
    use std::cmp::{max, min};

    /// Cycle-avoidance strategies for [KruskalBuilder].
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub enum KruskalVariant {
        /// Reject an edge only if both endpoints were already touched.
        Touched,
        /// Reject an edge if its endpoints are already in the same
        /// component (disjoint-set union).
        UnionFind,
    }

    impl Default for KruskalVariant {
        fn default() -> KruskalVariant {
            KruskalVariant::Touched
        }
    }

    /// Builds spanning trees by repeatedly taking the globally cheapest
    /// remaining edge.
    #[derive(Copy, Clone, Debug, Default)]
    pub struct KruskalBuilder {
        pub variant: KruskalVariant,
    }

    impl KruskalBuilder {
        pub fn new(variant: KruskalVariant) -> KruskalBuilder {
            KruskalBuilder { variant: variant }
        }
    }

    /// The number of candidate edges the touched-vertex heuristic considers:
    /// one less than the number of edges, but never fewer than `|V| - 1`
    /// (so one-edge graphs and trees keep all of their edges) and never
    /// more than the number of edges.
    pub(super) fn candidate_bound(graph: &Graph) -> usize {
        let n_edges = graph.num_edges();
        let by_edges = n_edges.saturating_sub(1);
        let by_vertices = graph.num_vertices().saturating_sub(1);
        return min(max(by_edges, by_vertices), n_edges);
    }

    fn touched_heuristic(graph: &Graph) -> SpanningTree {
        let bound = candidate_bound(graph);
        let mut untouched = Untouched::new(graph);
        let mut tree = SpanningTree::default();
        for edge in graph.edges_by_weight().into_iter().take(bound) {
            // Both endpoints seen before: assume a cycle.
            if untouched.touches_new(&edge) {
                untouched.cover(&edge);
                tree.edges.push(edge);
            }
        }
        debug!(
            "kruskal (touched): considered {} of {} edges, accepted {}",
            bound,
            graph.num_edges(),
            tree.len()
        );
        return tree;
    }

    fn union_find(graph: &Graph) -> Result<SpanningTree> {
        let labels: Vec<&String> = graph.vertices.iter().collect();
        // Vertices are sorted, so labels can be located by binary search.
        let index = |label: &String| labels.binary_search(&label).ok();

        let mut uf = UnionFind::<usize>::new(labels.len());
        let n_edges = labels.len() - 1;
        let mut tree = SpanningTree::default();
        for edge in graph.edges_by_weight().into_iter() {
            if tree.len() == n_edges {
                break;
            }
            if let (Some(src), Some(dst)) = (index(&edge.start), index(&edge.end)) {
                if uf.union(src, dst) {
                    tree.edges.push(edge);
                }
            }
        }
        if tree.len() != n_edges {
            return Err(MstError::NotSpanning {
                expected: n_edges,
                found: tree.len(),
            });
        }
        debug!("kruskal (union-find): accepted {} edges", tree.len());
        return Ok(tree);
    }

    impl SpanningTreeBuilder for KruskalBuilder {
        fn name(&self) -> &'static str {
            "Kruskal"
        }

        fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree> {
            check_size(graph)?;
            match self.variant {
                KruskalVariant::Touched => Ok(touched_heuristic(graph)),
                KruskalVariant::UnionFind => union_find(graph),
            }
        }
    }
}

/// Prim-style spanning trees.
mod prim {
    use super::*;

    /// Builds spanning trees by taking the cheapest remaining edge that
    /// touches at least one new vertex, `|V| - 1` times.
    ///
    /// Unlike classical Prim, the tree is not grown from a single frontier:
    /// the globally cheapest edge is taken even if it is disjoint from the
    /// edges accepted so far.
    #[derive(Copy, Clone, Debug, Default)]
    pub struct PrimBuilder {}

    impl PrimBuilder {
        pub fn new() -> PrimBuilder {
            PrimBuilder {}
        }
    }

    impl SpanningTreeBuilder for PrimBuilder {
        fn name(&self) -> &'static str {
            "Prim"
        }

        fn spanning_tree(&self, graph: &Graph) -> Result<SpanningTree> {
            check_size(graph)?;
            let steps = graph.num_vertices() - 1;
            let mut untouched = Untouched::new(graph);
            let mut tree = SpanningTree::default();
            // Each step removes the cheapest remaining edge, accepted or not.
            for edge in graph.edges_by_weight().into_iter().take(steps) {
                if untouched.touches_new(&edge) {
                    untouched.cover(&edge);
                    tree.edges.push(edge);
                }
            }
            debug!(
                "prim: {} steps over {} edges, accepted {}",
                steps,
                graph.num_edges(),
                tree.len()
            );
            return Ok(tree);
        }
    }
}
