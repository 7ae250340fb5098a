//! Wall-clock comparison of spanning tree builders.
use crate::error::Result;
use crate::graph::Graph;
use crate::spanning_tree::{SpanningTree, SpanningTreeBuilder};
use log::info;
use std::time::{Duration, Instant};

/// A builder's result and how long the builder call took.
#[derive(Clone, Debug)]
pub struct TimedTree {
    /// The builder's name.
    pub name: &'static str,
    pub tree: SpanningTree,
    pub elapsed: Duration,
}

/// The results of running the Kruskal-style and Prim-style builders on the
/// same graph.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub kruskal: TimedTree,
    pub prim: TimedTree,
}

/// Times a single call of `builder` on `graph` (no warm-up, no repetition).
pub fn timed(builder: &dyn SpanningTreeBuilder, graph: &Graph) -> Result<TimedTree> {
    let start = Instant::now();
    let tree = builder.spanning_tree(graph)?;
    let elapsed = start.elapsed();
    info!(
        "{}: {} edges (total weight {}) in {:?}",
        builder.name(),
        tree.len(),
        tree.total_weight(),
        elapsed
    );
    return Ok(TimedTree {
        name: builder.name(),
        tree: tree,
        elapsed: elapsed,
    });
}

/// Runs `kruskal`, then `prim`, each timed independently.
pub fn compare(
    graph: &Graph,
    kruskal: &dyn SpanningTreeBuilder,
    prim: &dyn SpanningTreeBuilder,
) -> Result<Comparison> {
    let kruskal = timed(kruskal, graph)?;
    let prim = timed(prim, graph)?;
    return Ok(Comparison {
        kruskal: kruskal,
        prim: prim,
    });
}

/// Formats the two timing lines of a comparison (seconds, sub-second
/// resolution).
pub fn timing_lines(comparison: &Comparison) -> String {
    return format!(
        "Kruskal Time : {}\nPrim    Time : {}\n",
        comparison.kruskal.elapsed.as_secs_f64(),
        comparison.prim.elapsed.as_secs_f64()
    );
}
