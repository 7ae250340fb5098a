//! Report output for a builder comparison.
use crate::compare::{timing_lines, Comparison};
use crate::config::MatrixLayout;
use crate::graph::{Edge, Graph};
use crate::matrix::AdjacencyMatrix;
use crate::spanning_tree::SpanningTree;
use serde_json::{json, Value};
use std::io::{Result, Write};

/// A standard interface for writing a comparison run.
pub trait ReportWriter {
    /// Prints the loaded graph.
    fn init(&mut self, graph: &Graph, layout: &MatrixLayout) -> Result<()>;

    /// Prints a tree produced by the builder called `name`.
    fn tree(
        &mut self,
        name: &str,
        graph: &Graph,
        tree: &SpanningTree,
        layout: &MatrixLayout,
    ) -> Result<()>;

    /// Prints builder timings.
    fn timings(&mut self, comparison: &Comparison) -> Result<()>;

    /// Flushes output after the last report.
    fn close(&mut self) -> Result<()>;
}

/// Writes adjacency matrices and timing lines as plain text.
pub struct TextWriter<W: Write> {
    out: W,
}

/// Writes the graph, trees and timings in JSONL (JSON Lines) format.
///
/// Lines have the form
///   * `{"graph": {"vertices": [...], "edges": [...]}}`
///   * `{"tree": {"builder": ..., "edges": [...], "total_weight": ...}}`
///   * `{"timings": {"kruskal": <seconds>, "prim": <seconds>}}`
///
/// where edges are `[start, end, weight]` triples.
pub struct JSONLWriter<W: Write> {
    out: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> TextWriter<W> {
        TextWriter { out: out }
    }

    /// Consumes the writer, returning the underlying output.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> JSONLWriter<W> {
    pub fn new(out: W) -> JSONLWriter<W> {
        JSONLWriter { out: out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes an arbitrary JSON object as a line (used for run metadata).
    pub fn line(&mut self, value: &Value) -> Result<()> {
        writeln!(self.out, "{}", value.to_string())
    }
}

impl<W: Write> ReportWriter for TextWriter<W> {
    fn init(&mut self, graph: &Graph, layout: &MatrixLayout) -> Result<()> {
        writeln!(self.out, "Width: {}", layout.width)?;
        writeln!(self.out, "Adjacency Table:\n")?;
        let matrix = AdjacencyMatrix::new(&graph.edges, &graph.vertices);
        write!(self.out, "{}", matrix.with_layout(layout))
    }

    fn tree(
        &mut self,
        name: &str,
        graph: &Graph,
        tree: &SpanningTree,
        layout: &MatrixLayout,
    ) -> Result<()> {
        writeln!(self.out, "{}'s Algorithm:\n", name)?;
        let matrix = AdjacencyMatrix::new(&tree.edges, &graph.vertices);
        write!(self.out, "{}", matrix.with_layout(layout))
    }

    fn timings(&mut self, comparison: &Comparison) -> Result<()> {
        write!(self.out, "{}", timing_lines(comparison))
    }

    fn close(&mut self) -> Result<()> {
        self.out.flush()
    }
}

fn edges_json(edges: &[Edge]) -> Value {
    return edges
        .iter()
        .map(|e| json!([e.start, e.end, e.weight]))
        .collect();
}

impl<W: Write> ReportWriter for JSONLWriter<W> {
    fn init(&mut self, graph: &Graph, _layout: &MatrixLayout) -> Result<()> {
        let vertices: Vec<&String> = graph.vertices.iter().collect();
        self.line(&json!({
            "graph": {
                "vertices": vertices,
                "edges": edges_json(&graph.edges),
            }
        }))
    }

    fn tree(
        &mut self,
        name: &str,
        _graph: &Graph,
        tree: &SpanningTree,
        _layout: &MatrixLayout,
    ) -> Result<()> {
        self.line(&json!({
            "tree": {
                "builder": name,
                "edges": edges_json(&tree.edges),
                "total_weight": tree.total_weight(),
            }
        }))
    }

    fn timings(&mut self, comparison: &Comparison) -> Result<()> {
        self.line(&json!({
            "timings": {
                "kruskal": comparison.kruskal.elapsed.as_secs_f64(),
                "prim": comparison.prim.elapsed.as_secs_f64(),
            }
        }))
    }

    fn close(&mut self) -> Result<()> {
        self.out.flush()
    }
}
