//! Adjacency matrix construction and fixed-width rendering.
use crate::config::MatrixLayout;
use crate::graph::Edge;
use std::collections::BTreeSet;
use std::fmt;

/// The text printed for vertex pairs with no edge.
const ABSENT: &str = "0";

/// A dense adjacency matrix over a fixed, ordered vertex universe.
///
/// Rows and columns follow the iteration order of the vertex set used to
/// build the matrix; cell `[i][j]` holds the weight of the edge joining the
/// `i`th and `j`th vertices, if one was given.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix {
    labels: Vec<String>,
    cells: Vec<Vec<Option<f32>>>,
}

impl AdjacencyMatrix {
    /// Builds a matrix from any edge set over the full vertex set `vertices`.
    /// Edges with an endpoint outside `vertices` are ignored.
    pub fn new(edges: &[Edge], vertices: &BTreeSet<String>) -> AdjacencyMatrix {
        let labels: Vec<String> = vertices.iter().cloned().collect();
        let n = labels.len();
        let mut cells = vec![vec![None; n]; n];
        for edge in edges.iter() {
            let a = labels.binary_search(&edge.start);
            let b = labels.binary_search(&edge.end);
            if let (Ok(a), Ok(b)) = (a, b) {
                cells[a][b] = Some(edge.weight);
                cells[b][a] = Some(edge.weight);
            }
        }
        return AdjacencyMatrix {
            labels: labels,
            cells: cells,
        };
    }

    /// The row/column labels, in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the weight at (`row`, `col`), or `None` if there is no edge
    /// or either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        return self.cells.get(row).and_then(|r| r.get(col)).copied().flatten();
    }

    /// Checks that `[i][j] == [j][i]` for all vertex pairs.
    pub fn is_symmetric(&self) -> bool {
        let n = self.labels.len();
        return (0..n).all(|i| (0..n).all(|j| self.cells[i][j] == self.cells[j][i]));
    }

    /// Pairs the matrix with a column layout for display. The result
    /// implements [fmt::Display]: a header row of labels, then one row per
    /// vertex. Every column is right-aligned to `layout.width`; the
    /// row-label column is `layout.spacing` characters narrower.
    ///
    /// A width that is too small for the labels or weights misaligns the
    /// output but never fails.
    pub fn with_layout<'a>(&'a self, layout: &'a MatrixLayout) -> LaidOut<'a> {
        return LaidOut {
            matrix: self,
            layout: layout,
        };
    }

    /// Renders the matrix as text (see [AdjacencyMatrix::with_layout]).
    pub fn render(&self, layout: &MatrixLayout) -> String {
        return self.with_layout(layout).to_string();
    }
}

/// An [AdjacencyMatrix] with a fixed column layout.
pub struct LaidOut<'a> {
    matrix: &'a AdjacencyMatrix,
    layout: &'a MatrixLayout,
}

impl fmt::Display for LaidOut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.layout.width;
        let label_width = self.layout.label_width();

        write!(f, "{:>w$}", " ", w = label_width)?;
        for label in self.matrix.labels.iter() {
            write!(f, "{:>w$}", label, w = width)?;
        }
        writeln!(f)?;

        for (label, row) in self.matrix.labels.iter().zip(self.matrix.cells.iter()) {
            write!(f, "{:>w$}", label, w = label_width)?;
            for cell in row.iter() {
                match cell {
                    Some(weight) => write!(f, "{:>w$}", weight, w = width)?,
                    None => write!(f, "{:>w$}", ABSENT, w = width)?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
