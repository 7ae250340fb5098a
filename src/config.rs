//! Layout parameters for rendering adjacency matrices.
use crate::graph::Graph;

/// Gap (in characters) between the row-label column and the matrix columns.
pub const SPACING: usize = 2;
/// Extra characters added to the longest label when sizing columns.
pub const LABEL_PADDING: usize = 3;

/// Column layout of a rendered matrix.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatrixLayout {
    /// The width of each matrix column.
    pub width: usize,
    /// How much narrower the row-label column is than a matrix column.
    pub spacing: usize,
}

impl MatrixLayout {
    pub fn new(width: usize, spacing: usize) -> MatrixLayout {
        return MatrixLayout {
            width: width,
            spacing: spacing,
        };
    }

    /// Sizes columns to hold the longest vertex label in `graph`
    /// plus fixed padding.
    pub fn for_graph(graph: &Graph, spacing: usize) -> MatrixLayout {
        let width = spacing + graph.longest_label() + LABEL_PADDING;
        return MatrixLayout::new(width, spacing);
    }

    /// The width of the row-label column.
    pub fn label_width(&self) -> usize {
        self.width.saturating_sub(self.spacing)
    }
}
