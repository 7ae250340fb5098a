//! Error types for loading graphs and building spanning trees.
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MstError {
    /// A line of the edge list does not have exactly three fields.
    #[error("line {line}: expected `<start> <end> <weight>`, got `{content}`")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: invalid weight `{weight}`")]
    InvalidWeight { line: usize, weight: String },

    /// The graph has no edges, so there is no tree to build.
    #[error("graph too small for a spanning tree ({edges} edges)")]
    GraphTooSmall { edges: usize },

    /// The graph is disconnected (union-find Kruskal only).
    #[error("expected to have {expected} edges in MST but got {found}")]
    NotSpanning { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, MstError>;
