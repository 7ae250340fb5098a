//! Utility functions for loading edge lists.
use crate::error::MstError;
use crate::graph::Graph;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;

/// Loads a graph from a whitespace-separated edge list file. Returns an
/// [anyhow::Result] containing a [Graph] upon a successful load.
///
/// Each non-blank line must have the form `<start> <end> <weight>`;
/// see [parse_edge_list].
///
/// # Arguments
///
/// * `path` - the path of the edge list file.
pub fn from_edge_list(path: &str) -> Result<Graph> {
    let (graph, _) = graph_from_edge_list(path)?;
    return Ok(graph);
}

/// Loads a graph from an edge list file. Returns an [anyhow::Result]
/// containing a [Graph] and the raw file contents upon a successful load.
/// The file is read exactly once.
///
/// # Arguments
///
/// * `path` - the path of the edge list file.
pub fn graph_from_edge_list(path: &str) -> Result<(Graph, String)> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Could not load edge list `{}`", path))?;
    let graph = parse_edge_list(&raw).with_context(|| format!("Could not parse `{}`", path))?;
    info!(
        "loaded {} vertices and {} edges from {}",
        graph.num_vertices(),
        graph.num_edges(),
        path
    );
    return Ok((graph, raw));
}

/// Parses an edge list (one `<start> <end> <weight>` triple per line).
///
/// Blank lines are skipped. Both endpoints of every edge are registered as
/// vertices; a repeated endpoint pair overwrites the earlier weight.
/// Line numbers in errors are 1-indexed.
pub fn parse_edge_list(raw: &str) -> Result<Graph, MstError> {
    let mut graph = Graph::new();
    for (index, line) in raw.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [start, end, raw_weight] => {
                let invalid = || MstError::InvalidWeight {
                    line: index + 1,
                    weight: raw_weight.to_string(),
                };
                let weight = raw_weight.parse::<f32>().map_err(|_| invalid())?;
                // `f32::from_str` accepts "NaN" and "inf".
                if !weight.is_finite() {
                    return Err(invalid());
                }
                graph.add_edge(start, end, weight);
            }
            _ => {
                return Err(MstError::MalformedLine {
                    line: index + 1,
                    content: line.to_string(),
                })
            }
        }
    }
    debug!("parsed {} edges", graph.num_edges());
    return Ok(graph);
}
