//! Main CLI for adjmst.
use mimalloc::MiMalloc;
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use adjmst::compare::compare;
use adjmst::config::{MatrixLayout, SPACING};
use adjmst::init::graph_from_edge_list;
use adjmst::spanning_tree::{KruskalBuilder, KruskalVariant, PrimBuilder};
use adjmst::writers::{JSONLWriter, ReportWriter, TextWriter};
use anyhow::{bail, Context, Result};
use clap::{value_t, App, Arg};
use log::info;
use serde_json::json;
use sha3::{Digest, Sha3_256};
use std::io;

fn main() -> Result<()> {
    env_logger::init();
    let spacing_default = SPACING.to_string();
    let matches = App::new("adjmst")
        .version("0.1.0")
        .author("Parker J. Rule <parker.rule@tufts.edu>")
        .about("Adjacency matrices and greedy spanning trees of a weighted edge list")
        .arg(
            Arg::with_name("edge_list")
                .long("edge-list")
                .takes_value(true)
                .default_value("city-pairs.txt")
                .help("The path of the edge list (`<start> <end> <weight>` per line)."),
        )
        .arg(
            Arg::with_name("spacing")
                .long("spacing")
                .takes_value(true)
                .default_value(&spacing_default)
                .help("The gap between the row-label column and the matrix columns."),
        )
        .arg(
            Arg::with_name("kruskal")
                .long("kruskal")
                .takes_value(true)
                .default_value("touched"),
        ) // other options: union-find
        .arg(
            Arg::with_name("writer")
                .long("writer")
                .takes_value(true)
                .default_value("text"),
        ) // other options: jsonl
        .get_matches();
    let spacing = value_t!(matches.value_of("spacing"), usize).unwrap_or_else(|e| e.exit());
    let edge_list = matches.value_of("edge_list").unwrap_or("city-pairs.txt");
    let kruskal_str = matches.value_of("kruskal").unwrap_or("touched");
    let writer_str = matches.value_of("writer").unwrap_or("text");

    let variant = match kruskal_str {
        "touched" => KruskalVariant::Touched,
        "union-find" => KruskalVariant::UnionFind,
        bad => bail!("Parameter error: invalid Kruskal variant '{}'", bad),
    };

    let (graph, raw_edge_list) = graph_from_edge_list(edge_list)?;
    let layout = MatrixLayout::for_graph(&graph, spacing);
    info!("column width {}", layout.width);

    let mut writer: Box<dyn ReportWriter> = match writer_str {
        "text" => Box::new(TextWriter::new(io::stdout().lock())),
        "jsonl" => {
            let mut hasher = Sha3_256::new();
            hasher.update(raw_edge_list.as_bytes());
            let edge_list_hash = format!("{:x}", hasher.finalize());
            let mut jsonl = JSONLWriter::new(io::stdout().lock());
            jsonl.line(&json!({
                "meta": {
                    "edge_list": edge_list,
                    "edge_list_sha3": edge_list_hash,
                    "kruskal": kruskal_str,
                    "spacing": spacing,
                }
            }))?;
            Box::new(jsonl)
        }
        bad => bail!("Parameter error: invalid writer '{}'", bad),
    };

    let kruskal = KruskalBuilder::new(variant);
    let prim = PrimBuilder::new();
    writer.init(&graph, &layout)?;
    let comparison = compare(&graph, &kruskal, &prim).context("Could not build spanning trees")?;
    writer.tree(comparison.kruskal.name, &graph, &comparison.kruskal.tree, &layout)?;
    writer.tree(comparison.prim.name, &graph, &comparison.prim.tree, &layout)?;
    writer.timings(&comparison)?;
    writer.close()?;
    Ok(())
}
