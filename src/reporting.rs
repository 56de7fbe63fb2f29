// src/reporting.rs
//! Console and JSON rendering of graph statistics and ranked results.
//!
//! Terminal output keeps the historical presentation of the tool: each
//! line shows the score scaled by 100 (two decimals) and the node. The
//! scaling is a display quirk owned by this printer; the rankers always
//! hand over raw scores.

use std::fmt::Write;

use anyhow::Result;
use colored::Colorize;

use crate::graph::LinkGraph;
use crate::rank::RankedEntry;

/// Prints the node and edge counts of the graph.
pub fn print_stats(graph: &LinkGraph) {
    println!("Number of nodes: {}", graph.node_count());
    println!("Number of edges: {}", graph.edge_count());
}

/// Formats the ranked list for the terminal, one `score<TAB>node` line
/// per entry.
///
/// # Errors
/// Returns error if formatting fails.
pub fn format_ranking(entries: &[RankedEntry]) -> Result<String> {
    let mut out = String::new();
    for entry in entries {
        writeln!(out, "{:.2}\t{}", entry.score * 100.0, entry.node.cyan())?;
    }
    Ok(out)
}

/// Formats the ranked list as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_ranking_json(entries: &[RankedEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
