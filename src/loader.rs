// src/loader.rs
//! Loads a [`LinkGraph`] from whitespace-separated edge records.
//!
//! Each non-blank line must hold exactly two non-empty identifiers,
//! `source target`. Blank lines are skipped. Validation happens here so the
//! rankers never see malformed input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{RankError, Result};
use crate::graph::LinkGraph;

/// Parses edge records from any buffered reader.
///
/// # Errors
///
/// Returns `RankError::Parse` (with the 1-based line number) for any line
/// that does not split into exactly two tokens, or `RankError::Io` if
/// reading fails.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<LinkGraph> {
    let mut pairs = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(source), Some(target), None) => {
                pairs.push((source.to_string(), target.to_string()));
            }
            _ => {
                return Err(RankError::Parse {
                    line: idx + 1,
                    content: line.clone(),
                })
            }
        }
    }

    Ok(LinkGraph::from_edges(pairs))
}

/// Loads edge records from a file on disk.
///
/// # Errors
/// Returns error if the file cannot be opened or parsed.
pub fn load_from_path(path: &Path) -> Result<LinkGraph> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

/// Loads edge records from standard input.
///
/// # Errors
/// Returns error if stdin cannot be read or parsed.
pub fn load_from_stdin() -> Result<LinkGraph> {
    let stdin = io::stdin();
    load_from_reader(stdin.lock())
}
