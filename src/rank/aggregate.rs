// src/rank/aggregate.rs
//! Orders a rank result and selects the top-N entries.

use crate::error::{RankError, Result};
use crate::rank::{RankResult, RankedEntry};

/// Returns the `min(top_n, |result|)` highest-scoring entries, descending
/// by score. Equal scores are broken by ascending node identifier so the
/// output is reproducible; the underlying mapping has no inherent order.
///
/// # Errors
///
/// Returns `RankError::InvalidParameter` if `top_n` is 0.
pub fn top_n(result: &RankResult, top_n: usize) -> Result<Vec<RankedEntry>> {
    if top_n == 0 {
        return Err(RankError::InvalidParameter {
            name: "number",
            value: 0,
        });
    }

    let mut entries: Vec<RankedEntry> = result
        .iter()
        .map(|(node, &score)| RankedEntry {
            node: node.clone(),
            score,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.node.cmp(&b.node))
    });
    entries.truncate(top_n);

    Ok(entries)
}
