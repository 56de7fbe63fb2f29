// src/rank/mod.rs
//! Ranking strategies and result selection.

pub mod aggregate;
pub mod distribution;
pub mod stochastic;

use std::collections::HashMap;

use serde::Serialize;

/// Node-to-score mapping produced by either ranker.
///
/// Scores are raw visit counts for the stochastic method and probability
/// mass for the distribution method. Absent keys mean a score of 0.
pub type RankResult = HashMap<String, f64>;

/// One entry of the ranked report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub node: String,
    pub score: f64,
}
