// src/rank/stochastic.rs
//! Monte-Carlo page rank estimation via independent random walks.
//!
//! Each walk starts on a uniformly random node and takes a fixed number of
//! steps, choosing uniformly among the current node's out-edges. A dangling
//! node has no outgoing transition, so the walk teleports uniformly to any
//! node instead, which keeps the walk defined on graphs with sinks. Every
//! node landed on (including the start) records one visit.
//!
//! Walks share no mutable state, so they run in parallel via rayon with a
//! per-walk RNG derived from the base seed; the merged counts are identical
//! regardless of scheduling.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::{RankError, Result};
use crate::graph::LinkGraph;
use crate::rank::RankResult;

/// Parameters for the stochastic ranker.
#[derive(Debug, Clone, Copy)]
pub struct WalkParams {
    /// Number of independent walks.
    pub repeats: usize,
    /// Steps taken per walk.
    pub steps: usize,
    /// Base seed for per-walk RNGs; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            repeats: 1_000_000,
            steps: 100,
            seed: None,
        }
    }
}

/// Runs `params.repeats` independent walks and returns total visit counts.
///
/// The counts across all nodes always sum to `repeats * (steps + 1)`.
///
/// # Errors
///
/// Returns `RankError::EmptyGraph` if the graph has no nodes, or
/// `RankError::InvalidParameter` if `repeats` is 0.
pub fn rank(graph: &LinkGraph, params: &WalkParams) -> Result<RankResult> {
    validate(graph, params)?;

    let base_seed = params.seed.unwrap_or_else(rand::random);

    let counts = (0..params.repeats)
        .into_par_iter()
        .fold(
            HashMap::new,
            |mut acc: HashMap<String, u64>, walk_idx| {
                let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(walk_idx as u64));
                single_walk(graph, params.steps, &mut rng, &mut acc);
                acc
            },
        )
        .reduce(HashMap::new, merge_counts);

    Ok(counts
        .into_iter()
        .map(|(node, hits)| (node, hits as f64))
        .collect())
}

/// Sequential variant with a caller-supplied randomness source.
///
/// # Errors
/// Same preconditions as [`rank`].
pub fn rank_with_rng<R: Rng>(
    graph: &LinkGraph,
    params: &WalkParams,
    rng: &mut R,
) -> Result<RankResult> {
    validate(graph, params)?;

    let mut counts: HashMap<String, u64> = HashMap::new();
    for _ in 0..params.repeats {
        single_walk(graph, params.steps, rng, &mut counts);
    }

    Ok(counts
        .into_iter()
        .map(|(node, hits)| (node, hits as f64))
        .collect())
}

fn validate(graph: &LinkGraph, params: &WalkParams) -> Result<()> {
    if graph.is_empty() {
        return Err(RankError::EmptyGraph);
    }
    if params.repeats == 0 {
        return Err(RankError::InvalidParameter {
            name: "repeats",
            value: 0,
        });
    }
    Ok(())
}

fn single_walk<R: Rng>(
    graph: &LinkGraph,
    steps: usize,
    rng: &mut R,
    counts: &mut HashMap<String, u64>,
) {
    let nodes = graph.nodes();
    let mut current = &nodes[rng.gen_range(0..nodes.len())];
    *counts.entry(current.clone()).or_insert(0) += 1;

    for _ in 0..steps {
        let targets = graph.targets(current);
        current = if targets.is_empty() {
            // Dangling node: teleport uniformly among all nodes.
            &nodes[rng.gen_range(0..nodes.len())]
        } else {
            &targets[rng.gen_range(0..targets.len())]
        };
        *counts.entry(current.clone()).or_insert(0) += 1;
    }
}

fn merge_counts(
    mut left: HashMap<String, u64>,
    right: HashMap<String, u64>,
) -> HashMap<String, u64> {
    for (node, hits) in right {
        *left.entry(node).or_insert(0) += hits;
    }
    left
}
