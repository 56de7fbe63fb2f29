// src/rank/distribution.rs
//! Page rank estimation by iterative probability-mass propagation.
//!
//! Starts from the uniform distribution and applies a fixed number of
//! power-iteration rounds. Each round, a node with out-degree `d > 0`
//! splits its mass evenly across its `d` targets. A dangling node keeps
//! nothing and passes nothing on: its mass is lost, not redistributed,
//! so total mass is non-increasing whenever the graph has sinks. This is
//! the documented contract of the estimator, not an accident.

use crate::error::{RankError, Result};
use crate::graph::LinkGraph;
use crate::rank::RankResult;

/// Runs `steps` propagation rounds and returns the final mass per node.
///
/// # Errors
///
/// Returns `RankError::EmptyGraph` if the graph has no nodes. The
/// recurrence itself is total over all finite graphs.
pub fn rank(graph: &LinkGraph, steps: usize) -> Result<RankResult> {
    if graph.is_empty() {
        return Err(RankError::EmptyGraph);
    }

    let n = graph.node_count() as f64;
    let mut mass: RankResult = graph
        .nodes()
        .iter()
        .map(|node| (node.clone(), 1.0 / n))
        .collect();

    for _ in 0..steps {
        mass = propagate(graph, &mass);
    }

    Ok(mass)
}

/// One propagation round. Every node starts the round at zero; only mass
/// arriving over an in-edge this round survives.
fn propagate(graph: &LinkGraph, mass: &RankResult) -> RankResult {
    let mut next: RankResult = graph
        .nodes()
        .iter()
        .map(|node| (node.clone(), 0.0))
        .collect();

    for node in graph.nodes() {
        let degree = graph.out_degree(node);
        if degree == 0 {
            continue;
        }
        let share = mass.get(node).copied().unwrap_or(0.0) / degree as f64;
        for target in graph.targets(node) {
            if let Some(slot) = next.get_mut(target) {
                *slot += share;
            }
        }
    }

    next
}
