// src/graph.rs
//! Immutable directed-graph view over link records.
//!
//! Nodes are opaque string identifiers. Parallel edges and self-loops are
//! permitted; a node that only ever appears as a target has out-degree 0
//! (a "dangling" node) but is still enumerated by [`LinkGraph::nodes`].

use std::collections::{BTreeSet, HashMap};

/// The link graph and its summary counts.
///
/// Constructed once from raw edge pairs, read-only thereafter. Node
/// enumeration order is deterministic (ascending identifier) so that
/// seeded random walks are reproducible.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    edges: HashMap<String, Vec<String>>,
    nodes: Vec<String>,
    edge_count: usize,
}

impl LinkGraph {
    /// Builds a graph from `(source, target)` pairs.
    #[must_use]
    pub fn from_edges<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut edges: HashMap<String, Vec<String>> = HashMap::new();
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut edge_count = 0;

        for (source, target) in pairs {
            seen.insert(source.clone());
            seen.insert(target.clone());
            edges.entry(source).or_default().push(target);
            edge_count += 1;
        }

        Self {
            edges,
            nodes: seen.into_iter().collect(),
            edge_count,
        }
    }

    /// All known nodes, including nodes that only appear as targets.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Number of outgoing edges from `node`; 0 if it has none.
    #[must_use]
    pub fn out_degree(&self, node: &str) -> usize {
        self.edges.get(node).map_or(0, Vec::len)
    }

    /// Outgoing edges of `node` in insertion order, empty if none.
    /// Duplicates mean parallel edges.
    #[must_use]
    pub fn targets(&self, node: &str) -> &[String] {
        self.edges.get(node).map_or(&[], |targets| targets.as_slice())
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
