// tests/unit_graph.rs
//! Tests for the link graph view.

use linkrank::graph::LinkGraph;

fn graph_of(pairs: &[(&str, &str)]) -> LinkGraph {
    LinkGraph::from_edges(
        pairs
            .iter()
            .map(|(source, target)| (source.to_string(), target.to_string())),
    )
}

#[test]
fn test_target_only_nodes_are_enumerated() {
    let graph = graph_of(&[("a", "b"), ("a", "c")]);
    let nodes = graph.nodes();
    assert!(
        nodes.contains(&"b".to_string()) && nodes.contains(&"c".to_string()),
        "Nodes appearing only as targets must still be known"
    );
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_out_degree_zero_for_dangling_and_unknown() {
    let graph = graph_of(&[("a", "b")]);
    assert_eq!(graph.out_degree("b"), 0, "Dangling node has out-degree 0");
    assert_eq!(graph.out_degree("zzz"), 0, "Unknown node has out-degree 0");
    assert!(graph.targets("b").is_empty());
}

#[test]
fn test_parallel_edges_and_order_preserved() {
    let graph = graph_of(&[("a", "b"), ("a", "c"), ("a", "b")]);
    assert_eq!(graph.out_degree("a"), 3, "Parallel edges each count");
    assert_eq!(graph.targets("a"), &["b", "c", "b"]);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_self_loop_is_a_regular_edge() {
    let graph = graph_of(&[("a", "a")]);
    assert_eq!(graph.out_degree("a"), 1);
    assert_eq!(graph.targets("a"), &["a"]);
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_empty_graph() {
    let graph = graph_of(&[]);
    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_node_enumeration_is_sorted() {
    let graph = graph_of(&[("c", "a"), ("b", "c")]);
    assert_eq!(
        graph.nodes(),
        &["a", "b", "c"],
        "Deterministic node order keeps seeded walks reproducible"
    );
}
