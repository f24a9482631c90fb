//! End-to-end construction of the `p AND q` diagram, exported and reloaded.

use std::collections::HashMap;

use obdd_core::{load_json, save_json, EdgeKind, NodeId, ObddGraph, Sample};
use tempfile::TempDir;

/// Follow the diagram from the root for a variable assignment.
fn evaluate(graph: &ObddGraph, assignment: &HashMap<&str, bool>) -> Option<bool> {
    let mut current: NodeId = graph.root()?;
    for _ in 0..=graph.node_count() {
        let node = graph.node(current)?;
        if let Some(value) = node.terminal_value() {
            return Some(value);
        }
        let value = *assignment.get(node.label())?;
        current = graph.target(current, EdgeKind::for_value(value))?;
    }
    None
}

fn assignments() -> Vec<(bool, bool)> {
    vec![(false, false), (false, true), (true, false), (true, true)]
}

fn check_truth_table(graph: &ObddGraph, expected: impl Fn(bool, bool) -> bool) {
    for (p, q) in assignments() {
        let assignment = HashMap::from([("p", p), ("q", q)]);
        assert_eq!(
            evaluate(graph, &assignment),
            Some(expected(p, q)),
            "p={p} q={q}"
        );
    }
}

#[test]
fn test_and_diagram_survives_export_and_import() {
    let mut graph = ObddGraph::new();
    let p = graph.add_decision_node();
    let q = graph.add_decision_node();
    assert_eq!(graph.node(p).unwrap().label(), "p");
    assert_eq!(graph.node(q).unwrap().label(), "q");

    let zero = graph.terminal(false);
    let one = graph.terminal(true);
    graph.set_root(p).unwrap();
    graph.connect(p, EdgeKind::One, q).unwrap();
    graph.connect(p, EdgeKind::Zero, zero).unwrap();
    graph.connect(q, EdgeKind::One, one).unwrap();
    graph.connect(q, EdgeKind::Zero, zero).unwrap();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("and.json");
    save_json(&path, &graph.to_document()).unwrap();

    let mut reloaded = ObddGraph::new();
    reloaded.load_document(&load_json(&path).unwrap()).unwrap();

    assert_eq!(reloaded.node_count(), 4);
    assert_eq!(reloaded.edge_count(), 4);
    assert_eq!(reloaded.root(), Some(p));
    check_truth_table(&reloaded, |p, q| p && q);
}

#[test]
fn test_samples_compute_their_functions() {
    check_truth_table(&Sample::And.build().unwrap(), |p, q| p && q);
    check_truth_table(&Sample::Xor.build().unwrap(), |p, q| p ^ q);
}

#[test]
fn test_cyclic_diagram_does_not_evaluate() {
    let mut graph = ObddGraph::new();
    let p = graph.add_decision_node();
    graph.connect(p, EdgeKind::One, p).unwrap();
    graph.set_root(p).unwrap();

    let assignment = HashMap::from([("p", true)]);
    assert_eq!(evaluate(&graph, &assignment), None);
    assert!(!graph.is_acyclic());
}
