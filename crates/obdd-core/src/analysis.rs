//! Read-only structural checks over a diagram.
//!
//! The editor never enforces these properties; they are reported so a user
//! can see whether the drawing is a well-formed OBDD.

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;

use crate::graph::ObddGraph;
use crate::node::{EdgeKind, NodeId};

/// Summary of structural properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureReport {
    /// No directed cycle exists.
    pub acyclic: bool,
    /// Decision nodes reachable from the root (root included).
    pub reachable: BTreeSet<NodeId>,
    /// Decision nodes not reachable from the root. Empty when no root is set.
    pub unreachable: Vec<NodeId>,
    /// Decision nodes with at least one branch unconnected.
    pub incomplete: Vec<NodeId>,
}

impl StructureReport {
    /// True when the diagram can be followed from the root to a terminal for every input.
    pub fn is_well_formed(&self, graph: &ObddGraph) -> bool {
        graph.root().is_some() && self.acyclic && self.incomplete.is_empty()
    }
}

impl ObddGraph {
    /// Convert to a petgraph `DiGraph` for analysis.
    /// Returns the graph and a mapping from NodeId to NodeIndex.
    pub fn to_petgraph(&self) -> (DiGraph<NodeId, EdgeKind>, HashMap<NodeId, NodeIndex>) {
        let mut graph = DiGraph::new();
        let mut id_to_index = HashMap::new();

        for node in self.nodes() {
            let idx = graph.add_node(node.id());
            id_to_index.insert(node.id(), idx);
        }

        for edge in self.edges() {
            if let (Some(&from_idx), Some(&to_idx)) =
                (id_to_index.get(&edge.source), id_to_index.get(&edge.target))
            {
                graph.add_edge(from_idx, to_idx, edge.kind);
            }
        }

        (graph, id_to_index)
    }

    /// Whether the diagram contains no directed cycle.
    pub fn is_acyclic(&self) -> bool {
        let (graph, _) = self.to_petgraph();
        !petgraph::algo::is_cyclic_directed(&graph)
    }

    /// Every node reachable from the root, terminals included.
    pub fn reachable_from_root(&self) -> BTreeSet<NodeId> {
        let Some(root) = self.root() else {
            return BTreeSet::new();
        };
        let (graph, id_to_index) = self.to_petgraph();
        let Some(&start) = id_to_index.get(&root) else {
            return BTreeSet::new();
        };

        let mut reached = BTreeSet::new();
        let mut dfs = Dfs::new(&graph, start);
        while let Some(idx) = dfs.next(&graph) {
            reached.insert(graph[idx]);
        }
        reached
    }

    /// Decision nodes with a missing branch.
    pub fn incomplete_nodes(&self) -> Vec<NodeId> {
        self.nodes()
            .filter(|n| !n.is_terminal() && n.outgoing().len() < 2)
            .map(|n| n.id())
            .collect()
    }

    /// Decision nodes the root cannot reach. Empty when no root is set.
    pub fn unreachable_nodes(&self) -> Vec<NodeId> {
        if self.root().is_none() {
            return Vec::new();
        }
        let reached = self.reachable_from_root();
        self.nodes()
            .filter(|n| !n.is_terminal() && !reached.contains(&n.id()))
            .map(|n| n.id())
            .collect()
    }

    /// Run every structural check.
    pub fn analyze(&self) -> StructureReport {
        let reachable = self
            .reachable_from_root()
            .into_iter()
            .filter(|&id| !self.is_terminal(id))
            .collect();

        StructureReport {
            acyclic: self.is_acyclic(),
            reachable,
            unreachable: self.unreachable_nodes(),
            incomplete: self.incomplete_nodes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_diagram_is_well_formed() {
        let mut graph = ObddGraph::new();
        let p = graph.add_decision_node();
        graph.connect(p, EdgeKind::Zero, graph.terminal(false)).unwrap();
        graph.connect(p, EdgeKind::One, graph.terminal(true)).unwrap();
        graph.set_root(p).unwrap();

        let report = graph.analyze();
        assert!(report.acyclic);
        assert!(report.incomplete.is_empty());
        assert!(report.unreachable.is_empty());
        assert!(report.is_well_formed(&graph));
    }

    #[test]
    fn test_cycle_is_reported_not_rejected() {
        let mut graph = ObddGraph::new();
        let p = graph.add_decision_node();
        let q = graph.add_decision_node();
        graph.connect(p, EdgeKind::One, q).unwrap();
        graph.connect(q, EdgeKind::One, p).unwrap();
        assert!(!graph.is_acyclic());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_unreachable_and_incomplete() {
        let mut graph = ObddGraph::new();
        let p = graph.add_decision_node();
        let q = graph.add_decision_node();
        graph.connect(p, EdgeKind::One, graph.terminal(true)).unwrap();
        graph.set_root(p).unwrap();

        let report = graph.analyze();
        assert_eq!(report.unreachable, vec![q]);
        assert_eq!(report.incomplete, vec![p, q]);
        assert!(!report.is_well_formed(&graph));
    }

    #[test]
    fn test_no_root_reaches_nothing() {
        let mut graph = ObddGraph::new();
        graph.add_decision_node();
        assert!(graph.reachable_from_root().is_empty());
        assert!(graph.analyze().unreachable.is_empty());
    }
}
