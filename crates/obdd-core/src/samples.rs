//! Ready-made diagrams for demos and documentation.

use std::fmt;
use std::str::FromStr;

use crate::error::GraphResult;
use crate::graph::ObddGraph;
use crate::node::{EdgeKind, Position};

/// Built-in sample diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// `f(p, q) = p AND q`
    And,
    /// `f(p, q) = p XOR q`
    Xor,
}

impl Sample {
    pub const ALL: [Sample; 2] = [Sample::And, Sample::Xor];

    pub fn name(&self) -> &'static str {
        match self {
            Sample::And => "and",
            Sample::Xor => "xor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Sample::And => "f(p, q) = p AND q",
            Sample::Xor => "f(p, q) = p XOR q",
        }
    }

    /// Build the diagram through the public graph operations.
    pub fn build(&self) -> GraphResult<ObddGraph> {
        match self {
            Sample::And => and_diagram(),
            Sample::Xor => xor_diagram(),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sample {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sample::ALL
            .into_iter()
            .find(|sample| sample.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sample {s:?} (expected one of: and, xor)"))
    }
}

fn and_diagram() -> GraphResult<ObddGraph> {
    let mut graph = ObddGraph::new();
    let zero = graph.terminal(false);
    let one = graph.terminal(true);

    let p = graph.add_decision_node_at(Position::new(320.0, 100.0));
    let q = graph.add_decision_node_at(Position::new(480.0, 280.0));

    graph.set_root(p)?;
    graph.connect(p, EdgeKind::Zero, zero)?;
    graph.connect(p, EdgeKind::One, q)?;
    graph.connect(q, EdgeKind::Zero, zero)?;
    graph.connect(q, EdgeKind::One, one)?;
    Ok(graph)
}

fn xor_diagram() -> GraphResult<ObddGraph> {
    let mut graph = ObddGraph::new();
    let zero = graph.terminal(false);
    let one = graph.terminal(true);

    let p = graph.add_decision_node_at(Position::new(400.0, 100.0));
    let q_low = graph.add_decision_node_at(Position::new(250.0, 280.0));
    let q_high = graph.add_decision_node_at(Position::new(550.0, 280.0));
    graph.relabel(q_low, "q")?;
    graph.relabel(q_high, "q")?;

    graph.set_root(p)?;
    graph.connect(p, EdgeKind::Zero, q_low)?;
    graph.connect(p, EdgeKind::One, q_high)?;
    graph.connect(q_low, EdgeKind::Zero, zero)?;
    graph.connect(q_low, EdgeKind::One, one)?;
    graph.connect(q_high, EdgeKind::Zero, one)?;
    graph.connect(q_high, EdgeKind::One, zero)?;
    Ok(graph)
}
