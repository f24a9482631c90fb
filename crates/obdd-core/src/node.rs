//! Node, edge and position types stored in the diagram arena.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for nodes within an [`ObddGraph`](crate::ObddGraph).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(NodeId)
    }
}

/// Whether a node tests a variable or is a constant sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A node labeled with a variable, owning up to two outgoing edges.
    Decision,
    /// A sink labeled "0" or "1".
    Terminal,
}

impl NodeKind {
    /// Get a display label for the node kind.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Decision => "decision",
            NodeKind::Terminal => "terminal",
        }
    }
}

/// The two branches leaving a decision node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// The false branch, drawn dashed.
    Zero,
    /// The true branch, drawn solid.
    One,
}

impl EdgeKind {
    /// Both edge kinds, zero first.
    pub const ALL: [EdgeKind; 2] = [EdgeKind::Zero, EdgeKind::One];

    /// The branch taken for a variable value.
    pub fn for_value(value: bool) -> Self {
        if value {
            EdgeKind::One
        } else {
            EdgeKind::Zero
        }
    }

    /// Get the short symbol used in status lines ("0" or "1").
    pub fn symbol(&self) -> &'static str {
        match self {
            EdgeKind::Zero => "0",
            EdgeKind::One => "1",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Zero => write!(f, "zero"),
            EdgeKind::One => write!(f, "one"),
        }
    }
}

/// Canvas coordinate of a node center.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by a delta.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another position.
    pub fn distance(self, other: Position) -> f32 {
        let (dx, dy) = (other.x - self.x, other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Outgoing edge slots of a node; at most one target per kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outgoing {
    zero: Option<NodeId>,
    one: Option<NodeId>,
}

impl Outgoing {
    /// Target of the given branch, if connected.
    pub fn get(&self, kind: EdgeKind) -> Option<NodeId> {
        match kind {
            EdgeKind::Zero => self.zero,
            EdgeKind::One => self.one,
        }
    }

    /// Replace the target of a branch, returning the previous one.
    pub(crate) fn set(&mut self, kind: EdgeKind, target: NodeId) -> Option<NodeId> {
        let slot = match kind {
            EdgeKind::Zero => &mut self.zero,
            EdgeKind::One => &mut self.one,
        };
        slot.replace(target)
    }

    /// Clear both branches, returning how many were connected.
    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.len();
        self.zero = None;
        self.one = None;
        removed
    }

    /// Drop every branch that points at `target`.
    pub(crate) fn remove_target(&mut self, target: NodeId) {
        if self.zero == Some(target) {
            self.zero = None;
        }
        if self.one == Some(target) {
            self.one = None;
        }
    }

    /// Number of connected branches.
    pub fn len(&self) -> usize {
        usize::from(self.zero.is_some()) + usize::from(self.one.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Connected branches in zero-then-one order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeKind, NodeId)> + '_ {
        EdgeKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|target| (kind, target)))
    }
}

/// A single diagram node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    label: String,
    /// Center of the node on the canvas.
    pub position: Position,
    pub(crate) outgoing: Outgoing,
}

impl Node {
    pub(crate) fn decision(id: NodeId, label: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            kind: NodeKind::Decision,
            label: label.into(),
            position,
            outgoing: Outgoing::default(),
        }
    }

    pub(crate) fn terminal(id: NodeId, value: bool, position: Position) -> Self {
        Self {
            id,
            kind: NodeKind::Terminal,
            label: terminal_label(value).to_string(),
            position,
            outgoing: Outgoing::default(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == NodeKind::Terminal
    }

    /// Constant value of a terminal node, `None` for decision nodes.
    pub fn terminal_value(&self) -> Option<bool> {
        match (self.kind, self.label.as_str()) {
            (NodeKind::Terminal, "0") => Some(false),
            (NodeKind::Terminal, "1") => Some(true),
            _ => None,
        }
    }

    pub fn outgoing(&self) -> &Outgoing {
        &self.outgoing
    }
}

/// Derived edge triple reconstructed from a node's outgoing slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: NodeId,
    pub kind: EdgeKind,
    pub target: NodeId,
}

/// Label carried by the terminal for a constant value.
pub fn terminal_label(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outgoing_replaces_same_kind() {
        let mut out = Outgoing::default();
        assert_eq!(out.set(EdgeKind::One, NodeId(1)), None);
        assert_eq!(out.set(EdgeKind::One, NodeId(2)), Some(NodeId(1)));
        assert_eq!(out.get(EdgeKind::One), Some(NodeId(2)));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_outgoing_remove_target_clears_both_slots() {
        let mut out = Outgoing::default();
        out.set(EdgeKind::Zero, NodeId(4));
        out.set(EdgeKind::One, NodeId(4));
        out.remove_target(NodeId(4));
        assert!(out.is_empty());
    }

    #[test]
    fn test_node_id_parses_from_string() {
        assert_eq!("17".parse::<NodeId>().unwrap(), NodeId(17));
        assert!("p".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_terminal_value() {
        let zero = Node::terminal(NodeId(0), false, Position::default());
        let one = Node::terminal(NodeId(1), true, Position::default());
        let p = Node::decision(NodeId(2), "p", Position::default());
        assert_eq!(zero.terminal_value(), Some(false));
        assert_eq!(one.terminal_value(), Some(true));
        assert_eq!(p.terminal_value(), None);
    }
}
