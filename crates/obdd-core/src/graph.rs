//! The diagram arena and every mutation the editor performs on it.
//!
//! All writes go through [`ObddGraph`] so the per-kind edge slot and the
//! single-root rule are enforced in one place. Nodes are keyed by
//! [`NodeId`] in an ordered map, which keeps iteration (and therefore
//! rendering and export) deterministic.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::labels::LabelAllocator;
use crate::node::{Edge, EdgeKind, Node, NodeId, NodeKind, Position};

/// Where a new decision node lands when nothing is selected.
pub const DEFAULT_DECISION_POSITION: Position = Position::new(400.0, 200.0);

/// Initial position of the "0" terminal.
pub const TERMINAL_ZERO_POSITION: Position = Position::new(160.0, 498.0);

/// Initial position of the "1" terminal.
pub const TERMINAL_ONE_POSITION: Position = Position::new(640.0, 498.0);

/// Imported ids must stay below this so new nodes always get a fresh id.
const MAX_IMPORTED_ID: u64 = u64::MAX / 2;

/// An editable ordered binary decision diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct ObddGraph {
    nodes: BTreeMap<NodeId, Node>,
    root: Option<NodeId>,
    /// Terminal ids, indexed by constant value (`[zero, one]`).
    terminals: [NodeId; 2],
    next_id: u64,
    labels: LabelAllocator,
}

impl Default for ObddGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ObddGraph {
    /// Create a graph holding only the two terminal nodes.
    pub fn new() -> Self {
        let zero = Node::terminal(NodeId(0), false, TERMINAL_ZERO_POSITION);
        let one = Node::terminal(NodeId(1), true, TERMINAL_ONE_POSITION);
        let terminals = [zero.id(), one.id()];

        let mut nodes = BTreeMap::new();
        nodes.insert(zero.id(), zero);
        nodes.insert(one.id(), one);

        Self {
            nodes,
            root: None,
            terminals,
            next_id: 2,
            labels: LabelAllocator::new(),
        }
    }

    /// Assemble a graph from validated parts (used by document import).
    ///
    /// Fails when the highest id leaves no room for new nodes.
    pub(crate) fn from_parts(
        nodes: BTreeMap<NodeId, Node>,
        root: Option<NodeId>,
        terminals: [NodeId; 2],
    ) -> GraphResult<Self> {
        let next_id = match nodes.keys().next_back() {
            Some(id) if id.0 < MAX_IMPORTED_ID => id.0 + 1,
            Some(id) => {
                return Err(GraphError::malformed(format!(
                    "node id {id} leaves no room for new nodes (node id space exhausted)"
                )))
            }
            None => 0,
        };
        let decisions = nodes.values().filter(|n| !n.is_terminal()).count();
        let mut labels = LabelAllocator::new();
        labels.set_position(decisions);

        Ok(Self {
            nodes,
            root,
            terminals,
            next_id,
            labels,
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Look up a node, failing with `NotFound`.
    pub fn require(&self, id: NodeId) -> GraphResult<&Node> {
        self.nodes.get(&id).ok_or(GraphError::NotFound { id })
    }

    fn require_mut(&mut self, id: NodeId) -> GraphResult<&mut Node> {
        self.nodes.get_mut(&id).ok_or(GraphError::NotFound { id })
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All edges, source-ordered, zero before one.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.values().flat_map(|node| {
            node.outgoing().iter().map(move |(kind, target)| Edge {
                source: node.id(),
                kind,
                target,
            })
        })
    }

    /// Target of one branch of a node.
    pub fn target(&self, id: NodeId, kind: EdgeKind) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.outgoing().get(kind))
    }

    /// The designated root, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Id of the terminal for a constant value.
    pub fn terminal(&self, value: bool) -> NodeId {
        self.terminals[usize::from(value)]
    }

    pub fn is_terminal(&self, id: NodeId) -> bool {
        self.terminals.contains(&id)
    }

    /// First decision node carrying a label.
    pub fn find_by_label(&self, label: &str) -> Option<NodeId> {
        self.nodes
            .values()
            .find(|n| n.kind() == NodeKind::Decision && n.label() == label)
            .map(Node::id)
    }

    /// Returns the number of nodes, terminals included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of derived edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.outgoing().len()).sum()
    }

    /// Returns the number of decision nodes.
    pub fn decision_count(&self) -> usize {
        self.nodes.len() - self.terminals.len()
    }

    /// The label the next `add_decision_node` call will use.
    pub fn next_label(&self) -> String {
        self.labels.peek(|label| self.label_in_use(label))
    }

    fn label_in_use(&self, label: &str) -> bool {
        self.nodes
            .values()
            .any(|n| n.kind() == NodeKind::Decision && n.label() == label)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a decision node at the default position.
    pub fn add_decision_node(&mut self) -> NodeId {
        self.add_decision_node_at(DEFAULT_DECISION_POSITION)
    }

    /// Add a decision node with the next free label at `position`.
    pub fn add_decision_node_at(&mut self, position: Position) -> NodeId {
        let nodes = &self.nodes;
        let label = self.labels.allocate(|label| {
            nodes
                .values()
                .any(|n| n.kind() == NodeKind::Decision && n.label() == label)
        });

        let id = NodeId(self.next_id);
        self.next_id += 1;

        debug!(%id, %label, "added decision node");
        self.nodes.insert(id, Node::decision(id, label, position));
        id
    }

    /// Reposition a node. Overlaps are allowed.
    pub fn move_node(&mut self, id: NodeId, position: Position) -> GraphResult<()> {
        self.require_mut(id)?.position = position;
        Ok(())
    }

    /// Set the `kind` branch of `source` to `target`, returning the replaced target.
    pub fn connect(
        &mut self,
        source: NodeId,
        kind: EdgeKind,
        target: NodeId,
    ) -> GraphResult<Option<NodeId>> {
        self.require(target)?;
        let node = self.require_mut(source)?;
        if node.is_terminal() {
            return Err(GraphError::InvalidSource { id: source });
        }

        let previous = node.outgoing.set(kind, target);
        debug!(%source, %kind, %target, ?previous, "connected");
        Ok(previous.filter(|&old| old != target))
    }

    /// Remove both outgoing edges of a node, returning how many existed.
    pub fn disconnect_all(&mut self, source: NodeId) -> GraphResult<usize> {
        let removed = self.require_mut(source)?.outgoing.clear();
        debug!(%source, removed, "disconnected outgoing edges");
        Ok(removed)
    }

    /// Designate the root, returning the previous one.
    pub fn set_root(&mut self, id: NodeId) -> GraphResult<Option<NodeId>> {
        self.require(id)?;
        debug!(%id, "set root");
        Ok(self.root.replace(id))
    }

    /// Remove a decision node together with every edge pointing at it.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Node> {
        if self.require(id)?.is_terminal() {
            return Err(GraphError::TerminalNode { id });
        }

        let node = self.nodes.remove(&id).ok_or(GraphError::NotFound { id })?;
        for other in self.nodes.values_mut() {
            other.outgoing.remove_target(id);
        }
        if self.root == Some(id) {
            self.root = None;
        }

        debug!(%id, label = node.label(), "removed decision node");
        Ok(node)
    }

    /// Rename a decision node. Duplicate labels are allowed.
    pub fn relabel(&mut self, id: NodeId, label: &str) -> GraphResult<()> {
        let label = label.trim();
        let node = self.require_mut(id)?;
        if node.is_terminal() {
            return Err(GraphError::TerminalNode { id });
        }
        if label.is_empty() {
            return Err(GraphError::EmptyLabel);
        }
        node.set_label(label.to_string());
        Ok(())
    }

    /// Drop every node, edge and the root; recreate fresh terminals.
    pub fn reset(&mut self) {
        debug!(nodes = self.nodes.len(), "reset graph");
        *self = Self::new();
    }

    /// Replace this graph wholesale.
    pub(crate) fn replace_with(&mut self, other: ObddGraph) {
        *self = other;
    }
}
