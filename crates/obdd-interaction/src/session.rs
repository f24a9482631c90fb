//! Transient editing state: selection, mode and drag.

use obdd_core::{EdgeKind, NodeId, ObddGraph, Position};

use crate::effect::StatusMessage;

/// Interaction mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    /// An edge of `kind` from `source` waits for its target click.
    EdgePending { kind: EdgeKind, source: NodeId },
}

impl Mode {
    pub fn is_pending(&self) -> bool {
        matches!(self, Mode::EdgePending { .. })
    }

    /// Text for the mode indicator.
    pub fn describe(&self, graph: &ObddGraph) -> String {
        match self {
            Mode::Idle => "Mode: Idle".to_string(),
            Mode::EdgePending { kind, source } => {
                let label = graph.node(*source).map_or("?", |n| n.label());
                format!(
                    "Mode: Connect {} from {label} (click target, Esc to cancel)",
                    kind.symbol()
                )
            }
        }
    }
}

/// An in-progress node move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub node: NodeId,
    /// Pointer position minus node center when the drag began.
    pub offset_x: f32,
    pub offset_y: f32,
}

impl DragState {
    pub fn new(node: NodeId, pointer: Position, center: Position) -> Self {
        Self {
            node,
            offset_x: pointer.x - center.x,
            offset_y: pointer.y - center.y,
        }
    }

    /// Node center for the current pointer position.
    pub fn node_position(&self, pointer: Position) -> Position {
        pointer.offset(-self.offset_x, -self.offset_y)
    }
}

/// Everything about the editor that is not part of the document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Session {
    pub(crate) selected: Option<NodeId>,
    pub(crate) mode: Mode,
    pub(crate) drag: Option<DragState>,
    pub(crate) status: Option<StatusMessage>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Latest status line.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Source of the pending edge, if any.
    pub fn pending_source(&self) -> Option<NodeId> {
        match self.mode {
            Mode::EdgePending { source, .. } => Some(source),
            Mode::Idle => None,
        }
    }

    /// Drop selection, mode and drag; keep the status line.
    pub(crate) fn clear(&mut self) {
        self.selected = None;
        self.mode = Mode::Idle;
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_keeps_grab_offset() {
        let drag = DragState::new(NodeId(2), Position::new(410.0, 195.0), Position::new(400.0, 200.0));
        assert_eq!(drag.node_position(Position::new(110.0, 95.0)), Position::new(100.0, 100.0));
    }

    #[test]
    fn test_mode_description() {
        let mut graph = ObddGraph::new();
        let p = graph.add_decision_node();
        assert_eq!(Mode::Idle.describe(&graph), "Mode: Idle");
        let pending = Mode::EdgePending {
            kind: EdgeKind::One,
            source: p,
        };
        assert!(pending.describe(&graph).starts_with("Mode: Connect 1 from p"));
    }
}
