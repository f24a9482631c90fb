//! The drawing contract between the editor and a toolkit.
//!
//! A front end implements [`RenderAdapter`] once. [`render_scene`] walks the
//! graph and issues draw calls in back-to-front order; [`apply_effects`]
//! routes the editor's effects to the adapter and hands file requests back.

use obdd_core::{EdgeKind, Node, NodeId, ObddGraph, Position};

use crate::effect::{Cursor, Effect, FileRequest, StatusMessage};
use crate::geometry::{self, DECISION_RADIUS, TERMINAL_HALF_SIZE};
use crate::machine::Editor;
use crate::session::Session;

/// Outline of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeShape {
    Circle { radius: f32 },
    Square { half_size: f32 },
}

/// Stroke style of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    /// One-edge.
    Solid,
    /// Zero-edge.
    Dashed,
}

impl From<EdgeKind> for EdgeStyle {
    fn from(kind: EdgeKind) -> Self {
        match kind {
            EdgeKind::One => EdgeStyle::Solid,
            EdgeKind::Zero => EdgeStyle::Dashed,
        }
    }
}

/// Everything needed to draw one node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSprite<'a> {
    pub id: NodeId,
    pub label: &'a str,
    pub center: Position,
    pub shape: NodeShape,
    pub selected: bool,
    /// Source of the pending edge.
    pub pending_source: bool,
    pub root: bool,
}

impl<'a> NodeSprite<'a> {
    pub fn new(node: &'a Node, session: &Session, root: Option<NodeId>) -> Self {
        let shape = if node.is_terminal() {
            NodeShape::Square {
                half_size: TERMINAL_HALF_SIZE,
            }
        } else {
            NodeShape::Circle {
                radius: DECISION_RADIUS,
            }
        };

        Self {
            id: node.id(),
            label: node.label(),
            center: node.position,
            shape,
            selected: session.selected() == Some(node.id()),
            pending_source: session.pending_source() == Some(node.id()),
            root: root == Some(node.id()),
        }
    }
}

/// Abstract drawing surface.
pub trait RenderAdapter {
    /// Draw an edge with an arrowhead at `to`.
    fn draw_edge(&mut self, from: Position, to: Position, style: EdgeStyle);

    fn draw_node(&mut self, sprite: &NodeSprite<'_>);

    /// Mark the root; `anchor` sits just above the node.
    fn draw_root_indicator(&mut self, anchor: Position);

    fn set_cursor(&mut self, cursor: Cursor);

    fn show_status(&mut self, status: &StatusMessage);

    fn show_mode(&mut self, mode: &str);
}

/// Draw the whole scene: edges, then nodes, then the root marker.
pub fn render_scene<R>(graph: &ObddGraph, session: &Session, adapter: &mut R)
where
    R: RenderAdapter + ?Sized,
{
    for edge in graph.edges() {
        let (Some(from), Some(to)) = (graph.node(edge.source), graph.node(edge.target)) else {
            continue;
        };
        if let Some((start, end)) = geometry::edge_endpoints(from, to) {
            adapter.draw_edge(start, end, edge.kind.into());
        }
    }

    for node in graph.nodes() {
        adapter.draw_node(&NodeSprite::new(node, session, graph.root()));
    }

    if let Some(root) = graph.root().and_then(|id| graph.node(id)) {
        adapter.draw_root_indicator(geometry::root_anchor(root));
    }

    adapter.show_mode(&session.mode().describe(graph));
}

/// Route effects to the adapter. File requests are returned for the caller.
pub fn apply_effects<R>(effects: &[Effect], editor: &Editor, adapter: &mut R) -> Vec<FileRequest>
where
    R: RenderAdapter + ?Sized,
{
    let mut requests = Vec::new();
    let mut redraw = false;

    for effect in effects {
        match effect {
            Effect::Redraw => redraw = true,
            Effect::Status(status) => adapter.show_status(status),
            Effect::Cursor(cursor) => adapter.set_cursor(*cursor),
            Effect::File(request) => requests.push(*request),
        }
    }

    if redraw {
        render_scene(editor.graph(), editor.session(), adapter);
    }
    requests
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Command;

    #[derive(Default)]
    struct Counter {
        edges: Vec<EdgeStyle>,
        nodes: usize,
        roots: usize,
        modes: Vec<String>,
    }

    impl RenderAdapter for Counter {
        fn draw_edge(&mut self, _from: Position, _to: Position, style: EdgeStyle) {
            self.edges.push(style);
        }
        fn draw_node(&mut self, _sprite: &NodeSprite<'_>) {
            self.nodes += 1;
        }
        fn draw_root_indicator(&mut self, _anchor: Position) {
            self.roots += 1;
        }
        fn set_cursor(&mut self, _cursor: Cursor) {}
        fn show_status(&mut self, _status: &StatusMessage) {}
        fn show_mode(&mut self, mode: &str) {
            self.modes.push(mode.to_string());
        }
    }

    #[test]
    fn test_scene_draws_styles_by_kind() {
        let mut graph = ObddGraph::new();
        let p = graph.add_decision_node();
        graph.connect(p, EdgeKind::Zero, graph.terminal(false)).unwrap();
        graph.connect(p, EdgeKind::One, graph.terminal(true)).unwrap();
        graph.set_root(p).unwrap();

        let mut counter = Counter::default();
        render_scene(&graph, &Session::new(), &mut counter);
        assert_eq!(counter.edges, vec![EdgeStyle::Dashed, EdgeStyle::Solid]);
        assert_eq!(counter.nodes, 3);
        assert_eq!(counter.roots, 1);
        assert_eq!(counter.modes, vec!["Mode: Idle".to_string()]);
    }

    #[test]
    fn test_apply_effects_returns_file_requests() {
        let mut editor = Editor::new();
        let effects = editor.handle(Command::RequestExport.into());
        let mut counter = Counter::default();
        let requests = apply_effects(&effects, &editor, &mut counter);
        assert_eq!(requests, vec![FileRequest::Export]);
        assert_eq!(counter.nodes, 0);
    }

    #[test]
    fn test_sprite_flags() {
        let mut editor = Editor::new();
        editor.handle(Command::AddNode.into());
        editor.handle(Command::Connect(EdgeKind::One).into());
        let p = editor.session().selected().unwrap();

        let node = editor.graph().node(p).unwrap();
        let sprite = NodeSprite::new(node, editor.session(), None);
        assert!(sprite.selected);
        assert!(sprite.pending_source);
        assert!(!sprite.root);
        assert_eq!(sprite.shape, NodeShape::Circle { radius: DECISION_RADIUS });
    }
}
