//! The interaction state machine.
//!
//! [`Editor`] owns the graph and the session. A front end feeds it
//! [`InputEvent`]s one at a time and applies the returned [`Effect`]s; the
//! editor never talks to a toolkit directly.

use obdd_core::{Document, EdgeKind, NodeId, ObddGraph, Position, DEFAULT_DECISION_POSITION};
use tracing::{debug, info, warn};

use crate::effect::{Cursor, Effect, FileRequest, StatusMessage};
use crate::error::{EditorError, EditorResult};
use crate::event::{Command, InputEvent};
use crate::geometry::{self, NEW_NODE_SPACING};
use crate::keymap;
use crate::session::{DragState, Mode, Session};

/// Graph plus interaction state.
#[derive(Debug, Default)]
pub struct Editor {
    graph: ObddGraph,
    session: Session,
    last_error: Option<EditorError>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing diagram.
    pub fn with_graph(graph: ObddGraph) -> Self {
        Self {
            graph,
            ..Self::default()
        }
    }

    pub fn graph(&self) -> &ObddGraph {
        &self.graph
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Error raised by the most recently handled event, if it was rejected.
    pub fn last_error(&self) -> Option<&EditorError> {
        self.last_error.as_ref()
    }

    /// Snapshot for export.
    pub fn export_document(&self) -> Document {
        self.graph.to_document()
    }

    /// Post a status line from outside the state machine (e.g. file I/O results).
    pub fn notify(&mut self, status: StatusMessage) -> Vec<Effect> {
        self.session.status = Some(status.clone());
        vec![Effect::Status(status)]
    }

    /// Handle a batch of events in order.
    pub fn handle_all<I>(&mut self, events: I) -> Vec<Effect>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        events
            .into_iter()
            .flat_map(|event| self.handle(event))
            .collect()
    }

    /// Process one event to completion.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Effect> {
        self.last_error = None;
        let mut effects = Vec::new();

        let outcome = match event {
            InputEvent::Click { position } => self.on_click(position, &mut effects),
            InputEvent::DragStart { position } => self.on_drag_start(position, &mut effects),
            InputEvent::DragMove { position } => self.on_drag_move(position, &mut effects),
            InputEvent::DragEnd => self.on_drag_end(&mut effects),
            InputEvent::Key(key) => match keymap::command_for_key(key) {
                Some(command) => self.execute(command, &mut effects),
                None => Ok(()),
            },
            InputEvent::Command(command) => self.execute(command, &mut effects),
        };

        if let Err(err) = outcome {
            warn!(error = %err, "command rejected");
            effects.push(Effect::Status(StatusMessage::warning(err.to_string())));
            self.last_error = Some(err);
        }

        if let Some(status) = effects.iter().rev().find_map(|effect| match effect {
            Effect::Status(status) => Some(status.clone()),
            _ => None,
        }) {
            self.session.status = Some(status);
        }
        effects
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    fn on_click(&mut self, position: Position, fx: &mut Vec<Effect>) -> EditorResult<()> {
        let hit = geometry::node_at(&self.graph, position);

        match (self.session.mode, hit) {
            (Mode::EdgePending { kind, source }, Some(target)) => {
                self.leave_pending(fx);
                self.complete_edge(source, kind, target, fx)
            }
            (_, Some(id)) => {
                self.select(id, fx);
                Ok(())
            }
            (_, None) => {
                let had_pending = self.leave_pending(fx);
                if self.session.selected.take().is_some() || had_pending {
                    debug!("selection cleared");
                    changed(fx, "selection cleared");
                }
                Ok(())
            }
        }
    }

    fn complete_edge(
        &mut self,
        source: NodeId,
        kind: EdgeKind,
        target: NodeId,
        fx: &mut Vec<Effect>,
    ) -> EditorResult<()> {
        let replaced = self.graph.connect(source, kind, target)?;
        self.session.selected = Some(target);

        let mut text = format!(
            "connected {} --{}--> {}",
            self.label(source),
            kind.symbol(),
            self.label(target)
        );
        if let Some(old) = replaced {
            text.push_str(&format!(" (replaced {})", self.label(old)));
        }
        changed(fx, text);
        Ok(())
    }

    fn on_drag_start(&mut self, position: Position, fx: &mut Vec<Effect>) -> EditorResult<()> {
        let Some(id) = geometry::node_at(&self.graph, position) else {
            return Ok(());
        };
        let center = self.graph.require(id)?.position;
        self.session.drag = Some(DragState::new(id, position, center));
        debug!(node = %id, "drag started");

        if self.session.selected != Some(id) {
            self.select(id, fx);
        } else {
            fx.push(Effect::Redraw);
        }
        Ok(())
    }

    fn on_drag_move(&mut self, position: Position, fx: &mut Vec<Effect>) -> EditorResult<()> {
        let Some(drag) = self.session.drag else {
            return Ok(());
        };
        if let Err(err) = self.graph.move_node(drag.node, drag.node_position(position)) {
            self.session.drag = None;
            return Err(err.into());
        }
        fx.push(Effect::Redraw);
        Ok(())
    }

    fn on_drag_end(&mut self, fx: &mut Vec<Effect>) -> EditorResult<()> {
        let Some(drag) = self.session.drag.take() else {
            return Ok(());
        };
        if let Some(node) = self.graph.node(drag.node) {
            let Position { x, y } = node.position;
            debug!(node = %drag.node, x, y, "drag finished");
            changed(fx, format!("moved {} to ({x:.0}, {y:.0})", node.label()));
        }
        Ok(())
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn execute(&mut self, command: Command, fx: &mut Vec<Effect>) -> EditorResult<()> {
        debug!(command = command.name(), mode = ?self.session.mode, "command");
        if !matches!(command, Command::Connect(_) | Command::Cancel) {
            self.leave_pending(fx);
        }

        match command {
            Command::AddNode => self.add_node(fx),
            Command::SetRoot => self.set_root(fx),
            Command::Connect(kind) => self.begin_edge(kind, fx),
            Command::DeleteEdges => self.delete_edges(fx),
            Command::DeleteNode => self.delete_node(fx),
            Command::Cancel => self.cancel(fx),
            Command::ClearAll => self.clear_all(fx),
            Command::Relabel(label) => self.relabel(&label, fx),
            Command::Import(document) => self.import(&document, fx),
            Command::RequestExport => {
                fx.push(Effect::File(FileRequest::Export));
                Ok(())
            }
            Command::RequestImport => {
                fx.push(Effect::File(FileRequest::Import));
                Ok(())
            }
        }
    }

    fn add_node(&mut self, fx: &mut Vec<Effect>) -> EditorResult<()> {
        let position = self
            .session
            .selected
            .and_then(|id| self.graph.node(id))
            .map_or(DEFAULT_DECISION_POSITION, |node| {
                node.position.offset(0.0, -NEW_NODE_SPACING)
            });

        let id = self.graph.add_decision_node_at(position);
        self.session.selected = Some(id);
        changed(fx, format!("added node {}", self.label(id)));
        Ok(())
    }

    fn set_root(&mut self, fx: &mut Vec<Effect>) -> EditorResult<()> {
        let id = self.require_selection("set root")?;
        self.graph.set_root(id)?;
        changed(fx, format!("root set to {}", self.label(id)));
        Ok(())
    }

    fn begin_edge(&mut self, kind: EdgeKind, fx: &mut Vec<Effect>) -> EditorResult<()> {
        let source = match self.edge_source() {
            Ok(source) => source,
            Err(err) => {
                self.leave_pending(fx);
                return Err(err);
            }
        };

        if !self.session.mode.is_pending() {
            fx.push(Effect::Cursor(Cursor::Crosshair));
        }
        self.session.mode = Mode::EdgePending { kind, source };
        debug!(%source, %kind, "edge pending");
        changed(
            fx,
            format!(
                "connect {} from {}: click the target node",
                kind.symbol(),
                self.label(source)
            ),
        );
        Ok(())
    }

    fn edge_source(&self) -> EditorResult<NodeId> {
        let id = self.require_selection("connect an edge")?;
        if self.graph.require(id)?.is_terminal() {
            return Err(obdd_core::GraphError::InvalidSource { id }.into());
        }
        Ok(id)
    }

    fn delete_edges(&mut self, fx: &mut Vec<Effect>) -> EditorResult<()> {
        let id = self.require_selection("delete edges")?;
        let removed = self.graph.disconnect_all(id)?;
        if removed == 0 {
            fx.push(Effect::Status(StatusMessage::info(format!(
                "{} has no outgoing edges",
                self.label(id)
            ))));
        } else {
            changed(
                fx,
                format!("removed {removed} edge(s) from {}", self.label(id)),
            );
        }
        Ok(())
    }

    fn delete_node(&mut self, fx: &mut Vec<Effect>) -> EditorResult<()> {
        let id = self.require_selection("delete node")?;
        let node = self.graph.remove_node(id)?;
        self.session.clear();
        changed(fx, format!("deleted node {}", node.label()));
        Ok(())
    }

    fn cancel(&mut self, fx: &mut Vec<Effect>) -> EditorResult<()> {
        if self.leave_pending(fx) {
            fx.push(Effect::Status(StatusMessage::info("edge cancelled")));
        }
        Ok(())
    }

    fn clear_all(&mut self, fx: &mut Vec<Effect>) -> EditorResult<()> {
        self.graph.reset();
        self.session.clear();
        info!("diagram cleared");
        changed(fx, "cleared diagram");
        Ok(())
    }

    fn relabel(&mut self, label: &str, fx: &mut Vec<Effect>) -> EditorResult<()> {
        let id = self.require_selection("relabel")?;
        let old = self.label(id);
        self.graph.relabel(id, label)?;
        changed(fx, format!("renamed {old} to {}", self.label(id)));
        Ok(())
    }

    fn import(&mut self, document: &Document, fx: &mut Vec<Effect>) -> EditorResult<()> {
        self.graph.load_document(document)?;
        self.session.clear();
        info!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "diagram imported"
        );
        changed(
            fx,
            format!(
                "imported {} nodes and {} edges",
                self.graph.node_count(),
                self.graph.edge_count()
            ),
        );
        Ok(())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn select(&mut self, id: NodeId, fx: &mut Vec<Effect>) {
        self.session.selected = Some(id);
        changed(fx, format!("node {} selected", self.label(id)));
    }

    /// Drop a pending edge. Returns whether one existed.
    fn leave_pending(&mut self, fx: &mut Vec<Effect>) -> bool {
        if !self.session.mode.is_pending() {
            return false;
        }
        self.session.mode = Mode::Idle;
        debug!("pending edge dropped");
        fx.push(Effect::Cursor(Cursor::Default));
        fx.push(Effect::Redraw);
        true
    }

    fn require_selection(&self, action: &'static str) -> EditorResult<NodeId> {
        self.session
            .selected
            .filter(|&id| self.graph.contains(id))
            .ok_or(EditorError::NoSelection { action })
    }

    fn label(&self, id: NodeId) -> String {
        self.graph
            .node(id)
            .map_or_else(|| id.to_string(), |node| node.label().to_string())
    }
}

fn changed(fx: &mut Vec<Effect>, text: impl Into<String>) {
    fx.push(Effect::Redraw);
    fx.push(Effect::Status(StatusMessage::info(text)));
}
