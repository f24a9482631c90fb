//! Raw input reported by a front end, and the commands it maps to.

use obdd_core::{Document, EdgeKind, Position};

/// One input event, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Press and release without movement.
    Click { position: Position },
    /// Pointer pressed and started moving.
    DragStart { position: Position },
    /// Pointer moved while pressed.
    DragMove { position: Position },
    /// Pointer released after a drag.
    DragEnd,
    /// A key press, resolved through the key map.
    Key(Key),
    /// A command issued directly, e.g. from a button.
    Command(Command),
}

impl InputEvent {
    pub fn click(x: f32, y: f32) -> Self {
        InputEvent::Click {
            position: Position::new(x, y),
        }
    }

    pub fn drag_start(x: f32, y: f32) -> Self {
        InputEvent::DragStart {
            position: Position::new(x, y),
        }
    }

    pub fn drag_move(x: f32, y: f32) -> Self {
        InputEvent::DragMove {
            position: Position::new(x, y),
        }
    }
}

impl From<Command> for InputEvent {
    fn from(command: Command) -> Self {
        InputEvent::Command(command)
    }
}

impl From<Key> for InputEvent {
    fn from(key: Key) -> Self {
        InputEvent::Key(key)
    }
}

/// Keys the editor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
    Delete,
}

/// Editor commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddNode,
    SetRoot,
    /// Arm the edge gesture from the selected node.
    Connect(EdgeKind),
    /// Remove both outgoing edges of the selected node.
    DeleteEdges,
    DeleteNode,
    /// Abandon a pending edge.
    Cancel,
    ClearAll,
    Relabel(String),
    /// Replace the whole diagram.
    Import(Document),
    RequestExport,
    RequestImport,
}

impl Command {
    /// Short human name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddNode => "add node",
            Command::SetRoot => "set root",
            Command::Connect(EdgeKind::One) => "connect 1",
            Command::Connect(EdgeKind::Zero) => "connect 0",
            Command::DeleteEdges => "delete edges",
            Command::DeleteNode => "delete node",
            Command::Cancel => "cancel",
            Command::ClearAll => "clear all",
            Command::Relabel(_) => "relabel",
            Command::Import(_) => "import",
            Command::RequestExport => "export",
            Command::RequestImport => "import file",
        }
    }
}
