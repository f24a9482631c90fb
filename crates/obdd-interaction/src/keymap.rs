//! Keyboard shortcuts.

use obdd_core::EdgeKind;

use crate::event::{Command, Key};

/// A documented shortcut, for help panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub keys: &'static str,
    pub description: &'static str,
}

pub const SHORTCUTS: &[Shortcut] = &[
    Shortcut { keys: "N", description: "Add decision node" },
    Shortcut { keys: "R", description: "Set selected node as root" },
    Shortcut { keys: "1", description: "Connect 1-edge from selected node" },
    Shortcut { keys: "0", description: "Connect 0-edge from selected node" },
    Shortcut { keys: "D", description: "Delete outgoing edges of selected node" },
    Shortcut { keys: "Del / X", description: "Delete selected node" },
    Shortcut { keys: "Esc", description: "Cancel pending edge" },
    Shortcut { keys: "E", description: "Export diagram" },
    Shortcut { keys: "I", description: "Import diagram" },
];

/// Resolve a key press. Letters are case-insensitive.
pub fn command_for_key(key: Key) -> Option<Command> {
    match key {
        Key::Escape => Some(Command::Cancel),
        Key::Delete => Some(Command::DeleteNode),
        Key::Char(c) => match c.to_ascii_lowercase() {
            'n' => Some(Command::AddNode),
            'r' => Some(Command::SetRoot),
            '1' => Some(Command::Connect(EdgeKind::One)),
            '0' => Some(Command::Connect(EdgeKind::Zero)),
            'd' => Some(Command::DeleteEdges),
            'x' => Some(Command::DeleteNode),
            'e' => Some(Command::RequestExport),
            'i' => Some(Command::RequestImport),
            _ => None,
        },
    }
}
