//! Errors surfaced by editor commands.

use obdd_core::GraphError;
use thiserror::Error;

/// Result type alias for editor commands.
pub type EditorResult<T> = Result<T, EditorError>;

/// A rejected command. Every variant is recoverable; the editor reports it
/// as a warning and keeps running.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The command needs a selected node.
    #[error("no node selected: cannot {action}")]
    NoSelection { action: &'static str },

    /// The graph refused the mutation.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
