//! Error types for graph mutation and document exchange.

use thiserror::Error;

use crate::node::NodeId;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while mutating or loading a diagram.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A node referenced by ID is not part of the graph.
    #[error("node not found: {id}")]
    NotFound { id: NodeId },

    /// An edge was attempted from a terminal node.
    #[error("terminal node {id} cannot have outgoing edges")]
    InvalidSource { id: NodeId },

    /// A decision-only operation was applied to a terminal node.
    #[error("terminal node {id} cannot be changed or removed")]
    TerminalNode { id: NodeId },

    /// A decision node label was blank.
    #[error("decision node label must not be empty")]
    EmptyLabel,

    /// An imported document failed to parse or violated a structural rule.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// I/O error while reading or writing a document file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Create a malformed-document error from any displayable reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument(reason.into())
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::MalformedDocument(err.to_string())
    }
}
