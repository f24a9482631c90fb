//! Effects the editor asks its front end to perform.

use std::fmt;

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

/// Human-readable feedback for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.kind == StatusKind::Warning
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Pointer cursor shape.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    /// Shown while an edge waits for its target.
    Crosshair,
}

/// File operations the front end owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRequest {
    Export,
    Import,
}

/// Output of one handled event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The scene changed and must be drawn again.
    Redraw,
    Status(StatusMessage),
    Cursor(Cursor),
    File(FileRequest),
}
