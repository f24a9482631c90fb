//! Interaction layer for the OBDD editor.
//!
//! Toolkit-free: a front end reports [`InputEvent`]s, the [`Editor`] state
//! machine mutates the graph and answers with [`Effect`]s, and the front end
//! draws through its [`RenderAdapter`] implementation.

mod effect;
mod error;
mod event;
pub mod geometry;
mod keymap;
mod machine;
mod render;
mod session;

pub use effect::{Cursor, Effect, FileRequest, StatusKind, StatusMessage};
pub use error::{EditorError, EditorResult};
pub use event::{Command, InputEvent, Key};
pub use keymap::{command_for_key, Shortcut, SHORTCUTS};
pub use machine::Editor;
pub use render::{apply_effects, render_scene, EdgeStyle, NodeShape, NodeSprite, RenderAdapter};
pub use session::{DragState, Mode, Session};
