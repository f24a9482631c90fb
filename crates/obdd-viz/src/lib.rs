//! egui desktop front end for the OBDD editor.
//!
//! The canvas is painted through [`EguiRenderer`], which implements the
//! toolkit-free [`obdd_interaction::RenderAdapter`]. Pointer and keyboard
//! input are translated into [`obdd_interaction::InputEvent`]s and handed to
//! the editor state machine.
//!
//! Build with the `native` feature to get [`launch`].

mod app;
mod input;
mod painter;
mod settings;
mod ui;

pub use app::ObddEditorApp;
#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
pub use app::launch;
pub use input::{canvas_position, translate_key};
pub use painter::{EguiRenderer, Palette};
pub use settings::{VizSettings, SIDEBAR_WIDTH};
