//! UI components drawn over the canvas.

mod overlays;

pub use overlays::{draw_mode_indicator, draw_status_bar};
