//! Settings for the desktop editor window.

use std::path::PathBuf;

/// Width reserved for the right-hand control panel.
pub const SIDEBAR_WIDTH: f32 = 280.0;

/// Window and document preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct VizSettings {
    pub dark_mode: bool,
    /// Initial canvas size in points.
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// File used by export (E) and import (I).
    pub document_path: PathBuf,
}

impl Default for VizSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            canvas_width: 800.0,
            canvas_height: 600.0,
            document_path: PathBuf::from("obdd.json"),
        }
    }
}

impl VizSettings {
    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width, self.canvas_height)
    }

    /// Inner window size that fits the canvas next to the sidebar.
    pub fn window_size(&self) -> [f32; 2] {
        [
            self.canvas_width + SIDEBAR_WIDTH + 24.0,
            self.canvas_height + 16.0,
        ]
    }

    pub fn visuals(&self) -> egui::Visuals {
        if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_matches_terminal_layout() {
        let settings = VizSettings::default();
        assert_eq!(settings.canvas_size(), egui::vec2(800.0, 600.0));
        assert!(settings.window_size()[0] > settings.canvas_width);
    }
}
