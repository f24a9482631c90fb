//! Main application state and the per-frame update loop.

use std::collections::VecDeque;
use std::path::PathBuf;

use eframe::{App, CreationContext};
use egui::{CollapsingHeader, Context, RichText, ScrollArea, Sense};
use obdd_core::{load_json, save_json, EdgeKind, NodeId, ObddGraph};
use obdd_interaction::{
    apply_effects, render_scene, Command, Cursor, Editor, FileRequest, InputEvent, StatusMessage,
    SHORTCUTS,
};
use tracing::{info, warn};

use crate::input::{key_events, pointer_events};
use crate::painter::EguiRenderer;
use crate::settings::{VizSettings, SIDEBAR_WIDTH};
use crate::ui::{draw_mode_indicator, draw_status_bar};

/// The desktop OBDD editor.
pub struct ObddEditorApp {
    editor: Editor,
    renderer: EguiRenderer,
    settings: VizSettings,
    /// Contents of the document path field.
    path_buffer: String,
    /// Contents of the relabel field, tracking `relabel_target`.
    relabel_buffer: String,
    relabel_target: Option<NodeId>,
    show_sidebar: bool,
    /// Events waiting for the state machine, in arrival order.
    queue: VecDeque<InputEvent>,
}

impl ObddEditorApp {
    /// Create an editor with an empty diagram.
    pub fn new(cc: &CreationContext<'_>, settings: VizSettings) -> Self {
        Self::with_graph(cc, ObddGraph::new(), settings)
    }

    /// Create an editor for an existing diagram.
    pub fn with_graph(cc: &CreationContext<'_>, graph: ObddGraph, settings: VizSettings) -> Self {
        cc.egui_ctx.set_visuals(settings.visuals());
        Self::from_parts(Editor::with_graph(graph), settings)
    }

    fn from_parts(editor: Editor, settings: VizSettings) -> Self {
        Self {
            editor,
            renderer: EguiRenderer::new(settings.dark_mode),
            path_buffer: settings.document_path.display().to_string(),
            settings,
            relabel_buffer: String::new(),
            relabel_target: None,
            show_sidebar: true,
            queue: VecDeque::new(),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn settings(&self) -> &VizSettings {
        &self.settings
    }

    /// Queue an event; it is handled on the next dispatch.
    pub fn push_event(&mut self, event: impl Into<InputEvent>) {
        self.queue.push_back(event.into());
    }

    /// Run queued events through the editor and apply their effects.
    fn dispatch(&mut self) {
        while let Some(event) = self.queue.pop_front() {
            let effects = self.editor.handle(event);
            for request in apply_effects(&effects, &self.editor, &mut self.renderer) {
                self.handle_file_request(request);
            }
        }
        self.sync_relabel_buffer();
    }

    fn handle_file_request(&mut self, request: FileRequest) {
        let path = self.settings.document_path.clone();
        match request {
            FileRequest::Export => match save_json(&path, &self.editor.export_document()) {
                Ok(()) => {
                    info!(path = %path.display(), "exported diagram");
                    self.notify(StatusMessage::info(format!("exported to {}", path.display())));
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "export failed");
                    self.notify(StatusMessage::warning(format!("export failed: {err}")));
                }
            },
            FileRequest::Import => match load_json(&path) {
                Ok(document) => self.queue.push_back(Command::Import(document).into()),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "import failed");
                    self.notify(StatusMessage::warning(format!("import failed: {err}")));
                }
            },
        }
    }

    fn notify(&mut self, status: StatusMessage) {
        let effects = self.editor.notify(status);
        apply_effects(&effects, &self.editor, &mut self.renderer);
    }

    fn sync_relabel_buffer(&mut self) {
        let selected = self.editor.session().selected();
        if selected != self.relabel_target {
            self.relabel_target = selected;
            self.relabel_buffer = selected
                .and_then(|id| self.editor.graph().node(id))
                .map(|node| node.label().to_string())
                .unwrap_or_default();
        }
    }

    fn set_document_path(&mut self, path: PathBuf) {
        self.settings.document_path = path;
    }
}

// =============================================================================
// Sidebar Panel UI
// =============================================================================

impl ObddEditorApp {
    fn ui_commands(&mut self, ui: &mut egui::Ui) {
        CollapsingHeader::new("Commands")
            .default_open(true)
            .show(ui, |ui| {
                let buttons = [
                    ("➕ Add node (N)", Command::AddNode),
                    ("⭐ Set root (R)", Command::SetRoot),
                    ("━ Connect 1 (1)", Command::Connect(EdgeKind::One)),
                    ("┅ Connect 0 (0)", Command::Connect(EdgeKind::Zero)),
                    ("✂ Delete edges (D)", Command::DeleteEdges),
                    ("🗑 Delete node (Del)", Command::DeleteNode),
                    ("✖ Cancel (Esc)", Command::Cancel),
                ];
                for (text, command) in buttons {
                    if ui.button(text).clicked() {
                        self.push_event(command);
                    }
                }

                ui.separator();
                let clear = egui::Button::new(
                    RichText::new("Clear all").color(egui::Color32::from_rgb(255, 120, 120)),
                );
                if ui
                    .add(clear)
                    .on_hover_text("Remove every decision node and edge")
                    .clicked()
                {
                    self.push_event(Command::ClearAll);
                }
            });
    }

    fn ui_selected(&mut self, ui: &mut egui::Ui) {
        CollapsingHeader::new("Selected")
            .default_open(true)
            .show(ui, |ui| {
                let graph = self.editor.graph();
                let Some(node) = self.editor.session().selected().and_then(|id| graph.node(id))
                else {
                    ui.label(
                        RichText::new("Click a node to select it")
                            .small()
                            .color(egui::Color32::GRAY),
                    );
                    return;
                };

                ui.label(format!("{} node {}", node.kind().label(), node.label()));
                for (kind, target) in node.outgoing().iter() {
                    let target_label = graph.node(target).map_or("?", |n| n.label());
                    ui.label(format!("  {} → {target_label}", kind.symbol()));
                }
                if node.is_terminal() {
                    return;
                }

                let mut rename = false;
                ui.horizontal(|ui| {
                    let field = ui.text_edit_singleline(&mut self.relabel_buffer);
                    if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        rename = true;
                    }
                    if ui.button("Rename").clicked() {
                        rename = true;
                    }
                });
                if rename {
                    let label = self.relabel_buffer.clone();
                    self.push_event(Command::Relabel(label));
                }
            });
    }

    fn ui_document(&mut self, ui: &mut egui::Ui) {
        CollapsingHeader::new("Document")
            .default_open(true)
            .show(ui, |ui| {
                ui.label("File:");
                if ui.text_edit_singleline(&mut self.path_buffer).changed() {
                    let path = PathBuf::from(self.path_buffer.trim());
                    self.set_document_path(path);
                }
                ui.horizontal(|ui| {
                    if ui.button("💾 Export (E)").clicked() {
                        self.push_event(Command::RequestExport);
                    }
                    if ui.button("📂 Import (I)").clicked() {
                        self.push_event(Command::RequestImport);
                    }
                });
            });
    }

    fn ui_info(&self, ui: &mut egui::Ui) {
        CollapsingHeader::new("Graph Info")
            .default_open(true)
            .show(ui, |ui| {
                let graph = self.editor.graph();
                ui.label(format!("Nodes: {}", graph.node_count()));
                ui.label(format!("Edges: {}", graph.edge_count()));
                let root = graph
                    .root()
                    .and_then(|id| graph.node(id))
                    .map_or("none", |n| n.label());
                ui.label(format!("Root: {root}"));

                ui.separator();
                let report = graph.analyze();
                let (text, color) = if report.is_well_formed(graph) {
                    ("✓ Well formed", egui::Color32::from_rgb(100, 200, 100))
                } else {
                    ("● Incomplete", egui::Color32::from_rgb(255, 200, 50))
                };
                ui.label(RichText::new(text).color(color));
                if !report.acyclic {
                    ui.label(RichText::new("Contains a cycle").small());
                }
                if !report.incomplete.is_empty() {
                    ui.label(
                        RichText::new(format!("{} node(s) missing an edge", report.incomplete.len()))
                            .small(),
                    );
                }
                if !report.unreachable.is_empty() {
                    ui.label(
                        RichText::new(format!(
                            "{} node(s) unreachable from root",
                            report.unreachable.len()
                        ))
                        .small(),
                    );
                }
            });
    }

    fn ui_style(&mut self, ui: &mut egui::Ui) {
        CollapsingHeader::new("Style").show(ui, |ui| {
            let mut dark = self.settings.dark_mode;
            if ui.checkbox(&mut dark, "dark mode").changed() {
                self.settings.dark_mode = dark;
                ui.ctx().set_visuals(self.settings.visuals());
                self.renderer.set_dark_mode(dark);
            }
        });
    }

    fn ui_shortcuts(ui: &mut egui::Ui) {
        CollapsingHeader::new("Shortcuts").show(ui, |ui| {
            egui::Grid::new("obdd_shortcuts").striped(true).show(ui, |ui| {
                for shortcut in SHORTCUTS {
                    ui.label(RichText::new(shortcut.keys).monospace());
                    ui.label(shortcut.description);
                    ui.end_row();
                }
            });
        });
    }
}

// =============================================================================
// Main Update Loop
// =============================================================================

impl App for ObddEditorApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        self.queue.extend(key_events(ctx));
        if !ctx.wants_keyboard_input() && ctx.input(|i| i.key_pressed(egui::Key::Tab)) {
            self.show_sidebar = !self.show_sidebar;
        }
        self.dispatch();

        if self.show_sidebar {
            egui::SidePanel::right("obdd_sidebar")
                .default_width(SIDEBAR_WIDTH)
                .show(ctx, |ui| {
                    ScrollArea::vertical().show(ui, |ui| {
                        ui.heading("OBDD Editor");
                        ui.separator();

                        self.ui_commands(ui);
                        ui.separator();

                        self.ui_selected(ui);
                        ui.separator();

                        self.ui_document(ui);
                        ui.separator();

                        self.ui_info(ui);
                        ui.separator();

                        self.ui_style(ui);
                        ui.separator();

                        Self::ui_shortcuts(ui);
                    });
                });
            self.dispatch();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
                let origin = response.rect.min;

                self.queue.extend(pointer_events(&response, origin));
                self.dispatch();

                self.renderer.begin_frame(painter, origin);
                render_scene(self.editor.graph(), self.editor.session(), &mut self.renderer);
                self.renderer.end_frame();

                if self.editor.session().drag().is_some() {
                    ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
                } else if self.renderer.cursor() == Cursor::Crosshair && response.hovered() {
                    ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
                }

                draw_mode_indicator(
                    ui,
                    self.renderer.mode(),
                    self.editor.session().mode().is_pending(),
                );
                draw_status_bar(ui, self.renderer.status(), &mut self.show_sidebar);
            });
    }
}

/// Open the editor in a native window and block until it closes.
#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
pub fn launch(graph: ObddGraph, settings: VizSettings, title: &str) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size())
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        "OBDD Editor",
        options,
        Box::new(move |cc| Ok(Box::new(ObddEditorApp::with_graph(cc, graph, settings)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app_with_path(path: PathBuf) -> ObddEditorApp {
        let settings = VizSettings {
            document_path: path,
            ..VizSettings::default()
        };
        ObddEditorApp::from_parts(Editor::new(), settings)
    }

    #[test]
    fn test_export_then_import_through_file_requests() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("diagram.json");
        let mut app = app_with_path(path.clone());

        app.push_event(Command::AddNode);
        app.push_event(Command::SetRoot);
        app.push_event(Command::RequestExport);
        app.dispatch();
        assert!(path.exists());
        assert!(app.renderer.status().unwrap().text.starts_with("exported to"));

        app.push_event(Command::ClearAll);
        app.push_event(Command::RequestImport);
        app.dispatch();
        assert_eq!(app.editor().graph().decision_count(), 1);
        assert!(app.editor().graph().root().is_some());
    }

    #[test]
    fn test_import_missing_file_reports_warning() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_with_path(temp_dir.path().join("absent.json"));

        app.push_event(Command::AddNode);
        app.push_event(Command::RequestImport);
        app.dispatch();

        let status = app.renderer.status().unwrap();
        assert!(status.is_warning());
        assert!(status.text.starts_with("import failed"));
        assert_eq!(app.editor().graph().decision_count(), 1);
    }

    #[test]
    fn test_relabel_buffer_follows_selection() {
        let mut app = app_with_path(PathBuf::from("unused.json"));
        app.push_event(Command::AddNode);
        app.dispatch();
        assert_eq!(app.relabel_buffer, "p");

        app.push_event(Command::AddNode);
        app.dispatch();
        assert_eq!(app.relabel_buffer, "q");
    }
}
