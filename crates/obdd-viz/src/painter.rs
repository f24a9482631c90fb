//! [`RenderAdapter`] on top of an egui [`Painter`].

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, StrokeKind, Vec2};
use obdd_core::Position;
use obdd_interaction::{Cursor, EdgeStyle, NodeShape, NodeSprite, RenderAdapter, StatusMessage};

const ARROW_LENGTH: f32 = 11.0;
const ARROW_WIDTH: f32 = 7.0;
const DASH_LENGTH: f32 = 6.0;
const DASH_GAP: f32 = 4.0;

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color32,
    pub decision_fill: Color32,
    pub terminal_fill: Color32,
    pub outline: Color32,
    pub selected: Color32,
    pub pending: Color32,
    pub edge: Color32,
    pub text: Color32,
    pub root: Color32,
}

impl Palette {
    pub fn new(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                background: Color32::from_rgb(24, 26, 30),
                decision_fill: Color32::from_rgb(52, 84, 122),
                terminal_fill: Color32::from_rgb(70, 70, 78),
                outline: Color32::from_rgb(200, 200, 210),
                selected: Color32::from_rgb(0, 255, 255),
                pending: Color32::from_rgb(255, 200, 0),
                edge: Color32::from_rgb(190, 190, 200),
                text: Color32::WHITE,
                root: Color32::from_rgb(100, 255, 100),
            }
        } else {
            Self {
                background: Color32::WHITE,
                decision_fill: Color32::from_rgb(173, 216, 230),
                terminal_fill: Color32::from_rgb(211, 211, 211),
                outline: Color32::BLACK,
                selected: Color32::from_rgb(0, 150, 200),
                pending: Color32::from_rgb(200, 150, 0),
                edge: Color32::from_rgb(40, 40, 40),
                text: Color32::BLACK,
                root: Color32::from_rgb(50, 160, 50),
            }
        }
    }
}

/// Paints the scene into the current frame and remembers cursor, status
/// and mode between frames.
///
/// Draw calls made while no frame is open are dropped, so effects can be
/// applied before the canvas is allocated.
pub struct EguiRenderer {
    painter: Option<Painter>,
    origin: Vec2,
    palette: Palette,
    cursor: Cursor,
    status: Option<StatusMessage>,
    mode: String,
}

impl EguiRenderer {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            painter: None,
            origin: Vec2::ZERO,
            palette: Palette::new(dark_mode),
            cursor: Cursor::Default,
            status: None,
            mode: "Mode: Idle".to_string(),
        }
    }

    /// Start drawing into `painter`, with canvas (0, 0) at `origin`.
    pub fn begin_frame(&mut self, painter: Painter, origin: Pos2) {
        painter.rect_filled(painter.clip_rect(), 0.0, self.palette.background);
        self.origin = origin.to_vec2();
        self.painter = Some(painter);
    }

    pub fn end_frame(&mut self) {
        self.painter = None;
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.palette = Palette::new(dark_mode);
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    fn to_screen(&self, position: Position) -> Pos2 {
        egui::pos2(position.x, position.y) + self.origin
    }

    fn arrowhead(painter: &Painter, from: Pos2, tip: Pos2, color: Color32) {
        let direction = (tip - from).normalized();
        if !direction.is_finite() {
            return;
        }
        let base = tip - direction * ARROW_LENGTH;
        let side = direction.rot90() * (ARROW_WIDTH / 2.0);
        painter.add(Shape::convex_polygon(
            vec![tip, base + side, base - side],
            color,
            Stroke::NONE,
        ));
    }
}

impl RenderAdapter for EguiRenderer {
    fn draw_edge(&mut self, from: Position, to: Position, style: EdgeStyle) {
        let Some(painter) = &self.painter else {
            return;
        };
        let (a, b) = (self.to_screen(from), self.to_screen(to));
        let stroke = Stroke::new(1.5, self.palette.edge);

        // Stop the shaft at the arrow base so the tip stays sharp.
        let shaft_end = b - (b - a).normalized() * ARROW_LENGTH;
        match style {
            EdgeStyle::Solid => {
                painter.line_segment([a, shaft_end], stroke);
            }
            EdgeStyle::Dashed => {
                painter.extend(Shape::dashed_line(&[a, shaft_end], stroke, DASH_LENGTH, DASH_GAP));
            }
        }
        Self::arrowhead(painter, a, b, self.palette.edge);
    }

    fn draw_node(&mut self, sprite: &NodeSprite<'_>) {
        let Some(painter) = &self.painter else {
            return;
        };
        let center = self.to_screen(sprite.center);
        let palette = self.palette;

        let stroke = if sprite.pending_source {
            Stroke::new(3.0, palette.pending)
        } else if sprite.selected {
            Stroke::new(3.0, palette.selected)
        } else {
            Stroke::new(1.5, palette.outline)
        };

        match sprite.shape {
            NodeShape::Circle { radius } => {
                painter.circle(center, radius, palette.decision_fill, stroke);
            }
            NodeShape::Square { half_size } => {
                let rect = Rect::from_center_size(center, Vec2::splat(half_size * 2.0));
                painter.rect(rect, 0.0, palette.terminal_fill, stroke, StrokeKind::Middle);
            }
        }

        painter.text(
            center,
            Align2::CENTER_CENTER,
            sprite.label,
            FontId::proportional(16.0),
            palette.text,
        );
    }

    fn draw_root_indicator(&mut self, anchor: Position) {
        let Some(painter) = &self.painter else {
            return;
        };
        let tip = self.to_screen(anchor);
        let color = self.palette.root;
        painter.add(Shape::convex_polygon(
            vec![tip, tip + egui::vec2(-6.0, -9.0), tip + egui::vec2(6.0, -9.0)],
            color,
            Stroke::NONE,
        ));
        painter.text(
            tip + egui::vec2(0.0, -11.0),
            Align2::CENTER_BOTTOM,
            "root",
            FontId::proportional(12.0),
            color,
        );
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    fn show_status(&mut self, status: &StatusMessage) {
        self.status = Some(status.clone());
    }

    fn show_mode(&mut self, mode: &str) {
        if self.mode != mode {
            self.mode = mode.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obdd_interaction::{apply_effects, Command, Editor};

    #[test]
    fn test_effects_without_frame_are_recorded() {
        let mut editor = Editor::new();
        let mut renderer = EguiRenderer::new(true);

        let effects = editor.handle(Command::AddNode.into());
        apply_effects(&effects, &editor, &mut renderer);
        assert_eq!(renderer.status().unwrap().text, "added node p");
        assert_eq!(renderer.mode(), "Mode: Idle");

        let effects = editor.handle(Command::Connect(obdd_core::EdgeKind::One).into());
        apply_effects(&effects, &editor, &mut renderer);
        assert_eq!(renderer.cursor(), Cursor::Crosshair);
        assert!(renderer.mode().starts_with("Mode: Connect 1"));
    }

    #[test]
    fn test_palettes_differ_by_theme() {
        assert_ne!(Palette::new(true).background, Palette::new(false).background);
    }
}
