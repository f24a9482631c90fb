//! Translate egui pointer and keyboard input into editor events.

use egui::{PointerButton, Pos2, Response};
use obdd_core::Position;
use obdd_interaction::{InputEvent, Key};

/// Canvas coordinates of a screen position.
pub fn canvas_position(screen: Pos2, origin: Pos2) -> Position {
    Position::new(screen.x - origin.x, screen.y - origin.y)
}

/// Pointer events from the canvas response, in the order they happened.
pub fn pointer_events(response: &Response, origin: Pos2) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let pointer = response.interact_pointer_pos();

    if response.drag_started_by(PointerButton::Primary) {
        if let Some(pos) = pointer {
            events.push(InputEvent::DragStart {
                position: canvas_position(pos, origin),
            });
        }
    } else if response.dragged_by(PointerButton::Primary) {
        if let Some(pos) = pointer {
            events.push(InputEvent::DragMove {
                position: canvas_position(pos, origin),
            });
        }
    }

    if response.drag_stopped_by(PointerButton::Primary) {
        events.push(InputEvent::DragEnd);
    }

    if response.clicked_by(PointerButton::Primary) {
        if let Some(pos) = pointer {
            events.push(InputEvent::Click {
                position: canvas_position(pos, origin),
            });
        }
    }

    events
}

/// egui keys the editor listens to.
const BOUND_KEYS: [egui::Key; 10] = [
    egui::Key::N,
    egui::Key::R,
    egui::Key::Num1,
    egui::Key::Num0,
    egui::Key::D,
    egui::Key::X,
    egui::Key::Delete,
    egui::Key::Escape,
    egui::Key::E,
    egui::Key::I,
];

/// Map an egui key to an editor key.
pub fn translate_key(key: egui::Key) -> Option<Key> {
    match key {
        egui::Key::Escape => Some(Key::Escape),
        egui::Key::Delete => Some(Key::Delete),
        egui::Key::Num0 => Some(Key::Char('0')),
        egui::Key::Num1 => Some(Key::Char('1')),
        other => {
            let name = other.name();
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Some(Key::Char(c.to_ascii_lowercase())),
                _ => None,
            }
        }
    }
}

/// Key presses for this frame. Nothing is reported while a text field has focus.
pub fn key_events(ctx: &egui::Context) -> Vec<InputEvent> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    ctx.input(|i| {
        BOUND_KEYS
            .iter()
            .filter(|key| i.key_pressed(**key))
            .filter_map(|key| translate_key(*key))
            .map(InputEvent::Key)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_bound_keys() {
        assert_eq!(translate_key(egui::Key::N), Some(Key::Char('n')));
        assert_eq!(translate_key(egui::Key::Num1), Some(Key::Char('1')));
        assert_eq!(translate_key(egui::Key::Escape), Some(Key::Escape));
        assert_eq!(translate_key(egui::Key::Delete), Some(Key::Delete));
        assert_eq!(translate_key(egui::Key::ArrowUp), None);
        for key in BOUND_KEYS {
            assert!(translate_key(key).is_some(), "{key:?} unmapped");
        }
    }

    #[test]
    fn test_canvas_position_is_origin_relative() {
        let position = canvas_position(egui::pos2(310.0, 120.0), egui::pos2(10.0, 20.0));
        assert_eq!(position, Position::new(300.0, 100.0));
    }
}
