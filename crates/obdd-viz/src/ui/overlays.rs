//! Overlays drawn on top of the canvas: the mode indicator and the status strip.

use obdd_interaction::StatusMessage;

/// Draw the current mode in the top-left corner, highlighted while an edge is pending.
pub fn draw_mode_indicator(ui: &mut egui::Ui, mode: &str, pending: bool) {
    let rect = ui.max_rect();
    let indicator_pos = egui::pos2(rect.left() + 10.0, rect.top() + 10.0);

    let color = if pending {
        egui::Color32::from_rgb(255, 200, 0)
    } else {
        egui::Color32::from_rgb(100, 200, 255)
    };

    egui::Area::new(egui::Id::new("obdd_mode_indicator"))
        .order(egui::Order::Foreground)
        .fixed_pos(indicator_pos)
        .movable(false)
        .interactable(false)
        .show(ui.ctx(), |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180))
                .corner_radius(4.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(mode).color(color).strong());
                });
        });
}

/// Caption of the panel toggle for the current sidebar state.
pub fn sidebar_toggle_label(show_sidebar: bool) -> &'static str {
    if show_sidebar {
        "Hide panel (Tab)"
    } else {
        "Show panel (Tab)"
    }
}

/// Draw the bottom strip: the panel toggle, then the latest status line if any.
pub fn draw_status_bar(
    ui: &mut egui::Ui,
    status: Option<&StatusMessage>,
    show_sidebar: &mut bool,
) {
    let rect = ui.max_rect();
    let pos = egui::pos2(rect.left() + 10.0, rect.bottom() - 44.0);

    egui::Area::new(egui::Id::new("obdd_status_bar"))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .movable(false)
        .show(ui.ctx(), |ui| {
            ui.set_clip_rect(rect);
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 160))
                .corner_radius(4.0)
                .inner_margin(6.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        if ui.small_button(sidebar_toggle_label(*show_sidebar)).clicked() {
                            *show_sidebar = !*show_sidebar;
                        }
                        let Some(status) = status else {
                            return;
                        };
                        let (icon, color) = if status.is_warning() {
                            ("⚠", egui::Color32::from_rgb(255, 150, 80))
                        } else {
                            ("ℹ", egui::Color32::from_rgb(200, 200, 200))
                        };
                        ui.separator();
                        ui.label(egui::RichText::new(format!("{icon} {status}")).color(color));
                    });
                });
        });
}
