//! Sliding menu sidebar anchored to the left edge.

use super::super::*;
use eframe::egui;

impl PanelKitApp {
    /// Renders the sidebar at its current slide offset.
    pub(crate) fn render_sidebar(&mut self, ctx: &egui::Context, now: Instant) {
        let width = self.panel.timings().sidebar_width;
        let offset = self.panel.sidebar_offset_at(now);
        if offset <= -width {
            return;
        }
        let screen = ctx.screen_rect();
        let mut chosen = None;
        let mut close = false;
        egui::Area::new(egui::Id::new(self.panel.layout().sidebar_id.as_str()))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(screen.min.x + offset, screen.min.y))
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(COLOR_BG_SECONDARY)
                    .stroke(egui::Stroke::new(1.0, COLOR_BORDER))
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_width(width - 24.0);
                        ui.set_min_height(screen.height() - 24.0);
                        ui.horizontal(|ui| {
                            ui.heading("Menu");
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    close = ui.small_button("x").clicked();
                                },
                            );
                        });
                        ui.separator();
                        for (label, action) in MENU_ACTIONS {
                            let button = egui::Button::new(label)
                                .min_size(egui::vec2(width - 24.0, 0.0));
                            if ui.add(button).clicked() {
                                chosen = Some(action);
                            }
                        }
                    });
            });
        if close {
            self.panel.close_sidebar(now);
        }
        if let Some(action) = chosen {
            self.run_menu_action(action, now);
        }
    }
}
