//! Full-window dimming layer shared by the sidebar and the modal.

use super::super::*;
use eframe::egui;

impl PanelKitApp {
    /// Paints the overlay at its current fade opacity.
    ///
    /// The overlay swallows pointer input so the main surface stays inert
    /// while a panel is up.
    pub(crate) fn render_overlay(&mut self, ctx: &egui::Context, now: Instant) {
        let opacity = self.panel.overlay_opacity_at(now);
        if opacity <= 0.0 {
            return;
        }
        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new(self.panel.layout().overlay_id.as_str()))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
                ui.painter().rect_filled(rect, 0.0, overlay_color(opacity));
            });
    }
}
