//! Bottom status bar rendering for feedback and server metadata.

use super::super::*;
use eframe::egui;

impl PanelKitApp {
    /// Renders the bottom status bar with feedback text and the page URL.
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(text) = self.status_text() {
                        ui.label(egui::RichText::new(text).color(egui::Color32::YELLOW));
                        ui.separator();
                    }
                    if self.panel.remote_in_flight().is_some() {
                        ui.spinner();
                        ui.separator();
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some(server) = &self.server_label {
                            ui.label(
                                egui::RichText::new(format!("Server: {}", server))
                                    .small()
                                    .color(COLOR_TEXT_SECONDARY),
                            );
                        }
                        ui.label(
                            egui::RichText::new(&self.page_url)
                                .small()
                                .monospace()
                                .color(COLOR_TEXT_MUTED),
                        );
                    });
                });
            });
    }
}
