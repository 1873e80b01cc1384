//! Top bar with the menu toggle, plus the main surface behind the panels.

use super::super::*;
use eframe::egui;

impl PanelKitApp {
    /// Renders the top bar with the menu toggle.
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context, now: Instant) {
        let mut toggle = false;
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let label = if self.panel.is_sidebar_open() {
                        "Close menu"
                    } else {
                        "Menu"
                    };
                    toggle = ui.button(label).clicked();
                    ui.separator();
                    ui.label(egui::RichText::new("PanelKit").strong());
                });
            });
        if toggle {
            self.toggle_menu(now);
        }
    }

    /// Renders the main surface with shortcuts to each panel operation.
    pub(crate) fn render_main_surface(&mut self, ctx: &egui::Context, now: Instant) {
        let mut chosen = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Panels");
            ui.label(
                egui::RichText::new(
                    "Open the menu, or trigger a modal directly. Modals wait for the menu to close.",
                )
                .color(COLOR_TEXT_SECONDARY),
            );
            ui.add_space(12.0);
            ui.horizontal_wrapped(|ui| {
                for (label, action) in MENU_ACTIONS {
                    if ui.button(label).clicked() {
                        chosen = Some(action);
                    }
                }
            });
        });
        if let Some(action) = chosen {
            self.run_menu_action(action, now);
        }
    }
}
