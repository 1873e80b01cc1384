//! Centered modal dialog: flattened HTML body plus optional footer buttons.

use super::super::markup::{fragment_lines, LineKind};
use super::super::*;
use eframe::egui;

impl PanelKitApp {
    /// Renders the modal while it is fading in, shown, or fading out.
    pub(crate) fn render_modal(&mut self, ctx: &egui::Context, now: Instant) {
        let opacity = self.panel.modal_opacity_at(now);
        if opacity <= 0.0 {
            return;
        }
        let lines = fragment_lines(self.panel.modal_body());
        let buttons: Vec<(String, bool)> = if self.panel.footer_visible() {
            self.panel
                .modal_buttons()
                .iter()
                .map(|button| {
                    (
                        button.label.clone(),
                        button.style_class.as_deref() == Some("primary"),
                    )
                })
                .collect()
        } else {
            Vec::new()
        };

        let mut clicked = None;
        let mut close = false;
        egui::Area::new(egui::Id::new(self.panel.layout().modal_id.as_str()))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.multiply_opacity(opacity);
                egui::Frame::popup(ui.style())
                    .fill(COLOR_BG_SECONDARY)
                    .stroke(egui::Stroke::new(1.0, COLOR_BORDER))
                    .inner_margin(egui::Margin::same(16))
                    .show(ui, |ui| {
                        ui.set_width(MODAL_WIDTH);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            close = ui.small_button("x").clicked();
                        });
                        for line in &lines {
                            match line.kind {
                                LineKind::Heading => {
                                    ui.heading(&line.text);
                                }
                                LineKind::Bullet => {
                                    ui.label(format!("- {}", line.text));
                                }
                                LineKind::Text => {
                                    ui.label(&line.text);
                                }
                            }
                        }
                        if buttons.is_empty() {
                            return;
                        }
                        ui.add_space(8.0);
                        ui.separator();
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            // Right-to-left: iterate reversed to keep declaration order.
                            for (index, (label, primary)) in buttons.iter().enumerate().rev() {
                                let text = if *primary {
                                    egui::RichText::new(label).strong().color(COLOR_ACCENT)
                                } else {
                                    egui::RichText::new(label)
                                };
                                if ui.button(text).clicked() {
                                    clicked = Some(index);
                                }
                            }
                        });
                    });
            });

        if close {
            self.panel.close_modal(now);
        } else if let Some(index) = clicked {
            self.click_modal_button(index, now);
        }
    }
}
