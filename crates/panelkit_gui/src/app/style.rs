//! Theme constants and one-time style application for the egui app.

use super::PanelKitApp;
use eframe::egui::{
    self, style::WidgetVisuals, Color32, CornerRadius, FontFamily, FontId, Margin, Stroke,
    TextStyle, Visuals,
};

pub(super) const COLOR_BG_PRIMARY: Color32 = Color32::from_rgb(0x0d, 0x11, 0x17);
pub(super) const COLOR_BG_SECONDARY: Color32 = Color32::from_rgb(0x16, 0x1b, 0x22);
pub(super) const COLOR_BG_TERTIARY: Color32 = Color32::from_rgb(0x21, 0x26, 0x29);
pub(super) const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(0xc9, 0xd1, 0xd9);
pub(super) const COLOR_TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8b, 0x94, 0x9e);
pub(super) const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x6e, 0x76, 0x81);
pub(super) const COLOR_ACCENT: Color32 = Color32::from_rgb(0xE5, 0x70, 0x00);
pub(super) const COLOR_ACCENT_HOVER: Color32 = Color32::from_rgb(0xCE, 0x42, 0x2B);
pub(super) const COLOR_BORDER: Color32 = Color32::from_rgb(0x30, 0x36, 0x3d);
/// Overlay tint at full opacity; scaled by the fade progress.
pub(super) const OVERLAY_MAX_ALPHA: f32 = 0.55;
pub(super) const MODAL_WIDTH: f32 = 420.0;

/// Scale a color's alpha by `opacity` in `0.0..=1.0`.
pub(super) fn faded(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

pub(super) fn overlay_color(opacity: f32) -> Color32 {
    faded(Color32::BLACK, opacity.clamp(0.0, 1.0) * OVERLAY_MAX_ALPHA)
}

fn widget_visuals(fill: Color32, stroke: Color32, text: Color32, expansion: f32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: Stroke::new(1.0, stroke),
        corner_radius: CornerRadius::same(6),
        fg_stroke: Stroke::new(1.0, text),
        expansion,
    }
}

impl PanelKitApp {
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = Visuals::dark();
        style.visuals.override_text_color = Some(COLOR_TEXT_PRIMARY);
        style.visuals.window_fill = COLOR_BG_PRIMARY;
        style.visuals.panel_fill = COLOR_BG_PRIMARY;
        style.visuals.extreme_bg_color = COLOR_BG_PRIMARY;
        style.visuals.faint_bg_color = COLOR_BG_TERTIARY;
        style.visuals.window_stroke = Stroke::new(1.0, COLOR_BORDER);
        style.visuals.hyperlink_color = COLOR_ACCENT;

        style.visuals.widgets.noninteractive = widget_visuals(
            COLOR_BG_SECONDARY,
            COLOR_BORDER,
            COLOR_TEXT_SECONDARY,
            0.0,
        );
        style.visuals.widgets.inactive =
            widget_visuals(COLOR_BG_TERTIARY, COLOR_BORDER, COLOR_TEXT_PRIMARY, 0.0);
        style.visuals.widgets.hovered = widget_visuals(
            COLOR_ACCENT_HOVER,
            COLOR_ACCENT_HOVER,
            Color32::WHITE,
            0.5,
        );
        style.visuals.widgets.active =
            widget_visuals(COLOR_ACCENT, COLOR_ACCENT, Color32::WHITE, 0.5);

        style.spacing.window_margin = Margin::same(12);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.item_spacing = egui::vec2(12.0, 8.0);
        style.spacing.interact_size.y = 34.0;

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(22.0, FontFamily::Proportional),
        );
        style
            .text_styles
            .insert(TextStyle::Body, FontId::new(16.0, FontFamily::Proportional));
        style.text_styles.insert(
            TextStyle::Button,
            FontId::new(15.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
        self.style_applied = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_color_scales_with_opacity() {
        assert_eq!(overlay_color(0.0).a(), 0);
        let half = overlay_color(0.5).a();
        let full = overlay_color(1.0).a();
        assert!(half > 0 && half < full, "half={} full={}", half, full);
        assert_eq!(overlay_color(2.0), overlay_color(1.0));
    }
}
