//! # Styling Module
//!
//! Global egui style plus the frames and buttons the form and cards share.
//!
//! ## Key Functions:
//! - `setup_roster_style()` - Configure global egui styling
//! - `form_frame()` - Bordered light panel around the form
//! - `card_frame()` - White card with a soft shadow, one per employee
//! - `colored_button()` - Filled action button

use eframe::egui;

use crate::ui::components::theme::CURRENT_THEME;

/// Setup UI styling for the entire application
pub fn setup_roster_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = CURRENT_THEME.layout.window_background;
        style.visuals.button_frame = true;

        // Text edits use extreme_bg_color for their background
        style.visuals.extreme_bg_color = egui::Color32::WHITE;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// Frame for the add/update form
pub fn form_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(CURRENT_THEME.layout.form_background)
        .stroke(egui::Stroke::new(1.0, CURRENT_THEME.layout.card_border))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(24.0))
        .shadow(egui::Shadow {
            offset: egui::vec2(0.0, 2.0),
            blur: 6.0,
            spread: 0.0,
            color: CURRENT_THEME.layout.card_shadow,
        })
}

/// Frame for a single employee card
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(CURRENT_THEME.layout.card_background)
        .stroke(egui::Stroke::new(1.0, CURRENT_THEME.layout.card_border))
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(16.0))
        .shadow(egui::Shadow {
            offset: egui::vec2(0.0, 1.0),
            blur: 4.0,
            spread: 0.0,
            color: CURRENT_THEME.layout.card_shadow,
        })
}

/// Filled button with the given background and text colors
pub fn colored_button(text: &str, fill: egui::Color32, text_color: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string())
        .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
        .color(text_color))
        .fill(fill)
        .rounding(egui::Rounding::same(6.0))
}
