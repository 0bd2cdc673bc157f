//! # Alert Modal
//!
//! Blocking notification for validation, duplicate-ID and not-found errors.
//! The coordinator disables the rest of the window while this is open; it
//! closes with the OK button, Enter or Escape.

use eframe::egui;
use log::info;

use crate::ui::app_state::EmployeeRosterApp;
use crate::ui::components::styling::colored_button;
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::events::RosterEvent;

impl EmployeeRosterApp {
    /// Render the alert window if one is open, recording dismissal into `events`
    pub fn render_alert_modal(&mut self, ctx: &egui::Context, events: &mut Vec<RosterEvent>) {
        let Some(alert) = self.modal.alert.clone() else {
            return;
        };

        // Skip keyboard handling on the frame the alert opened
        let accept_keys = !self.modal.alert_just_opened;
        self.modal.alert_just_opened = false;

        let mut should_dismiss = false;

        egui::Window::new(egui::RichText::new(&alert.title).strong())
            .id(egui::Id::new("roster_alert"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .min_width(320.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(&alert.message)
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .color(CURRENT_THEME.typography.primary));
                ui.add_space(12.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let ok = colored_button("OK", CURRENT_THEME.buttons.primary, CURRENT_THEME.buttons.light_text)
                        .min_size(egui::vec2(80.0, 30.0));
                    if ui.add(ok).clicked() {
                        should_dismiss = true;
                    }
                });
            });

        if accept_keys && ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
            should_dismiss = true;
        }

        if should_dismiss {
            info!("🔔 Alert dismissed");
            events.push(RosterEvent::AlertDismissed);
        }
    }
}
