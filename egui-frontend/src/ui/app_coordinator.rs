//! # App Coordinator Module
//!
//! This module contains the main application coordination logic, handling the primary
//! update loop.
//!
//! ## Application Flow:
//! 1. Render header, form and cards (disabled while an alert is open)
//! 2. Dim the window and render the alert, if any
//! 3. Apply the events recorded during rendering, in order
//!
//! Rendering only reads state; every change goes through `handle_event`.

use eframe::egui;

use crate::ui::app_state::EmployeeRosterApp;
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::events::RosterEvent;

impl eframe::App for EmployeeRosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events: Vec<RosterEvent> = Vec::new();
        let blocked = self.modal.is_blocking();

        egui::CentralPanel::default().show(ctx, |ui| {
            let full_rect = ui.max_rect();

            ui.add_enabled_ui(!blocked, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_main_content(ui, &mut events);
                    });
            });

            if blocked {
                ui.painter().rect_filled(full_rect, egui::Rounding::ZERO, CURRENT_THEME.layout.modal_backdrop);
            }
        });

        self.render_alert_modal(ctx, &mut events);

        if !events.is_empty() {
            self.handle_events(events);
            ctx.request_repaint();
        }
    }
}

impl EmployeeRosterApp {
    /// Header, form and cards in a centered column
    fn render_main_content(&self, ui: &mut egui::Ui, events: &mut Vec<RosterEvent>) {
        let column_width = ui.available_width().min(640.0);

        ui.vertical_centered(|ui| {
            ui.set_max_width(column_width);
            self.render_header(ui);

            ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                self.render_employee_form(ui, events);
                ui.add_space(20.0);
                self.render_employee_cards(ui, events);
                ui.add_space(20.0);
            });
        });
    }
}
