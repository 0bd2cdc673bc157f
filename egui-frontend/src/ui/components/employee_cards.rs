//! # Employee Cards
//!
//! One card per employee in roster order, each with Edit and Delete actions.
//! Deleting never touches the form, even when the deleted employee is the
//! one being edited.

use eframe::egui;
use log::{info, warn};
use shared::Employee;

use crate::backend::domain::commands::employee::{DeleteEmployeeCommand, GetEmployeeCommand};
use crate::ui::app_state::EmployeeRosterApp;
use crate::ui::components::styling::{card_frame, colored_button};
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::events::RosterEvent;
use crate::ui::mappers::to_dto;
use crate::ui::state::Alert;

impl EmployeeRosterApp {
    /// Render the list of employee cards, recording actions into `events`
    pub fn render_employee_cards(&self, ui: &mut egui::Ui, events: &mut Vec<RosterEvent>) {
        if self.employees().is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(egui::RichText::new("No employees yet. Add one with the form above.")
                    .color(colors::TEXT_SECONDARY));
            });
            return;
        }

        for employee in self.employees() {
            self.render_employee_card(ui, employee, events);
            ui.add_space(12.0);
        }
    }

    fn render_employee_card(&self, ui: &mut egui::Ui, employee: &Employee, events: &mut Vec<RosterEvent>) {
        let is_selected = self.form.editing_id() == Some(employee.id.as_str());

        let mut frame = card_frame();
        if is_selected {
            frame = frame.stroke(egui::Stroke::new(2.0, colors::PRIMARY));
        }

        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&employee.name)
                    .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_PRIMARY));

                ui.label(format!("ID: {}", employee.id));
                ui.label(format!("Designation: {}", employee.designation));
                ui.label(format!("Salary: {}", self.config.format_salary(employee.salary)));

                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    let edit = colored_button("Edit", colors::WARNING, CURRENT_THEME.buttons.dark_text);
                    if ui.add(edit).clicked() {
                        events.push(RosterEvent::EditRequested(employee.id.clone()));
                    }

                    let delete = colored_button("Delete", colors::DANGER, CURRENT_THEME.buttons.light_text);
                    if ui.add(delete).clicked() {
                        events.push(RosterEvent::DeleteRequested(employee.id.clone()));
                    }
                });
            });
        });
    }

    /// Load an employee into the form for editing
    pub fn request_edit(&mut self, employee_id: &str) {
        let command = GetEmployeeCommand {
            employee_id: employee_id.to_string(),
        };

        match self.backend().roster_service.get_employee(command) {
            Ok(result) => match result.employee {
                Some(employee) => {
                    info!("✏️ Editing employee {}", employee.id);
                    self.form.load_employee(&to_dto(employee));
                }
                None => {
                    warn!("✏️ Cannot edit missing employee {}", employee_id);
                    self.refresh_employees();
                }
            },
            Err(e) => self.modal.show_alert(Alert::from(&e)),
        }
    }

    /// Remove an employee. Unknown IDs are ignored.
    pub fn request_delete(&mut self, employee_id: &str) {
        let command = DeleteEmployeeCommand {
            employee_id: employee_id.to_string(),
        };

        match self.backend().roster_service.delete_employee(command) {
            Ok(result) => {
                info!("🗑️ {}", result.success_message);
                if result.deleted {
                    self.refresh_employees();
                }
            }
            Err(e) => self.modal.show_alert(Alert::from(&e)),
        }
    }
}
