//! # Employee Form
//!
//! Renders the add/update form and handles its submission.
//!
//! ## Responsibilities:
//! - Name, ID, salary and designation inputs
//! - Lock the ID input while an employee is being edited
//! - Submit label follows the form mode
//! - Add in compose mode, update in edit mode, alert on any failure

use eframe::egui;
use log::{info, warn};
use shared::Designation;

use crate::backend::domain::commands::employee::{CreateEmployeeCommand, UpdateEmployeeCommand};
use crate::backend::domain::RosterError;
use crate::ui::app_state::EmployeeRosterApp;
use crate::ui::components::styling::{colored_button, form_frame};
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::events::RosterEvent;
use crate::ui::state::{Alert, FormField, FormMode};

const FIELD_WIDTH: f32 = 360.0;

/// Label and placeholder for a text input
fn field_text(field: FormField) -> (&'static str, &'static str) {
    match field {
        FormField::Name => ("Name", "Enter employee name"),
        FormField::Id => ("ID", "Enter employee ID"),
        FormField::Salary => ("Salary", "Enter employee salary"),
        FormField::Designation => ("Designation", ""),
    }
}

impl EmployeeRosterApp {
    /// Render the form, recording user actions into `events`
    pub fn render_employee_form(&self, ui: &mut egui::Ui, events: &mut Vec<RosterEvent>) {
        form_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical(|ui| {
                self.render_text_field(ui, events, FormField::Name, &self.form.name, true);
                self.render_text_field(ui, events, FormField::Id, &self.form.id, self.form.id_editable());
                self.render_text_field(ui, events, FormField::Salary, &self.form.salary, true);
                self.render_designation_select(ui, events);

                ui.add_space(10.0);

                let button = colored_button(
                    self.form.submit_label(),
                    CURRENT_THEME.buttons.primary,
                    CURRENT_THEME.buttons.light_text,
                ).min_size(egui::vec2(150.0, 34.0));

                if ui.add(button).clicked() {
                    events.push(RosterEvent::SubmitRequested);
                }
            });
        });
    }

    fn render_text_field(
        &self,
        ui: &mut egui::Ui,
        events: &mut Vec<RosterEvent>,
        field: FormField,
        value: &str,
        enabled: bool,
    ) {
        let (label, placeholder) = field_text(field);
        ui.label(egui::RichText::new(label)
            .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
            .strong()
            .color(CURRENT_THEME.typography.label));

        let mut text = value.to_string();
        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(&mut text)
                .hint_text(placeholder)
                .desired_width(FIELD_WIDTH),
        );

        if response.changed() {
            events.push(RosterEvent::FieldChanged(field, text));
        }

        // Enter in any input submits, like a browser form
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            events.push(RosterEvent::SubmitRequested);
        }

        ui.add_space(8.0);
    }

    fn render_designation_select(&self, ui: &mut egui::Ui, events: &mut Vec<RosterEvent>) {
        ui.label(egui::RichText::new("Designation")
            .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
            .strong()
            .color(CURRENT_THEME.typography.label));

        let mut selected = self.form.designation;
        egui::ComboBox::from_id_source("employee_designation")
            .selected_text(selected.label())
            .width(FIELD_WIDTH)
            .show_ui(ui, |ui| {
                for designation in Designation::ALL {
                    ui.selectable_value(&mut selected, designation, designation.label());
                }
            });

        if selected != self.form.designation {
            events.push(RosterEvent::FieldChanged(FormField::Designation, selected.label().to_string()));
        }
    }

    /// Validate the draft and add or update depending on the form mode
    pub fn submit_form(&mut self) {
        info!("📝 Submitting employee form in {:?} mode", self.form.mode);

        if let Err(e) = self.form.validate() {
            warn!("📝 Employee form validation failed: {}", e);
            self.modal.show_alert(Alert::from(&e));
            return;
        }

        match self.form.mode.clone() {
            FormMode::Edit { employee_id } => self.submit_update(employee_id),
            FormMode::Compose => self.submit_create(),
        }
    }

    fn submit_create(&mut self) {
        let command = CreateEmployeeCommand {
            id: self.form.id.clone(),
            name: self.form.name.clone(),
            salary: self.form.salary.clone(),
            designation: Some(self.form.designation),
        };

        match self.backend().roster_service.create_employee(command) {
            Ok(result) => {
                info!("✅ Employee added: {} ({})", result.employee.name, result.employee.id);
                self.form.reset();
                self.refresh_employees();
            }
            Err(e) => {
                warn!("🚨 Failed to add employee: {}", e);
                self.modal.show_alert(Alert::from(&e));
            }
        }
    }

    fn submit_update(&mut self, employee_id: String) {
        let command = UpdateEmployeeCommand {
            employee_id,
            name: self.form.name.clone(),
            salary: self.form.salary.clone(),
            designation: self.form.designation,
        };

        match self.backend().roster_service.update_employee(command) {
            Ok(result) => {
                info!("✅ Employee updated: {} ({})", result.employee.name, result.employee.id);
                self.form.reset();
                self.refresh_employees();
            }
            Err(e) => {
                warn!("🚨 Failed to update employee: {}", e);
                if matches!(e, RosterError::NotFound(_)) {
                    // The record is gone; keep the values so they can be added again
                    self.form.detach_from_employee();
                }
                self.modal.show_alert(Alert::from(&e));
            }
        }
    }
}
