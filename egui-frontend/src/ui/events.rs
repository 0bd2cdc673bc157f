//! # Roster Events
//!
//! Render code never mutates state directly. Each frame it records what the
//! user did as `RosterEvent`s, and the coordinator applies them in order with
//! `handle_event` once rendering is done.

use log::debug;

use crate::ui::app_state::EmployeeRosterApp;
use crate::ui::state::FormField;

/// A discrete user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    /// One form input changed to the given text
    FieldChanged(FormField, String),
    /// "Add Employee" / "Update Employee" pressed
    SubmitRequested,
    /// "Edit" pressed on the card with this ID
    EditRequested(String),
    /// "Delete" pressed on the card with this ID
    DeleteRequested(String),
    /// The alert was acknowledged
    AlertDismissed,
}

impl EmployeeRosterApp {
    /// Apply a single event synchronously
    pub fn handle_event(&mut self, event: RosterEvent) {
        debug!("🎯 Handling {:?}", event);

        match event {
            RosterEvent::FieldChanged(field, value) => {
                self.form.set_field(field, &value);
            }
            RosterEvent::SubmitRequested => self.submit_form(),
            RosterEvent::EditRequested(employee_id) => self.request_edit(&employee_id),
            RosterEvent::DeleteRequested(employee_id) => self.request_delete(&employee_id),
            RosterEvent::AlertDismissed => self.modal.dismiss_alert(),
        }
    }

    /// Apply events in the order they were recorded
    pub fn handle_events(&mut self, events: impl IntoIterator<Item = RosterEvent>) {
        for event in events {
            self.handle_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Backend;
    use crate::config::AppConfig;
    use crate::ui::state::FormMode;
    use shared::Designation;

    fn setup_app() -> EmployeeRosterApp {
        EmployeeRosterApp::with_backend(Backend::new(), AppConfig::default())
    }

    fn fill(app: &mut EmployeeRosterApp, name: &str, id: &str, salary: &str) {
        app.handle_events([
            RosterEvent::FieldChanged(FormField::Name, name.to_string()),
            RosterEvent::FieldChanged(FormField::Id, id.to_string()),
            RosterEvent::FieldChanged(FormField::Salary, salary.to_string()),
        ]);
    }

    fn summary(app: &EmployeeRosterApp) -> Vec<(String, String, f64, Designation)> {
        app.employees()
            .iter()
            .map(|e| (e.name.clone(), e.id.clone(), e.salary, e.designation))
            .collect()
    }

    #[test]
    fn test_add_edit_delete_scenario() {
        let mut app = setup_app();

        fill(&mut app, "Alice", "1", "50000");
        app.handle_event(RosterEvent::SubmitRequested);
        assert_eq!(
            summary(&app),
            vec![("Alice".to_string(), "1".to_string(), 50000.0, Designation::Permanent)]
        );
        assert_eq!(app.form, crate::ui::state::EmployeeFormState::new());

        fill(&mut app, "Bob", "1", "60000");
        app.handle_event(RosterEvent::SubmitRequested);
        assert_eq!(app.employees().len(), 1);
        assert_eq!(app.modal.alert.as_ref().unwrap().title, "Duplicate ID");
        assert_eq!(app.form.name, "Bob");
        assert_eq!(app.form.mode, FormMode::Compose);
        app.handle_event(RosterEvent::AlertDismissed);

        app.handle_event(RosterEvent::EditRequested("1".to_string()));
        assert_eq!(app.form.submit_label(), "Update Employee");
        app.handle_event(RosterEvent::FieldChanged(FormField::Salary, "55000".to_string()));
        app.handle_event(RosterEvent::SubmitRequested);
        assert_eq!(
            summary(&app),
            vec![("Alice".to_string(), "1".to_string(), 55000.0, Designation::Permanent)]
        );
        assert_eq!(app.form.mode, FormMode::Compose);
        assert!(app.modal.alert.is_none());

        app.handle_event(RosterEvent::DeleteRequested("1".to_string()));
        assert!(app.employees().is_empty());
    }

    #[test]
    fn test_submit_with_missing_fields_shows_alert() {
        let mut app = setup_app();
        fill(&mut app, "Alice", "", "50000");

        app.handle_event(RosterEvent::SubmitRequested);

        assert!(app.employees().is_empty());
        assert_eq!(app.modal.alert.as_ref().unwrap().title, "Missing information");
        assert_eq!(app.form.name, "Alice");
        assert_eq!(app.form.salary, "50000");
    }

    #[test]
    fn test_failed_update_stays_in_edit_mode() {
        let mut app = setup_app();
        fill(&mut app, "Alice", "1", "50000");
        app.handle_event(RosterEvent::SubmitRequested);

        app.handle_event(RosterEvent::EditRequested("1".to_string()));
        app.handle_event(RosterEvent::FieldChanged(FormField::Name, String::new()));
        app.handle_event(RosterEvent::SubmitRequested);

        assert!(app.modal.is_blocking());
        assert_eq!(app.form.editing_id(), Some("1"));
        assert_eq!(app.employees()[0].name, "Alice");
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let mut app = setup_app();
        for (name, id) in [("Alice", "1"), ("Bob", "2"), ("Carol", "3")] {
            fill(&mut app, name, id, "100");
            app.handle_event(RosterEvent::SubmitRequested);
        }

        app.handle_event(RosterEvent::EditRequested("2".to_string()));
        app.handle_events([
            RosterEvent::FieldChanged(FormField::Id, "99".to_string()),
            RosterEvent::FieldChanged(FormField::Name, "Robert".to_string()),
            RosterEvent::FieldChanged(FormField::Designation, "Contractual Employee".to_string()),
            RosterEvent::SubmitRequested,
        ]);

        let ids: Vec<_> = app.employees().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(app.employees()[1].name, "Robert");
        assert_eq!(app.employees()[1].designation, Designation::Contractual);
        assert_eq!(app.employees()[1].salary, 100.0);
    }

    #[test]
    fn test_delete_does_not_touch_draft() {
        let mut app = setup_app();
        for (name, id) in [("Alice", "1"), ("Bob", "2")] {
            fill(&mut app, name, id, "100");
            app.handle_event(RosterEvent::SubmitRequested);
        }

        app.handle_event(RosterEvent::EditRequested("2".to_string()));
        let draft = app.form.clone();
        app.handle_event(RosterEvent::DeleteRequested("1".to_string()));

        assert_eq!(app.form, draft);
        let ids: Vec<_> = app.employees().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_update_after_record_deleted_reports_and_detaches() {
        let mut app = setup_app();
        fill(&mut app, "Alice", "1", "50000");
        app.handle_event(RosterEvent::SubmitRequested);

        app.handle_event(RosterEvent::EditRequested("1".to_string()));
        app.handle_event(RosterEvent::DeleteRequested("1".to_string()));
        app.handle_event(RosterEvent::SubmitRequested);

        assert!(app.employees().is_empty());
        assert_eq!(app.modal.alert.as_ref().unwrap().title, "Employee not found");
        assert_eq!(app.form.mode, FormMode::Compose);
        assert_eq!(app.form.id, "1");

        app.handle_events([RosterEvent::AlertDismissed, RosterEvent::SubmitRequested]);
        assert_eq!(app.employees().len(), 1);
        assert_eq!(app.employees()[0].name, "Alice");
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut app = setup_app();
        fill(&mut app, "Alice", "1", "50000");
        app.handle_event(RosterEvent::SubmitRequested);

        app.handle_event(RosterEvent::DeleteRequested("42".to_string()));

        assert_eq!(app.employees().len(), 1);
        assert!(app.modal.alert.is_none());
    }
}
