//! # Form State Module
//!
//! The draft employee being composed or edited.
//!
//! The form is in one of two modes:
//! - `Compose` - nothing selected, submit adds a new employee
//! - `Edit` - an existing employee is selected by ID, submit updates it and
//!   the ID input is locked
//!
//! Salary is kept as the text the user typed; it is parsed on submit.

use log::debug;
use shared::{Designation, Employee};

use crate::backend::domain::models::employee::{check_required, ValidationError};

/// Mode of the employee form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Compose,
    Edit { employee_id: String },
}

/// Named input of the employee form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Id,
    Salary,
    Designation,
}

/// Draft values plus the current mode
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeeFormState {
    pub name: String,
    pub id: String,
    pub salary: String,
    pub designation: Designation,
    pub mode: FormMode,
}

impl EmployeeFormState {
    /// Empty draft in compose mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field and return to compose mode
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("📝 Employee form reset");
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// ID of the employee being edited, if any
    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Edit { employee_id } => Some(employee_id),
            FormMode::Compose => None,
        }
    }

    /// The ID input is locked while an employee is being edited
    pub fn id_editable(&self) -> bool {
        !self.is_editing()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Employee"
        } else {
            "Add Employee"
        }
    }

    /// Update exactly one field of the draft.
    ///
    /// Changes to the ID while editing and unknown designation labels are
    /// ignored. Returns whether the draft changed.
    pub fn set_field(&mut self, field: FormField, value: &str) -> bool {
        match field {
            FormField::Name => self.name = value.to_string(),
            FormField::Id => {
                if !self.id_editable() {
                    debug!("📝 Ignoring ID change while editing {:?}", self.editing_id());
                    return false;
                }
                self.id = value.to_string();
            }
            FormField::Salary => self.salary = value.to_string(),
            FormField::Designation => match Designation::from_label(value) {
                Some(designation) => self.designation = designation,
                None => {
                    debug!("📝 Ignoring unknown designation {:?}", value);
                    return false;
                }
            },
        }
        true
    }

    /// Load an employee into the draft and switch to edit mode
    pub fn load_employee(&mut self, employee: &Employee) {
        self.name = employee.name.clone();
        self.id = employee.id.clone();
        self.salary = employee.salary.to_string();
        self.designation = employee.designation;
        self.mode = FormMode::Edit {
            employee_id: employee.id.clone(),
        };
        debug!("📝 Editing employee {}", employee.id);
    }

    /// Leave edit mode but keep the typed values
    pub fn detach_from_employee(&mut self) {
        self.mode = FormMode::Compose;
    }

    /// Presence check for name, ID and salary
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_required(&self.name, &self.id, &self.salary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Employee {
        Employee {
            id: "1".to_string(),
            name: "Alice".to_string(),
            salary: 50000.0,
            designation: Designation::Contractual,
        }
    }

    #[test]
    fn test_new_form_is_empty_compose() {
        let form = EmployeeFormState::new();
        assert_eq!(form.mode, FormMode::Compose);
        assert!(form.name.is_empty() && form.id.is_empty() && form.salary.is_empty());
        assert_eq!(form.designation, Designation::Permanent);
        assert_eq!(form.submit_label(), "Add Employee");
        assert!(form.id_editable());
    }

    #[test]
    fn test_set_field_changes_only_that_field() {
        let mut form = EmployeeFormState::new();
        form.set_field(FormField::Name, "Alice");
        form.set_field(FormField::Salary, "50000");

        assert_eq!(form.name, "Alice");
        assert_eq!(form.salary, "50000");
        assert!(form.id.is_empty());

        assert!(form.set_field(FormField::Designation, "Contractual Employee"));
        assert_eq!(form.designation, Designation::Contractual);
        assert!(!form.set_field(FormField::Designation, "Intern"));
        assert_eq!(form.designation, Designation::Contractual);
    }

    #[test]
    fn test_load_employee_enters_edit_mode() {
        let mut form = EmployeeFormState::new();
        form.load_employee(&alice());

        assert_eq!(form.editing_id(), Some("1"));
        assert_eq!(form.name, "Alice");
        assert_eq!(form.salary, "50000");
        assert_eq!(form.designation, Designation::Contractual);
        assert_eq!(form.submit_label(), "Update Employee");
        assert!(!form.id_editable());
    }

    #[test]
    fn test_id_is_locked_while_editing() {
        let mut form = EmployeeFormState::new();
        form.load_employee(&alice());

        assert!(!form.set_field(FormField::Id, "2"));
        assert_eq!(form.id, "1");
    }

    #[test]
    fn test_reset_returns_to_compose() {
        let mut form = EmployeeFormState::new();
        form.load_employee(&alice());
        form.reset();

        assert_eq!(form, EmployeeFormState::new());
    }

    #[test]
    fn test_detach_keeps_values() {
        let mut form = EmployeeFormState::new();
        form.load_employee(&alice());
        form.detach_from_employee();

        assert_eq!(form.mode, FormMode::Compose);
        assert_eq!(form.id, "1");
        assert!(form.id_editable());
    }

    #[test]
    fn test_validate() {
        let mut form = EmployeeFormState::new();
        assert!(form.validate().is_err());

        form.set_field(FormField::Name, "Alice");
        form.set_field(FormField::Id, "1");
        form.set_field(FormField::Salary, "50000");
        form.validate().unwrap();
    }
}
