//! egui-frontend/src/backend/domain/models/employee.rs

pub use shared::Designation;

/// Domain model representing an employee on the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub salary: f64,
    pub designation: Designation,
}

/// Required employee fields, named the way the form labels them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Id,
    Salary,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Name => "Name",
            RequiredField::Id => "ID",
            RequiredField::Salary => "Salary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields (missing: {})", labels(.0))]
    MissingFields(Vec<RequiredField>),
    #[error("Salary must be a number, got '{0}'")]
    InvalidSalary(String),
}

fn labels(fields: &[RequiredField]) -> String {
    fields.iter().map(RequiredField::label).collect::<Vec<_>>().join(", ")
}

/// Check that name, id and salary are present.
///
/// Only empty strings count as missing; whitespace is a value. All missing
/// fields are reported at once so the alert can name every one of them.
pub fn check_required(name: &str, id: &str, salary: &str) -> Result<(), ValidationError> {
    let missing: Vec<RequiredField> = [
        (RequiredField::Name, name),
        (RequiredField::Id, id),
        (RequiredField::Salary, salary),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

/// Parse the salary text entered in the form
pub fn parse_salary(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingFields(vec![RequiredField::Salary]));
    }

    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(ValidationError::InvalidSalary(trimmed.to_string())),
    }
}
