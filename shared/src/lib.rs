use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee record as displayed by the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique, immutable identifier chosen by the user
    pub id: String,
    pub name: String,
    pub salary: f64,
    pub designation: Designation,
}

/// Employment type of an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Designation {
    #[default]
    #[serde(rename = "Permanent Employee")]
    Permanent,
    #[serde(rename = "Contractual Employee")]
    Contractual,
}

impl Designation {
    /// All designations in the order they are offered in the form
    pub const ALL: [Designation; 2] = [Designation::Permanent, Designation::Contractual];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Designation::Permanent => "Permanent Employee",
            Designation::Contractual => "Contractual Employee",
        }
    }

    /// Parse from the human-readable label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label.trim())
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Format a salary amount with two decimal places
pub fn format_salary(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_salary() {
        assert_eq!(format_salary(50000.0), "50000.00");
        assert_eq!(format_salary(1234.5), "1234.50");
    }

    #[test]
    fn test_designation_defaults_to_permanent() {
        assert_eq!(Designation::default(), Designation::Permanent);
        assert_eq!(Designation::default().to_string(), "Permanent Employee");
    }

    #[test]
    fn test_designation_label_round_trip() {
        for designation in Designation::ALL {
            assert_eq!(Designation::from_label(designation.label()), Some(designation));
        }
        assert_eq!(Designation::from_label("Intern"), None);
    }

    #[test]
    fn test_employee_serializes_designation_label() {
        let employee = Employee {
            id: "1".to_string(),
            name: "Alice".to_string(),
            salary: 50000.0,
            designation: Designation::Contractual,
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["designation"], "Contractual Employee");
    }
}
