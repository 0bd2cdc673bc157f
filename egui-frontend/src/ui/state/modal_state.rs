//! # Modal State Module
//!
//! State for the blocking alert. While an alert is open the rest of the
//! window is disabled until the user dismisses it.

use log::info;

use crate::backend::domain::models::employee::ValidationError;
use crate::backend::domain::RosterError;

/// A blocking notification shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&ValidationError> for Alert {
    fn from(error: &ValidationError) -> Self {
        match error {
            ValidationError::MissingFields(_) => Alert::new("Missing information", error.to_string()),
            ValidationError::InvalidSalary(_) => Alert::new("Invalid salary", error.to_string()),
        }
    }
}

impl From<&RosterError> for Alert {
    fn from(error: &RosterError) -> Self {
        match error {
            RosterError::Validation(validation) => Alert::from(validation),
            RosterError::DuplicateId(id) => Alert::new(
                "Duplicate ID",
                format!("Employee ID '{}' already exists.", id),
            ),
            RosterError::NotFound(id) => Alert::new(
                "Employee not found",
                format!(
                    "Employee '{}' no longer exists. Your changes were kept so you can add it again.",
                    id
                ),
            ),
            RosterError::Storage(e) => Alert::new("Something went wrong", format!("{:#}", e)),
        }
    }
}

/// Modal visibility and modal-specific state
#[derive(Debug, Default)]
pub struct ModalState {
    /// Alert currently blocking the window
    pub alert: Option<Alert>,

    /// Prevents the key press that opened the alert from also closing it
    pub alert_just_opened: bool,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blocking(&self) -> bool {
        self.alert.is_some()
    }

    /// Open an alert, replacing any alert already shown
    pub fn show_alert(&mut self, alert: Alert) {
        info!("🔔 Alert: {} - {}", alert.title, alert.message);
        self.alert = Some(alert);
        self.alert_just_opened = true;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.alert_just_opened = false;
    }
}
