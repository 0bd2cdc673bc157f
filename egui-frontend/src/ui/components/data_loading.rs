//! # Data Loading Module
//!
//! Bridges the backend roster and the cards the UI renders. After every
//! mutation the UI reloads the roster so the cards always reflect the
//! backend's order.

use log::{debug, error};

use crate::ui::app_state::EmployeeRosterApp;
use crate::ui::mappers::to_dto;
use crate::ui::state::Alert;

impl EmployeeRosterApp {
    /// Reload all employees from the backend
    pub fn refresh_employees(&mut self) {
        match self.backend().roster_service.list_employees() {
            Ok(result) => {
                self.core.employees = result.employees.into_iter().map(to_dto).collect();
                debug!("📊 Loaded {} employees", self.core.employees.len());
            }
            Err(e) => {
                error!("❌ Failed to load employees: {}", e);
                self.modal.show_alert(Alert::from(&e));
            }
        }
    }
}
