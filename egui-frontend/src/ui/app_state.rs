//! # App State Module
//!
//! This module defines the central application state structure and initialization logic
//! for the roster app.
//!
//! ## Key Types:
//! - `EmployeeRosterApp` - the session: roster, draft and alert in one place
//!
//! ## State Management:
//! All state is owned by `EmployeeRosterApp` and only changed through the
//! event handlers in `ui::events`. Nothing is global.

use log::info;
use shared::Employee;

use crate::backend::Backend;
use crate::config::AppConfig;
use crate::ui::state::{CoreAppState, EmployeeFormState, ModalState};

/// Main application struct for the egui roster app
pub struct EmployeeRosterApp {
    pub core: CoreAppState,
    pub form: EmployeeFormState,
    pub modal: ModalState,
    pub config: AppConfig,
}

impl EmployeeRosterApp {
    /// Create the app for an eframe window
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing EmployeeRosterApp");

        crate::ui::setup_roster_style(&cc.egui_ctx);

        Ok(Self::with_backend(Backend::new(), config))
    }

    /// Create the app around an existing backend
    pub fn with_backend(backend: Backend, config: AppConfig) -> Self {
        let mut app = Self {
            core: CoreAppState::new(backend),
            form: EmployeeFormState::new(),
            modal: ModalState::new(),
            config,
        };
        app.refresh_employees();
        app
    }

    pub fn backend(&self) -> &Backend {
        &self.core.backend
    }

    /// Employees in roster order
    pub fn employees(&self) -> &[Employee] {
        &self.core.employees
    }
}
