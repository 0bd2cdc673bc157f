//! # Core Application State
//!
//! This module contains the essential application state that forms the backbone
//! of the roster app.
//!
//! ## Responsibilities:
//! - Backend connection management
//! - The employees currently shown as cards

use shared::Employee;
use crate::backend::Backend;

/// Core application state containing essential app data
pub struct CoreAppState {
    /// Backend connection for data access
    pub backend: Backend,

    /// Employees in roster order, as last loaded from the backend
    pub employees: Vec<Employee>,
}

impl CoreAppState {
    /// Create new core app state with backend connection
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            employees: Vec::new(),
        }
    }
}
