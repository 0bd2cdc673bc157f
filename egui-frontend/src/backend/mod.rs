//! # Backend Module for egui Frontend
//!
//! This backend module provides direct access to domain services and storage
//! for the egui frontend:
//! - Uses synchronous operations (no async/await)
//! - Provides direct access to domain services
//! - Keeps the roster in process memory only

// Domain modules
pub mod domain;
pub mod storage;

// Re-export commonly used types
pub use storage::memory::EmployeeRepository;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub roster_service: domain::RosterService,
}

impl Backend {
    /// Create a new backend instance with an empty roster
    pub fn new() -> Self {
        let employee_repository = EmployeeRepository::new();
        let roster_service = domain::RosterService::new(employee_repository);

        Backend { roster_service }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}
