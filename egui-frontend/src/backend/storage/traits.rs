//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use crate::backend::domain::models::employee::Employee as DomainEmployee;

/// Trait defining the interface for employee storage operations
///
/// Implementations keep employees in insertion order and never hold two
/// employees with the same identifier.
pub trait EmployeeStorage: Send + Sync {
    /// Append a new employee. Fails if the identifier is already stored.
    fn store_employee(&self, employee: &DomainEmployee) -> Result<()>;

    /// Retrieve a specific employee by ID
    fn get_employee(&self, employee_id: &str) -> Result<Option<DomainEmployee>>;

    /// List all employees in insertion order
    fn list_employees(&self) -> Result<Vec<DomainEmployee>>;

    /// Replace the stored employee that has the same ID, keeping its position.
    /// Returns false if no employee has that ID.
    fn update_employee(&self, employee: &DomainEmployee) -> Result<bool>;

    /// Delete an employee by ID
    /// Returns true if the employee was found and deleted, false otherwise
    fn delete_employee(&self, employee_id: &str) -> Result<bool>;
}
