use log::{info, warn};

use crate::backend::domain::commands::employee::{
    CreateEmployeeCommand, CreateEmployeeResult, DeleteEmployeeCommand, DeleteEmployeeResult,
    GetEmployeeCommand, GetEmployeeResult, ListEmployeesResult, UpdateEmployeeCommand,
    UpdateEmployeeResult,
};
use crate::backend::domain::models::employee::{
    check_required, parse_salary, Employee as DomainEmployee, ValidationError,
};
use crate::backend::storage::memory::EmployeeRepository;
use crate::backend::storage::traits::EmployeeStorage;

/// Errors surfaced by roster operations
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Employee ID already exists: {0}")]
    DuplicateId(String),
    #[error("Employee not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;

/// Service for managing the employee roster
#[derive(Clone)]
pub struct RosterService {
    employee_repository: EmployeeRepository,
}

impl RosterService {
    /// Create a new RosterService
    pub fn new(employee_repository: EmployeeRepository) -> Self {
        Self { employee_repository }
    }

    /// Add a new employee to the end of the roster
    pub fn create_employee(&self, command: CreateEmployeeCommand) -> RosterResult<CreateEmployeeResult> {
        info!("Creating employee: id={}, name={}", command.id, command.name);

        if let Err(e) = check_required(&command.name, &command.id, &command.salary) {
            warn!("Rejected employee {:?}: {}", command.id, e);
            return Err(e.into());
        }
        let salary = parse_salary(&command.salary)?;

        let id = command.id;
        if self.employee_repository.get_employee(&id)?.is_some() {
            warn!("Rejected duplicate employee ID: {}", id);
            return Err(RosterError::DuplicateId(id));
        }

        let employee = DomainEmployee {
            id,
            name: command.name,
            salary,
            designation: command.designation.unwrap_or_default(),
        };

        self.employee_repository.store_employee(&employee)?;

        info!("Created employee: {} with ID: {}", employee.name, employee.id);

        Ok(CreateEmployeeResult { employee })
    }

    /// Get an employee by ID
    pub fn get_employee(&self, command: GetEmployeeCommand) -> RosterResult<GetEmployeeResult> {
        let employee = self.employee_repository.get_employee(&command.employee_id)?;

        if employee.is_none() {
            warn!("Employee not found: {}", command.employee_id);
        }

        Ok(GetEmployeeResult { employee })
    }

    /// List all employees in insertion order
    pub fn list_employees(&self) -> RosterResult<ListEmployeesResult> {
        let employees = self.employee_repository.list_employees()?;

        info!("Found {} employees", employees.len());

        Ok(ListEmployeesResult { employees })
    }

    /// Replace name, salary and designation of an existing employee
    pub fn update_employee(&self, command: UpdateEmployeeCommand) -> RosterResult<UpdateEmployeeResult> {
        info!("Updating employee: {}", command.employee_id);

        check_required(&command.name, &command.employee_id, &command.salary)?;
        let salary = parse_salary(&command.salary)?;

        let mut employee = self
            .employee_repository
            .get_employee(&command.employee_id)?
            .ok_or_else(|| {
                warn!("Cannot update missing employee: {}", command.employee_id);
                RosterError::NotFound(command.employee_id.clone())
            })?;

        employee.name = command.name;
        employee.salary = salary;
        employee.designation = command.designation;

        if !self.employee_repository.update_employee(&employee)? {
            return Err(RosterError::NotFound(employee.id));
        }

        info!("Updated employee: {} with ID: {}", employee.name, employee.id);

        Ok(UpdateEmployeeResult { employee })
    }

    /// Delete an employee. Deleting an unknown ID is a no-op.
    pub fn delete_employee(&self, command: DeleteEmployeeCommand) -> RosterResult<DeleteEmployeeResult> {
        info!("Deleting employee: {}", command.employee_id);

        let deleted = self.employee_repository.delete_employee(&command.employee_id)?;

        let success_message = if deleted {
            info!("Deleted employee with ID: {}", command.employee_id);
            format!("Employee '{}' deleted", command.employee_id)
        } else {
            warn!("No employee to delete with ID: {}", command.employee_id);
            format!("No employee with ID '{}'", command.employee_id)
        };

        Ok(DeleteEmployeeResult { deleted, success_message })
    }
}
