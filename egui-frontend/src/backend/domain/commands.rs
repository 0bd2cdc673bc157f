// egui-frontend/src/backend/domain/commands.rs

//! Domain-level command and query types
//! These structs are used by services inside the domain layer. The UI layer
//! builds them from the draft form and maps results to the DTOs defined in
//! the `shared` crate.

pub mod employee {
    use crate::backend::domain::models::employee::{Designation, Employee};

    /// Input for adding a new employee.
    ///
    /// Salary is the raw form text; the service parses it.
    #[derive(Debug, Clone)]
    pub struct CreateEmployeeCommand {
        pub id: String,
        pub name: String,
        pub salary: String,
        pub designation: Option<Designation>,
    }

    /// Input for updating an employee. The identifier selects the record
    /// and is never changed.
    #[derive(Debug, Clone)]
    pub struct UpdateEmployeeCommand {
        pub employee_id: String,
        pub name: String,
        pub salary: String,
        pub designation: Designation,
    }

    #[derive(Debug, Clone)]
    pub struct GetEmployeeCommand {
        pub employee_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteEmployeeCommand {
        pub employee_id: String,
    }

    /// Result of adding an employee.
    #[derive(Debug, Clone)]
    pub struct CreateEmployeeResult {
        pub employee: Employee,
    }

    /// Result of updating an employee.
    #[derive(Debug, Clone)]
    pub struct UpdateEmployeeResult {
        pub employee: Employee,
    }

    #[derive(Debug, Clone)]
    pub struct GetEmployeeResult {
        pub employee: Option<Employee>,
    }

    /// Result of listing employees, in insertion order.
    #[derive(Debug, Clone)]
    pub struct ListEmployeesResult {
        pub employees: Vec<Employee>,
    }

    /// Result of deleting an employee.
    #[derive(Debug, Clone)]
    pub struct DeleteEmployeeResult {
        /// False when no employee had the identifier
        pub deleted: bool,
        pub success_message: String,
    }
}
