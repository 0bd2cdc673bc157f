use shared::Employee;

use crate::backend::domain::models::employee::Employee as DomainEmployee;

/// Helper function to convert a domain employee to the shared DTO
pub fn to_dto(employee: DomainEmployee) -> Employee {
    Employee {
        id: employee.id,
        name: employee.name,
        salary: employee.salary,
        designation: employee.designation,
    }
}
