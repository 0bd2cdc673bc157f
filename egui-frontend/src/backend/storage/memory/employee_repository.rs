//! # In-Memory Employee Repository
//!
//! Keeps employees in a `Vec` so list order is insertion order. Updates
//! replace in place, deletes shift later records up by one.

use anyhow::{anyhow, Result};
use log::debug;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::backend::domain::models::employee::Employee as DomainEmployee;
use crate::backend::storage::traits::EmployeeStorage;

/// In-memory employee repository. Clones share the same roster.
#[derive(Clone, Default)]
pub struct EmployeeRepository {
    employees: Arc<RwLock<Vec<DomainEmployee>>>,
}

impl EmployeeRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<DomainEmployee>>> {
        self.employees
            .read()
            .map_err(|_| anyhow!("Employee store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<DomainEmployee>>> {
        self.employees
            .write()
            .map_err(|_| anyhow!("Employee store lock poisoned"))
    }
}

impl EmployeeStorage for EmployeeRepository {
    fn store_employee(&self, employee: &DomainEmployee) -> Result<()> {
        let mut employees = self.write()?;

        if employees.iter().any(|e| e.id == employee.id) {
            return Err(anyhow!("Employee with ID '{}' already stored", employee.id));
        }

        employees.push(employee.clone());
        debug!("Stored employee {} ({} total)", employee.id, employees.len());
        Ok(())
    }

    fn get_employee(&self, employee_id: &str) -> Result<Option<DomainEmployee>> {
        let employees = self.read()?;
        Ok(employees.iter().find(|e| e.id == employee_id).cloned())
    }

    fn list_employees(&self) -> Result<Vec<DomainEmployee>> {
        Ok(self.read()?.clone())
    }

    fn update_employee(&self, employee: &DomainEmployee) -> Result<bool> {
        let mut employees = self.write()?;

        match employees.iter_mut().find(|e| e.id == employee.id) {
            Some(stored) => {
                *stored = employee.clone();
                debug!("Updated employee {}", employee.id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_employee(&self, employee_id: &str) -> Result<bool> {
        let mut employees = self.write()?;

        match employees.iter().position(|e| e.id == employee_id) {
            Some(index) => {
                employees.remove(index);
                debug!("Deleted employee {} ({} left)", employee_id, employees.len());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::employee::Designation;

    fn employee(id: &str, name: &str) -> DomainEmployee {
        DomainEmployee {
            id: id.to_string(),
            name: name.to_string(),
            salary: 1000.0,
            designation: Designation::Permanent,
        }
    }

    fn ids(repo: &EmployeeRepository) -> Vec<String> {
        repo.list_employees().unwrap().into_iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_store_keeps_insertion_order() {
        let repo = EmployeeRepository::new();
        repo.store_employee(&employee("b", "Bob")).unwrap();
        repo.store_employee(&employee("a", "Alice")).unwrap();
        repo.store_employee(&employee("c", "Carol")).unwrap();

        assert_eq!(ids(&repo), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_store_rejects_duplicate_id() {
        let repo = EmployeeRepository::new();
        repo.store_employee(&employee("1", "Alice")).unwrap();

        assert!(repo.store_employee(&employee("1", "Bob")).is_err());
        assert_eq!(repo.list_employees().unwrap().len(), 1);
        assert_eq!(repo.get_employee("1").unwrap().unwrap().name, "Alice");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let repo = EmployeeRepository::new();
        repo.store_employee(&employee("1", "Alice")).unwrap();
        repo.store_employee(&employee("2", "Bob")).unwrap();

        let mut changed = employee("1", "Alicia");
        changed.salary = 2000.0;
        assert!(repo.update_employee(&changed).unwrap());

        assert_eq!(ids(&repo), vec!["1", "2"]);
        assert_eq!(repo.get_employee("1").unwrap(), Some(changed));
        assert!(!repo.update_employee(&employee("9", "Nobody")).unwrap());
    }

    #[test]
    fn test_delete_shifts_remaining() {
        let repo = EmployeeRepository::new();
        for id in ["1", "2", "3"] {
            repo.store_employee(&employee(id, "x")).unwrap();
        }

        assert!(repo.delete_employee("2").unwrap());
        assert_eq!(ids(&repo), vec!["1", "3"]);
        assert!(!repo.delete_employee("2").unwrap());
        assert_eq!(ids(&repo), vec!["1", "3"]);
    }

    #[test]
    fn test_clones_share_roster() {
        let repo = EmployeeRepository::new();
        let other = repo.clone();
        repo.store_employee(&employee("1", "Alice")).unwrap();

        assert!(other.get_employee("1").unwrap().is_some());
    }
}
