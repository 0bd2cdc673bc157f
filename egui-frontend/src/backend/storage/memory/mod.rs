//! # In-Memory Storage
//!
//! Process-local storage for the roster. Nothing is written to disk; the
//! roster lives for the duration of the session.

pub mod employee_repository;

pub use employee_repository::EmployeeRepository;
