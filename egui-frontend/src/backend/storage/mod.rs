//! # Storage Module
//!
//! Storage abstraction for the roster plus its in-memory implementation.

pub mod memory;
pub mod traits;

pub use traits::EmployeeStorage;
