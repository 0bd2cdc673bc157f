//! # UI Components Module
//!
//! This module organizes all UI components for the roster application.
//!
//! ## Module Organization:
//! - `data_loading` - Loading the roster from the backend
//! - `employee_form` - Add/update form and the submit handler
//! - `employee_cards` - One card per employee with Edit/Delete actions
//! - `header` - Window title and roster count
//! - `modals` - Blocking alert dialog
//! - `styling` - Global egui style and frame helpers
//! - `theme` - Color palette

pub mod data_loading;
pub mod employee_cards;
pub mod employee_form;
pub mod header;
pub mod modals;
pub mod styling;
pub mod theme;

pub use styling::{card_frame, colored_button, form_frame, setup_roster_style};
pub use theme::*;
