//! # Modals Module
//!
//! Modal dialogs shown on top of the roster.
//!
//! ## Module Organization:
//! - `alert` - Blocking alert for validation and duplicate-ID errors

pub mod alert;
