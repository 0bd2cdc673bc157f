//! # UI State Modules
//!
//! State is split by concern so each piece can be tested without an egui
//! context:
//! - `app_state` - backend handle and the rendered roster
//! - `form_state` - the draft and its COMPOSE/EDIT mode
//! - `modal_state` - the blocking alert

pub mod app_state;
pub mod form_state;
pub mod modal_state;

pub use app_state::CoreAppState;
pub use form_state::{EmployeeFormState, FormField, FormMode};
pub use modal_state::{Alert, ModalState};
