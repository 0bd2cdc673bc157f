//! # UI Module
//!
//! Everything the window shows and the session state behind it.
//!
//! ## Usage:
//! Other modules can import everything they need with:
//! ```rust,ignore
//! use crate::ui::*;
//! ```

pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod events;
pub mod mappers;
pub mod state;

pub use app_state::EmployeeRosterApp;
pub use components::*;
pub use events::RosterEvent;
pub use mappers::*;
