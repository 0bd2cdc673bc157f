//! Domain layer: employee model, commands and the roster service.

pub mod commands;
pub mod models;
pub mod roster_service;

pub use roster_service::{RosterError, RosterService};
