//! Employee roster manager built on egui.
//!
//! - `backend` holds the roster domain: model, commands, service, storage
//! - `ui` holds the session state, the form controller and render components
//! - `config` reads optional window/display settings

pub mod backend;
pub mod config;
pub mod ui;
