//! Interactive terminal front end for the warehouse tracker.
//!
//! Provides the receiving, shipping and reports menus over a
//! [`domain::WarehouseService`], with configuration from the environment.

pub mod config;
pub mod error;
pub mod menu;

pub use config::{Config, LogFormat};
pub use error::{CliError, Result};
pub use menu::App;
