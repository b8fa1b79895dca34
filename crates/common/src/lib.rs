//! Shared identifier types used across the warehouse crates.

pub mod types;

pub use types::{OrderNumber, ProductId};
