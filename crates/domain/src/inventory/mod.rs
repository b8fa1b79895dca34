//! Inventory store: the stock records currently held by the warehouse.

mod record;
mod store;

pub use record::{Location, StockRecord};
pub use store::InventoryStore;

use thiserror::Error;

/// Errors raised when a location cannot take a new stock record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    /// The location name is empty or whitespace only.
    #[error("Invalid location: location must not be blank")]
    BlankLocation,

    /// Another stock record already occupies the location.
    #[error("Invalid location: {0} is already in use")]
    DuplicateLocation(Location),
}
