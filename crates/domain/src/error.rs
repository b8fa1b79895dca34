//! Domain error types.

use journal::JournalError;
use thiserror::Error;

use crate::inventory::InventoryError;
use crate::order::OrderError;

/// Errors that can occur during warehouse operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The inventory rejected a stock record.
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// An order could not be created or shipped.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// The activity journal rejected an entry.
    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),
}
