//! Orders and the ledger that holds them.

mod aggregate;
mod ledger;
mod state;

pub use aggregate::{Allocation, LineItem, Order};
pub use ledger::OrderLedger;
pub use state::OrderState;

use common::{OrderNumber, ProductId};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Eligible stock does not cover the requested quantity.
    #[error(
        "Not enough stock or location already emptied by other orders: product {product_id}, requested {requested}, eligible {available}"
    )]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u64,
    },

    /// No open order carries this number.
    #[error("Order not found: {0}")]
    NotFound(OrderNumber),
}
