//! Warehouse commands.

use common::{OrderNumber, ProductId};

use crate::inventory::Location;

/// Command to put stock away at a new location.
#[derive(Debug, Clone)]
pub struct ReceiveStock {
    /// The product being stocked.
    pub product_id: ProductId,

    /// Units received.
    pub quantity: u32,

    /// Where the units are stored. Must be non-blank and unused.
    pub location: Location,
}

impl ReceiveStock {
    /// Creates a new ReceiveStock command.
    pub fn new(product_id: ProductId, quantity: u32, location: impl Into<Location>) -> Self {
        Self {
            product_id,
            quantity,
            location: location.into(),
        }
    }
}

/// Command to create an order for units of one product.
#[derive(Debug, Clone, Copy)]
pub struct PlaceOrder {
    /// The product to allocate.
    pub product_id: ProductId,

    /// Units requested.
    pub quantity: u32,
}

impl PlaceOrder {
    /// Creates a new PlaceOrder command.
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Command to ship an open order.
#[derive(Debug, Clone, Copy)]
pub struct ShipOrder {
    /// The order to ship.
    pub order_number: OrderNumber,
}

impl ShipOrder {
    /// Creates a new ShipOrder command.
    pub fn new(order_number: OrderNumber) -> Self {
        Self { order_number }
    }
}
