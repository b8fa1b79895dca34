//! Order and its per-location allocations.

use common::{OrderNumber, ProductId};
use serde::{Deserialize, Serialize};

use crate::inventory::Location;

use super::OrderState;

/// Units of a product claimed from one location.
///
/// An order's allocations double as its line items and its source
/// locations, with matching positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// The claimed product.
    pub product_id: ProductId,

    /// Units claimed.
    pub quantity: u32,

    /// Location the units are claimed from.
    pub location: Location,
}

impl Allocation {
    /// Creates a new allocation.
    pub fn new(product_id: ProductId, quantity: u32, location: impl Into<Location>) -> Self {
        Self {
            product_id,
            quantity,
            location: location.into(),
        }
    }
}

/// A (product, quantity) pair of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// An order committed to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    number: OrderNumber,
    state: OrderState,
    allocations: Vec<Allocation>,
}

impl Order {
    /// Creates an open order from its allocations.
    pub fn new(number: OrderNumber, allocations: Vec<Allocation>) -> Self {
        Self {
            number,
            state: OrderState::Open,
            allocations,
        }
    }

    /// Returns the order number.
    pub fn number(&self) -> OrderNumber {
        self.number
    }

    /// Returns the current state.
    pub fn state(&self) -> OrderState {
        self.state
    }

    /// Returns the allocations in the order they were claimed.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Returns the line items, positionally matching [`Order::source_locations`].
    pub fn line_items(&self) -> impl Iterator<Item = LineItem> + '_ {
        self.allocations.iter().map(|a| LineItem {
            product_id: a.product_id,
            quantity: a.quantity,
        })
    }

    /// Returns the claimed locations, positionally matching [`Order::line_items`].
    pub fn source_locations(&self) -> impl Iterator<Item = &Location> {
        self.allocations.iter().map(|a| &a.location)
    }

    /// Returns true if `location` is one of this order's sources.
    pub fn claims(&self, location: &Location) -> bool {
        self.source_locations().any(|l| l == location)
    }

    /// Returns the total units claimed.
    pub fn total_quantity(&self) -> u64 {
        self.allocations
            .iter()
            .map(|a| u64::from(a.quantity))
            .sum()
    }

    /// Returns true if the order has no line items.
    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Marks the order shipped and drops its line items.
    pub(crate) fn close(&mut self) {
        self.state = OrderState::Shipped;
        self.allocations.clear();
    }
}
