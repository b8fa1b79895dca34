//! Fulfillment: taking an order's units out of the inventory.

use common::{OrderNumber, ProductId};
use serde::{Deserialize, Serialize};

use crate::inventory::{InventoryStore, Location};
use crate::order::Order;

/// Units taken from one location while shipping an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentLine {
    pub product_id: ProductId,
    pub location: Location,
    /// Units shipped from the location.
    pub quantity: u32,
    /// Units left at the location afterwards; 0 means the record was removed.
    pub remaining: u32,
}

/// Outcome of shipping an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipment {
    /// The closed order, in `Shipped` state with its line items cleared.
    pub order: Order,
    /// Units the order had allocated before shipping.
    pub allocated: u64,
    /// Per-location shipments in the order they happened.
    pub lines: Vec<ShipmentLine>,
}

impl Shipment {
    /// Returns the shipped order's number.
    pub fn order_number(&self) -> OrderNumber {
        self.order.number()
    }

    /// Returns the units actually shipped.
    pub fn shipped_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Returns the allocated units that could not be found at shipping time.
    pub fn short_quantity(&self) -> u64 {
        self.allocated.saturating_sub(self.shipped_quantity())
    }
}

/// Takes the units of `order` out of `inventory`.
///
/// Every line item is matched against every source location of the order,
/// not only the one it was allocated from: the first claimed location that
/// still holds the product supplies `min(remaining, quantity)` units, and
/// scanning stops once the line item is covered. Records drained to zero are
/// removed from the inventory.
pub fn ship(inventory: &mut InventoryStore, order: &Order) -> Vec<ShipmentLine> {
    let mut lines = Vec::new();

    for item in order.line_items() {
        let mut remaining = item.quantity;

        for location in order.source_locations() {
            if remaining == 0 {
                break;
            }

            let available = match inventory.find_by_location(location) {
                Some(record) if record.has_stock_of(item.product_id) => record.quantity,
                _ => continue,
            };

            let quantity = remaining.min(available);
            if quantity == 0 {
                continue;
            }

            let Some(after) = inventory.reduce_or_remove(location, quantity) else {
                continue;
            };
            remaining -= quantity;

            tracing::debug!(
                product_id = %item.product_id,
                %location,
                quantity,
                left = after.quantity,
                "units shipped"
            );
            lines.push(ShipmentLine {
                product_id: item.product_id,
                location: location.clone(),
                quantity,
                remaining: after.quantity,
            });
        }
    }

    lines
}
