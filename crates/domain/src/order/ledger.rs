//! Ledger of open orders.

use common::{OrderNumber, ProductId};

use crate::inventory::Location;

use super::Order;

/// Holds the open orders and hands out order numbers.
#[derive(Debug, Clone)]
pub struct OrderLedger {
    orders: Vec<Order>,
    next_number: OrderNumber,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            next_number: OrderNumber::first(),
        }
    }
}

impl OrderLedger {
    /// Creates an empty ledger whose first order number is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current counter value and advances it.
    ///
    /// Numbers are never reused, even after their orders leave the ledger.
    pub fn next_order_number(&mut self) -> OrderNumber {
        let number = self.next_number;
        self.next_number = number.next();
        number
    }

    /// Returns the number the next committed order will receive.
    pub fn peek_next_order_number(&self) -> OrderNumber {
        self.next_number
    }

    /// Adds an order to the ledger.
    pub fn append(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Looks up an open order.
    pub fn find_by_number(&self, number: OrderNumber) -> Option<&Order> {
        self.orders.iter().find(|o| o.number() == number)
    }

    /// Removes and returns an order.
    pub fn remove(&mut self, number: OrderNumber) -> Option<Order> {
        let index = self.orders.iter().position(|o| o.number() == number)?;
        Some(self.orders.remove(index))
    }

    /// Returns true if an open order already draws from `location`.
    ///
    /// Only orders still in the ledger count, so shipping an order releases
    /// its locations.
    pub fn is_location_emptied(&self, location: &Location) -> bool {
        self.orders.iter().any(|o| o.claims(location))
    }

    /// Returns true if an open order still has units of `product_id` to ship.
    pub fn is_product_pending(&self, product_id: ProductId) -> bool {
        self.orders
            .iter()
            .flat_map(Order::line_items)
            .any(|item| item.product_id == product_id && item.quantity > 0)
    }

    /// Returns open orders in creation order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Returns the number of open orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true if no order is open.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
