//! The warehouse aggregate: inventory and open orders owned together.

use common::{OrderNumber, ProductId};

use crate::allocation;
use crate::fulfillment::{self, Shipment};
use crate::inventory::{InventoryError, InventoryStore, Location, StockRecord};
use crate::order::{Order, OrderError, OrderLedger};

/// Inventory store and order ledger of one warehouse.
///
/// Allocation and fulfillment both need the two containers at once, so they
/// are owned by a single value created once per process.
#[derive(Debug, Clone, Default)]
pub struct Warehouse {
    inventory: InventoryStore,
    ledger: OrderLedger,
}

// Query methods
impl Warehouse {
    /// Creates an empty warehouse.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the inventory store.
    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    /// Returns the order ledger.
    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    /// Checks whether `location` can take a new stock record.
    pub fn validate_location(&self, location: &Location) -> Result<(), InventoryError> {
        self.inventory.validate_location(location)
    }

    /// Returns true if a new stock record could be stored at `location`.
    pub fn is_location_valid(&self, location: &Location) -> bool {
        self.inventory.is_location_valid(location)
    }

    /// Returns true if an open order claims `location`.
    pub fn is_location_emptied(&self, location: &Location) -> bool {
        self.ledger.is_location_emptied(location)
    }

    /// Returns true if an open order still has units of `product_id` to ship.
    pub fn is_product_pending(&self, product_id: ProductId) -> bool {
        self.ledger.is_product_pending(product_id)
    }

    /// Returns the units of `product_id` a new order could claim.
    pub fn eligible_quantity(&self, product_id: ProductId) -> u64 {
        allocation::eligible_quantity(&self.inventory, &self.ledger, product_id)
    }
}

// Command methods
impl Warehouse {
    /// Stores `quantity` units of `product_id` at a new location.
    pub fn add_stock(
        &mut self,
        product_id: ProductId,
        quantity: u32,
        location: Location,
    ) -> Result<StockRecord, InventoryError> {
        self.inventory.add_stock(product_id, quantity, location).cloned()
    }

    /// Allocates `quantity` units of `product_id` and commits a new order.
    ///
    /// All or nothing: on failure neither the ledger nor the order counter
    /// changes.
    pub fn create_order(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Order, OrderError> {
        let allocations =
            allocation::allocate(&self.inventory, &self.ledger, product_id, quantity)?;

        let order = Order::new(self.ledger.next_order_number(), allocations);
        self.ledger.append(order.clone());
        Ok(order)
    }

    /// Ships an open order and removes it from the ledger.
    ///
    /// Only open orders live in the ledger, so any order found here can ship.
    pub fn ship_order(&mut self, number: OrderNumber) -> Result<Shipment, OrderError> {
        let order = self
            .ledger
            .find_by_number(number)
            .ok_or(OrderError::NotFound(number))?;

        let allocated = order.total_quantity();
        let lines = fulfillment::ship(&mut self.inventory, order);

        let mut order = self
            .ledger
            .remove(number)
            .ok_or(OrderError::NotFound(number))?;
        order.close();

        Ok(Shipment {
            order,
            allocated,
            lines,
        })
    }
}
