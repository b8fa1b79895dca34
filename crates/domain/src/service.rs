//! Warehouse service providing the operations driven by the operator.

use common::{OrderNumber, ProductId};
use journal::{EventEnvelope, Journal, JournalQuery, Sequence};

use crate::commands::{PlaceOrder, ReceiveStock, ShipOrder};
use crate::error::DomainError;
use crate::events::{DomainEvent, WarehouseEvent};
use crate::fulfillment::Shipment;
use crate::inventory::{Location, StockRecord};
use crate::order::{Order, OrderError};
use crate::warehouse::Warehouse;

/// Service for running a warehouse.
///
/// Wraps the [`Warehouse`] aggregate, records every successful operation in
/// the journal, and emits logs and metrics for it. Failed operations leave
/// both the warehouse and the journal untouched.
pub struct WarehouseService<J: Journal> {
    warehouse: Warehouse,
    journal: J,
}

impl<J: Journal> WarehouseService<J> {
    /// Creates a service for an empty warehouse.
    pub fn new(journal: J) -> Self {
        Self {
            warehouse: Warehouse::new(),
            journal,
        }
    }

    /// Returns the underlying warehouse.
    pub fn warehouse(&self) -> &Warehouse {
        &self.warehouse
    }

    /// Returns the activity journal.
    pub fn journal(&self) -> &J {
        &self.journal
    }

    /// Stores received stock at a new location.
    #[tracing::instrument(skip(self))]
    pub fn receive_stock(&mut self, cmd: ReceiveStock) -> Result<StockRecord, DomainError> {
        let record = self
            .warehouse
            .add_stock(cmd.product_id, cmd.quantity, cmd.location)?;

        self.record(vec![WarehouseEvent::stock_received(&record)])?;

        metrics::counter!("warehouse_stock_received_total").increment(1);
        tracing::info!(
            product_id = %record.product_id,
            quantity = record.quantity,
            location = %record.location,
            "stock received"
        );
        Ok(record)
    }

    /// Allocates stock and opens a new order.
    #[tracing::instrument(skip(self))]
    pub fn create_order(&mut self, cmd: PlaceOrder) -> Result<Order, DomainError> {
        let order = match self.warehouse.create_order(cmd.product_id, cmd.quantity) {
            Ok(order) => order,
            Err(err) => {
                metrics::counter!("warehouse_orders_rejected_total").increment(1);
                tracing::warn!(error = %err, "order rejected");
                return Err(err.into());
            }
        };

        self.record(vec![WarehouseEvent::order_created(
            &order,
            cmd.product_id,
            cmd.quantity,
        )])?;

        metrics::counter!("warehouse_orders_created_total").increment(1);
        tracing::info!(
            order_number = %order.number(),
            locations = order.allocations().len(),
            "order created"
        );
        Ok(order)
    }

    /// Ships an open order, taking its units out of the inventory.
    #[tracing::instrument(skip(self))]
    pub fn ship_order(&mut self, cmd: ShipOrder) -> Result<Shipment, DomainError> {
        let shipment = self.warehouse.ship_order(cmd.order_number)?;
        let order_number = shipment.order_number();

        let mut events: Vec<_> = shipment
            .lines
            .iter()
            .map(|line| WarehouseEvent::units_shipped(order_number, line))
            .collect();
        events.push(WarehouseEvent::order_shipped(
            order_number,
            shipment.allocated,
            shipment.shipped_quantity(),
        ));
        self.record(events)?;

        metrics::counter!("warehouse_orders_shipped_total").increment(1);
        metrics::counter!("warehouse_units_shipped_total").increment(shipment.shipped_quantity());

        if shipment.short_quantity() > 0 {
            tracing::warn!(
                %order_number,
                short = shipment.short_quantity(),
                "order shipped short"
            );
        }
        tracing::info!(
            %order_number,
            shipped = shipment.shipped_quantity(),
            "order shipped"
        );
        Ok(shipment)
    }

    /// Returns the stock records in insertion order.
    pub fn list_inventory(&self) -> Vec<StockRecord> {
        self.warehouse.inventory().records().cloned().collect()
    }

    /// Returns the open orders in creation order.
    pub fn list_orders(&self) -> Vec<Order> {
        self.warehouse.ledger().orders().cloned().collect()
    }

    /// Looks up an open order.
    pub fn get_order(&self, order_number: OrderNumber) -> Result<&Order, DomainError> {
        self.warehouse
            .ledger()
            .find_by_number(order_number)
            .ok_or_else(|| OrderError::NotFound(order_number).into())
    }

    /// Checks whether `location` can take a new stock record.
    pub fn validate_location(&self, location: &Location) -> Result<(), DomainError> {
        Ok(self.warehouse.validate_location(location)?)
    }

    /// Returns true if an open order still has units of `product_id` to ship.
    pub fn is_product_pending(&self, product_id: ProductId) -> bool {
        self.warehouse.is_product_pending(product_id)
    }

    /// Returns the products with units waiting in open orders, sorted.
    pub fn pending_products(&self) -> Vec<ProductId> {
        let mut products: Vec<_> = self
            .warehouse
            .ledger()
            .orders()
            .flat_map(Order::line_items)
            .filter(|item| item.quantity > 0)
            .map(|item| item.product_id)
            .collect();
        products.sort();
        products.dedup();
        products
    }

    /// Returns journal entries matching `query`.
    pub fn history(&self, query: &JournalQuery) -> Result<Vec<EventEnvelope>, DomainError> {
        Ok(self.journal.query(query)?)
    }

    fn record(&mut self, events: Vec<WarehouseEvent>) -> Result<Sequence, DomainError> {
        let mut sequence = self.journal.last_sequence();
        let mut envelopes = Vec::with_capacity(events.len());

        for event in &events {
            sequence = sequence.next();
            envelopes.push(
                EventEnvelope::builder()
                    .event_type(event.event_type())
                    .sequence(sequence)
                    .payload(event)?
                    .build()?,
            );
        }

        Ok(self.journal.append(envelopes)?)
    }
}
