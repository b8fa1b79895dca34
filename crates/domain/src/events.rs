//! Warehouse domain events.

use chrono::{DateTime, Utc};
use common::{OrderNumber, ProductId};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::fulfillment::ShipmentLine;
use crate::inventory::{Location, StockRecord};
use crate::order::{Allocation, Order};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the warehouse.
/// They are immutable and named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Clone {
    /// Returns the event type name used for journal filtering.
    fn event_type(&self) -> &'static str;
}

/// Events recorded by the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum WarehouseEvent {
    /// Stock was put away at a new location.
    StockReceived(StockReceivedData),

    /// An order claimed stock from one or more locations.
    OrderCreated(OrderCreatedData),

    /// Units left one location while shipping an order.
    UnitsShipped(UnitsShippedData),

    /// An order was shipped and closed.
    OrderShipped(OrderShippedData),
}

impl DomainEvent for WarehouseEvent {
    fn event_type(&self) -> &'static str {
        match self {
            WarehouseEvent::StockReceived(_) => "StockReceived",
            WarehouseEvent::OrderCreated(_) => "OrderCreated",
            WarehouseEvent::UnitsShipped(_) => "UnitsShipped",
            WarehouseEvent::OrderShipped(_) => "OrderShipped",
        }
    }
}

/// Data for StockReceived event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReceivedData {
    pub product_id: ProductId,
    pub quantity: u32,
    pub location: Location,
    pub received_at: DateTime<Utc>,
}

/// Data for OrderCreated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreatedData {
    pub order_number: OrderNumber,
    pub product_id: ProductId,
    pub quantity: u32,
    /// Claimed units per location, in allocation order.
    pub allocations: Vec<Allocation>,
    pub created_at: DateTime<Utc>,
}

/// Data for UnitsShipped event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitsShippedData {
    pub order_number: OrderNumber,
    pub product_id: ProductId,
    pub location: Location,
    pub quantity: u32,
    /// Units left at the location; 0 means the record was removed.
    pub remaining: u32,
}

/// Data for OrderShipped event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderShippedData {
    pub order_number: OrderNumber,
    pub allocated_quantity: u64,
    pub shipped_quantity: u64,
    pub shipped_at: DateTime<Utc>,
}

// Factory methods
impl WarehouseEvent {
    /// Creates a StockReceived event.
    pub fn stock_received(record: &StockRecord) -> Self {
        WarehouseEvent::StockReceived(StockReceivedData {
            product_id: record.product_id,
            quantity: record.quantity,
            location: record.location.clone(),
            received_at: Utc::now(),
        })
    }

    /// Creates an OrderCreated event.
    pub fn order_created(order: &Order, product_id: ProductId, quantity: u32) -> Self {
        WarehouseEvent::OrderCreated(OrderCreatedData {
            order_number: order.number(),
            product_id,
            quantity,
            allocations: order.allocations().to_vec(),
            created_at: Utc::now(),
        })
    }

    /// Creates an UnitsShipped event.
    pub fn units_shipped(order_number: OrderNumber, line: &ShipmentLine) -> Self {
        WarehouseEvent::UnitsShipped(UnitsShippedData {
            order_number,
            product_id: line.product_id,
            location: line.location.clone(),
            quantity: line.quantity,
            remaining: line.remaining,
        })
    }

    /// Creates an OrderShipped event.
    pub fn order_shipped(
        order_number: OrderNumber,
        allocated_quantity: u64,
        shipped_quantity: u64,
    ) -> Self {
        WarehouseEvent::OrderShipped(OrderShippedData {
            order_number,
            allocated_quantity,
            shipped_quantity,
            shipped_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_types() {
        let record = StockRecord::new(ProductId::new(1), 5, "A1");
        assert_eq!(
            WarehouseEvent::stock_received(&record).event_type(),
            "StockReceived"
        );
        assert_eq!(
            WarehouseEvent::order_shipped(OrderNumber::first(), 5, 5).event_type(),
            "OrderShipped"
        );
    }

    #[test]
    fn test_serialization_uses_type_tag() {
        let line = ShipmentLine {
            product_id: ProductId::new(1),
            location: "A2".into(),
            quantity: 2,
            remaining: 3,
        };
        let event = WarehouseEvent::units_shipped(OrderNumber::first(), &line);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "UnitsShipped");
        assert_eq!(json["data"]["location"], "A2");
        assert_eq!(json["data"]["remaining"], 3);

        let back: WarehouseEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_order_created_copies_allocations() {
        let order = Order::new(
            OrderNumber::new(4),
            vec![Allocation::new(ProductId::new(1), 3, "A1")],
        );

        let WarehouseEvent::OrderCreated(data) =
            WarehouseEvent::order_created(&order, ProductId::new(1), 3)
        else {
            panic!("expected OrderCreated");
        };

        assert_eq!(data.order_number, OrderNumber::new(4));
        assert_eq!(data.allocations, order.allocations());
    }
}
