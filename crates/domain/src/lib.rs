//! Domain layer of the warehouse tracker.
//!
//! This crate provides:
//! - Inventory store of stock records keyed by unique locations
//! - Order ledger with sequential order numbers
//! - Allocation of requested units across locations (first fit, all or nothing)
//! - Fulfillment of open orders against the inventory
//! - The `Warehouse` aggregate and the journaled `WarehouseService`

pub mod allocation;
pub mod commands;
pub mod error;
pub mod events;
pub mod fulfillment;
pub mod inventory;
pub mod order;
pub mod service;
pub mod warehouse;

pub use commands::{PlaceOrder, ReceiveStock, ShipOrder};
pub use common::{OrderNumber, ProductId};
pub use error::DomainError;
pub use events::{
    DomainEvent, OrderCreatedData, OrderShippedData, StockReceivedData, UnitsShippedData,
    WarehouseEvent,
};
pub use fulfillment::{Shipment, ShipmentLine};
pub use inventory::{InventoryError, InventoryStore, Location, StockRecord};
pub use order::{Allocation, LineItem, Order, OrderError, OrderLedger, OrderState};
pub use service::WarehouseService;
pub use warehouse::Warehouse;
