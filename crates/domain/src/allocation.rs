//! Allocation: deciding which locations supply a requested quantity.
//!
//! Planning is pure. [`allocate`] only reads the inventory and the ledger;
//! the warehouse commits the result as a new order when it succeeds.

use common::ProductId;

use crate::inventory::InventoryStore;
use crate::order::{Allocation, OrderError, OrderLedger};

/// Plans the allocations that cover `requested` units of `product_id`.
///
/// Records are scanned first-fit in insertion order. A record is eligible
/// when it holds units of the product and its location is not claimed by an
/// open order. Each eligible record contributes `min(remaining, quantity)`
/// units until the request is covered.
///
/// A request for 0 units is always covered: it claims the first eligible
/// location with a 0-unit allocation, or nothing when none is eligible.
///
/// Fails with `InsufficientStock` when eligible stock falls short; in that
/// case nothing is returned and nothing was changed.
pub fn allocate(
    inventory: &InventoryStore,
    ledger: &OrderLedger,
    product_id: ProductId,
    requested: u32,
) -> Result<Vec<Allocation>, OrderError> {
    let mut remaining = requested;
    let mut allocations = Vec::new();

    for record in inventory.find_records_by_product(product_id) {
        if !record.has_stock_of(product_id) || ledger.is_location_emptied(&record.location) {
            continue;
        }

        let claimed = remaining.min(record.quantity);
        allocations.push(Allocation::new(product_id, claimed, record.location.clone()));
        remaining -= claimed;

        if remaining == 0 {
            break;
        }
    }

    if remaining > 0 {
        return Err(OrderError::InsufficientStock {
            product_id,
            requested,
            available: u64::from(requested - remaining),
        });
    }

    Ok(allocations)
}

/// Returns the units of `product_id` that a new order could still claim.
pub fn eligible_quantity(
    inventory: &InventoryStore,
    ledger: &OrderLedger,
    product_id: ProductId,
) -> u64 {
    inventory
        .find_records_by_product(product_id)
        .filter(|r| r.has_stock_of(product_id) && !ledger.is_location_emptied(&r.location))
        .map(|r| u64::from(r.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Order;
    use common::OrderNumber;

    fn pid(id: i64) -> ProductId {
        ProductId::new(id)
    }

    fn inventory(records: &[(i64, u32, &str)]) -> InventoryStore {
        let mut store = InventoryStore::new();
        for &(product, quantity, location) in records {
            store.add_stock(pid(product), quantity, location.into()).unwrap();
        }
        store
    }

    #[test]
    fn allocates_first_fit_across_locations() {
        let store = inventory(&[(1, 10, "A1"), (1, 5, "A2")]);
        let ledger = OrderLedger::new();

        let allocations = allocate(&store, &ledger, pid(1), 12).unwrap();

        assert_eq!(
            allocations,
            vec![
                Allocation::new(pid(1), 10, "A1"),
                Allocation::new(pid(1), 2, "A2"),
            ]
        );
    }

    #[test]
    fn stops_once_request_is_covered() {
        let store = inventory(&[(1, 10, "A1"), (1, 5, "A2")]);
        let ledger = OrderLedger::new();

        let allocations = allocate(&store, &ledger, pid(1), 4).unwrap();

        assert_eq!(allocations, vec![Allocation::new(pid(1), 4, "A1")]);
    }

    #[test]
    fn skips_other_products_and_empty_records() {
        let store = inventory(&[(2, 50, "B1"), (1, 0, "A0"), (1, 3, "A1")]);
        let ledger = OrderLedger::new();

        let allocations = allocate(&store, &ledger, pid(1), 3).unwrap();

        assert_eq!(allocations, vec![Allocation::new(pid(1), 3, "A1")]);
    }

    #[test]
    fn skips_locations_claimed_by_open_orders() {
        let store = inventory(&[(1, 10, "A1"), (1, 5, "A2")]);
        let mut ledger = OrderLedger::new();
        let number = ledger.next_order_number();
        ledger.append(Order::new(number, vec![Allocation::new(pid(1), 1, "A1")]));

        let allocations = allocate(&store, &ledger, pid(1), 5).unwrap();
        assert_eq!(allocations, vec![Allocation::new(pid(1), 5, "A2")]);

        assert_eq!(eligible_quantity(&store, &ledger, pid(1)), 5);
    }

    #[test]
    fn reports_eligible_quantity_on_shortfall() {
        let store = inventory(&[(1, 10, "A1"), (1, 5, "A2")]);
        let ledger = OrderLedger::new();

        let err = allocate(&store, &ledger, pid(1), 16).unwrap_err();

        assert_eq!(
            err,
            OrderError::InsufficientStock {
                product_id: pid(1),
                requested: 16,
                available: 15,
            }
        );
    }

    #[test]
    fn unknown_product_is_insufficient_stock() {
        let store = inventory(&[(1, 10, "A1")]);
        let ledger = OrderLedger::new();

        let err = allocate(&store, &ledger, pid(42), 1).unwrap_err();

        assert!(matches!(err, OrderError::InsufficientStock { available: 0, .. }));
    }

    #[test]
    fn zero_quantity_claims_first_eligible_location() {
        let store = inventory(&[(2, 4, "B1"), (1, 10, "A1"), (1, 5, "A2")]);
        let ledger = OrderLedger::new();

        let allocations = allocate(&store, &ledger, pid(1), 0).unwrap();

        assert_eq!(allocations, vec![Allocation::new(pid(1), 0, "A1")]);
    }

    #[test]
    fn zero_quantity_without_stock_is_an_empty_plan() {
        let store = inventory(&[(1, 10, "A1")]);
        let ledger = OrderLedger::new();

        let allocations = allocate(&store, &ledger, pid(99), 0).unwrap();

        assert!(allocations.is_empty());
        assert_eq!(OrderNumber::first(), ledger.peek_next_order_number());
    }
}
