//! Property tests for allocation and shipping.

use std::collections::HashSet;

use domain::{Location, OrderError, PlaceOrder, ProductId, ReceiveStock, ShipOrder, Warehouse};
use proptest::prelude::*;

/// Builds a warehouse holding one record per entry, at locations `L0`, `L1`, ...
fn stocked(records: &[(i64, u32)]) -> Warehouse {
    let mut warehouse = Warehouse::new();
    for (i, (product, quantity)) in records.iter().enumerate() {
        let cmd = ReceiveStock::new(ProductId::new(*product), *quantity, format!("L{i}"));
        warehouse
            .add_stock(cmd.product_id, cmd.quantity, cmd.location)
            .unwrap();
    }
    warehouse
}

fn records_strategy() -> impl Strategy<Value = Vec<(i64, u32)>> {
    prop::collection::vec((1i64..=3, 0u32..20), 0..12)
}

fn orders_strategy() -> impl Strategy<Value = Vec<(i64, u32)>> {
    prop::collection::vec((1i64..=3, 1u32..30), 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: a successful order claims exactly the requested units from
    /// distinct, unclaimed locations, never more than a record holds.
    #[test]
    fn allocation_covers_request_exactly(
        records in records_strategy(),
        orders in orders_strategy(),
    ) {
        let mut warehouse = stocked(&records);

        for (product, quantity) in orders {
            let cmd = PlaceOrder::new(ProductId::new(product), quantity);
            let claimed_before: HashSet<Location> = warehouse
                .ledger()
                .orders()
                .flat_map(|o| o.source_locations().cloned())
                .collect();

            let Ok(order) = warehouse.create_order(cmd.product_id, cmd.quantity) else {
                continue;
            };

            prop_assert_eq!(order.total_quantity(), u64::from(quantity));

            let mut seen = HashSet::new();
            for allocation in order.allocations() {
                prop_assert!(allocation.quantity > 0);
                prop_assert!(!claimed_before.contains(&allocation.location));
                prop_assert!(seen.insert(allocation.location.clone()));

                let record = warehouse
                    .inventory()
                    .find_by_location(&allocation.location)
                    .unwrap();
                prop_assert_eq!(record.product_id, allocation.product_id);
                prop_assert!(allocation.quantity <= record.quantity);
            }
        }
    }

    /// Property: a rejected order leaves inventory and ledger untouched.
    #[test]
    fn rejected_order_changes_nothing(
        records in records_strategy(),
        orders in orders_strategy(),
    ) {
        let mut warehouse = stocked(&records);

        for (product, quantity) in orders {
            let product_id = ProductId::new(product);
            let inventory_before: Vec<_> = warehouse.inventory().records().cloned().collect();
            let orders_before: Vec<_> = warehouse.ledger().orders().cloned().collect();
            let next_before = warehouse.ledger().peek_next_order_number();
            let eligible = warehouse.eligible_quantity(product_id);

            match warehouse.create_order(product_id, quantity) {
                Ok(_) => prop_assert!(u64::from(quantity) <= eligible),
                Err(err) => {
                    let is_shortfall = matches!(err, OrderError::InsufficientStock { .. });
                    prop_assert!(is_shortfall);
                    prop_assert!(u64::from(quantity) > eligible);

                    let inventory_after: Vec<_> =
                        warehouse.inventory().records().cloned().collect();
                    let orders_after: Vec<_> = warehouse.ledger().orders().cloned().collect();
                    prop_assert_eq!(inventory_after, inventory_before);
                    prop_assert_eq!(orders_after, orders_before);
                    prop_assert_eq!(warehouse.ledger().peek_next_order_number(), next_before);
                }
            }
        }
    }

    /// Property: shipping every open order removes exactly the claimed units.
    #[test]
    fn shipping_conserves_units(
        records in records_strategy(),
        orders in orders_strategy(),
    ) {
        let mut warehouse = stocked(&records);
        let products = [1, 2, 3].map(ProductId::new);
        let on_hand = |w: &Warehouse| products.map(|p| w.inventory().total_quantity(p));

        let mut created = Vec::new();
        for (product, quantity) in orders {
            if let Ok(order) = warehouse.create_order(ProductId::new(product), quantity) {
                created.push(order);
            }
        }

        let before = on_hand(&warehouse);
        let mut shipped = [0u64; 3];

        for order in &created {
            let cmd = ShipOrder::new(order.number());
            let shipment = warehouse.ship_order(cmd.order_number).unwrap();

            prop_assert_eq!(shipment.short_quantity(), 0);
            for line in &shipment.lines {
                let index = products.iter().position(|p| *p == line.product_id).unwrap();
                shipped[index] += u64::from(line.quantity);
            }
        }

        let after = on_hand(&warehouse);
        for i in 0..products.len() {
            prop_assert_eq!(before[i] - after[i], shipped[i]);
        }
        prop_assert!(warehouse.ledger().is_empty());
    }
}
