use common::ProductId;

use super::{InventoryError, Location, StockRecord};

/// Ordered collection of stock records.
///
/// Records keep their insertion order, which is the order allocation scans
/// them in. Locations are unique and never blank.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    records: Vec<StockRecord>,
}

impl InventoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that `location` is non-blank and not occupied by another record.
    pub fn validate_location(&self, location: &Location) -> Result<(), InventoryError> {
        if location.is_blank() {
            return Err(InventoryError::BlankLocation);
        }

        if self.find_by_location(location).is_some() {
            return Err(InventoryError::DuplicateLocation(location.clone()));
        }

        Ok(())
    }

    /// Returns true if a new record could be stored at `location`.
    pub fn is_location_valid(&self, location: &Location) -> bool {
        self.validate_location(location).is_ok()
    }

    /// Appends a new stock record.
    ///
    /// Records of the same product are never merged; each location gets its own.
    pub fn add_stock(
        &mut self,
        product_id: ProductId,
        quantity: u32,
        location: Location,
    ) -> Result<&StockRecord, InventoryError> {
        self.validate_location(&location)?;

        let index = self.records.len();
        self.records.push(StockRecord::new(product_id, quantity, location));
        Ok(&self.records[index])
    }

    /// Returns records of `product_id` in insertion order.
    pub fn find_records_by_product(
        &self,
        product_id: ProductId,
    ) -> impl Iterator<Item = &StockRecord> {
        self.records.iter().filter(move |r| r.product_id == product_id)
    }

    /// Returns the record stored at `location`.
    pub fn find_by_location(&self, location: &Location) -> Option<&StockRecord> {
        self.records.iter().find(|r| &r.location == location)
    }

    /// Takes `amount` units from the record at `location`.
    ///
    /// A record whose quantity is exactly `amount` is removed; otherwise its
    /// quantity is decremented. Returns the record as it stands afterwards
    /// (quantity 0 once removed), or `None` if no record is stored there.
    /// Callers clamp `amount` to the record quantity.
    pub fn reduce_or_remove(&mut self, location: &Location, amount: u32) -> Option<StockRecord> {
        let index = self.records.iter().position(|r| &r.location == location)?;

        if self.records[index].quantity == amount {
            let mut removed = self.records.remove(index);
            removed.quantity = 0;
            Some(removed)
        } else {
            let record = &mut self.records[index];
            record.quantity = record.quantity.saturating_sub(amount);
            Some(record.clone())
        }
    }

    /// Returns all records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &StockRecord> {
        self.records.iter()
    }

    /// Returns the units on hand for `product_id` across all locations.
    pub fn total_quantity(&self, product_id: ProductId) -> u64 {
        self.find_records_by_product(product_id)
            .map(|r| u64::from(r.quantity))
            .sum()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no stock is recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: i64) -> ProductId {
        ProductId::new(id)
    }

    fn stocked() -> InventoryStore {
        let mut store = InventoryStore::new();
        store.add_stock(pid(1), 10, "A1".into()).unwrap();
        store.add_stock(pid(2), 4, "B1".into()).unwrap();
        store.add_stock(pid(1), 5, "A2".into()).unwrap();
        store
    }

    #[test]
    fn add_stock_appends_in_order() {
        let store = stocked();
        let locations: Vec<_> = store.records().map(|r| r.location.as_str()).collect();
        assert_eq!(locations, ["A1", "B1", "A2"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn blank_location_is_rejected() {
        let mut store = InventoryStore::new();

        assert_eq!(
            store.add_stock(pid(1), 1, "".into()),
            Err(InventoryError::BlankLocation)
        );
        assert_eq!(
            store.add_stock(pid(1), 1, "  ".into()),
            Err(InventoryError::BlankLocation)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_location_is_rejected() {
        let mut store = stocked();

        let result = store.add_stock(pid(9), 1, "B1".into());

        assert_eq!(result, Err(InventoryError::DuplicateLocation("B1".into())));
        assert_eq!(store.len(), 3);
        assert!(!store.is_location_valid(&"A1".into()));
        assert!(store.is_location_valid(&"C1".into()));
    }

    #[test]
    fn same_product_at_two_locations_is_not_merged() {
        let store = stocked();
        let records: Vec<_> = store.find_records_by_product(pid(1)).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].location.as_str(), "A1");
        assert_eq!(records[1].location.as_str(), "A2");
        assert_eq!(store.total_quantity(pid(1)), 15);
    }

    #[test]
    fn zero_quantity_record_is_accepted() {
        let mut store = InventoryStore::new();
        let record = store.add_stock(pid(1), 0, "Z9".into()).unwrap();
        assert_eq!(record.quantity, 0);
    }

    #[test]
    fn reduce_decrements_partial_amount() {
        let mut store = stocked();

        let after = store.reduce_or_remove(&"A2".into(), 2).unwrap();

        assert_eq!(after.quantity, 3);
        assert_eq!(store.find_by_location(&"A2".into()).unwrap().quantity, 3);
    }

    #[test]
    fn reduce_removes_record_when_exhausted() {
        let mut store = stocked();

        let after = store.reduce_or_remove(&"A1".into(), 10).unwrap();

        assert_eq!(after.quantity, 0);
        assert!(store.find_by_location(&"A1".into()).is_none());
        assert!(store.is_location_valid(&"A1".into()));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn reduce_unknown_location_is_none() {
        let mut store = stocked();
        assert!(store.reduce_or_remove(&"Q1".into(), 1).is_none());
        assert_eq!(store.len(), 3);
    }
}
