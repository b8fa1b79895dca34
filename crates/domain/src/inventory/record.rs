//! Stock records and storage locations.

use common::ProductId;
use serde::{Deserialize, Serialize};

/// Name of a physical stock slot (e.g. "A1").
///
/// A location holds at most one stock record at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Creates a location from a string. No validation happens here.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the location as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the name is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Location {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Units of one product stocked at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// The stocked product.
    pub product_id: ProductId,

    /// Units currently on hand.
    pub quantity: u32,

    /// Where the units are stored.
    pub location: Location,
}

impl StockRecord {
    /// Creates a new stock record.
    pub fn new(product_id: ProductId, quantity: u32, location: impl Into<Location>) -> Self {
        Self {
            product_id,
            quantity,
            location: location.into(),
        }
    }

    /// Returns true if this record holds units of `product_id`.
    pub fn has_stock_of(&self, product_id: ProductId) -> bool {
        self.product_id == product_id && self.quantity > 0
    }
}
