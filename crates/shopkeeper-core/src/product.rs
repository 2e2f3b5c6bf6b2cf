//! Catalog products.

use serde::{Deserialize, Serialize};

/// A product held in the catalog, keyed externally by
/// [`ProductId`](crate::ProductId).
///
/// `price` is a unit price in minor currency units; `quantity` is units in
/// stock. Both are validated non-negative at the write boundaries, and no
/// committed document ever carries a negative quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name.
    pub name: String,
    /// Unit price in minor currency units.
    pub price: i64,
    /// Units in stock.
    pub quantity: i64,
}

impl Product {
    /// Whether at least one unit is in stock.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}
