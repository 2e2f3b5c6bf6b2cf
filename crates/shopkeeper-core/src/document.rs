//! The persisted catalog document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::ids::ProductId;
use crate::product::Product;

/// The aggregate root persisted as a single JSON document.
///
/// Three keyed sections: accounts by email, products by id, carts by
/// account email. A cart holds one id per unit, duplicates allowed, in
/// insertion order. `BTreeMap` keeps listings and serialized output
/// ordered by key, and each section defaults to empty so a document
/// missing one still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Registered accounts, keyed by email.
    #[serde(default)]
    pub accounts: BTreeMap<String, Account>,
    /// Products, keyed by id.
    #[serde(default)]
    pub products: BTreeMap<ProductId, Product>,
    /// Carts, keyed by account email.
    #[serde(default)]
    pub carts: BTreeMap<String, Vec<ProductId>>,
}

impl CatalogDocument {
    /// An empty document, the shape persisted on first touch.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}
