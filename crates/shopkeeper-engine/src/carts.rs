//! Cart ledger: per-account carts.
//!
//! A cart is a list of product ids, one per unit, duplicates allowed, in
//! insertion order. Adding to a cart checks stock but reserves nothing;
//! checkout re-validates every entry against the stock in force when it
//! runs.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use shopkeeper_core::ProductId;

use crate::error::{CatalogError, Result};
use crate::EngineInner;

/// Handle for cart operations. Cheap to clone.
#[derive(Clone)]
pub struct CartLedger {
    inner: Arc<EngineInner>,
}

/// One cart entry as shown to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    /// Product id.
    pub id: ProductId,
    /// Product name at view time.
    pub name: String,
    /// Unit price at view time, in minor currency units.
    pub price: i64,
}

/// A cart snapshot: resolvable lines, their total, and stale entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    /// One line per unit, in insertion order.
    pub lines: Vec<CartLine>,
    /// Sum of line prices, in minor currency units.
    pub total: i64,
    /// Entries whose product no longer exists. Skipped, not charged.
    pub stale: Vec<ProductId>,
}

impl CartView {
    /// Whether the cart resolves to nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.stale.is_empty()
    }
}

impl CartLedger {
    pub(crate) fn new(inner: Arc<EngineInner>) -> Self {
        Self { inner }
    }

    /// Append one unit of `id` to the account's cart.
    ///
    /// Stock is checked, not reserved: the unit can still be lost to
    /// another buyer before checkout re-validates it.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::AccountNotFound`] if the email is not registered.
    /// - [`CatalogError::ProductNotFound`] if the id is unknown.
    /// - [`CatalogError::OutOfStock`] if the product has zero stock.
    /// - [`CatalogError::StorageUnavailable`] on storage failure.
    pub fn add_item(&self, email: &str, id: ProductId) -> Result<()> {
        let owned = email.to_string();
        self.inner.commit(move |doc| {
            if !doc.accounts.contains_key(&owned) {
                return Err(CatalogError::AccountNotFound { email: owned });
            }
            let product = doc
                .products
                .get(&id)
                .ok_or(CatalogError::ProductNotFound { id })?;
            if !product.in_stock() {
                return Err(CatalogError::OutOfStock { id });
            }
            doc.carts.entry(owned).or_default().push(id);
            Ok(())
        })?;
        debug!(email, %id, "Added to cart");
        Ok(())
    }

    /// Snapshot the account's cart.
    ///
    /// Unknown emails and absent carts read as empty. Entries whose
    /// product has disappeared are reported in
    /// [`CartView::stale`] and excluded from the lines and the total.
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidInput`] if the line prices overflow the
    /// representable total;
    /// [`CatalogError::StorageUnavailable`] on storage failure.
    pub fn view_cart(&self, email: &str) -> Result<CartView> {
        let doc = self.inner.snapshot()?;
        let entries = doc.carts.get(email).map(Vec::as_slice).unwrap_or_default();

        let mut lines = Vec::with_capacity(entries.len());
        let mut total: i64 = 0;
        let mut stale = Vec::new();
        for id in entries {
            match doc.products.get(id) {
                Some(product) => {
                    total = total.checked_add(product.price).ok_or_else(|| {
                        CatalogError::InvalidInput {
                            field: "cart",
                            reason: "total overflows the representable amount".to_string(),
                        }
                    })?;
                    lines.push(CartLine {
                        id: *id,
                        name: product.name.clone(),
                        price: product.price,
                    });
                }
                None => stale.push(*id),
            }
        }
        if !stale.is_empty() {
            warn!(email, stale = stale.len(), "Cart references products that no longer exist");
        }
        Ok(CartView {
            lines,
            total,
            stale,
        })
    }

    /// Empty the account's cart.
    ///
    /// Idempotent: clearing an absent or already empty cart succeeds, and
    /// an absent cart key is never created.
    ///
    /// # Errors
    ///
    /// [`CatalogError::StorageUnavailable`] on storage failure.
    pub fn clear(&self, email: &str) -> Result<()> {
        let owned = email.to_string();
        let dropped = self.inner.commit(move |doc| {
            Ok(match doc.carts.get_mut(&owned) {
                Some(cart) => {
                    let dropped = cart.len();
                    cart.clear();
                    dropped
                }
                None => 0,
            })
        })?;
        if dropped > 0 {
            debug!(email, dropped, "Cart cleared");
        }
        Ok(())
    }
}
