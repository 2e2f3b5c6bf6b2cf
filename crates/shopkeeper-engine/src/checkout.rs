//! The checkout transaction.
//!
//! Checkout is the one operation that touches accounts, products, and
//! carts together. It runs as a single load, validate, mutate, save cycle
//! under the write lock: every cart entry is validated against current
//! stock before any quantity changes, and the stock decrements and the
//! cart emptying reach the document in the same save.

use std::collections::BTreeMap;

use tracing::info;

use shopkeeper_core::{PaymentMethod, ProductId, Receipt};

use crate::error::{CatalogError, Result};
use crate::CatalogEngine;

impl CatalogEngine {
    /// Convert the account's cart into stock decrements and a receipt.
    ///
    /// A cart may hold the same id several times; each entry costs one
    /// unit of stock, and the whole cart is priced at the unit prices in
    /// force now, not at add-to-cart time. A failed checkout changes
    /// nothing: the cart, the stock, and the document stay as they were.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::AccountNotFound`] if the email is not registered.
    /// - [`CatalogError::EmptyCart`] if the cart is absent or empty.
    /// - [`CatalogError::ProductNotFound`] if an entry references a
    ///   product that no longer exists.
    /// - [`CatalogError::InsufficientStock`] if the cart requires more
    ///   units of a product than are in stock.
    /// - [`CatalogError::InvalidInput`] if pricing the cart overflows the
    ///   representable total.
    /// - [`CatalogError::StorageUnavailable`] on storage failure.
    pub fn checkout(&self, email: &str, payment_method: PaymentMethod) -> Result<Receipt> {
        let email = email.to_string();
        let receipt = self.inner.commit(move |doc| {
            if !doc.accounts.contains_key(&email) {
                return Err(CatalogError::AccountNotFound { email });
            }
            let cart = doc.carts.get(&email).cloned().unwrap_or_default();
            if cart.is_empty() {
                return Err(CatalogError::EmptyCart { email });
            }

            // Units required per distinct product, since duplicate cart
            // entries each consume a unit.
            let mut required: BTreeMap<ProductId, i64> = BTreeMap::new();
            for id in &cart {
                *required.entry(*id).or_insert(0) += 1;
            }

            // Validate the whole cart before touching any quantity.
            let mut total: i64 = 0;
            for (&id, &requested) in &required {
                let product = doc
                    .products
                    .get(&id)
                    .ok_or(CatalogError::ProductNotFound { id })?;
                if product.quantity < requested {
                    return Err(CatalogError::InsufficientStock {
                        id,
                        available: product.quantity,
                        requested,
                    });
                }
                total = product
                    .price
                    .checked_mul(requested)
                    .and_then(|line| total.checked_add(line))
                    .ok_or_else(|| CatalogError::InvalidInput {
                        field: "cart",
                        reason: "total overflows the representable amount".to_string(),
                    })?;
            }

            // Commit: decrement stock and empty the cart in one save.
            for (&id, &requested) in &required {
                if let Some(product) = doc.products.get_mut(&id) {
                    product.quantity -= requested;
                }
            }
            if let Some(entries) = doc.carts.get_mut(&email) {
                entries.clear();
            }

            Ok(Receipt::issue(email, cart, total, payment_method))
        })?;
        info!(
            receipt = %receipt.id,
            email = %receipt.email,
            units = receipt.unit_count(),
            total = receipt.total,
            method = %receipt.payment_method,
            "Checkout committed"
        );
        Ok(receipt)
    }
}
