//! Product ledger: CRUD, search, and id allocation.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use shopkeeper_core::{Product, ProductId};

use crate::error::{CatalogError, Result};
use crate::EngineInner;

/// Bound on random draws before id allocation gives up.
const MAX_ID_ATTEMPTS: u32 = 64;

/// Handle for product operations. Cheap to clone.
#[derive(Clone)]
pub struct ProductLedger {
    inner: Arc<EngineInner>,
}

/// A product as listed to callers, id included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    /// Product id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in minor currency units.
    pub price: i64,
    /// Units in stock.
    pub quantity: i64,
}

impl ProductRecord {
    fn from_entry(id: ProductId, product: &Product) -> Self {
        Self {
            id,
            name: product.name.clone(),
            price: product.price,
            quantity: product.quantity,
        }
    }
}

/// Partial update for [`ProductLedger::edit`]. `None` keeps the prior
/// value.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    /// New display name.
    pub name: Option<String>,
    /// New unit price in minor currency units.
    pub price: Option<i64>,
    /// New stock level.
    pub quantity: Option<i64>,
}

impl ProductLedger {
    pub(crate) fn new(inner: Arc<EngineInner>) -> Self {
        Self { inner }
    }

    /// Add a product and return its freshly allocated id.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidInput`] for a blank name or a negative
    ///   price or quantity.
    /// - [`CatalogError::IdSpaceExhausted`] if id allocation keeps
    ///   colliding.
    /// - [`CatalogError::StorageUnavailable`] on storage failure.
    pub fn add(&self, name: &str, price: i64, quantity: i64) -> Result<ProductId> {
        ensure_name(name)?;
        ensure_price(price)?;
        ensure_quantity(quantity)?;
        let name = name.to_string();
        let id = self.inner.commit(move |doc| {
            let id = allocate_id(&doc.products)?;
            doc.products.insert(
                id,
                Product {
                    name,
                    price,
                    quantity,
                },
            );
            Ok(id)
        })?;
        info!(%id, "Product added");
        Ok(id)
    }

    /// Look up one product by id. Absence is not an error.
    ///
    /// # Errors
    ///
    /// [`CatalogError::StorageUnavailable`] on storage failure.
    pub fn get(&self, id: ProductId) -> Result<Option<ProductRecord>> {
        let doc = self.inner.snapshot()?;
        Ok(doc
            .products
            .get(&id)
            .map(|product| ProductRecord::from_entry(id, product)))
    }

    /// List every product, ordered by id.
    ///
    /// # Errors
    ///
    /// [`CatalogError::StorageUnavailable`] on storage failure.
    pub fn view(&self) -> Result<Vec<ProductRecord>> {
        let doc = self.inner.snapshot()?;
        Ok(doc
            .products
            .iter()
            .map(|(id, product)| ProductRecord::from_entry(*id, product))
            .collect())
    }

    /// List products whose name contains `query`, case-insensitively.
    ///
    /// An empty result is an ordinary outcome, not an error.
    ///
    /// # Errors
    ///
    /// [`CatalogError::StorageUnavailable`] on storage failure.
    pub fn search(&self, query: &str) -> Result<Vec<ProductRecord>> {
        let needle = query.to_lowercase();
        let doc = self.inner.snapshot()?;
        Ok(doc
            .products
            .iter()
            .filter(|(_, product)| product.name.to_lowercase().contains(&needle))
            .map(|(id, product)| ProductRecord::from_entry(*id, product))
            .collect())
    }

    /// Apply a partial update to one product.
    ///
    /// Fields left `None` keep their prior value. The whole patch is
    /// validated before anything is applied.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidInput`] for a blank name or a negative
    ///   price or quantity in the patch.
    /// - [`CatalogError::ProductNotFound`] if the id is unknown.
    /// - [`CatalogError::StorageUnavailable`] on storage failure.
    pub fn edit(&self, id: ProductId, patch: ProductPatch) -> Result<()> {
        if let Some(name) = &patch.name {
            ensure_name(name)?;
        }
        if let Some(price) = patch.price {
            ensure_price(price)?;
        }
        if let Some(quantity) = patch.quantity {
            ensure_quantity(quantity)?;
        }
        self.inner.commit(move |doc| {
            let product = doc
                .products
                .get_mut(&id)
                .ok_or(CatalogError::ProductNotFound { id })?;
            if let Some(name) = patch.name {
                product.name = name;
            }
            if let Some(price) = patch.price {
                product.price = price;
            }
            if let Some(quantity) = patch.quantity {
                product.quantity = quantity;
            }
            Ok(())
        })?;
        debug!(%id, "Product updated");
        Ok(())
    }

    /// Remove a product and every cart entry that references it.
    ///
    /// The removal and the cart cleanup commit in the same save, so no
    /// cart is left pointing at a product that is gone.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::ProductNotFound`] if the id is unknown.
    /// - [`CatalogError::StorageUnavailable`] on storage failure.
    pub fn delete(&self, id: ProductId) -> Result<()> {
        let dropped = self.inner.commit(move |doc| {
            if doc.products.remove(&id).is_none() {
                return Err(CatalogError::ProductNotFound { id });
            }
            let mut dropped = 0;
            for cart in doc.carts.values_mut() {
                let before = cart.len();
                cart.retain(|entry| *entry != id);
                dropped += before - cart.len();
            }
            Ok(dropped)
        })?;
        if dropped > 0 {
            debug!(%id, dropped, "Dropped deleted product from carts");
        }
        info!(%id, "Product deleted");
        Ok(())
    }
}

/// Draw an unused id, re-drawing on collision up to a fixed bound.
fn allocate_id(products: &BTreeMap<ProductId, Product>) -> Result<ProductId> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = ProductId::random();
        if !products.contains_key(&id) {
            return Ok(id);
        }
    }
    Err(CatalogError::IdSpaceExhausted {
        attempts: MAX_ID_ATTEMPTS,
    })
}

fn ensure_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::InvalidInput {
            field: "name",
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}

fn ensure_price(price: i64) -> Result<()> {
    if price < 0 {
        return Err(CatalogError::InvalidInput {
            field: "price",
            reason: "must not be negative".to_string(),
        });
    }
    Ok(())
}

fn ensure_quantity(quantity: i64) -> Result<()> {
    if quantity < 0 {
        return Err(CatalogError::InvalidInput {
            field: "quantity",
            reason: "must not be negative".to_string(),
        });
    }
    Ok(())
}
