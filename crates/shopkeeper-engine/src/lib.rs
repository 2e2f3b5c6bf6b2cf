//! Transactional engine over the shopkeeper catalog.
//!
//! The engine turns the raw document storage of `shopkeeper-store` into a
//! small set of atomic operations:
//!
//! - [`AccountDirectory`]: registration and identity lookups
//! - [`ProductLedger`]: product CRUD, search, and id allocation
//! - [`CartLedger`]: per-account carts
//! - [`CatalogEngine::checkout`]: the one multi-entity transaction
//!
//! Every mutation is a serialized load, mutate, save cycle over the whole
//! document. The save only happens when the mutation succeeds, so a failed
//! operation leaves the persisted catalog exactly as it was. Reads load
//! one consistent snapshot and never lock.
//!
//! # Example
//!
//! ```no_run
//! use shopkeeper_engine::{CatalogEngine, PaymentMethod};
//!
//! let engine = CatalogEngine::open("data/catalog.json").unwrap();
//! engine
//!     .accounts()
//!     .register("Alice", "alice@example.com", "hunter2")
//!     .unwrap();
//! let id = engine.products().add("Pen", 10, 2).unwrap();
//! engine.carts().add_item("alice@example.com", id).unwrap();
//! let receipt = engine
//!     .checkout("alice@example.com", PaymentMethod::CreditCard)
//!     .unwrap();
//! assert_eq!(receipt.total, 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod accounts;
pub mod carts;
pub mod checkout;
pub mod config;
pub mod error;
pub mod products;

pub use accounts::{AccountDirectory, AccountRecord};
pub use carts::{CartLedger, CartLine, CartView};
pub use config::EngineConfig;
pub use error::{CatalogError, Result};
pub use products::{ProductLedger, ProductPatch, ProductRecord};

pub use shopkeeper_core::{PaymentMethod, ProductId, Receipt};

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use shopkeeper_core::CatalogDocument;
use shopkeeper_store::DocumentStore;

/// Handle to the catalog. Cheap to clone; all clones share one store and
/// one write lock.
#[derive(Clone)]
pub struct CatalogEngine {
    inner: Arc<EngineInner>,
}

impl CatalogEngine {
    /// Open the engine over the document at `path`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::StorageUnavailable`] if the store cannot be opened.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = DocumentStore::open(path)?;
        Ok(Self {
            inner: Arc::new(EngineInner {
                store,
                write_lock: Mutex::new(()),
            }),
        })
    }

    /// Open the engine using [`EngineConfig`].
    ///
    /// # Errors
    ///
    /// [`CatalogError::StorageUnavailable`] if the store cannot be opened.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Self::open(&config.data_file)
    }

    /// Account operations.
    #[must_use]
    pub fn accounts(&self) -> AccountDirectory {
        AccountDirectory::new(Arc::clone(&self.inner))
    }

    /// Product operations.
    #[must_use]
    pub fn products(&self) -> ProductLedger {
        ProductLedger::new(Arc::clone(&self.inner))
    }

    /// Cart operations.
    #[must_use]
    pub fn carts(&self) -> CartLedger {
        CartLedger::new(Arc::clone(&self.inner))
    }
}

/// Shared state behind every handle.
pub(crate) struct EngineInner {
    store: DocumentStore,
    write_lock: Mutex<()>,
}

impl EngineInner {
    /// Run one serialized load, mutate, save cycle.
    ///
    /// The lock scope covers the whole cycle, so concurrent mutators never
    /// interleave between load and save. The save runs only if `op`
    /// succeeds; a failing operation discards its working copy and the
    /// persisted document stays untouched.
    pub(crate) fn commit<T>(
        &self,
        op: impl FnOnce(&mut CatalogDocument) -> Result<T>,
    ) -> Result<T> {
        // A poisoned lock still guards a document whose last save is
        // intact, so recover the guard instead of propagating the panic.
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut doc = self.store.load()?;
        let out = op(&mut doc)?;
        self.store.save(&doc)?;
        Ok(out)
    }

    /// Load one consistent snapshot for a read.
    ///
    /// Takes no lock: loading never writes, so a snapshot cannot disturb
    /// a commit running alongside it.
    pub(crate) fn snapshot(&self) -> Result<CatalogDocument> {
        Ok(self.store.load()?)
    }
}
