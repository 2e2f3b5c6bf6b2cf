//! Common test utilities for the engine integration tests.

#![allow(dead_code)] // Not every test file uses every helper

use std::path::PathBuf;

use tempfile::TempDir;

use shopkeeper_core::{CatalogDocument, ProductId};
use shopkeeper_engine::CatalogEngine;
use shopkeeper_store::DocumentStore;

/// Test harness with an engine over a temporary catalog document.
pub struct TestHarness {
    /// The engine under test.
    pub engine: CatalogEngine,
    /// Keeps the temporary directory alive for the duration of the test.
    pub temp_dir: TempDir,
}

impl TestHarness {
    /// Create a harness over a fresh, empty catalog.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let engine = CatalogEngine::open(temp_dir.path().join("catalog.json"))
            .expect("Failed to open engine");
        Self { engine, temp_dir }
    }

    /// Path of the catalog document backing this harness.
    pub fn data_file(&self) -> PathBuf {
        self.temp_dir.path().join("catalog.json")
    }

    /// Open a second engine over the same document, as a restarted
    /// process would.
    pub fn reopen(&self) -> CatalogEngine {
        CatalogEngine::open(self.data_file()).expect("Failed to reopen engine")
    }

    /// Register an account with a throwaway password.
    pub fn register(&self, name: &str, email: &str) {
        self.engine
            .accounts()
            .register(name, email, "pw")
            .expect("Failed to register account");
    }

    /// Add a product and return its id.
    pub fn add_product(&self, name: &str, price: i64, quantity: i64) -> ProductId {
        self.engine
            .products()
            .add(name, price, quantity)
            .expect("Failed to add product")
    }

    /// Read the persisted document directly, bypassing the engine.
    pub fn read_document(&self) -> CatalogDocument {
        DocumentStore::open(self.data_file())
            .expect("Failed to open store")
            .load()
            .expect("Failed to load document")
    }

    /// Overwrite the persisted document directly, bypassing the engine.
    pub fn write_document(&self, doc: &CatalogDocument) {
        DocumentStore::open(self.data_file())
            .expect("Failed to open store")
            .save(doc)
            .expect("Failed to save document");
    }
}
