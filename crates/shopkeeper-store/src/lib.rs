//! File-backed storage for the shopkeeper catalog.
//!
//! The whole catalog (accounts, products, carts) persists as one JSON
//! document. This crate owns the two I/O operations, [`DocumentStore::load`]
//! and [`DocumentStore::save`]; everything transactional sits above it in
//! `shopkeeper-engine`.
//!
//! # Example
//!
//! ```no_run
//! use shopkeeper_store::DocumentStore;
//!
//! let store = DocumentStore::open("data/catalog.json").unwrap();
//! let doc = store.load().unwrap();
//! store.save(&doc).unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod file;

pub use error::{Result, StoreError};
pub use file::DocumentStore;
