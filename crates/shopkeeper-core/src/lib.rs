//! Core types for the shopkeeper catalog.
//!
//! This crate provides the foundational types shared by the storage and
//! engine layers:
//!
//! - **Identifiers**: [`ProductId`], [`ReceiptId`]
//! - **Entities**: [`Account`], [`Product`]
//! - **Checkout**: [`PaymentMethod`], [`Receipt`]
//! - **Aggregate**: [`CatalogDocument`], the unit of persistence
//!
//! # Money
//!
//! Every amount is an `i64` in minor currency units. Prices are validated
//! non-negative at the write boundaries and nothing here touches floating
//! point.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod account;
pub mod document;
pub mod ids;
pub mod payment;
pub mod product;
pub mod receipt;

pub use account::Account;
pub use document::CatalogDocument;
pub use ids::{IdError, ProductId, ReceiptId, PRODUCT_ID_MAX, PRODUCT_ID_MIN};
pub use payment::{InvalidPaymentMethod, PaymentMethod};
pub use product::Product;
pub use receipt::Receipt;
