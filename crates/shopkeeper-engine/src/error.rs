//! Error types for catalog operations.

use shopkeeper_core::{InvalidPaymentMethod, ProductId};
use shopkeeper_store::StoreError;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors surfaced by catalog operations.
///
/// Every variant is recoverable at the caller boundary. An operation that
/// fails discards its working copy without saving, so no partial state
/// ever reaches the document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The backing document could not be read or replaced.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),

    /// No product with the given id.
    #[error("product not found: {id}")]
    ProductNotFound {
        /// The id that was looked up.
        id: ProductId,
    },

    /// No account registered under the given email.
    #[error("account not found: {email}")]
    AccountNotFound {
        /// The email that was looked up.
        email: String,
    },

    /// A field failed validation before any mutation was applied.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// Which field was rejected.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// The email is already registered.
    #[error("already registered: {email}")]
    AlreadyRegistered {
        /// The conflicting email.
        email: String,
    },

    /// The product has no units in stock.
    #[error("out of stock: {id}")]
    OutOfStock {
        /// The product with zero stock.
        id: ProductId,
    },

    /// The cart requires more units of a product than are in stock.
    #[error("insufficient stock for {id}: available {available}, requested {requested}")]
    InsufficientStock {
        /// The product that ran short.
        id: ProductId,
        /// Units currently in stock.
        available: i64,
        /// Units the cart requires.
        requested: i64,
    },

    /// Checkout was attempted with nothing in the cart.
    #[error("cart is empty for {email}")]
    EmptyCart {
        /// The account whose cart was empty.
        email: String,
    },

    /// The payment method token is not in the accepted set.
    #[error(transparent)]
    InvalidPayment(#[from] InvalidPaymentMethod),

    /// Random id drawing kept colliding with existing products.
    #[error("product id space exhausted after {attempts} attempts")]
    IdSpaceExhausted {
        /// How many draws were attempted.
        attempts: u32,
    },
}
