//! Strongly-typed identifiers.
//!
//! Identifiers serialize as their string token so the persisted document
//! stays readable, and parse back through the same validation.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest numeric suffix a product id can carry.
pub const PRODUCT_ID_MIN: u16 = 1000;

/// Highest numeric suffix a product id can carry.
pub const PRODUCT_ID_MAX: u16 = 9999;

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The token is not `P` followed by four digits in `1000..=9999`.
    #[error("invalid product id: expected P followed by four digits")]
    InvalidProductId,

    /// The token is not a valid receipt id.
    #[error("invalid receipt id: {0}")]
    InvalidReceiptId(String),
}

/// A product identifier: the letter `P` followed by four decimal digits.
///
/// The token space is `P1000..=P9999`. Ids are drawn at random, so any
/// caller inserting into a keyed collection must detect collisions against
/// the existing keys and re-draw rather than overwrite.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(u16);

impl ProductId {
    /// Draw a random id from the token space.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random_range(PRODUCT_ID_MIN..=PRODUCT_ID_MAX))
    }

    /// The numeric suffix of the token.
    #[must_use]
    pub const fn suffix(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl fmt::Debug for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProductId(P{})", self.0)
    }
}

impl FromStr for ProductId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('P').ok_or(IdError::InvalidProductId)?;
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::InvalidProductId);
        }
        let suffix: u16 = digits.parse().map_err(|_| IdError::InvalidProductId)?;
        if !(PRODUCT_ID_MIN..=PRODUCT_ID_MAX).contains(&suffix) {
            return Err(IdError::InvalidProductId);
        }
        Ok(Self(suffix))
    }
}

impl TryFrom<String> for ProductId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.to_string()
    }
}

/// A receipt identifier (UUID v4).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generate a fresh receipt id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReceiptId({})", self.0)
    }
}

impl FromStr for ReceiptId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| IdError::InvalidReceiptId(e.to_string()))
    }
}

impl TryFrom<String> for ReceiptId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReceiptId> for String {
    fn from(id: ReceiptId) -> Self {
        id.to_string()
    }
}
