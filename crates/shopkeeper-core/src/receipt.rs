//! Receipts issued by checkout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ProductId, ReceiptId};
use crate::payment::PaymentMethod;

/// The record returned by a committed checkout.
///
/// `items` holds one product id per purchased unit, in cart order. `total`
/// is the sum of the unit prices in force at commit time, in minor
/// currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique receipt id.
    pub id: ReceiptId,
    /// Email of the purchasing account.
    pub email: String,
    /// One entry per purchased unit, in cart order.
    pub items: Vec<ProductId>,
    /// Total charged, in minor currency units.
    pub total: i64,
    /// How the purchase was paid.
    pub payment_method: PaymentMethod,
    /// When the checkout committed.
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    /// Issue a receipt for a checkout that just committed.
    #[must_use]
    pub fn issue(
        email: impl Into<String>,
        items: Vec<ProductId>,
        total: i64,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: ReceiptId::generate(),
            email: email.into(),
            items,
            total,
            payment_method,
            issued_at: Utc::now(),
        }
    }

    /// Number of units purchased.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.items.len()
    }
}
