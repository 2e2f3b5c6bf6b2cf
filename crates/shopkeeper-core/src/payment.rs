//! Payment methods accepted at checkout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The payment method token was not in the accepted set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid payment method: {given:?} (accepted: credit_card, paytm)")]
pub struct InvalidPaymentMethod {
    /// The rejected token.
    pub given: String,
}

/// The closed set of payment methods checkout accepts.
///
/// No charging happens anywhere in this workspace; the chosen method is
/// validated, recorded on the receipt, and handed to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card payment.
    CreditCard,
    /// Paytm wallet payment.
    Paytm,
}

impl PaymentMethod {
    /// Stable lowercase token for this method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "credit_card",
            Self::Paytm => "paytm",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = InvalidPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit_card" | "creditcard" | "credit card" => Ok(Self::CreditCard),
            "paytm" => Ok(Self::Paytm),
            other => Err(InvalidPaymentMethod {
                given: other.to_string(),
            }),
        }
    }
}
