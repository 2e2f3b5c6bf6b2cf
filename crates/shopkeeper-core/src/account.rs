//! Registered accounts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered account, keyed externally by email.
///
/// The password is an opaque credential: it is stored verbatim, never
/// interpreted, and never logged. The `Debug` impl redacts it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Display name.
    pub name: String,
    /// Opaque credential. Never logged.
    pub password: String,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}
