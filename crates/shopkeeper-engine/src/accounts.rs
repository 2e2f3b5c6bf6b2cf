//! Account directory: registration and identity lookups.
//!
//! The directory owns names, emails, and opaque passwords. It performs no
//! authentication; the other ledgers consult it only to check that an
//! email names a registered account.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use shopkeeper_core::Account;

use crate::error::{CatalogError, Result};
use crate::EngineInner;

/// Handle for account operations. Cheap to clone.
#[derive(Clone)]
pub struct AccountDirectory {
    inner: Arc<EngineInner>,
}

/// An account as exposed to callers. The password never leaves the
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRecord {
    /// Registered email, the account key.
    pub email: String,
    /// Display name.
    pub name: String,
}

impl AccountDirectory {
    pub(crate) fn new(inner: Arc<EngineInner>) -> Self {
        Self { inner }
    }

    /// Register a new account.
    ///
    /// All three fields are trimmed of surrounding whitespace before
    /// validation and storage. Registration never overwrites: the first
    /// account under an email wins.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidInput`] if any field is blank after
    ///   trimming.
    /// - [`CatalogError::AlreadyRegistered`] if the email is taken.
    /// - [`CatalogError::StorageUnavailable`] on storage failure.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<()> {
        let name = trimmed_required("name", name)?;
        let email = trimmed_required("email", email)?;
        let password = trimmed_required("password", password)?;
        let registered = email.clone();
        self.inner.commit(move |doc| {
            if doc.accounts.contains_key(&email) {
                return Err(CatalogError::AlreadyRegistered { email });
            }
            doc.accounts.insert(email, Account { name, password });
            Ok(())
        })?;
        info!(email = %registered, "Account registered");
        Ok(())
    }

    /// Look up an account by email. Absence is not an error.
    ///
    /// # Errors
    ///
    /// [`CatalogError::StorageUnavailable`] on storage failure.
    pub fn lookup(&self, email: &str) -> Result<Option<AccountRecord>> {
        let doc = self.inner.snapshot()?;
        Ok(doc.accounts.get(email).map(|account| AccountRecord {
            email: email.to_string(),
            name: account.name.clone(),
        }))
    }

    /// List every registered account, ordered by email.
    ///
    /// # Errors
    ///
    /// [`CatalogError::StorageUnavailable`] on storage failure.
    pub fn list(&self) -> Result<Vec<AccountRecord>> {
        let doc = self.inner.snapshot()?;
        Ok(doc
            .accounts
            .iter()
            .map(|(email, account)| AccountRecord {
                email: email.clone(),
                name: account.name.clone(),
            })
            .collect())
    }
}

/// Trim a field and reject it if nothing remains.
fn trimmed_required(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CatalogError::InvalidInput {
            field,
            reason: "must not be blank".to_string(),
        });
    }
    Ok(value.to_string())
}
