//! File-backed document store.
//!
//! One JSON file holds the whole catalog. Saves go through a sibling
//! temporary file that is renamed over the target, so a reader never
//! observes a half-written document. Loads are strictly read-only,
//! which keeps unlocked readers from ever touching the file.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use shopkeeper_core::CatalogDocument;

use crate::error::Result;

/// File-backed store for the catalog document.
///
/// The store is the sole I/O boundary and carries no locking of its own.
/// Serializing load, mutate, save cycles is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Open a store over the document at `path`, creating missing parent
    /// directories. If no document exists there yet, an empty one is
    /// persisted before the store is handed out, so [`load`](Self::load)
    /// never has to write and unlocked readers cannot race a commit.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`](crate::StoreError::Unavailable)
    /// if a parent directory cannot be created or the initial document
    /// cannot be persisted.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let store = Self { path };
        if !store.path.exists() {
            info!(path = %store.path.display(), "No catalog document yet, initializing an empty one");
            store.save(&CatalogDocument::empty())?;
        }
        Ok(store)
    }

    /// Path of the backing document file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted document.
    ///
    /// Loading never writes. The document is created by
    /// [`open`](Self::open), so a missing file here means something
    /// outside the process removed it; it is read as the empty catalog
    /// and the next save recreates it.
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`](crate::StoreError::Unavailable) if the
    /// file cannot be read;
    /// [`StoreError::Corrupted`](crate::StoreError::Corrupted) if the
    /// contents do not parse.
    pub fn load(&self) -> Result<CatalogDocument> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "Catalog document missing, reading it as empty");
                return Ok(CatalogDocument::empty());
            }
            Err(err) => return Err(err.into()),
        };
        let doc = serde_json::from_slice(&bytes)?;
        debug!(path = %self.path.display(), "Catalog document loaded");
        Ok(doc)
    }

    /// Persist the full document, replacing the previous one.
    ///
    /// The document is serialized as pretty-printed JSON into a sibling
    /// `.tmp` file and renamed over the target in one step. A crash mid
    /// save leaves either the old document or the new one, never a torn
    /// mix.
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`](crate::StoreError::Unavailable) on any
    /// I/O failure. The in-memory mutation is lost and the caller reports
    /// the failure upward.
    pub fn save(&self, doc: &CatalogDocument) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(doc)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "Catalog document saved");
        Ok(())
    }

    /// Sibling temporary path used for atomic replacement.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("catalog"), OsString::from);
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
