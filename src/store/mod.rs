//! Persistence gateway for the contact collection.
//!
//! # Responsibilities
//! - Define the `ContactStore` contract handlers program against
//! - Own id assignment (ids are minted on insert, never by callers)
//! - Distinguish a malformed id from an absent one
//!
//! # Design Decisions
//! - Object-safe async trait so the backend is chosen at startup from the
//!   connection URL and injected into the server
//! - A syntactically invalid id surfaces as `StoreError::MalformedId`; it is
//!   never silently reported as not-found

pub mod document;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::domain::{Contact, ContactId};
use document::DocumentStore;
use memory::MemoryStore;

/// Failures the store layer can produce.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("malformatted id")]
    MalformedId,

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unsupported store url `{0}`")]
    UnsupportedUrl(String),
}

/// CRUD contract over the contact collection. All operations are async and
/// the store is the sole concurrency arbiter (last write wins).
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Every contact, in the store's natural iteration order.
    async fn find_all(&self) -> Result<Vec<Contact>, StoreError>;

    /// Look up one contact by its raw path-segment id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>, StoreError>;

    /// Current collection cardinality.
    async fn count(&self) -> Result<usize, StoreError>;

    /// Persist a new contact, assigning it a fresh id.
    async fn insert(&self, name: &str, number: &str) -> Result<Contact, StoreError>;

    /// Replace name/number of the contact addressed by `id`, keeping its id.
    /// Returns the updated contact, or `None` when no such contact exists.
    async fn replace(&self, id: &str, name: &str, number: &str)
        -> Result<Option<Contact>, StoreError>;

    /// Remove the contact addressed by `id`. Succeeds whether or not the
    /// contact existed.
    async fn remove_by_id(&self, id: &str) -> Result<(), StoreError>;
}

/// Parse a raw id, mapping syntax errors to the dedicated error variant.
pub(crate) fn parse_id(raw: &str) -> Result<ContactId, StoreError> {
    ContactId::parse(raw).map_err(|_| StoreError::MalformedId)
}

/// Open the store addressed by a connection URL.
///
/// `memory:` yields a fresh in-process store; `file://` yields the JSON
/// document store at the given path.
pub fn connect(url: &Url) -> Result<Arc<dyn ContactStore>, StoreError> {
    match url.scheme() {
        "memory" => Ok(Arc::new(MemoryStore::new())),
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|_| StoreError::UnsupportedUrl(url.to_string()))?;
            Ok(Arc::new(DocumentStore::new(path)))
        }
        _ => Err(StoreError::UnsupportedUrl(url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_rejects_unknown_scheme() {
        let url = Url::parse("redis://localhost").unwrap();
        assert!(matches!(connect(&url), Err(StoreError::UnsupportedUrl(_))));
    }

    #[test]
    fn connect_accepts_memory_and_file() {
        assert!(connect(&Url::parse("memory:").unwrap()).is_ok());
        assert!(connect(&Url::parse("file:///tmp/contacts.json").unwrap()).is_ok());
    }
}
