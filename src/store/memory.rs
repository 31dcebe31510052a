//! In-memory contact store.
//!
//! Insertion-ordered, process-local. The default backend for development and
//! the substitute the integration tests inject in place of the file store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Contact, ContactId};
use crate::store::{parse_id, ContactStore, StoreError};

/// Contact collection held in a `Vec` so iteration order is insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contacts: RwLock<Vec<Contact>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(self.contacts.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>, StoreError> {
        let id = parse_id(id)?;
        Ok(self
            .contacts
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.contacts.read().await.len())
    }

    async fn insert(&self, name: &str, number: &str) -> Result<Contact, StoreError> {
        let contact = Contact {
            id: ContactId::new(),
            name: name.to_string(),
            number: number.to_string(),
        };
        self.contacts.write().await.push(contact.clone());
        Ok(contact)
    }

    async fn replace(
        &self,
        id: &str,
        name: &str,
        number: &str,
    ) -> Result<Option<Contact>, StoreError> {
        let id = parse_id(id)?;
        let mut contacts = self.contacts.write().await;
        match contacts.iter_mut().find(|c| c.id == id) {
            Some(contact) => {
                contact.name = name.to_string();
                contact.number = number.to_string();
                Ok(Some(contact.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove_by_id(&self, id: &str) -> Result<(), StoreError> {
        let id = parse_id(id)?;
        self.contacts.write().await.retain(|c| c.id != id);
        Ok(())
    }
}
