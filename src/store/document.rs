//! JSON document file store.
//!
//! The whole collection lives in one JSON document (an array of contacts)
//! addressed by a `file://` connection URL. Every operation reads the full
//! document; mutations rewrite it through a temp file + rename so a crash
//! mid-write never leaves a torn document behind. A missing or empty file
//! reads as an empty collection.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::{Contact, ContactId};
use crate::store::{parse_id, ContactStore, StoreError};

pub struct DocumentStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process; concurrent
    // processes fall back to last-write-wins via the rename.
    write_lock: Mutex<()>,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<Contact>, StoreError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&data)?)
    }

    async fn save(&self, contacts: &[Contact]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(contacts)?).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ContactStore for DocumentStore {
    async fn find_all(&self) -> Result<Vec<Contact>, StoreError> {
        self.load().await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>, StoreError> {
        let id = parse_id(id)?;
        Ok(self.load().await?.into_iter().find(|c| c.id == id))
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.load().await?.len())
    }

    async fn insert(&self, name: &str, number: &str) -> Result<Contact, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut contacts = self.load().await?;
        let contact = Contact {
            id: ContactId::new(),
            name: name.to_string(),
            number: number.to_string(),
        };
        contacts.push(contact.clone());
        self.save(&contacts).await?;
        Ok(contact)
    }

    async fn replace(
        &self,
        id: &str,
        name: &str,
        number: &str,
    ) -> Result<Option<Contact>, StoreError> {
        let id = parse_id(id)?;
        let _guard = self.write_lock.lock().await;
        let mut contacts = self.load().await?;
        let updated = match contacts.iter_mut().find(|c| c.id == id) {
            Some(contact) => {
                contact.name = name.to_string();
                contact.number = number.to_string();
                Some(contact.clone())
            }
            None => None,
        };
        if updated.is_some() {
            self.save(&contacts).await?;
        }
        Ok(updated)
    }

    async fn remove_by_id(&self, id: &str) -> Result<(), StoreError> {
        let id = parse_id(id)?;
        let _guard = self.write_lock.lock().await;
        let mut contacts = self.load().await?;
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        if contacts.len() != before {
            self.save(&contacts).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> DocumentStore {
        DocumentStore::new(dir.path().join("contacts.json"))
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.find_all().await.unwrap().is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn contacts_survive_reopening_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let created = {
            let store = store_in(&dir);
            store.insert("Arto Hellas", "040-123456").await.unwrap()
        };

        let reopened = store_in(&dir);
        let all = reopened.find_all().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn replace_and_remove_rewrite_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let a = store.insert("Ada Lovelace", "39-44-5323523").await.unwrap();
        let b = store.insert("Dan Abramov", "12-43-234345").await.unwrap();

        store
            .replace(&a.id.to_string(), "Ada Lovelace", "39-00-000000")
            .await
            .unwrap()
            .unwrap();
        store.remove_by_id(&b.id.to_string()).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, a.id);
        assert_eq!(all[0].number, "39-00-000000");
    }

    #[tokio::test]
    async fn malformed_id_is_not_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(matches!(
            store.find_by_id("not-a-uuid").await,
            Err(StoreError::MalformedId)
        ));
        assert!(matches!(
            store.remove_by_id("not-a-uuid").await,
            Err(StoreError::MalformedId)
        ));
    }
}
