//! Contact entity and identifier types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned by the persistence layer on insert. Immutable once
/// assigned; serialized as the hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Mint a fresh id. Only store implementations should call this.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a raw path-segment id. Fails on anything that is not a UUID.
    pub fn parse(raw: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(raw).map(Self)
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A phonebook entry: the sole entity this service manages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub number: String,
}

/// Client-submitted name/number pair for create and update requests.
///
/// Both fields are optional so the handlers can report exactly which field is
/// missing. An empty string counts as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub number: Option<String>,
}

impl ContactPayload {
    /// The submitted name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// The submitted number, if present and non-empty.
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref().filter(|n| !n.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_id_rejects_non_uuid() {
        assert!(ContactId::parse("abc").is_err());
        assert!(ContactId::parse("").is_err());
    }

    #[test]
    fn contact_id_roundtrips_through_display() {
        let id = ContactId::new();
        assert_eq!(ContactId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn empty_payload_fields_count_as_missing() {
        let payload = ContactPayload {
            name: Some(String::new()),
            number: None,
        };
        assert!(payload.name().is_none());
        assert!(payload.number().is_none());
    }
}
