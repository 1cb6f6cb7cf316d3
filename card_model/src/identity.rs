//! Entity identity - string ids and the stored-record contract.

use serde::{Deserialize, Serialize};

/// Identifier for a content record, unique within its entity kind.
///
/// Ids are opaque strings. Records created through a store receive generated
/// ids; built-in reference content (actions, standard parameters) uses slug
/// ids derived from the display name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Create an id from an arbitrary string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive a slug id from a display name ("Introduction Complete" becomes
    /// "introduction-complete").
    pub fn slug(name: &str) -> Self {
        Self(
            name.to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-"),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Contract every stored record kind implements.
///
/// A `ContentItem` is created from a [`Draft`](ContentItem::Draft) (the record
/// minus its id - the store assigns that) and updated by shallow-merging a
/// [`Patch`](ContentItem::Patch) (an all-optional partial record). Collection
/// valued fields are replaced wholesale by a patch, never merged element-wise.
pub trait ContentItem: Clone {
    /// Prefix for store-generated ids of this kind.
    const ID_PREFIX: &'static str;

    /// Blob key under which collections of this kind are persisted.
    const STORAGE_KEY: &'static str;

    /// The record minus its id, used on creation.
    type Draft;

    /// Partial record for shallow-merge updates.
    type Patch;

    fn id(&self) -> &EntityId;

    /// Build a full record from a store-assigned id and a draft.
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;

    /// Shallow-merge a patch into this record. Absent patch fields leave the
    /// record untouched; present collection fields replace wholesale.
    fn merge(&mut self, patch: Self::Patch);
}
