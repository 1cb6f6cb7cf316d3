//! Image descriptors - the gallery entries cards point at.

use serde::{Deserialize, Serialize};

use crate::identity::{ContentItem, EntityId};

/// An image available to card authors.
///
/// `tags` are informational search hints; they are neither unique nor
/// validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub id: EntityId,
    pub name: String,
    /// URL or path the runtime loads the image from.
    pub src: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// An image record minus its id.
#[derive(Debug, Clone, Default)]
pub struct ImageDraft {
    pub name: String,
    pub src: String,
    pub tags: Vec<String>,
}

impl ImageDraft {
    pub fn new(name: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            src: src.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// Partial image record for shallow-merge updates.
#[derive(Debug, Clone, Default)]
pub struct ImagePatch {
    pub name: Option<String>,
    pub src: Option<String>,
    /// Replaces the whole tag list when present.
    pub tags: Option<Vec<String>>,
}

impl ContentItem for ImageDescriptor {
    const ID_PREFIX: &'static str = "image";
    const STORAGE_KEY: &'static str = "images";

    type Draft = ImageDraft;
    type Patch = ImagePatch;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, draft: ImageDraft) -> Self {
        Self {
            id,
            name: draft.name,
            src: draft.src,
            tags: draft.tags,
        }
    }

    fn merge(&mut self, patch: ImagePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(src) = patch.src {
            self.src = src;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}
