//! File import/export - the downloadable content bundle.
//!
//! The bundle is the whole authorable content set in one JSON document, the
//! shape users download for backup and re-upload to restore. Parsing a
//! user-supplied file is the one place malformed input is a surfaced error
//! rather than a silent fallback.

mod rows;

pub use rows::*;

use serde::{Deserialize, Serialize};

use card_model::{CardDescriptor, EventDescriptor, ImageDescriptor, ParameterDescriptor};

use crate::error::ImportError;

/// Every content collection in one document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentBundle {
    pub images: Vec<ImageDescriptor>,
    pub parameters: Vec<ParameterDescriptor>,
    pub cards: Vec<CardDescriptor>,
    pub events: Vec<EventDescriptor>,
}

impl ContentBundle {
    /// Serialize for download, pretty-printed.
    pub fn to_download_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse an uploaded file.
    pub fn from_json(text: &str) -> Result<Self, ImportError> {
        Ok(serde_json::from_str(text)?)
    }
}
