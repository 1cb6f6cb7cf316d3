//! Error types for the editor core.

use card_model::EntityId;
use thiserror::Error;

/// Store-level failures surfaced to the editing surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no item with id {id}")]
    NotFound { id: EntityId },

    #[error("parameter {id} is a system parameter and cannot be deleted")]
    SystemParameter { id: EntityId },
}

/// Failures of the persistence boundary.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("blob storage failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialize blob {key}: {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
}

/// Failures importing user-supplied files.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file is not a valid content document: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
