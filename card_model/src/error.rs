//! Error types for the content model.

use thiserror::Error;

/// Errors from the pure condition/action editing functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("condition index {index} is out of range for {len} conditions")]
    IndexOutOfRange { index: usize, len: usize },
}
