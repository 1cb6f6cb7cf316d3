//! Pure editing functions for the condition/action sub-model.
//!
//! Each function takes the current collection by reference and returns a
//! fresh vector for the caller to merge back via a patch; inputs are never
//! mutated. Cards and events share the condition functions.

mod actions;
mod conditions;

pub use actions::*;
pub use conditions::*;
