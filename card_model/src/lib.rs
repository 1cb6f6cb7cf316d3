//! # Card Model
//!
//! The content model crate for the Cardsmith editor - record shapes for every
//! kind of authorable content (images, actions, parameters, cards, events),
//! the shared identity contract, and the pure editing functions for the
//! condition/action sub-model.
//!
//! ## Core Components
//!
//! - **identity**: String-backed entity ids and the `ContentItem` contract
//!   (draft and patch types) every stored record kind implements
//! - **entities**: The five content record shapes and their patch types
//! - **editing**: Pure add/update/remove transformations over a card or
//!   event's conditions and actions
//!
//! ## Design Philosophy
//!
//! - **Plain data**: Records are serde-serializable structs with no behavior
//!   beyond construction helpers and patch merging
//! - **Immutability at the seams**: Editing functions never mutate their
//!   input; they return fresh collections the caller merges via a patch
//! - **Dangling references are fine**: Any id-valued relation may point at a
//!   deleted record; consumers resolve that as "no selection", never an error

pub mod editing;
pub mod entities;
pub mod error;
pub mod identity;

pub use editing::*;
pub use entities::*;
pub use error::*;
pub use identity::*;
