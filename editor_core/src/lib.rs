//! # Editor Core
//!
//! The working half of the Cardsmith editor: content stores, the export
//! pipeline, and the persistence wiring. The presentation layer sits on top
//! of this crate and only renders what the stores hold.
//!
//! ## Core Components
//!
//! - **store**: Generic per-kind CRUD repository with change notification
//!   and store-assigned ids
//! - **export**: The pure transformation from the content graph to the
//!   game-world document the runtime engine consumes
//! - **persist**: The named-JSON-blob boundary with in-memory and
//!   directory-backed adapters
//! - **io**: Content bundle download/upload and spreadsheet row import
//! - **session**: The composition root wiring stores, settings, debounced
//!   saves and exports, and persistence together
//!
//! ## Design Philosophy
//!
//! - **Single-threaded**: All mutations happen synchronously on the editor
//!   thread; the host loop pumps deferred work explicitly
//! - **Fail soft on stored data**: Missing or corrupt blobs fall back to
//!   built-in defaults; only user-supplied files surface parse errors
//! - **Fire-and-forget persistence**: Deferred writes are logged on failure
//!   and never retried or rolled back

pub mod debounce;
pub mod defaults;
pub mod error;
pub mod export;
pub mod io;
pub mod persist;
pub mod session;
pub mod settings;
pub mod store;

pub use debounce::*;
pub use defaults::*;
pub use error::*;
pub use export::*;
pub use io::*;
pub use persist::*;
pub use session::*;
pub use settings::*;
pub use store::*;
