//! Window reconciliation, search, and activation.
//!
//! The engine consumes a [`crate::source::WindowSource`] and turns its two
//! raw listings into the deduplicated, searchable window list the CLI
//! presents. Nothing in this module touches OS APIs directly, so every
//! operation is testable against a fake source.

pub mod activate;
pub mod catalog;
pub mod errors;
pub mod handler;
pub mod reconcile;
pub mod search;
pub mod types;

// Re-export commonly used types and functions
pub use activate::activate_window;
pub use catalog::WindowCatalog;
pub use errors::EngineError;
pub use reconcile::refresh_windows;
pub use search::{filter_indices, search_windows};
pub use types::{WindowIdentity, WindowRecord};
