//! Re-export facade for window operations.
//!
//! The engine's operations live in focused modules. This file re-exports
//! them to preserve the `window_ops::*` public API used by lib.rs and the
//! CLI command handlers.

// Operations
pub use super::activate::activate_window;
pub use super::reconcile::refresh_windows;
pub use super::search::{filter_indices, search_windows};

// Shared state
pub use super::catalog::WindowCatalog;
