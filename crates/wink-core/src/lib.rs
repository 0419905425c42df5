//! wink-core: Core library for macOS window switching
//!
//! This library discovers every switchable window on the system, merges
//! the window-server and accessibility views of them into one searchable
//! list, and brings a chosen window to the foreground. The `wink` CLI is
//! built on top of it.
//!
//! # Main Entry Points
//!
//! - [`engine`] - Reconcile, search, and activate windows
//! - [`source`] - Raw window listings from the OS
//! - [`config`] - Configuration management

pub mod config;
pub mod engine;
pub mod errors;
pub mod events;
pub mod logging;
pub mod source;

// Re-export commonly used types at crate root for convenience
pub use config::WinkConfig;
pub use engine::{EngineError, WindowCatalog, WindowIdentity, WindowRecord};
pub use errors::{WinkError, WinkResult};
pub use source::{
    ActivationHandle, ActivationTarget, AxWindow, ResolvedProcess, ServerWindow, SourceError,
    WindowSource,
};

// Re-export handler module as the primary API
pub use engine::handler as window_ops;

// Re-export logging initialization
pub use logging::init_logging;
