//! Startup wiring for the world settings store.
//!
//! Provides configuration loading, logging setup, and store construction that
//! the plugin entry point calls once before handing the store to its
//! collaborators.
pub mod builder;
pub mod config;
pub mod logging;

pub use builder::StoreBuilder;
pub use config::BootstrapConfig;
pub use logging::{LoggingGuard, init_logging};
