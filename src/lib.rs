// wowkeep - back up, restore and reset World of Warcraft add-ons and saved variables
//
// This is the library crate containing the layout, configuration and copy logic.
// The binary crate (main.rs) provides the interactive entry point.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod metrics;
pub mod models;
pub mod paths;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use error::KeepError;
pub use menu::{Mode, Prompt, StdinPrompt};
pub use metrics::{Operation, OperationReport};
pub use models::{BackupConfig, ItemKind, ItemReport, Outcome};
pub use paths::InstallLayout;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
