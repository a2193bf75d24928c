//! Data models for wowkeep.
//!
//! - [`BackupConfig`]: add-on and account lists loaded from `config.yaml`
//! - [`Outcome`] / [`ItemReport`]: result of one unit of work (one add-on, one
//!   saved-variables file, one cleanup folder)

pub mod config;
pub mod outcome;

pub use config::BackupConfig;
pub use outcome::{ItemKind, ItemReport, Outcome};
