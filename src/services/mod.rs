//! Services module - the filesystem work behind each menu choice.
//!
//! # Components
//!
//! - [`copier`]: recursive copy of a file or directory tree. Aborts a tree on
//!   its first failure.
//! - [`run_backup`]: copies configured add-ons and saved-variables files into
//!   the staging folder.
//! - [`run_restore`]: copies the staging folder back into the game client and
//!   deletes it.
//! - [`run_cleanup`]: deletes the client's cache, font, interface, WTF and
//!   error-log folders.
//!
//! The orchestrators treat each add-on, each saved-variables file and each
//! cleanup folder as an independent unit of work: its result is recorded in
//! the [`OperationReport`](crate::metrics::OperationReport) and the batch
//! continues. Only precondition failures end a run early.
//!
//! # Usage Example
//!
//! ```ignore
//! use wowkeep::paths::InstallLayout;
//! use wowkeep::services::run_restore;
//!
//! let layout = InstallLayout::resolve("C:/Games/World of Warcraft")?;
//! let report = run_restore(&layout)?;
//! report.log_summary();
//! println!("{}", report.summary_line());
//! ```

pub mod backup;
pub mod cleanup;
pub mod copier;
pub mod restore;

pub use backup::run_backup;
pub use cleanup::{CLEANUP_TARGETS, run_cleanup};
pub use copier::{CopyError, CopyStats, copy_dir, copy_file};
pub use restore::run_restore;
