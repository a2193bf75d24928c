//! Top-level run: resolve the installation, ask for a mode, dispatch.
//!
//! ```text
//! Start -> AwaitingChoice -> { Backing-Up | Restoring | Initializing } -> Done
//! ```
//!
//! Nothing on disk changes until a valid choice has been read and, for a
//! backup, the config file has been parsed.

use crate::config::ConfigManager;
use crate::error::KeepError;
use crate::menu::{Mode, Prompt};
use crate::metrics::OperationReport;
use crate::paths::InstallLayout;
use crate::services::{run_backup, run_cleanup, run_restore};
use camino::Utf8Path;

/// Run one operation against the installation at `root`.
pub fn run(root: &Utf8Path, prompt: &mut dyn Prompt) -> Result<OperationReport, KeepError> {
    let layout = InstallLayout::resolve(root)?;

    let choice = prompt.read_choice().map_err(KeepError::Prompt)?;
    let mode = Mode::from_choice(&choice)?;
    tracing::info!("Selected {:?} in {}", mode, layout.root());

    execute(&layout, mode)
}

/// Dispatch a mode against an already resolved layout.
pub fn execute(layout: &InstallLayout, mode: Mode) -> Result<OperationReport, KeepError> {
    let report = match mode {
        Mode::Backup => {
            let config = ConfigManager::new(layout.root()).load_config()?;
            run_backup(layout, &config)?
        }
        Mode::Restore => run_restore(layout)?,
        Mode::Initialize => run_cleanup(layout),
    };

    report.log_summary();
    Ok(report)
}
