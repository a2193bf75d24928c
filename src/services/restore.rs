use crate::error::KeepError;
use crate::metrics::{Operation, OperationReport};
use crate::models::{ItemKind, ItemReport, Outcome};
use crate::paths::{InstallLayout, STAGING_DIR};
use crate::services::copier::copy_dir;
use camino::Utf8Path;
use std::fs;

/// Copy the staged add-ons and WTF tree back into the game client, then
/// delete the staging folder.
///
/// The staging folder must exist. The two copies are attempted independently
/// and the staging folder is removed whatever they returned.
pub fn run_restore(layout: &InstallLayout) -> Result<OperationReport, KeepError> {
    let staging = layout.staging_dir();
    if !staging.is_dir() {
        return Err(KeepError::NoStagingArea(staging.to_path_buf()));
    }

    tracing::info!("Found staging folder {}, restoring", staging);

    let mut report = OperationReport::new(Operation::Restore);

    report.record(restore_tree(
        "AddOns",
        &layout.staged_addons_dir(),
        &layout.addons_dir(),
    ));
    report.record(restore_tree("WTF", &layout.staged_wtf_dir(), &layout.wtf_dir()));

    report.record(remove_staging(staging));

    Ok(report.finish())
}

/// Delete the staging folder. A failure is reported, never fatal.
fn remove_staging(staging: &Utf8Path) -> ItemReport {
    let outcome = match fs::remove_dir_all(staging) {
        Ok(()) => Outcome::Removed,
        Err(e) => Outcome::Failed(e.to_string()),
    };
    ItemReport::new(
        ItemKind::StagingRemoval,
        STAGING_DIR,
        staging.to_path_buf(),
        outcome,
    )
}

fn restore_tree(name: &str, staged: &Utf8Path, live: &Utf8Path) -> ItemReport {
    let outcome = if !staged.exists() {
        Outcome::SkippedMissing
    } else {
        match copy_dir(staged, live) {
            Ok(stats) => {
                tracing::debug!("{}: {} files, {} bytes", name, stats.files, stats.bytes);
                Outcome::Copied
            }
            Err(e) => Outcome::Failed(e.to_string()),
        }
    };

    ItemReport::new(ItemKind::StagingTree, name, staged.to_path_buf(), outcome)
}
