use crate::error::KeepError;
use crate::metrics::{Operation, OperationReport};
use crate::models::{BackupConfig, ItemKind, ItemReport, Outcome};
use crate::paths::InstallLayout;
use crate::services::copier::{copy_dir, copy_file};
use std::fs;

/// Copy the configured add-ons and their saved-variables files into staging.
///
/// Only creating the staging folders is fatal. Every add-on and every
/// (account, addon) saved-variables file is handled on its own: a missing
/// source is reported as skipped, a copy failure as failed, and the batch
/// carries on either way.
pub fn run_backup(
    layout: &InstallLayout,
    config: &BackupConfig,
) -> Result<OperationReport, KeepError> {
    let staged_addons = layout.staged_addons_dir();
    fs::create_dir_all(&staged_addons).map_err(|source| KeepError::StagingCreate {
        path: staged_addons.clone(),
        source,
    })?;

    if config.is_empty() {
        tracing::warn!("No add-ons listed in config, nothing to back up");
    }

    let mut report = OperationReport::new(Operation::Backup);

    for addon in &config.addons {
        report.record(backup_addon(layout, addon));
    }

    for (account, addon) in config.saved_variable_targets() {
        report.record(backup_saved_variables(layout, account, addon));
    }

    Ok(report.finish())
}

fn backup_addon(layout: &InstallLayout, addon: &str) -> ItemReport {
    let source = layout.addon_dir(addon);
    let destination = layout.staged_addon_dir(addon);

    let outcome = if !source.exists() {
        Outcome::SkippedMissing
    } else {
        match copy_dir(&source, &destination) {
            Ok(stats) => {
                tracing::debug!("AddOn {}: {} files, {} bytes", addon, stats.files, stats.bytes);
                Outcome::Copied
            }
            Err(e) => Outcome::Failed(e.to_string()),
        }
    };

    ItemReport::new(ItemKind::AddOn, addon, source, outcome)
}

fn backup_saved_variables(layout: &InstallLayout, account: &str, addon: &str) -> ItemReport {
    let source = layout.saved_variables_file(account, addon);
    let destination = layout.staged_saved_variables_file(account, addon);
    let name = format!("{}/{}.lua", account, addon);

    // The staging folder for the account is created even when the file is absent
    if let Some(parent) = destination.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        let reason = format!("Failed to create directory {}: {}", parent, e);
        return ItemReport::new(ItemKind::SavedVariables, name, source, Outcome::Failed(reason));
    }

    let outcome = if !source.exists() {
        Outcome::SkippedMissing
    } else {
        match copy_file(&source, &destination) {
            Ok(_) => Outcome::Copied,
            Err(e) => Outcome::Failed(e.to_string()),
        }
    };

    ItemReport::new(ItemKind::SavedVariables, name, source, outcome)
}
