use crate::metrics::{Operation, OperationReport};
use crate::models::{ItemKind, ItemReport, Outcome};
use crate::paths::InstallLayout;
use std::fs;

/// Client folders removed by an initialization run, in deletion order
pub const CLEANUP_TARGETS: [&str; 8] = [
    "WTF",
    "Fonts",
    "Interface",
    "Cache",
    "blob_storage",
    "Errors",
    "CPUCache",
    "Interface.obsoleted",
];

/// Delete every [`CLEANUP_TARGETS`] folder that exists under the game client.
///
/// Absent folders are skipped without comment; a failed deletion is reported
/// and the remaining folders are still attempted.
pub fn run_cleanup(layout: &InstallLayout) -> OperationReport {
    let mut report = OperationReport::new(Operation::Initialize);

    for name in CLEANUP_TARGETS {
        let path = layout.client_subdir(name);
        if !path.exists() {
            tracing::debug!("{} not present, nothing to remove", path);
            continue;
        }

        let outcome = match fs::remove_dir_all(&path) {
            Ok(()) => Outcome::Removed,
            Err(e) => Outcome::Failed(e.to_string()),
        };
        report.record(ItemReport::new(ItemKind::CleanupTarget, name, path, outcome));
    }

    report.finish()
}
