use camino::Utf8PathBuf;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a run before (or instead of) touching the installation.
///
/// Per-item failures never surface here; they are recorded as
/// [`Outcome::Failed`](crate::models::Outcome::Failed) in the run report.
#[derive(Error, Debug)]
pub enum KeepError {
    #[error("{root} is not a game installation directory (missing {marker}); run from the folder containing it")]
    NotInstallDirectory { root: Utf8PathBuf, marker: &'static str },

    #[error("No staging folder found at {0}, nothing to restore")]
    NoStagingArea(Utf8PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: Utf8PathBuf,
        source: serde_yaml_ng::Error,
    },

    #[error("Failed to create staging folder {path}: {source}")]
    StagingCreate {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid choice {0:?}, please enter 1, 2 or 3")]
    InvalidChoice(String),

    #[error("Path is not valid UTF-8: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Failed to read choice: {0}")]
    Prompt(#[source] std::io::Error),
}

impl KeepError {
    /// True for failures caused by the environment the tool was started in
    /// (wrong directory, no staging folder, missing config).
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            KeepError::NotInstallDirectory { .. }
                | KeepError::NoStagingArea(_)
                | KeepError::ConfigRead { .. }
                | KeepError::InvalidPath(_)
        )
    }
}
