use camino::Utf8PathBuf;
use std::fmt;

/// Result of a single unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Copied,
    Removed,
    SkippedMissing,
    Failed(String),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// What a unit of work operated on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    AddOn,
    SavedVariables,
    StagingTree,
    CleanupTarget,
    StagingRemoval,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemKind::AddOn => "AddOn",
            ItemKind::SavedVariables => "SavedVariables file",
            ItemKind::StagingTree => "staged folder",
            ItemKind::CleanupTarget => "folder",
            ItemKind::StagingRemoval => "staging folder",
        };
        f.write_str(label)
    }
}

/// One line of a run report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemReport {
    pub kind: ItemKind,
    pub name: String,
    pub path: Utf8PathBuf,
    pub outcome: Outcome,
}

impl ItemReport {
    pub fn new(kind: ItemKind, name: impl Into<String>, path: Utf8PathBuf, outcome: Outcome) -> Self {
        Self {
            kind,
            name: name.into(),
            path,
            outcome,
        }
    }

    /// Emit the status line for this item
    pub fn log(&self) {
        match &self.outcome {
            Outcome::Copied => tracing::info!("Copied {} {}", self.kind, self.name),
            Outcome::Removed => tracing::info!("Removed {} {}", self.kind, self.path),
            Outcome::SkippedMissing => {
                tracing::warn!("Skipped {} {}: {} does not exist", self.kind, self.name, self.path)
            }
            Outcome::Failed(reason) => {
                tracing::warn!("Failed to process {} {}: {}", self.kind, self.name, reason)
            }
        }
    }
}
