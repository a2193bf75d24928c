use serde::{Deserialize, Serialize};

/// Backup list from config.yaml
///
/// Missing keys default to empty lists. `servers` and `roles` are read so that
/// existing files keep parsing, but nothing acts on them yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupConfig {
    #[serde(default)]
    pub addons: Vec<String>,

    #[serde(default)]
    pub accounts: Vec<String>,

    #[serde(default)]
    pub servers: Vec<String>,

    #[serde(default)]
    pub roles: Vec<String>,
}

impl BackupConfig {
    /// Every (account, addon) pair whose saved-variables file should be backed up,
    /// accounts outermost.
    pub fn saved_variable_targets(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.accounts.iter().flat_map(move |account| {
            self.addons
                .iter()
                .map(move |addon| (account.as_str(), addon.as_str()))
        })
    }

    /// Nothing to back up
    pub fn is_empty(&self) -> bool {
        self.addons.is_empty()
    }
}
