use crate::error::KeepError;
use crate::models::BackupConfig;
use crate::paths::CONFIG_FILE;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Loads and saves the backup list (`config.yaml`) in the installation root.
///
/// The file is read fresh on every call; nothing is cached between runs.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager for the installation root `root`.
    ///
    /// Unlike the log directory, the root is never created here.
    pub fn new<P: AsRef<Utf8Path>>(root: P) -> Self {
        Self {
            config_path: root.as_ref().join(CONFIG_FILE),
        }
    }

    /// Load the backup list.
    ///
    /// # Errors
    /// - [`KeepError::ConfigRead`] if the file is missing or unreadable
    /// - [`KeepError::ConfigParse`] if it is not well-formed YAML for [`BackupConfig`]
    pub fn load_config(&self) -> Result<BackupConfig, KeepError> {
        let file_contents =
            fs::read_to_string(&self.config_path).map_err(|source| KeepError::ConfigRead {
                path: self.config_path.clone(),
                source,
            })?;

        let config: BackupConfig =
            serde_yaml_ng::from_str(&file_contents).map_err(|source| KeepError::ConfigParse {
                path: self.config_path.clone(),
                source,
            })?;

        tracing::info!(
            "Loaded config from {}: {} add-ons, {} accounts",
            self.config_path,
            config.addons.len(),
            config.accounts.len()
        );
        Ok(config)
    }

    /// Save the backup list.
    ///
    /// # Arguments
    /// * `config` - The BackupConfig to save
    pub fn save_config(&self, config: &BackupConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize config to YAML")?;

        fs::write(&self.config_path, yaml_string)
            .with_context(|| format!("Failed to write config: {}", self.config_path))?;

        tracing::info!("Saved config to {}", self.config_path);
        Ok(())
    }

    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}
