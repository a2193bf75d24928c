//! Installation layout resolution.
//!
//! Every path the tool touches is derived from the installation root through
//! [`InstallLayout`], so the orchestrators never join path segments themselves.
//!
//! ```text
//! <root>/World of Warcraft Launcher.exe         marker
//! <root>/config.yaml                            backup list
//! <root>/_classic_/Interface/AddOns/<addon>     live add-ons
//! <root>/_classic_/WTF/Account/<account>/SavedVariables/<addon>.lua
//! <root>/temp/AddOns/<addon>                    staging
//! <root>/temp/WTF/Account/<account>/SavedVariables/<addon>.lua
//! ```

use crate::error::KeepError;
use camino::{Utf8Path, Utf8PathBuf};

/// File whose presence proves the working directory is the installation root
pub const MARKER_FILE: &str = "World of Warcraft Launcher.exe";

/// Game client folder under the installation root
pub const CLIENT_DIR: &str = "_classic_";

/// Staging folder under the installation root
pub const STAGING_DIR: &str = "temp";

/// Backup list file under the installation root
pub const CONFIG_FILE: &str = "config.yaml";

/// Absolute paths of the live installation tree and the staging area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    root: Utf8PathBuf,
    client_dir: Utf8PathBuf,
    staging_dir: Utf8PathBuf,
}

impl InstallLayout {
    /// Validate `root` as an installation directory and build its layout.
    ///
    /// The root is canonicalized first; a missing marker file yields
    /// [`KeepError::NotInstallDirectory`] before anything is created.
    pub fn resolve<P: AsRef<Utf8Path>>(root: P) -> Result<Self, KeepError> {
        let root = root.as_ref();
        let canonical = root
            .canonicalize_utf8()
            .map_err(|_| KeepError::NotInstallDirectory {
                root: root.to_path_buf(),
                marker: MARKER_FILE,
            })?;

        if !canonical.join(MARKER_FILE).is_file() {
            return Err(KeepError::NotInstallDirectory {
                root: canonical,
                marker: MARKER_FILE,
            });
        }

        tracing::debug!("Resolved installation root: {}", canonical);

        Ok(Self {
            client_dir: canonical.join(CLIENT_DIR),
            staging_dir: canonical.join(STAGING_DIR),
            root: canonical,
        })
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn client_dir(&self) -> &Utf8Path {
        &self.client_dir
    }

    pub fn config_file(&self) -> Utf8PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// `<client>/Interface/AddOns`
    pub fn addons_dir(&self) -> Utf8PathBuf {
        self.client_dir.join("Interface").join("AddOns")
    }

    pub fn addon_dir(&self, addon: &str) -> Utf8PathBuf {
        self.addons_dir().join(addon)
    }

    /// `<client>/WTF`
    pub fn wtf_dir(&self) -> Utf8PathBuf {
        self.client_dir.join("WTF")
    }

    pub fn saved_variables_dir(&self, account: &str) -> Utf8PathBuf {
        account_saved_variables(&self.wtf_dir(), account)
    }

    pub fn saved_variables_file(&self, account: &str, addon: &str) -> Utf8PathBuf {
        self.saved_variables_dir(account).join(lua_file_name(addon))
    }

    pub fn staging_dir(&self) -> &Utf8Path {
        &self.staging_dir
    }

    pub fn staged_addons_dir(&self) -> Utf8PathBuf {
        self.staging_dir.join("AddOns")
    }

    pub fn staged_addon_dir(&self, addon: &str) -> Utf8PathBuf {
        self.staged_addons_dir().join(addon)
    }

    pub fn staged_wtf_dir(&self) -> Utf8PathBuf {
        self.staging_dir.join("WTF")
    }

    pub fn staged_saved_variables_file(&self, account: &str, addon: &str) -> Utf8PathBuf {
        account_saved_variables(&self.staged_wtf_dir(), account).join(lua_file_name(addon))
    }

    /// A top-level folder of the game client, e.g. `Cache`
    pub fn client_subdir(&self, name: &str) -> Utf8PathBuf {
        self.client_dir.join(name)
    }
}

fn account_saved_variables(wtf_dir: &Utf8Path, account: &str) -> Utf8PathBuf {
    wtf_dir.join("Account").join(account).join("SavedVariables")
}

fn lua_file_name(addon: &str) -> String {
    format!("{}.lua", addon)
}
