//! Store configuration: where the credential database lives.
//!
//! Callers that already know their path can skip this module and hand
//! [`CredentialStore::open`](crate::store::CredentialStore::open) any
//! `&Path`. The desktop app reads an optional TOML file so packagers can
//! point the database somewhere else:
//!
//! ```toml
//! db_path = "~/.kiru/users.db"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Default database filename, placed under the platform data directory.
const DB_FILE: &str = "users.db";

/// Optional overrides read from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Database file location. A leading `~` expands to the home directory.
    /// When unset, the platform data directory is used.
    pub db_path: Option<String>,
}

impl StoreConfig {
    /// Read a config file. A missing file is not an error: defaults apply.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        // Unknown keys are rejected so a typo'd override fails loudly
        // instead of silently writing the database to the default spot.
        toml::from_str(&raw).map_err(|source| StoreError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Effective database location: the override if set, otherwise
    /// `users.db` under the platform data directory.
    pub fn resolve_db_path(&self) -> PathBuf {
        match &self.db_path {
            Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
            None => default_db_path(),
        }
    }
}

/// `users.db` under the platform data dir (e.g. `~/.local/share/kiru`),
/// falling back to the working directory when no home is known.
fn default_db_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "kiru")
        .map(|dirs| dirs.data_dir().join(DB_FILE))
        .unwrap_or_else(|| PathBuf::from(DB_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = StoreConfig::load(&tmp.path().join("no-such.toml")).unwrap();
        assert!(config.db_path.is_none());
        assert!(config.resolve_db_path().ends_with(DB_FILE));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("kiru.toml");
        std::fs::write(&path, "").unwrap();

        let config = StoreConfig::load(&path).unwrap();
        assert!(config.db_path.is_none());
    }

    #[test]
    fn override_is_used_verbatim() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("kiru.toml");
        std::fs::write(&path, "db_path = \"/srv/kiru/users.db\"\n").unwrap();

        let config = StoreConfig::load(&path).unwrap();
        assert_eq!(
            config.resolve_db_path(),
            PathBuf::from("/srv/kiru/users.db")
        );
    }

    #[test]
    fn tilde_expands_to_home() {
        let config = StoreConfig {
            db_path: Some("~/kiru-test/users.db".into()),
        };

        let resolved = config.resolve_db_path();
        assert!(resolved.ends_with("kiru-test/users.db"));
        if let Ok(home) = std::env::var("HOME") {
            assert!(resolved.starts_with(home));
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("kiru.toml");
        std::fs::write(&path, "db_pat = \"users.db\"\n").unwrap();

        let err = StoreConfig::load(&path).unwrap_err();
        assert!(matches!(err, StoreError::ConfigParse { .. }));
    }
}
