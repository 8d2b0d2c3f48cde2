//! Persistent CLI configuration
//!
//! Stores the API key and an optional base URL override in a user-scoped
//! JSON file. Every mutator writes the file immediately, via a temp file
//! renamed into place so an interrupted write cannot clobber prior state.
//! Concurrent invocations race with last-writer-wins semantics.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Production API endpoint, used whenever no override is stored.
pub const DEFAULT_BASE_URL: &str = "https://cloud-api.krystal.app";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
}

/// Handle to the on-disk configuration file.
///
/// The store is stateless between calls: every accessor re-reads the file,
/// every mutator rewrites it. A missing file is equivalent to an empty
/// configuration.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Open the store at the standard user-scoped location.
    pub fn open() -> Result<Self> {
        let dirs = ProjectDirs::from("app", "krystal", "krystal")
            .ok_or_else(|| Error::Config("could not resolve a home directory".to_string()))?;
        Ok(Self {
            path: dirs.config_dir().join("config.json"),
        })
    }

    /// Open a store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the persisted configuration, for display purposes.
    pub fn config_path(&self) -> &Path {
        &self.path
    }

    /// Store the API key. An empty string unsets the key (used by logout)
    /// and is not an error.
    pub fn set_api_key(&self, key: &str) -> Result<()> {
        let mut config = self.load()?;
        config.api_key = if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        };
        self.save(&config)
    }

    /// Store a base URL override. The value is not validated here; a
    /// malformed URL surfaces later as a request failure.
    pub fn set_base_url(&self, url: &str) -> Result<()> {
        let mut config = self.load()?;
        config.base_url = Some(url.to_string());
        self.save(&config)
    }

    /// The stored base URL override, or [`DEFAULT_BASE_URL`].
    pub fn base_url(&self) -> Result<String> {
        Ok(self
            .load()?
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
    }

    /// The stored API key, if any. An empty stored value counts as unset.
    pub fn api_key(&self) -> Result<Option<SecretString>> {
        Ok(self
            .load()?
            .api_key
            .filter(|key| !key.is_empty())
            .map(SecretString::from))
    }

    /// Redacted rendering of the stored key for `config show`. The raw key
    /// is never returned: long keys keep the first and last four characters
    /// visible, short keys are fully masked.
    pub fn masked_api_key(&self) -> Result<String> {
        Ok(match self.load()?.api_key.filter(|key| !key.is_empty()) {
            Some(key) => mask_key(&key),
            None => "(not set)".to_string(),
        })
    }

    /// Remove all stored configuration. Subsequent reads behave like a
    /// fresh store with no prior writes.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Config(format!(
                "failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn load(&self) -> Result<StoredConfig> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                Error::Config(format!("invalid config file {}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoredConfig::default()),
            Err(e) => Err(Error::Config(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn save(&self, config: &StoredConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
        let raw = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)
            .map_err(|e| Error::Config(format!("failed to write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            Error::Config(format!("failed to update {}: {}", self.path.display(), e))
        })
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() >= 12 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "********".to_string()
    }
}
