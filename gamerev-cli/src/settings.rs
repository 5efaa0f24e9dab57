//! Application settings: `~/.config/gamerev/settings.toml`.
//!
//! Every key is optional. A missing file means all defaults.
//!
//! ```toml
//! [database]
//! path = "/srv/gamerev/reviews.db"
//!
//! [storage]
//! public_dir = "/srv/gamerev/public"
//!
//! [hashing]
//! memory_kib = 19456
//! iterations = 2
//! parallelism = 1
//! ```

use std::path::{Path, PathBuf};

use gamerev_db::HashConfig;
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gamerev").join("settings.toml")
}

/// Directory for the database and public files when none is configured.
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gamerev")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub database: DatabaseSettings,
    pub storage: StorageSettings,
    pub hashing: HashingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DatabaseSettings {
    pub path: PathBuf,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: default_data_dir().join("reviews.db"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct StorageSettings {
    /// Root that uploaded pictures are copied under.
    pub public_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            public_dir: default_data_dir().join("public"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct HashingSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingSettings {
    fn default() -> Self {
        let config = HashConfig::default();
        Self {
            memory_kib: config.memory_kib,
            iterations: config.iterations,
            parallelism: config.parallelism,
        }
    }
}

impl From<&HashingSettings> for HashConfig {
    fn from(s: &HashingSettings) -> Self {
        HashConfig {
            memory_kib: s.memory_kib,
            iterations: s.iterations,
            parallelism: s.parallelism,
        }
    }
}

impl Settings {
    /// Load settings from the canonical path.
    pub(crate) fn load() -> Result<Self, CliError> {
        Self::load_from(&settings_path())
    }

    /// Load settings from `path`. A missing file yields the defaults; a file
    /// that exists but does not parse is an error.
    pub(crate) fn load_from(path: &Path) -> Result<Self, CliError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(&contents)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))
    }

    fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Pretty-printed TOML of the effective settings.
    pub(crate) fn to_toml(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self).map_err(|e| CliError::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let settings = Settings::parse(
            "[database]\npath = \"/tmp/x.db\"\n\n[hashing]\niterations = 5\n",
        )
        .unwrap();
        assert_eq!(settings.database.path, PathBuf::from("/tmp/x.db"));
        assert_eq!(settings.hashing.iterations, 5);
        assert_eq!(
            settings.hashing.memory_kib,
            HashingSettings::default().memory_kib
        );
        assert_eq!(settings.storage, StorageSettings::default());
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[database\npath = 3").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn round_trips_through_toml() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        assert_eq!(Settings::parse(&text).unwrap(), settings);
    }
}
