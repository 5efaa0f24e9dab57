pub(crate) mod config;
pub(crate) mod game;
pub(crate) mod lookup;
pub(crate) mod review;
pub(crate) mod seed;
pub(crate) mod stats;
pub(crate) mod user;

use std::path::PathBuf;

use gamerev_db::{Connection, DiskFileStore, Hasher};
use serde::Serialize;

use crate::settings::Settings;
use crate::CliError;

/// Everything a database command needs: the open connection, settings,
/// and how to print results.
pub(crate) struct Context {
    pub conn: Connection,
    pub settings: Settings,
    pub db_path: PathBuf,
    json: bool,
}

impl Context {
    pub(crate) fn open(
        settings: Settings,
        db_override: Option<PathBuf>,
        json: bool,
    ) -> Result<Self, CliError> {
        let db_path = db_override.unwrap_or_else(|| settings.database.path.clone());
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        log::debug!("Opening database {}", db_path.display());
        let conn = gamerev_db::open_database(&db_path)?;
        Ok(Self {
            conn,
            settings,
            db_path,
            json,
        })
    }

    pub(crate) fn hasher(&self) -> Result<Hasher, CliError> {
        Ok(Hasher::new((&self.settings.hashing).into())?)
    }

    pub(crate) fn store(&self) -> DiskFileStore {
        DiskFileStore::new(&self.settings.storage.public_dir)
    }

    /// Print `value` as JSON when `--json` was given, otherwise run `human`.
    pub(crate) fn emit<T: Serialize + ?Sized>(
        &self,
        value: &T,
        human: impl FnOnce(&T),
    ) -> Result<(), CliError> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human(value);
        }
        Ok(())
    }

    /// Report a created row: its ID in JSON mode, a message otherwise.
    pub(crate) fn emit_created(&self, what: &str, id: i64) -> Result<(), CliError> {
        self.emit(&serde_json::json!({ "ID": id }), |_| {
            log::info!("Added {what} {id}");
        })
    }

    /// Report a successful mutation with no result value.
    pub(crate) fn emit_done(&self, message: &str) -> Result<(), CliError> {
        self.emit(&serde_json::json!({ "success": true }), |_| {
            log::info!("{message}");
        })
    }
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_strings_unchanged() {
        assert_eq!(truncate_str("Doom", 10), "Doom");
    }

    #[test]
    fn truncate_long_strings() {
        assert_eq!(truncate_str("The Legend of Zelda", 10), "The Leg...");
        assert_eq!(truncate_str("Zelda", 2), "Ze");
    }
}
