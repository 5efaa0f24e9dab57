//! YAML loading for seed data.
//!
//! A seed file lists categories, publishers and games; a seed directory
//! holds any number of such files, merged in file-name order.

use crate::types::SeedData;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
}

/// Load a single seed file.
pub fn load_seed(path: &Path) -> Result<SeedData, YamlError> {
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yml::from_str(&contents).map_err(|e| YamlError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load and merge every `.yaml`/`.yml` file in a directory.
///
/// A missing directory yields empty seed data.
pub fn load_seed_dir(dir: &Path) -> Result<SeedData, YamlError> {
    if !dir.exists() {
        return Ok(SeedData::default());
    }
    if !dir.is_dir() {
        return Err(YamlError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| YamlError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut merged = SeedData::default();
    for entry in entries {
        let seed = load_seed(&entry.path())?;
        merged.categories.extend(seed.categories);
        merged.publishers.extend(seed.publishers);
        merged.games.extend(seed.games);
    }

    Ok(merged)
}
