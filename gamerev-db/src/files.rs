//! Picture file storage.
//!
//! Uploaded pictures are copied under a public root as
//! `<collection>/<owner_id>/<name>.<ext>`; only the relative path is stored
//! in the database.

use std::fs;
use std::path::{Path, PathBuf};

use gamerev_catalog::ValidationError;

use crate::error::OperationError;

/// Destination for uploaded files.
pub trait FileStore {
    /// Copy `source` into the store and return its path relative to the root.
    fn store(
        &self,
        source: &Path,
        mime_type: &str,
        collection: &str,
        owner_id: i64,
        name: &str,
    ) -> Result<String, OperationError>;
}

/// File extension for a MIME type, e.g. `image/png` → `png`.
pub fn extension_for_mime(mime_type: &str) -> Option<&'static str> {
    let mime = mime_type.trim().to_ascii_lowercase();
    match mime.as_str() {
        "image/jpeg" | "image/jpg" | "image/pjpeg" => Some("jpg"),
        other => mime_guess::get_mime_extensions_str(other)?.first().copied(),
    }
}

/// A [`FileStore`] backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DiskFileStore {
    root: PathBuf,
}

impl DiskFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileStore for DiskFileStore {
    fn store(
        &self,
        source: &Path,
        mime_type: &str,
        collection: &str,
        owner_id: i64,
        name: &str,
    ) -> Result<String, OperationError> {
        let ext = extension_for_mime(mime_type).ok_or(ValidationError::Missing("type"))?;
        let relative = format!("{collection}/{owner_id}/{name}.{ext}");
        let dest = self.root.join(&relative);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &dest)?;
        log::debug!("Stored {} as {}", source.display(), dest.display());

        Ok(relative)
    }
}
