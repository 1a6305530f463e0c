//! Local file record source.

use crate::model::LoadError;
use std::path::{Path, PathBuf};

/// Reads the record payload from a JSON file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path read by this source.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::FileNotFound` if the file does not exist.
    /// Returns `LoadError::Io` for other I/O errors.
    pub fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        if !self.path.exists() {
            return Err(LoadError::FileNotFound {
                path: self.path.clone(),
            });
        }

        std::fs::read(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
