//! Flat-file JSON persistence for the book collection. Every function in this
//! module encapsulates one side of the file contract (path resolution, read,
//! write) so the store can stay focused on in-memory state management.

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{PersistenceError, Result};
use crate::models::Book;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".book-library-manager";
/// JSON file name stored inside the application data directory.
const LIBRARY_FILE_NAME: &str = "library.json";

#[derive(Debug, Clone)]
/// Handle to the single JSON document that holds the whole collection. The
/// file's root is an array of book objects; the file is rewritten in full on
/// every save, so the handle never holds it open between operations.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Bind to an explicit file path. This is the one piece of configuration
    /// the core takes at startup.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Bind to the conventional per-user location,
    /// `~/.book-library-manager/library.json`.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Resolve the absolute path of the default library file inside the
    /// user's home directory.
    pub fn default_path() -> Result<PathBuf> {
        let base_dirs = BaseDirs::new().ok_or(PersistenceError::NoHomeDirectory)?;
        Ok(base_dirs
            .home_dir()
            .join(DATA_DIR_NAME)
            .join(LIBRARY_FILE_NAME))
    }

    /// The path this handle reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the whole record array. A missing file surfaces as an
    /// IO error; callers decide whether that is fatal or just means "no
    /// collection yet".
    pub fn read(&self) -> Result<Vec<Book>> {
        let raw = fs::read_to_string(&self.path).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let books = serde_json::from_str(&raw).map_err(|source| PersistenceError::Decode {
            path: self.path.clone(),
            source,
        })?;
        Ok(books)
    }

    /// Serialize the full record sequence and overwrite the file, creating
    /// parent directories on first save.
    pub fn write(&self, books: &[Book]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| PersistenceError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let json = serde_json::to_string_pretty(books).map_err(PersistenceError::Encode)?;
        fs::write(&self.path, json).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}
