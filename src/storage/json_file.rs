//! `json_file` store — the shelf as one pretty-printed JSON array.
//!
//! ```text
//! [
//!   { "title": "...", "author": "...", "year": 1925, "genre": "...", "read": true },
//!   ...
//! ]
//! ```
//!
//! No schema version. `save` overwrites the whole file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::BookStore;
use crate::book::Book;
use crate::error::AppError;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for JsonFileStore {
    fn store_type(&self) -> &str {
        "json_file"
    }

    fn load(&self) -> Result<Vec<Book>, AppError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no library file, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(AppError::Io(e)),
        };
        let books: Vec<Book> = serde_json::from_str(&data)
            .map_err(|e| AppError::Format(format!("{}: {e}", self.path.display())))?;
        debug!(path = %self.path.display(), count = books.len(), "library file loaded");
        Ok(books)
    }

    fn save(&self, books: &[Book]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(books)
            .map_err(|e| AppError::Format(format!("serialise library: {e}")))?;
        fs::write(&self.path, data)?;
        debug!(path = %self.path.display(), count = books.len(), "library file written");
        Ok(())
    }
}
