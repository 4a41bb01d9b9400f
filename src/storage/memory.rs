//! `memory` store — keeps the last saved shelf in process memory.
//!
//! Used when persistence is disabled in config, and by tests that need a
//! store without touching disk. Starts empty.

use std::sync::Mutex;

use super::BookStore;
use crate::book::Book;
use crate::error::AppError;

#[derive(Default)]
pub struct MemoryStore {
    books: Mutex<Vec<Book>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `books`, as if saved by an earlier session.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books: Mutex::new(books) }
    }
}

impl BookStore for MemoryStore {
    fn store_type(&self) -> &str {
        "memory"
    }

    fn load(&self) -> Result<Vec<Book>, AppError> {
        let books = self
            .books
            .lock()
            .map_err(|_| AppError::Io(std::io::Error::other("memory store lock poisoned")))?;
        Ok(books.clone())
    }

    fn save(&self, books: &[Book]) -> Result<(), AppError> {
        let mut stored = self
            .books
            .lock()
            .map_err(|_| AppError::Io(std::io::Error::other("memory store lock poisoned")))?;
        *stored = books.to_vec();
        Ok(())
    }
}
