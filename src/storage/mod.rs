//! Storage adapters — whole-shelf load and save.
//!
//! A store reads the complete book sequence once at startup and overwrites it
//! once on exit. There is no incremental persistence: a session that ends
//! without saving leaves the backing store untouched.

pub mod json_file;
pub mod memory;

use crate::book::Book;
use crate::error::AppError;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Pluggable shelf backend.
pub trait BookStore: Send + Sync {
    /// Short name used in logs (e.g. `"json_file"`).
    fn store_type(&self) -> &str;

    /// Read every stored book in order. An absent backing store is an empty shelf.
    fn load(&self) -> Result<Vec<Book>, AppError>;

    /// Replace the stored contents with `books`.
    fn save(&self, books: &[Book]) -> Result<(), AppError>;
}
