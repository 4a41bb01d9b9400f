//! Book record and the seed shelf every session starts from.

use serde::{Deserialize, Serialize};

/// One book on the shelf.
///
/// Title is the only identifier and is not unique: several copies or editions
/// may share it. On disk each record is a JSON object with exactly these keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i64,
    pub genre: String,
    pub read: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }

    /// Case-insensitive exact title comparison; `title_lower` must already be lowercase.
    pub(crate) fn title_is(&self, title_lower: &str) -> bool {
        self.title.to_lowercase() == title_lower
    }
}

/// The five books a fresh session starts with, three of them read.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("The Great Gatsby", "F. Scott Fitzgerald", 1925, "Classic", true),
        Book::new("1984", "George Orwell", 1949, "Dystopian", false),
        Book::new("To Kill a Mockingbird", "Harper Lee", 1960, "Fiction", true),
        Book::new("Pride and Prejudice", "Jane Austen", 1813, "Romance", false),
        Book::new("The Catcher in the Rye", "J.D. Salinger", 1951, "Literary Fiction", true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_five_books_three_read() {
        let seed = seed_books();
        assert_eq!(seed.len(), 5);
        assert_eq!(seed.iter().filter(|b| b.read).count(), 3);
        assert_eq!(seed[0].title, "The Great Gatsby");
        assert_eq!(seed[4].genre, "Literary Fiction");
    }

    #[test]
    fn serializes_with_plain_keys() {
        let book = Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", false);
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Dune",
                "author": "Frank Herbert",
                "year": 1965,
                "genre": "Sci-Fi",
                "read": false
            })
        );
    }

    #[test]
    fn rejects_non_integer_year() {
        let raw = r#"{"title":"X","author":"Y","year":"1965","genre":"Z","read":true}"#;
        assert!(serde_json::from_str::<Book>(raw).is_err());
    }

    #[test]
    fn title_match_ignores_case_only() {
        let book = Book::new("Dune Messiah", "Frank Herbert", 1969, "Sci-Fi", false);
        assert!(book.title_is("dune messiah"));
        assert!(!book.title_is("dune"));
    }
}
