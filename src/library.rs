//! The in-memory shelf and the operations the menu dispatches to.
//!
//! Every operation is a linear scan over an ordered `Vec<Book>`. Insertion
//! order is preserved and duplicate records are allowed.

use tracing::{debug, info};

use crate::book::{Book, seed_books};
use crate::error::AppError;
use crate::storage::BookStore;

/// Field a search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Title,
    Author,
}

impl SearchMode {
    /// Menu selector: `1` is title, `2` is author. Anything else is `None`,
    /// which callers treat as an empty result rather than an error.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Title),
            "2" => Some(Self::Author),
            _ => None,
        }
    }
}

/// Shelf totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub read: usize,
}

impl Stats {
    /// Share of books marked read, in percent. `0.0` for an empty shelf.
    pub fn percent_read(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.read as f64 / self.total as f64 * 100.0
    }
}

/// Ordered, mutable collection of books for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Session start: the seed shelf (when `seed` is set) followed by
    /// everything `store` holds.
    pub fn bootstrap(store: &dyn BookStore, seed: bool) -> Result<Self, AppError> {
        let mut books = if seed { seed_books() } else { Vec::new() };
        let loaded = store.load()?;
        info!(
            store = store.store_type(),
            seeded = books.len(),
            loaded = loaded.len(),
            "library ready"
        );
        books.extend(loaded);
        Ok(Self { books })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append `book` at the end. No duplicate check.
    pub fn add(&mut self, book: Book) {
        debug!(title = %book.title, "book added");
        self.books.push(book);
    }

    /// Remove every book whose title equals `title`, ignoring case. Returns
    /// how many were removed; `0` leaves the shelf untouched.
    pub fn remove_by_title(&mut self, title: &str) -> usize {
        let wanted = title.to_lowercase();
        let before = self.books.len();
        self.books.retain(|b| !b.title_is(&wanted));
        let removed = before - self.books.len();
        debug!(%title, removed, "remove by title");
        removed
    }

    /// Books whose `mode` field contains `term`, ignoring case, in shelf order.
    pub fn search(&self, mode: SearchMode, term: &str) -> Vec<&Book> {
        let term = term.trim().to_lowercase();
        self.books
            .iter()
            .filter(|b| {
                let field = match mode {
                    SearchMode::Title => &b.title,
                    SearchMode::Author => &b.author,
                };
                field.to_lowercase().contains(&term)
            })
            .collect()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total: self.books.len(),
            read: self.books.iter().filter(|b| b.read).count(),
        }
    }

    /// Persist the whole shelf through `store`.
    pub fn save_to(&self, store: &dyn BookStore) -> Result<(), AppError> {
        store.save(&self.books)?;
        info!(store = store.store_type(), count = self.books.len(), "library saved");
        Ok(())
    }
}

/// Parse a publication year typed at the prompt.
pub fn parse_year(input: &str) -> Result<i64, AppError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| AppError::Validation(format!("year must be a whole number, got '{trimmed}'")))
}

/// `yes` in any case means read; every other answer means unread.
pub fn parse_read_flag(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", false)
    }

    fn titles(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn bootstrap_seeds_then_appends_stored() {
        let store = MemoryStore::with_books(vec![dune()]);
        let lib = Library::bootstrap(&store, true).unwrap();
        assert_eq!(lib.len(), 6);
        assert_eq!(lib.books()[0].title, "The Great Gatsby");
        assert_eq!(lib.books()[5], dune());
    }

    #[test]
    fn bootstrap_without_seed_is_stored_only() {
        let store = MemoryStore::with_books(vec![dune()]);
        let lib = Library::bootstrap(&store, false).unwrap();
        assert_eq!(lib.books(), &[dune()]);
    }

    #[test]
    fn seed_library_stats() {
        let lib = Library::bootstrap(&MemoryStore::new(), true).unwrap();
        let stats = lib.stats();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.read, 3);
        assert_eq!(format!("{:.1}", stats.percent_read()), "60.0");
    }

    #[test]
    fn add_appends_last() {
        let mut lib = Library::new(seed_books());
        lib.add(dune());
        assert_eq!(lib.len(), 6);
        assert_eq!(lib.books().last(), Some(&dune()));
    }

    #[test]
    fn add_allows_exact_duplicates() {
        let mut lib = Library::default();
        lib.add(dune());
        lib.add(dune());
        assert_eq!(lib.len(), 2);
    }

    #[test]
    fn remove_is_case_insensitive_exact() {
        let mut lib = Library::new(seed_books());
        lib.add(dune());
        assert_eq!(lib.remove_by_title("dune"), 1);
        assert_eq!(lib, Library::new(seed_books()));
    }

    #[test]
    fn remove_takes_every_copy_and_keeps_order() {
        let mut lib = Library::new(vec![
            dune(),
            Book::new("Emma", "Jane Austen", 1815, "Romance", true),
            Book::new("DUNE", "Someone Else", 2000, "Parody", true),
            Book::new("Dune Messiah", "Frank Herbert", 1969, "Sci-Fi", false),
            Book::new("Persuasion", "Jane Austen", 1817, "Romance", false),
        ]);
        assert_eq!(lib.remove_by_title("Dune"), 2);
        let left: Vec<&str> = lib.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(left, ["Emma", "Dune Messiah", "Persuasion"]);
    }

    #[test]
    fn remove_absent_title_is_noop() {
        let mut lib = Library::new(seed_books());
        assert_eq!(lib.remove_by_title("Ulysses"), 0);
        assert_eq!(lib, Library::new(seed_books()));
    }

    #[test]
    fn search_title_substring() {
        let lib = Library::new(seed_books());
        let hits = lib.search(SearchMode::Title, "THE");
        assert_eq!(titles(&hits), ["The Great Gatsby", "The Catcher in the Rye"]);
    }

    #[test]
    fn search_author_substring() {
        let lib = Library::new(seed_books());
        let hits = lib.search(SearchMode::Author, "or");
        assert_eq!(titles(&hits), ["1984"]);
    }

    #[test]
    fn search_without_match_is_empty() {
        let lib = Library::new(seed_books());
        assert!(lib.search(SearchMode::Title, "tolkien").is_empty());
    }

    #[test]
    fn unrecognized_mode_is_empty_result() {
        let lib = Library::new(seed_books());
        let hits = SearchMode::from_choice("3")
            .map(|mode| lib.search(mode, ""))
            .unwrap_or_default();
        assert!(hits.is_empty());
    }

    #[test]
    fn mode_choices() {
        assert_eq!(SearchMode::from_choice("1"), Some(SearchMode::Title));
        assert_eq!(SearchMode::from_choice(" 2 "), Some(SearchMode::Author));
        assert_eq!(SearchMode::from_choice("title"), None);
    }

    #[test]
    fn percent_read_rounding() {
        let empty = Stats { total: 0, read: 0 };
        assert_eq!(format!("{:.1}", empty.percent_read()), "0.0");
        let half = Stats { total: 4, read: 2 };
        assert_eq!(format!("{:.1}", half.percent_read()), "50.0");
        let third = Stats { total: 3, read: 1 };
        assert_eq!(format!("{:.1}", third.percent_read()), "33.3");
    }

    #[test]
    fn save_to_writes_whole_shelf() {
        let store = MemoryStore::new();
        let mut lib = Library::new(seed_books());
        lib.add(dune());
        lib.save_to(&store).unwrap();
        assert_eq!(store.load().unwrap(), lib.books());
    }

    #[test]
    fn year_parsing() {
        assert_eq!(parse_year(" 1965\n").unwrap(), 1965);
        assert_eq!(parse_year("-500").unwrap(), -500);
        assert!(matches!(parse_year("nineteen"), Err(AppError::Validation(_))));
        assert!(matches!(parse_year(""), Err(AppError::Validation(_))));
        assert!(matches!(parse_year("1965.5"), Err(AppError::Validation(_))));
    }

    #[test]
    fn read_flag_parsing() {
        assert!(parse_read_flag("yes"));
        assert!(parse_read_flag("YES\n"));
        assert!(!parse_read_flag("y"));
        assert!(!parse_read_flag("no"));
        assert!(!parse_read_flag(""));
    }
}
