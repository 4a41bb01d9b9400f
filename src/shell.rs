//! Menu-driven command loop — reads one line per prompt from `input`, writes
//! everything the user sees to `output`.
//!
//! The shell owns the session's [`Library`]. Choice `6` saves it through the
//! store and ends the session. Closing input at any prompt ends the session
//! without saving.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::book::Book;
use crate::display;
use crate::error::AppError;
use crate::library::{Library, SearchMode, parse_read_flag, parse_year};
use crate::storage::BookStore;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Exit chosen from the menu; the library was saved.
    Saved,
    /// Input reached EOF; nothing was saved.
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Remove,
    Search,
    List,
    Stats,
    Exit,
}

fn parse_choice(line: &str) -> Option<MenuChoice> {
    match line.trim() {
        "1" => Some(MenuChoice::Add),
        "2" => Some(MenuChoice::Remove),
        "3" => Some(MenuChoice::Search),
        "4" => Some(MenuChoice::List),
        "5" => Some(MenuChoice::Stats),
        "6" => Some(MenuChoice::Exit),
        _ => None,
    }
}

pub struct Shell<'a, R, W> {
    library: Library,
    store: &'a dyn BookStore,
    input: R,
    output: W,
    strict_input: bool,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(library: Library, store: &'a dyn BookStore, input: R, output: W) -> Self {
        Self {
            library,
            store,
            input,
            output,
            strict_input: false,
        }
    }

    /// Fail the session on malformed input instead of re-prompting.
    pub fn strict_input(mut self, strict: bool) -> Self {
        self.strict_input = strict;
        self
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until exit is chosen or input closes.
    pub fn run(&mut self) -> Result<SessionEnd, AppError> {
        write!(self.output, "{}", display::banner())?;
        loop {
            match self.step() {
                Ok(None) => {}
                Ok(Some(end)) => return Ok(end),
                Err(AppError::InputClosed) => {
                    warn!("input closed, leaving without saving");
                    writeln!(self.output)?;
                    return Ok(SessionEnd::InputClosed);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn step(&mut self) -> Result<Option<SessionEnd>, AppError> {
        write!(self.output, "{}", display::menu())?;
        let line = self.prompt("\nEnter your choice [1-6]: ")?;
        let Some(choice) = parse_choice(&line) else {
            debug!(input = %line.trim(), "invalid menu choice");
            writeln!(self.output, "\nInvalid choice. Please enter 1-6.")?;
            return Ok(None);
        };
        debug!(?choice, "menu dispatch");

        match choice {
            MenuChoice::Add => self.add_book()?,
            MenuChoice::Remove => self.remove_book()?,
            MenuChoice::Search => self.search_books()?,
            MenuChoice::List => self.list_books()?,
            MenuChoice::Stats => {
                write!(self.output, "{}", display::stats(&self.library.stats()))?;
            }
            MenuChoice::Exit => {
                self.library.save_to(self.store)?;
                writeln!(self.output, "\nLibrary saved. Goodbye!")?;
                self.output.flush()?;
                return Ok(Some(SessionEnd::Saved));
            }
        }
        Ok(None)
    }

    /// Print `text` and read one line, without its line ending.
    fn prompt(&mut self, text: &str) -> Result<String, AppError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    fn prompt_year(&mut self) -> Result<i64, AppError> {
        loop {
            let raw = self.prompt("Enter publication year: ")?;
            match parse_year(&raw) {
                Ok(year) => return Ok(year),
                Err(e) if !self.strict_input => {
                    warn!("{e}");
                    writeln!(self.output, "{e}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn add_book(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\nAdd a New Book")?;
        let title = self.prompt("Enter title: ")?.trim().to_string();
        let author = self.prompt("Enter author: ")?.trim().to_string();
        let year = self.prompt_year()?;
        let genre = self.prompt("Enter genre: ")?.trim().to_string();
        let read = parse_read_flag(&self.prompt("Have you read this book? (yes/no): ")?);

        writeln!(self.output, "\n'{title}' has been added to your library!")?;
        self.library.add(Book { title, author, year, genre, read });
        Ok(())
    }

    fn remove_book(&mut self) -> Result<(), AppError> {
        let title = self.prompt("\nEnter title of the book to remove: ")?.trim().to_string();
        match self.library.remove_by_title(&title) {
            0 => writeln!(self.output, "\nNo books found with title: '{title}'")?,
            removed => writeln!(self.output, "\nRemoved {removed} copy(ies) of '{title}'")?,
        }
        Ok(())
    }

    fn search_books(&mut self) -> Result<(), AppError> {
        let mode = self.prompt("\nSearch by (1) Title or (2) Author? [1/2]: ")?;
        let term = self.prompt("Enter search term: ")?;

        let results = SearchMode::from_choice(&mode)
            .map(|mode| self.library.search(mode, &term))
            .unwrap_or_default();

        if results.is_empty() {
            writeln!(self.output, "\nNo matching books found.")?;
            return Ok(());
        }
        writeln!(self.output, "\nFound {} matching book(s):", results.len())?;
        for book in results {
            write!(self.output, "{}", display::book_card(book))?;
        }
        Ok(())
    }

    fn list_books(&mut self) -> Result<(), AppError> {
        if self.library.is_empty() {
            writeln!(self.output, "\nYour library is empty!")?;
            return Ok(());
        }
        writeln!(self.output, "\nYour Library:")?;
        for book in self.library.books() {
            write!(self.output, "{}", display::book_card(book))?;
        }
        Ok(())
    }
}
