//! Plain-text rendering of books, menus and summaries.

use crate::book::Book;
use crate::library::Stats;

const CARD_WIDTH: usize = 50;

/// Boxed card, one field per line.
pub fn book_card(book: &Book) -> String {
    let rule = "═".repeat(CARD_WIDTH);
    let read = if book.read { "yes" } else { "no" };
    let rows = [
        format!(" Title: {}", book.title),
        format!(" Author: {}", book.author),
        format!(" Year: {}", book.year),
        format!(" Genre: {}", book.genre),
        format!(" Read: {read}"),
    ];

    let mut out = format!("╔{rule}╗\n");
    for row in rows {
        out.push_str(&format!("║{row:<CARD_WIDTH$}║\n"));
    }
    out.push_str(&format!("╚{rule}╝\n"));
    out
}

pub fn banner() -> String {
    let stars = "*".repeat(46);
    format!("{stars}\n*    Welcome to Personal Library Manager!    *\n{stars}\n")
}

pub fn menu() -> &'static str {
    "\nMain Menu\n\
     1. Add a book\n\
     2. Remove a book\n\
     3. Search books\n\
     4. Display all books\n\
     5. Show statistics\n\
     6. Exit\n"
}

pub fn stats(stats: &Stats) -> String {
    format!(
        "\nLibrary Statistics\nTotal books: {}\nPercentage read: {:.1}%\n",
        stats.total,
        stats.percent_read()
    )
}
