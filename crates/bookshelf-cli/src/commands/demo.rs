//! Demo command implementation.

use anyhow::Result;
use clap::Args;
use tracing::info;

use bookshelf_core::{Book, BookDraft, BookList};

use crate::output::{self, ConsoleReporter};

/// Index read at the end of the demonstration; always past the end.
const MISSING_INDEX: usize = 10;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Print listed books as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: DemoArgs) -> Result<()> {
    let mut books = BookList::with_reporter(ConsoleReporter);

    books.add_book(Book::new("Book1", "Author1")?);
    books.add_book(Book::new("Book2", "Author2")?);
    print_books(&books, args.json)?;

    // Absent fields: both insertions are reported and skipped.
    books.add_book(BookDraft::default().author("Author1"));
    books.add_book(BookDraft::default().title("Book2"));
    print_books(&books, args.json)?;

    let probe = Book::new("Book1", "Author1")?;
    let found = books.contains_book(&probe);
    println!("Is {} in the list? {}", probe, found);

    info!(index = MISSING_INDEX, len = books.len(), "reading past the end");
    let book = books.get(MISSING_INDEX)?;
    println!("{}", book);

    Ok(())
}

fn print_books(books: &BookList, json: bool) -> Result<()> {
    output::heading("Books in the list:");
    for book in books {
        if json {
            output::json(book)?;
        } else {
            println!("{}", book);
        }
    }
    Ok(())
}
