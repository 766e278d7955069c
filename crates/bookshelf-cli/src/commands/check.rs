//! Check command implementation.

use anyhow::{Context, Result};
use clap::Args;

use bookshelf_core::{Book, BookDraft};

use crate::output;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Book title
    #[arg(long)]
    pub title: Option<String>,

    /// Book author
    #[arg(long)]
    pub author: Option<String>,

    /// Pretty-print the book as JSON
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let draft = BookDraft {
        title: args.title,
        author: args.author,
    };

    let book = Book::try_from(draft).context("Invalid book")?;

    if args.pretty {
        output::json_pretty(&book)?;
    } else {
        output::success(&book.to_string());
        output::field("Title", book.title());
        output::field("Author", book.author());
    }

    Ok(())
}
