//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{check::CheckArgs, demo::DemoArgs};

/// Book catalog demonstration tool.
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(author, version = env!("BOOKSHELF_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the book list demonstration
    Demo(DemoArgs),

    /// Validate a single book record
    Check(CheckArgs),
}
