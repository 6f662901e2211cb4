mod check;
mod completions;
mod propose;
mod table;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use propose::ProposeCommand;
use table::TableCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for moniker_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "moniker")]
#[command(version)]
#[command(about = "Propose idiomatic identifier names from type names")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Propose(cmd) => cmd.run(),
            Commands::Table(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Propose identifier names for a declaration site of the given type
    Propose(ProposeCommand),

    /// Show the effective well-known type mappings
    Table(TableCommand),

    /// Validate a moniker.toml without proposing anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
