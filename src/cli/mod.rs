//! Command-line interface for modrepo.
//!
//! Subcommands mirror the library surface:
//!
//! - `modrepo info` — full module descriptor from an artifact
//! - `modrepo versions` — binary compatibility pair only
//! - `modrepo search` — query match against descriptor text fields
//! - `modrepo model` — the raw, unshaped metadata tree
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=modrepo=debug`).

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod info;
mod model;
mod search;
mod versions;

pub use info::InfoCommand;
pub use model::ModelCommand;
pub use search::SearchCommand;
pub use versions::VersionsCommand;

/// Client tools for module repositories of compiled script modules.
#[derive(Parser, Debug)]
#[command(name = "modrepo", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the module descriptor extracted from an artifact
    Info(InfoCommand),
    /// Show the artifact's binary compatibility version pair
    Versions(VersionsCommand),
    /// Check whether a module's metadata matches a search query
    Search(SearchCommand),
    /// Dump the raw metadata tree embedded in an artifact
    Model(ModelCommand),
}

impl Cli {
    /// Dispatch the parsed command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Info(cmd) => cmd.execute(),
            Commands::Versions(cmd) => cmd.execute(),
            Commands::Search(cmd) => cmd.execute(),
            Commands::Model(cmd) => cmd.execute(),
        }
    }
}

/// Parse arguments, install the log subscriber, and run.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().execute()
}
