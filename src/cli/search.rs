//! Match a module's metadata against a search query.
//!
//! Exits with status 1 when the query does not match, so the command can
//! be used directly in shell conditionals.
//!
//! # Examples
//!
//! ```bash
//! modrepo search acme.base-1.0.js --module acme.base collections
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::metadata::ScriptModuleReader;

/// Command to check a descriptor against a case-insensitive query.
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// Path to the compiled artifact
    artifact: PathBuf,

    /// Module name the artifact is expected to declare
    #[arg(short, long)]
    module: String,

    /// Query matched against doc, license, authors, and dependency names
    query: String,
}

impl SearchCommand {
    pub fn execute(self) -> Result<()> {
        let reader = ScriptModuleReader::new();
        if reader.matches_query(&self.module, &self.artifact, &self.query)? {
            println!("{} matches '{}'", self.module.bold(), self.query);
            Ok(())
        } else {
            println!("{} does not match '{}'", self.module.bold(), self.query);
            std::process::exit(1);
        }
    }
}
