//! Show an artifact's binary compatibility version pair.
//!
//! # Examples
//!
//! ```bash
//! modrepo versions acme.base-1.0.js --module acme.base
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::metadata::ScriptModuleReader;

/// Command to print the `major.minor` binary compatibility pair.
///
/// Absent components are reported as `0`.
#[derive(Args, Debug)]
pub struct VersionsCommand {
    /// Path to the compiled artifact
    artifact: PathBuf,

    /// Module name the artifact is expected to declare
    #[arg(short, long)]
    module: String,
}

impl VersionsCommand {
    pub fn execute(self) -> Result<()> {
        let reader = ScriptModuleReader::new();
        let (major, minor) = reader.get_binary_versions(&self.module, &self.artifact)?;
        println!("{major}.{minor}");
        Ok(())
    }
}
