//! Dump the raw metadata tree embedded in an artifact.
//!
//! Exposes the unshaped key→value tree for tooling that needs fields the
//! shaped descriptor does not carry. Key order matches the artifact.
//!
//! # Examples
//!
//! ```bash
//! modrepo model acme.base-1.0.js
//! ```

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use std::path::PathBuf;

use crate::metadata::ScriptModuleReader;

/// Command to print the raw metadata tree as pretty JSON.
#[derive(Args, Debug)]
pub struct ModelCommand {
    /// Path to the compiled artifact
    artifact: PathBuf,
}

impl ModelCommand {
    pub fn execute(self) -> Result<()> {
        let reader = ScriptModuleReader::new();
        let model = reader.read_raw_model(&self.artifact)?;
        println!("{}", serde_json::to_string_pretty(&Value::Object(model))?);
        Ok(())
    }
}
