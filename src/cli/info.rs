//! Show the module descriptor extracted from an artifact.
//!
//! # Examples
//!
//! ```bash
//! modrepo info acme.base-1.0.js --module acme.base
//! modrepo info acme.base-1.0.js --module acme.base --json
//! ```

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::metadata::{ModuleInfoReader, ScriptModuleReader};
use crate::models::ModuleDescriptor;

/// Command to display an artifact's module descriptor.
#[derive(Args, Debug)]
pub struct InfoCommand {
    /// Path to the compiled artifact
    artifact: PathBuf,

    /// Module name the artifact is expected to declare
    #[arg(short, long)]
    module: String,

    /// Output as JSON for scripting
    #[arg(long)]
    json: bool,
}

impl InfoCommand {
    /// Extract and print the descriptor.
    pub fn execute(self) -> Result<()> {
        let reader = ScriptModuleReader::new();
        let descriptor = reader
            .read_module_info(&self.module, &self.artifact, false)
            .with_context(|| format!("extracting metadata from {}", self.artifact.display()))?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&descriptor)?);
        } else {
            print_descriptor(&descriptor);
        }
        Ok(())
    }
}

fn print_descriptor(descriptor: &ModuleDescriptor) {
    println!("{} {}", descriptor.name.bold(), descriptor.version);
    for artifact in &descriptor.artifact_types {
        let (major, minor) = (
            artifact.major_binary_version.unwrap_or(0),
            artifact.minor_binary_version.unwrap_or(0),
        );
        println!("  {} {} (binary {major}.{minor})", "artifact".cyan(), artifact.kind);
    }
    if descriptor.dependencies.is_empty() {
        println!("  {}", "no dependencies".dimmed());
    } else {
        println!("  {}", "dependencies".cyan());
        for dep in &descriptor.dependencies {
            let mut flags = Vec::new();
            if dep.optional {
                flags.push("optional");
            }
            if dep.exported {
                flags.push("exported");
            }
            let suffix = if flags.is_empty() {
                String::new()
            } else {
                format!(" ({})", flags.join(", ")).dimmed().to_string()
            };
            println!("    {} {}{suffix}", dep.name, dep.version);
        }
    }
}
