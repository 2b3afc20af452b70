//! modrepo - module repository client tools
//!
//! A client-side library (and small CLI) for module repositories of a
//! compiled-to-script ecosystem. Its job is to recover a module's
//! dependency manifest, version, and binary-compatibility markers from an
//! already-built artifact, so a dependency resolver can compute
//! transitive graphs without re-parsing source.
//!
//! # How extraction works
//!
//! A compiled artifact is executable script code, but exactly one line of
//! it declares the serialized module descriptor. modrepo treats the
//! artifact strictly as text: it scans line by line for one of the four
//! historically-used marker prefixes, extracts the embedded structured
//! literal, and parses it with a generic JSON parser. The artifact is
//! never evaluated as a program.
//!
//! Four marker formats are recognized and must stay supported forever:
//! `ex$.$CCMM$=`, `var $CCMM$=`, `var $$METAMODEL$$=`, and
//! `var $$metamodel$$=`, each closing with `};` at the end of the line.
//!
//! # Core modules
//!
//! - [`metadata`] - Marker location, field decoding, and descriptor assembly
//! - [`models`] - The immutable [`ModuleDescriptor`] result type and friends
//! - [`artifact`] - File suffix conventions and sibling-model resolution
//! - [`core`] - Typed error handling ([`ModrepoError`])
//! - [`cli`] - Command-line interface (`info`, `versions`, `search`, `model`)
//! - [`utils`] - Combined `name/version` identifier splitting
//!
//! # Example
//!
//! ```rust,no_run
//! use modrepo::metadata::{ModuleInfoReader, ScriptModuleReader};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let reader = ScriptModuleReader::new();
//! let descriptor =
//!     reader.read_module_info("acme.base", Path::new("acme.base-1.0.js"), false)?;
//! println!("{} {} ({} dependencies)",
//!     descriptor.name, descriptor.version, descriptor.dependencies.len());
//! # Ok(())
//! # }
//! ```
//!
//! [`ModuleDescriptor`]: models::ModuleDescriptor
//! [`ModrepoError`]: core::ModrepoError

pub mod artifact;
pub mod cli;
pub mod core;
pub mod metadata;
pub mod models;
pub mod utils;
