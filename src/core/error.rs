//! Typed errors for module metadata extraction.
//!
//! Every failure mode of the extraction pipeline has its own variant so
//! callers (and tests) can distinguish them with a downcast, while the
//! public API surfaces [`anyhow::Result`] for ergonomic context chaining.
//!
//! # Example
//!
//! ```rust,no_run
//! use modrepo::core::ModrepoError;
//! use modrepo::metadata::{ModuleInfoReader, ScriptModuleReader};
//! use std::path::Path;
//!
//! let reader = ScriptModuleReader::new();
//! match reader.read_module_info("acme.base", Path::new("acme.base-1.0.js"), false) {
//!     Ok(descriptor) => println!("{} {}", descriptor.name, descriptor.version),
//!     Err(err) => match err.downcast_ref::<ModrepoError>() {
//!         Some(ModrepoError::NoMetadataFound { .. }) => eprintln!("not a module artifact"),
//!         _ => eprintln!("extraction failed: {err:#}"),
//!     },
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while extracting a module descriptor from an artifact.
///
/// All variants are fatal to the extraction call that raised them; there
/// is no retry and no partial-success mode. A descriptor is either fully
/// built or not returned at all.
#[derive(Debug, Error)]
pub enum ModrepoError {
    /// No recognized metadata marker line exists anywhere in the scanned file.
    #[error("no module metadata found in {path}")]
    NoMetadataFound {
        /// The file that was scanned (after sibling-model substitution).
        path: PathBuf,
    },

    /// A marker line was found but its payload is not a valid structured literal.
    #[error("malformed module metadata in {path}")]
    MalformedMetadata {
        /// The file the fragment was extracted from.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The module name declared in the artifact disagrees with the requested name.
    ///
    /// This signals a file-selection bug upstream: the caller handed us an
    /// artifact belonging to a different module.
    #[error("module name mismatch in {path}: requested '{requested}', artifact declares '{declared}'")]
    NameMismatch {
        path: PathBuf,
        requested: String,
        declared: String,
    },

    /// The binary compatibility version field is present but not parseable.
    #[error("invalid binary compatibility version '{value}'")]
    InvalidBinaryVersion { value: String },

    /// A dependency sequence element is neither a bare identifier string
    /// nor a mapping with a `path` field.
    #[error("unexpected dependency entry: {found}")]
    UnexpectedDependencyShape { found: String },

    /// The requested input mode is not supported for script artifacts.
    ///
    /// Extraction works on filesystem paths only; byte slices and readers
    /// are rejected up front rather than silently ignored.
    #[error("operation not supported for script artifacts: {operation}")]
    UnsupportedOperation { operation: &'static str },

    /// Member listing was requested but is not implemented for script artifacts.
    #[error("listing module members is not implemented for script artifacts")]
    NotImplemented,

    /// An I/O failure while reading the artifact.
    #[error("failed to read artifact {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = ModrepoError::NameMismatch {
            path: PathBuf::from("acme.base-1.0.js"),
            requested: "acme.base".to_string(),
            declared: "acme.core".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("acme.base-1.0.js"));
        assert!(message.contains("acme.base"));
        assert!(message.contains("acme.core"));
    }

    #[test]
    fn test_downcast_through_anyhow_context() {
        use anyhow::Context;

        let result: anyhow::Result<()> = Err(ModrepoError::NotImplemented.into());
        let err = result.context("reading module info").unwrap_err();
        assert!(matches!(err.downcast_ref::<ModrepoError>(), Some(ModrepoError::NotImplemented)));
    }
}
