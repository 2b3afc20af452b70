//! Core types for modrepo.
//!
//! This module holds the foundation of modrepo's type system: the typed
//! error enumeration used across the extraction pipeline.
//!
//! # Error handling pattern
//!
//! Public APIs return [`anyhow::Result`] so callers can attach context
//! freely, while the strongly-typed [`ModrepoError`] underneath keeps the
//! individual failure modes distinguishable:
//!
//! ```rust,no_run
//! use modrepo::core::ModrepoError;
//! use modrepo::metadata::{ModuleInfoReader, ScriptModuleReader};
//! use std::path::Path;
//!
//! let reader = ScriptModuleReader::new();
//! let err = reader.read_module_info("acme.base", Path::new("missing.js"), false).unwrap_err();
//! if let Some(ModrepoError::Io { path, .. }) = err.downcast_ref::<ModrepoError>() {
//!     eprintln!("cannot read {}", path.display());
//! }
//! ```

pub mod error;

pub use error::ModrepoError;
