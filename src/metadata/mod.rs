//! Module metadata extraction from compiled script artifacts.
//!
//! A compiled script artifact is mostly executable code, but one line of
//! it carries the serialized module descriptor. This module recovers that
//! descriptor without ever evaluating the artifact as a program:
//!
//! 1. [`locator`] scans the artifact text for the metadata marker line
//!    and extracts the embedded structured literal.
//! 2. The literal is parsed with `serde_json` into a generic tree.
//! 3. [`binary_version`] and [`dependencies`] decode the reserved fields.
//! 4. [`reader`] assembles the pieces into a [`ModuleDescriptor`] and
//!    validates the requested module identity.
//!
//! None of the components hold cross-call state; each operation is a pure
//! function of its inputs plus the single bounded file read it performs,
//! so a shared [`ScriptModuleReader`] can be used from many threads at
//! once.
//!
//! [`ModuleDescriptor`]: crate::models::ModuleDescriptor

use serde_json::Value;

pub mod binary_version;
pub mod dependencies;
pub mod locator;
pub mod reader;

pub use locator::read_raw_model;
pub use reader::{ModuleInfoReader, ScriptModuleReader};

/// Reserved key holding the module name.
pub const NAME_KEY: &str = "$mod-name";

/// Reserved key holding the module version.
pub const VERSION_KEY: &str = "$mod-version";

/// Reserved key holding the binary compatibility version string.
pub const BINARY_VERSION_KEY: &str = "$mod-bin";

/// Reserved key holding the module dependency sequence.
pub const DEPENDENCIES_KEY: &str = "$mod-deps";

/// Render a scalar tree value as a string.
///
/// Historical artifacts occasionally carry numbers where strings are
/// expected (an unquoted version, for instance), so scalars are
/// stringified rather than rejected. Missing values and non-scalar
/// shapes yield `None`.
pub(crate) fn value_as_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}
