//! Small shared helpers.
//!
//! Currently this is the combined module identifier convention: a single
//! string encoding both a dependency's module name and version, split at
//! the first `/`.

/// The module name part of a combined `name/version` identifier.
///
/// Returns the whole string when no delimiter is present.
#[must_use]
pub fn module_name(combined: &str) -> &str {
    combined.split_once('/').map_or(combined, |(name, _)| name)
}

/// The version part of a combined `name/version` identifier.
///
/// Returns an empty string when no delimiter is present.
#[must_use]
pub fn module_version(combined: &str) -> &str {
    combined.split_once('/').map_or("", |(_, version)| version)
}
