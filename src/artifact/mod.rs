//! Artifact file naming conventions.
//!
//! Compiled script modules come in two flavors: the full compiled
//! artifact (`.js`) and a separately generated, much smaller model file
//! (`-model.js`) that carries only the metadata marker line. The helpers
//! here classify filenames and implement the sibling-model resolution
//! rule used before scanning.

use std::path::{Path, PathBuf};

/// Suffix of a plain compiled script artifact.
pub const SCRIPT_SUFFIX: &str = ".js";

/// Suffix of a standalone model file holding only module metadata.
pub const SCRIPT_MODEL_SUFFIX: &str = "-model.js";

/// Derive the artifact kind from a filename.
///
/// The model suffix takes precedence over the plain script suffix
/// (`foo-model.js` is a model file, not a script named `foo-model`).
/// Unrecognized filenames fall back to their dotted extension, or an
/// empty string when there is none.
#[must_use]
pub fn suffix_from_filename(filename: &str) -> String {
    let lower = filename.to_lowercase();
    if lower.ends_with(SCRIPT_MODEL_SUFFIX) {
        SCRIPT_MODEL_SUFFIX.to_string()
    } else if lower.ends_with(SCRIPT_SUFFIX) {
        SCRIPT_SUFFIX.to_string()
    } else {
        filename.rfind('.').map_or_else(String::new, |idx| filename[idx..].to_string())
    }
}

/// Whether a filename carries a recognized compiled-artifact suffix.
#[must_use]
pub fn is_script_artifact(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    lower.ends_with(SCRIPT_SUFFIX) || lower.ends_with(SCRIPT_MODEL_SUFFIX)
}

/// Resolve the sibling model file for a plain compiled artifact.
///
/// If `path` names a plain `.js` artifact (not already a `-model.js`
/// file) and a file with the same stem plus the model suffix exists next
/// to it, return that sibling. The model file is smaller and is the
/// preferred scan target; a stale marker inside the plain artifact is
/// ignored when the sibling exists.
///
/// Returns `None` when the convention does not apply or the sibling is
/// not a regular file.
#[must_use]
pub fn sibling_model_file(path: &Path) -> Option<PathBuf> {
    let filename = path.file_name()?.to_str()?;
    let lower = filename.to_lowercase();
    if lower.ends_with(SCRIPT_MODEL_SUFFIX) || !lower.ends_with(SCRIPT_SUFFIX) {
        return None;
    }
    let stem = &filename[..filename.len() - SCRIPT_SUFFIX.len()];
    let sibling = path.with_file_name(format!("{stem}{SCRIPT_MODEL_SUFFIX}"));
    sibling.is_file().then_some(sibling)
}
