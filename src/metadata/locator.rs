//! Locate and extract the metadata marker line from an artifact.
//!
//! The artifact is read line by line to bound memory use; everything
//! around the marker line is treated as opaque text and never evaluated.
//! Four historically-used marker prefixes are recognized, and this scan
//! must stay bit-for-bit backward compatible with all of them.

use anyhow::Result;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::artifact;
use crate::core::ModrepoError;

/// The four metadata-declaration prefixes, newest first. They are
/// mutually exclusive in any real artifact.
pub const METADATA_MARKERS: [&str; 4] =
    ["ex$.$CCMM$=", "var $CCMM$=", "var $$METAMODEL$$=", "var $$metamodel$$="];

/// Suffix closing a marker line.
const MARKER_SUFFIX: &str = "};";

fn is_marker_line(line: &str) -> bool {
    line.ends_with(MARKER_SUFFIX)
        && METADATA_MARKERS.iter().any(|marker| line.starts_with(marker))
}

/// Scan an artifact for its metadata marker line and return the embedded
/// structured-literal fragment.
///
/// The fragment spans from the first `{` on the marker line through the
/// closing `}` (the trailing `;` is dropped). Scanning stops at the first
/// match; if no line in the entire file matches, the scan fails with
/// [`ModrepoError::NoMetadataFound`].
pub fn find_metadata_fragment(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|source| ModrepoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    for line in reader.lines() {
        let line = line.map_err(|source| ModrepoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if is_marker_line(&line) {
            // A marker line always opens its payload with a brace; a
            // prefix match without one is not a metadata declaration.
            let Some(start) = line.find('{') else {
                continue;
            };
            tracing::debug!("found metadata marker in {}", path.display());
            return Ok(line[start..line.len() - 1].to_string());
        }
    }

    Err(ModrepoError::NoMetadataFound {
        path: path.to_path_buf(),
    }
    .into())
}

/// Read the raw metadata tree from an artifact.
///
/// Applies the sibling-model resolution rule first: a plain compiled
/// artifact defers to its `-model.js` sibling when one exists, without
/// the caller needing to know about the convention. The extracted
/// fragment is then parsed into a generic ordered key→value tree; parse
/// failures surface as [`ModrepoError::MalformedMetadata`].
pub fn read_raw_model(artifact_path: &Path) -> Result<Map<String, Value>> {
    let scan_target = match artifact::sibling_model_file(artifact_path) {
        Some(model) => {
            tracing::debug!(
                "reading metadata from sibling model file {} instead of {}",
                model.display(),
                artifact_path.display()
            );
            model
        }
        None => artifact_path.to_path_buf(),
    };

    let fragment = find_metadata_fragment(&scan_target)?;
    let model: Map<String, Value> =
        serde_json::from_str(&fragment).map_err(|source| ModrepoError::MalformedMetadata {
            path: scan_target.clone(),
            source,
        })?;
    Ok(model)
}
