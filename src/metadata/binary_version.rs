//! Decode the compact binary compatibility version string.
//!
//! The reserved field holds either `"major"` or `"major.minor"`. An
//! absent field is not an error: the components simply stay unset, and
//! call sites that need concrete numbers coalesce them to zero.

use anyhow::Result;

use crate::core::ModrepoError;

/// Decode an optional `major[.minor]` string into its numeric components.
///
/// - `"10.2"` → `(Some(10), Some(2))`
/// - `"10"` → `(Some(10), None)` — minor is genuinely absent
/// - absent → `(None, None)`
///
/// Non-numeric content on either side of the split fails with
/// [`ModrepoError::InvalidBinaryVersion`].
pub fn decode(value: Option<&str>) -> Result<(Option<u32>, Option<u32>)> {
    let Some(raw) = value else {
        return Ok((None, None));
    };
    let parse = |part: &str| {
        part.parse::<u32>().map_err(|_| ModrepoError::InvalidBinaryVersion {
            value: raw.to_string(),
        })
    };
    match raw.split_once('.') {
        Some((major, minor)) => Ok((Some(parse(major)?), Some(parse(minor)?))),
        None => Ok((Some(parse(raw)?), None)),
    }
}
