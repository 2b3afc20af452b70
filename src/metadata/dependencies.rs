//! Decode the raw dependency sequence into typed records.
//!
//! Entries are either bare combined `name/version` identifiers or
//! mappings with a required `path` key. The `opt` and `exp` flags are
//! presence-flags: a key present with value `false` still sets the flag,
//! mirroring the historical format's contract.

use anyhow::Result;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::core::ModrepoError;
use crate::models::DependencyRecord;
use crate::utils;

use super::{value_as_string, DEPENDENCIES_KEY};

/// The implicit language runtime module. It is assumed present in every
/// module and is silently excluded from decoded dependency sets, even
/// when the raw payload lists it explicitly.
pub const RUNTIME_MODULE: &str = "ceylon.language";

/// Key holding the combined identifier in a structured dependency entry.
const PATH_KEY: &str = "path";

/// Presence-flag marking a dependency optional.
const OPTIONAL_KEY: &str = "opt";

/// Presence-flag marking a dependency exported.
const EXPORTED_KEY: &str = "exp";

/// Decode the dependency sequence from a raw metadata tree.
///
/// An absent `$mod-deps` key yields an empty set. Duplicate module names
/// collapse to a single record (the first occurrence wins); the result is
/// sorted by module name for deterministic output.
pub fn decode(model: &Map<String, Value>) -> Result<Vec<DependencyRecord>> {
    let Some(raw) = model.get(DEPENDENCIES_KEY) else {
        return Ok(Vec::new());
    };
    let Value::Array(entries) = raw else {
        return Err(ModrepoError::UnexpectedDependencyShape {
            found: format!("expected a dependency sequence, found {}", type_name(raw)),
        }
        .into());
    };

    let mut by_name: BTreeMap<String, DependencyRecord> = BTreeMap::new();
    for entry in entries {
        let (combined, optional, exported) = decode_entry(entry)?;
        let name = utils::module_name(&combined);
        if name == RUNTIME_MODULE {
            continue;
        }
        let record = DependencyRecord {
            name: name.to_string(),
            version: utils::module_version(&combined).to_string(),
            optional,
            exported,
        };
        by_name.entry(record.name.clone()).or_insert(record);
    }

    tracing::debug!("decoded {} dependency record(s)", by_name.len());
    Ok(by_name.into_values().collect())
}

fn decode_entry(entry: &Value) -> Result<(String, bool, bool)> {
    match entry {
        Value::String(combined) => Ok((combined.clone(), false, false)),
        Value::Object(map) => {
            let combined = value_as_string(map.get(PATH_KEY)).ok_or_else(|| {
                ModrepoError::UnexpectedDependencyShape {
                    found: "a mapping entry without a usable 'path' key".to_string(),
                }
            })?;
            Ok((combined, map.contains_key(OPTIONAL_KEY), map.contains_key(EXPORTED_KEY)))
        }
        other => Err(ModrepoError::UnexpectedDependencyShape {
            found: format!("{} where a string or mapping entry was expected", type_name(other)),
        }
        .into()),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
