//! Shared data models for extracted module metadata.
//!
//! These types form the immutable result of a metadata extraction: a
//! [`ModuleDescriptor`] with its [`ArtifactType`]s and deduplicated
//! [`DependencyRecord`]s. A descriptor is constructed fresh on every
//! extraction call, never mutated afterwards, and carries no identity
//! beyond its field values — callers that want caching layer it on top.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single declared dependency of a module.
///
/// Records are unique by `name` within a descriptor. The `optional` and
/// `exported` flags are presence-flags in the wire format: their
/// informational content is binary, independent of any value the key
/// carried.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// Module name of the dependency.
    pub name: String,

    /// Version of the dependency; empty when the combined identifier
    /// carried no version part.
    pub version: String,

    /// Whether the dependency is optional at runtime.
    pub optional: bool,

    /// Whether the dependency is re-exported to downstream consumers.
    pub exported: bool,
}

/// The kind and binary-compatibility level of one built artifact.
///
/// `kind` is derived from the artifact's file suffix, not from the
/// embedded metadata. The binary version components are kept genuinely
/// optional: `"10"` decodes to a present major and an absent minor, and
/// that distinction survives into this type even though some call sites
/// coalesce absent components to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactType {
    /// File suffix identifying the artifact kind (e.g. `.js`, `-model.js`).
    pub kind: String,

    /// Major binary compatibility version, if declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_binary_version: Option<u32>,

    /// Minor binary compatibility version, if declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor_binary_version: Option<u32>,
}

impl ArtifactType {
    /// Create an artifact type from a file suffix and decoded binary versions.
    #[must_use]
    pub const fn new(kind: String, major: Option<u32>, minor: Option<u32>) -> Self {
        Self {
            kind,
            major_binary_version: major,
            minor_binary_version: minor,
        }
    }
}

/// The structured result of a metadata extraction.
///
/// Immutable once built. A single extraction produces exactly one entry
/// in `artifact_types`; the field is a sequence because a descriptor may
/// accumulate types when a caller merges successive reads of different
/// artifact kinds for the same module version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    /// Canonical module identifier; always equals the name the caller
    /// requested (extraction fails otherwise).
    pub name: String,

    /// Module version as declared in the artifact.
    pub version: String,

    /// Artifact kinds this descriptor covers; at least one entry.
    pub artifact_types: Vec<ArtifactType>,

    /// Declared dependencies, unique by name, sorted by name for
    /// deterministic output. Never contains the implicit runtime module.
    pub dependencies: Vec<DependencyRecord>,

    /// Module documentation, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    /// Module license, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Module authors, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,

    /// Declared top-level members; only present when explicitly requested
    /// (and member extraction is currently unimplemented, so in practice
    /// always absent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<BTreeSet<String>>,
}

impl ModuleDescriptor {
    /// Case-insensitive substring search over the descriptor's text fields.
    ///
    /// Checked in order, short-circuiting on the first hit: documentation,
    /// license, each author, each dependency's module name. Absent fields
    /// are skipped, not treated as failures.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        if self.doc.as_deref().is_some_and(|doc| contains(doc, &needle)) {
            return true;
        }
        if self.license.as_deref().is_some_and(|license| contains(license, &needle)) {
            return true;
        }
        if self.authors.iter().any(|author| contains(author, &needle)) {
            return true;
        }
        self.dependencies.iter().any(|dep| contains(&dep.name, &needle))
    }

    /// The binary compatibility pair of the first declared artifact type,
    /// with absent components reported as `0`.
    #[must_use]
    pub fn binary_versions(&self) -> (u32, u32) {
        self.artifact_types.first().map_or((0, 0), |artifact| {
            (
                artifact.major_binary_version.unwrap_or(0),
                artifact.minor_binary_version.unwrap_or(0),
            )
        })
    }
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}
