//! Assemble module descriptors from raw metadata trees.
//!
//! [`ScriptModuleReader`] is the extraction entry point the surrounding
//! resolver talks to. It is a stateless service value: instancing it,
//! sharing one instance, or injecting it behind the [`ModuleInfoReader`]
//! capability are all equivalent.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

use crate::artifact;
use crate::core::ModrepoError;
use crate::models::{ArtifactType, ModuleDescriptor};

use super::{
    binary_version, dependencies, locator, value_as_string, BINARY_VERSION_KEY, NAME_KEY,
    VERSION_KEY,
};

/// Capability for reading module descriptors out of built artifacts.
///
/// Only the path-based operation is implemented; the byte-slice and
/// reader operations exist so that callers holding non-path inputs get
/// an explicit [`ModrepoError::UnsupportedOperation`] instead of a
/// silent no-op.
pub trait ModuleInfoReader {
    /// Read the full module descriptor from an artifact on disk.
    fn read_module_info(
        &self,
        module_name: &str,
        artifact_path: &Path,
        include_members: bool,
    ) -> Result<ModuleDescriptor>;

    /// Read a descriptor from an in-memory artifact. Not supported for
    /// script artifacts.
    fn read_from_slice(&self, module_name: &str, content: &[u8]) -> Result<ModuleDescriptor>;

    /// Read a descriptor from a byte stream. Not supported for script
    /// artifacts.
    fn read_from_reader(
        &self,
        module_name: &str,
        content: &mut dyn Read,
    ) -> Result<ModuleDescriptor>;
}

/// Stateless reader for compiled script artifacts.
///
/// # Examples
///
/// ```rust,no_run
/// use modrepo::metadata::{ModuleInfoReader, ScriptModuleReader};
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let reader = ScriptModuleReader::new();
/// let descriptor =
///     reader.read_module_info("acme.base", Path::new("acme.base-1.0.js"), false)?;
/// for dep in &descriptor.dependencies {
///     println!("{} {}", dep.name, dep.version);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptModuleReader;

impl ScriptModuleReader {
    /// Create a reader. Readers carry no state and are freely shareable
    /// across threads.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Read the raw, unshaped metadata tree from an artifact.
    ///
    /// Lower-level access used internally and by tooling that wants the
    /// generic tree rather than a shaped descriptor. Applies the same
    /// sibling-model resolution as [`ModuleInfoReader::read_module_info`].
    pub fn read_raw_model(&self, artifact_path: &Path) -> Result<Map<String, Value>> {
        locator::read_raw_model(artifact_path)
    }

    /// The artifact's binary compatibility pair, with absent components
    /// reported as `0`.
    pub fn get_binary_versions(
        &self,
        module_name: &str,
        artifact_path: &Path,
    ) -> Result<(u32, u32)> {
        let descriptor = self.read_module_info(module_name, artifact_path, false)?;
        Ok(descriptor.binary_versions())
    }

    /// Whether the module's descriptor matches a repository search query.
    ///
    /// See [`ModuleDescriptor::matches_query`] for the match order.
    pub fn matches_query(
        &self,
        module_name: &str,
        artifact_path: &Path,
        query: &str,
    ) -> Result<bool> {
        let descriptor = self.read_module_info(module_name, artifact_path, false)?;
        Ok(descriptor.matches_query(query))
    }

    /// Resolver hook: read a descriptor only when the artifact filename
    /// carries a recognized compiled-script suffix.
    ///
    /// Returns `Ok(None)` for artifacts this reader does not handle, so
    /// the surrounding resolver can fall through to other readers.
    pub fn resolve_artifact(
        &self,
        module_name: &str,
        artifact_path: &Path,
    ) -> Result<Option<ModuleDescriptor>> {
        let recognized = artifact_path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(artifact::is_script_artifact);
        if !recognized {
            return Ok(None);
        }
        self.read_module_info(module_name, artifact_path, false).map(Some)
    }
}

impl ModuleInfoReader for ScriptModuleReader {
    fn read_module_info(
        &self,
        module_name: &str,
        artifact_path: &Path,
        include_members: bool,
    ) -> Result<ModuleDescriptor> {
        let model = locator::read_raw_model(artifact_path)
            .with_context(|| format!("reading module info for '{module_name}'"))?;

        let declared = value_as_string(model.get(NAME_KEY)).unwrap_or_default();
        if declared != module_name {
            return Err(ModrepoError::NameMismatch {
                path: artifact_path.to_path_buf(),
                requested: module_name.to_string(),
                declared,
            }
            .into());
        }

        let version = value_as_string(model.get(VERSION_KEY)).unwrap_or_default();
        let bin = value_as_string(model.get(BINARY_VERSION_KEY));
        let (major, minor) = binary_version::decode(bin.as_deref())?;

        // The artifact kind comes from the file the caller named, not
        // from the embedded data and not from a substituted sibling.
        let kind = artifact_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(artifact::suffix_from_filename)
            .unwrap_or_default();

        let deps = dependencies::decode(&model)?;

        if include_members {
            // Member extraction has no model yet; fail rather than
            // return a partially-populated descriptor.
            return Err(ModrepoError::NotImplemented.into());
        }

        Ok(ModuleDescriptor {
            name: module_name.to_string(),
            version,
            artifact_types: vec![ArtifactType::new(kind, major, minor)],
            dependencies: deps,
            doc: None,
            license: None,
            authors: Vec::new(),
            members: None,
        })
    }

    fn read_from_slice(&self, _module_name: &str, _content: &[u8]) -> Result<ModuleDescriptor> {
        Err(ModrepoError::UnsupportedOperation {
            operation: "reading module info from an in-memory artifact",
        }
        .into())
    }

    fn read_from_reader(
        &self,
        _module_name: &str,
        _content: &mut dyn Read,
    ) -> Result<ModuleDescriptor> {
        Err(ModrepoError::UnsupportedOperation {
            operation: "reading module info from a byte stream",
        }
        .into())
    }
}
