//! End-to-end extraction tests against on-disk artifact fixtures.
//!
//! Each test writes a small script artifact into a temp directory and
//! drives the public reader surface, the same way the surrounding
//! resolver would.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use modrepo::core::ModrepoError;
use modrepo::metadata::locator::METADATA_MARKERS;
use modrepo::metadata::{ModuleInfoReader, ScriptModuleReader};

const PAYLOAD: &str = "{\"$mod-name\":\"acme.base\",\"$mod-version\":\"1.2.0\",\
\"$mod-bin\":\"10.2\",\"$mod-deps\":[\"acme.collections/0.9\",\
{\"path\":\"acme.io/1.1\",\"opt\":1,\"exp\":1},\"ceylon.language/1.3.0\"]}";

fn write_artifact(dir: &TempDir, name: &str, marker: &str, payload: &str) -> PathBuf {
    let path = dir.path().join(name);
    let content = format!(
        "(function(define) {{\n  define(function(require, ex$, module) {{\n\
// compiled module body elided\n{marker}{payload};\n}});\n}}(define));\n"
    );
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn descriptor_is_identical_across_all_marker_formats() {
    let temp = TempDir::new().unwrap();
    let reader = ScriptModuleReader::new();

    let mut descriptors = Vec::new();
    for marker in METADATA_MARKERS {
        let path = write_artifact(&temp, "acme.base-1.2.0.js", marker, PAYLOAD);
        descriptors.push(reader.read_module_info("acme.base", &path, false).unwrap());
    }

    for descriptor in &descriptors[1..] {
        assert_eq!(descriptor, &descriptors[0]);
    }
    assert_eq!(descriptors[0].name, "acme.base");
    assert_eq!(descriptors[0].version, "1.2.0");
}

#[test]
fn name_mismatch_fails_even_with_valid_payload() {
    let temp = TempDir::new().unwrap();
    let path = write_artifact(&temp, "bar-1.0.js", "var $CCMM$=", PAYLOAD);
    let reader = ScriptModuleReader::new();

    let err = reader.read_module_info("foo", &path, false).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ModrepoError>(),
        Some(ModrepoError::NameMismatch { .. })
    ));
}

#[test]
fn runtime_module_never_appears_in_dependencies() {
    let temp = TempDir::new().unwrap();
    let path = write_artifact(&temp, "acme.base-1.2.0.js", "ex$.$CCMM$=", PAYLOAD);
    let reader = ScriptModuleReader::new();

    let descriptor = reader.read_module_info("acme.base", &path, false).unwrap();
    assert!(descriptor.dependencies.iter().all(|dep| dep.name != "ceylon.language"));
    assert_eq!(descriptor.dependencies.len(), 2);
}

#[test]
fn binary_version_decoding_table() {
    let temp = TempDir::new().unwrap();
    let reader = ScriptModuleReader::new();

    let cases = [
        ("{\"$mod-name\":\"m\",\"$mod-bin\":\"10.2\"}", (10, 2), Some(10), Some(2)),
        ("{\"$mod-name\":\"m\",\"$mod-bin\":\"10\"}", (10, 0), Some(10), None),
        ("{\"$mod-name\":\"m\"}", (0, 0), None, None),
    ];
    for (payload, pair, major, minor) in cases {
        let path = write_artifact(&temp, "m-1.js", "var $CCMM$=", payload);
        let descriptor = reader.read_module_info("m", &path, false).unwrap();
        assert_eq!(descriptor.artifact_types[0].major_binary_version, major);
        assert_eq!(descriptor.artifact_types[0].minor_binary_version, minor);
        assert_eq!(reader.get_binary_versions("m", &path).unwrap(), pair);
    }
}

#[test]
fn bare_and_flagged_entries_differ_only_in_optional() {
    let temp = TempDir::new().unwrap();
    let reader = ScriptModuleReader::new();

    let bare = write_artifact(
        &temp,
        "bare.js",
        "var $CCMM$=",
        "{\"$mod-name\":\"m\",\"$mod-deps\":[\"a/1.0\"]}",
    );
    let flagged = write_artifact(
        &temp,
        "flagged.js",
        "var $CCMM$=",
        "{\"$mod-name\":\"m\",\"$mod-deps\":[{\"path\":\"a/1.0\",\"opt\":true}]}",
    );

    let bare = reader.read_module_info("m", &bare, false).unwrap();
    let flagged = reader.read_module_info("m", &flagged, false).unwrap();

    assert_eq!(bare.dependencies[0].name, "a");
    assert_eq!(bare.dependencies[0].version, "1.0");
    assert_eq!(flagged.dependencies[0].name, "a");
    assert_eq!(flagged.dependencies[0].version, "1.0");
    assert!(!bare.dependencies[0].optional);
    assert!(flagged.dependencies[0].optional);
    assert_eq!(bare.dependencies[0].exported, flagged.dependencies[0].exported);
}

#[test]
fn duplicate_dependencies_collapse_to_one_record() {
    // Duplicates with conflicting flags have no documented tie-break;
    // only the cardinality of the result is guaranteed.
    let temp = TempDir::new().unwrap();
    let path = write_artifact(
        &temp,
        "m.js",
        "var $CCMM$=",
        "{\"$mod-name\":\"m\",\"$mod-deps\":[\"a/1.0\",{\"path\":\"a/1.0\",\"opt\":true},\"a/1.0\"]}",
    );
    let reader = ScriptModuleReader::new();

    let descriptor = reader.read_module_info("m", &path, false).unwrap();
    assert_eq!(descriptor.dependencies.iter().filter(|dep| dep.name == "a").count(), 1);
    assert_eq!(descriptor.dependencies.len(), 1);
}

#[test]
fn query_match_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    let path = write_artifact(&temp, "acme.base-1.2.0.js", "var $CCMM$=", PAYLOAD);
    let reader = ScriptModuleReader::new();

    assert!(reader.matches_query("acme.base", &path, "COLLECTIONS").unwrap());
    assert!(reader.matches_query("acme.base", &path, "acme.io").unwrap());
    assert!(!reader.matches_query("acme.base", &path, "nonexistent").unwrap());
}

#[test]
fn include_members_always_fails() {
    let temp = TempDir::new().unwrap();
    let path = write_artifact(&temp, "acme.base-1.2.0.js", "var $CCMM$=", PAYLOAD);
    let reader = ScriptModuleReader::new();

    let err = reader.read_module_info("acme.base", &path, true).unwrap_err();
    assert!(matches!(err.downcast_ref::<ModrepoError>(), Some(ModrepoError::NotImplemented)));
}

#[test]
fn sibling_model_file_wins_over_stale_inline_marker() {
    let temp = TempDir::new().unwrap();
    let artifact = write_artifact(
        &temp,
        "acme.base-1.2.0.js",
        "var $CCMM$=",
        "{\"$mod-name\":\"acme.base\",\"$mod-version\":\"0.1-stale\"}",
    );
    write_artifact(
        &temp,
        "acme.base-1.2.0-model.js",
        "ex$.$CCMM$=",
        "{\"$mod-name\":\"acme.base\",\"$mod-version\":\"1.2.0\"}",
    );
    let reader = ScriptModuleReader::new();

    let descriptor = reader.read_module_info("acme.base", &artifact, false).unwrap();
    assert_eq!(descriptor.version, "1.2.0");
    // The kind still reflects the artifact the caller named.
    assert_eq!(descriptor.artifact_types[0].kind, ".js");
}

#[test]
fn artifact_without_marker_reports_no_metadata() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("plain.js");
    fs::write(&path, "var x = 1;\nconsole.log(x);\n").unwrap();
    let reader = ScriptModuleReader::new();

    let err = reader.read_module_info("plain", &path, false).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ModrepoError>(),
        Some(ModrepoError::NoMetadataFound { .. })
    ));
}

#[test]
fn raw_model_preserves_unshaped_fields() {
    let temp = TempDir::new().unwrap();
    let path = write_artifact(
        &temp,
        "m.js",
        "var $$METAMODEL$$=",
        "{\"$mod-name\":\"m\",\"$mod-version\":\"1.0\",\"custom-field\":[1,2,3]}",
    );
    let reader = ScriptModuleReader::new();

    let model = reader.read_raw_model(&path).unwrap();
    assert_eq!(model["$mod-name"], "m");
    assert_eq!(model["custom-field"], serde_json::json!([1, 2, 3]));
}
