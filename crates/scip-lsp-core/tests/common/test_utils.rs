//! Shared helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use scip_lsp_core::scip::Document;
use tempfile::TempDir;

/// Returns the path to the Bazel workspace test fixture.
pub fn bazel_workspace_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/bazel_workspace")
}

/// Returns the path to a configuration fixture.
pub fn config_fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/configs")
        .join(name)
}

/// Loads a SCIP document fixture dumped as JSON.
#[allow(clippy::expect_used)]
pub fn load_scip_document(name: &str) -> Document {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/scip")
        .join(name);
    let content = fs::read_to_string(&path).expect("Failed to read SCIP fixture");
    serde_json::from_str(&content).expect("Failed to parse SCIP fixture")
}

/// Creates a temporary workspace containing the given files. Paths ending in
/// `/` become empty directories.
#[allow(clippy::expect_used)]
pub fn temp_workspace(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    for file in files {
        let path = tmp.path().join(file);
        if file.ends_with('/') {
            fs::create_dir_all(&path).expect("Failed to create directory");
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create parent");
            }
            fs::write(&path, "").expect("Failed to write file");
        }
    }
    tmp
}

/// Joins a `/`-separated relative path onto `root`.
pub fn under(root: &Path, relative: &str) -> PathBuf {
    relative.split('/').fold(root.to_path_buf(), |acc, part| acc.join(part))
}
