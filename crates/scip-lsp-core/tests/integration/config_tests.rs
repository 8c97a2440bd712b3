//! Configuration fixtures.

#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use scip_lsp_core::config::Config;

use crate::common::test_utils::config_fixture_path;

#[test]
fn test_config_loading_minimal() {
    let config = Config::load_from(&config_fixture_path("minimal.toml")).unwrap();

    assert_eq!(config.build.marker_files, vec!["BUILD.bazel", "BUILD"]);
    assert_eq!(config.build.target_suffix, "...");
    assert_eq!(config.symbols.detail_prefix, "[uLSP]");
    assert!(config.workspace.root.is_none());
}

#[test]
fn test_config_loading_custom() {
    let config = Config::load_from(&config_fixture_path("custom.toml")).unwrap();

    assert_eq!(
        config.workspace.root,
        Some(PathBuf::from("/home/dev/monorepo"))
    );
    assert_eq!(config.build.marker_files, vec!["BUILD"]);
    assert_eq!(config.build.target_suffix, "all");
    assert_eq!(config.build.query_kinds, vec!["java_library", "java_test"]);
    assert_eq!(config.symbols.detail_prefix, "[scip] ");
    assert_eq!(
        config.workspace_root_or(Path::new("/elsewhere")),
        PathBuf::from("/home/dev/monorepo")
    );
}

#[test]
fn test_missing_fixture_is_reported() {
    let err = Config::load_from(&config_fixture_path("does-not-exist.toml")).unwrap_err();
    assert!(err.to_string().contains("configuration file not found"));
}
