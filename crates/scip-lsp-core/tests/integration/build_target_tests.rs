//! Build target resolution against real directory trees.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use scip_lsp_core::build::{
    BuildTargetResolver, QueryDirection, TargetQuery, find_build_marker, resolve_build_target,
    target_label,
};
use scip_lsp_core::config::Config;
use scip_lsp_core::Error;

use crate::common::test_utils::{bazel_workspace_path, config_fixture_path, temp_workspace, under};

#[test]
fn test_fixture_app_file_resolves_to_package() {
    let root = bazel_workspace_path();
    let file = under(&root, "src/main/java/com/example/app/App.java");

    let target = resolve_build_target(&root, &file).unwrap();
    assert_eq!(target, "src/main/java/com/example/app/...");
}

#[test]
fn test_fixture_nested_file_uses_nearest_ancestor() {
    let root = bazel_workspace_path();
    let file = under(&root, "src/main/java/com/example/app/util/Strings.java");

    assert_eq!(
        resolve_build_target(&root, &file).unwrap(),
        "src/main/java/com/example/app/..."
    );
    assert_eq!(
        find_build_marker(&root, &file, true).unwrap(),
        under(&root, "src/main/java/com/example/app/BUILD.bazel")
    );
}

#[test]
fn test_fixture_plain_build_file() {
    let root = bazel_workspace_path();
    let file = under(&root, "src/main/java/com/example/lib/Lib.java");

    assert_eq!(
        find_build_marker(&root, &file, true).unwrap(),
        under(&root, "src/main/java/com/example/lib/BUILD")
    );
    assert_eq!(
        find_build_marker(&root, &file, false).unwrap(),
        under(&root, "src/main/java/com/example/lib")
    );
}

#[test]
fn test_fixture_root_build_file_does_not_govern() {
    let root = bazel_workspace_path();
    let file = under(&root, "tools/scripts/run.sh");

    let err = resolve_build_target(&root, &file).unwrap_err();
    assert!(matches!(err, Error::NoBuildMarker(_)));
}

#[test]
fn test_directory_argument() {
    let root = bazel_workspace_path();
    let dir = under(&root, "src/main/java/com/example/lib");
    assert_eq!(
        resolve_build_target(&root, &dir).unwrap(),
        "src/main/java/com/example/lib/..."
    );
}

#[test]
fn test_file_two_levels_below_marker() {
    let ws = temp_workspace(&["a/BUILD", "a/b/Foo.java"]);
    let file = under(ws.path(), "a/b/Foo.java");

    assert_eq!(resolve_build_target(ws.path(), &file).unwrap(), "a/...");
}

#[test]
fn test_no_marker_anywhere() {
    let ws = temp_workspace(&["a/b/Foo.java", "a/README.md"]);
    let file = under(ws.path(), "a/b/Foo.java");

    let err = resolve_build_target(ws.path(), &file).unwrap_err();
    assert!(matches!(err, Error::NoBuildMarker(_)));
    assert!(err.to_string().contains("no build marker found"));
}

#[test]
fn test_outside_workspace() {
    let ws = temp_workspace(&["a/BUILD", "a/Foo.java"]);
    let other = temp_workspace(&["b/BUILD", "b/Bar.java"]);
    let file = under(other.path(), "b/Bar.java");

    let err = resolve_build_target(ws.path(), &file).unwrap_err();
    assert!(matches!(err, Error::PathOutsideWorkspace { .. }));
}

#[test]
fn test_outside_workspace_for_missing_path_is_not_io_error() {
    let ws = temp_workspace(&["a/BUILD"]);
    let err = resolve_build_target(ws.path(), &PathBuf::from("/definitely/not/here.java"))
        .unwrap_err();
    assert!(matches!(err, Error::PathOutsideWorkspace { .. }));
}

#[test]
fn test_missing_file_inside_workspace() {
    let ws = temp_workspace(&["a/BUILD"]);
    let file = under(ws.path(), "a/Gone.java");

    let err = find_build_marker(ws.path(), &file, false).unwrap_err();
    match err {
        Error::FileIo { path, source } => {
            assert_eq!(path, file);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_directory_named_like_marker_counts() {
    let ws = temp_workspace(&["a/BUILD/", "a/b/Foo.java"]);
    let file = under(ws.path(), "a/b/Foo.java");

    // Only names are compared, so a directory named BUILD still counts.
    assert_eq!(resolve_build_target(ws.path(), &file).unwrap(), "a/...");
}

#[test]
fn test_both_markers_in_one_directory() {
    let ws = temp_workspace(&["a/BUILD.bazel", "a/BUILD", "a/Foo.java"]);
    let file = under(ws.path(), "a/Foo.java");

    assert_eq!(
        find_build_marker(ws.path(), &file, true).unwrap(),
        under(ws.path(), "a/BUILD")
    );
}

#[test]
fn test_repeated_lookups_are_stable() {
    let ws = temp_workspace(&["x/BUILD.bazel", "x/y/z/Foo.java"]);
    let file = under(ws.path(), "x/y/z/Foo.java");
    let resolver = BuildTargetResolver::new();

    let first = resolver.find_build_marker(ws.path(), &file, true).unwrap();
    for _ in 0..3 {
        assert_eq!(resolver.find_build_marker(ws.path(), &file, true).unwrap(), first);
    }
}

#[test]
fn test_resolver_from_config_fixture() {
    let config = Config::load_from(&config_fixture_path("custom.toml")).unwrap();
    let resolver = BuildTargetResolver::from_config(&config.build);

    let ws = temp_workspace(&["a/BUILD.bazel", "a/b/BUILD", "a/b/c/Foo.java"]);
    let file = under(ws.path(), "a/b/c/Foo.java");
    assert_eq!(resolver.resolve_build_target(ws.path(), &file).unwrap(), "a/b/all");

    let ws = temp_workspace(&["a/BUILD.bazel", "a/Foo.java"]);
    let file = under(ws.path(), "a/Foo.java");
    assert!(matches!(
        resolver.resolve_build_target(ws.path(), &file),
        Err(Error::NoBuildMarker(_))
    ));
}

#[test]
fn test_resolved_targets_feed_query() {
    let root = bazel_workspace_path();
    let targets: Vec<String> = [
        "src/main/java/com/example/app/App.java",
        "src/main/java/com/example/lib/Lib.java",
    ]
    .iter()
    .map(|f| target_label(&resolve_build_target(&root, &under(&root, f)).unwrap()))
    .collect();

    let expr = TargetQuery::new(targets)
        .direction(QueryDirection::Rdeps { universe: None })
        .kinds(["java_library"])
        .expression()
        .unwrap();

    assert_eq!(
        expr,
        r#"kind("java_library", rdeps("//...", "//src/main/java/com/example/app/..." + "//src/main/java/com/example/lib/..."))"#
    );
}
