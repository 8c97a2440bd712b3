//! Build system configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File names that mark a directory as a Bazel package.
pub const DEFAULT_MARKER_FILES: &[&str] = &["BUILD.bazel", "BUILD"];

/// Suffix appended to a package path to select every target beneath it.
pub const DEFAULT_TARGET_SUFFIX: &str = "...";

/// Rule kinds queried by default. Native rules rather than macros, so that
/// `kind()` queries match them.
pub const DEFAULT_QUERY_KINDS: &[&str] =
    &["java_library", "java_import", "java_test", "jvm_import"];

/// Configuration for build target resolution and Bazel queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Build marker file names. Within a directory, the matching entry whose
    /// name sorts first wins.
    #[serde(default = "default_marker_files")]
    pub marker_files: Vec<String>,

    /// Wildcard suffix appended to resolved package paths.
    #[serde(default = "default_target_suffix")]
    pub target_suffix: String,

    /// Rule kinds to keep when building queries.
    #[serde(default = "default_query_kinds")]
    pub query_kinds: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            marker_files: default_marker_files(),
            target_suffix: default_target_suffix(),
            query_kinds: default_query_kinds(),
        }
    }
}

impl BuildConfig {
    /// Validate the build configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if no marker files are configured, a
    /// marker name is empty or contains a path separator, or the target
    /// suffix is empty.
    pub fn validate(&self) -> Result<()> {
        if self.marker_files.is_empty() {
            return Err(Error::InvalidConfig(
                "build.marker_files cannot be empty".to_string(),
            ));
        }
        for marker in &self.marker_files {
            if marker.is_empty() {
                return Err(Error::InvalidConfig(
                    "build.marker_files cannot contain an empty name".to_string(),
                ));
            }
            if marker.contains('/') || marker.contains(std::path::MAIN_SEPARATOR) {
                return Err(Error::InvalidConfig(format!(
                    "build marker '{marker}' must be a file name, not a path"
                )));
            }
        }
        if self.target_suffix.is_empty() {
            return Err(Error::InvalidConfig(
                "build.target_suffix cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_marker_files() -> Vec<String> {
    DEFAULT_MARKER_FILES.iter().map(ToString::to_string).collect()
}

fn default_target_suffix() -> String {
    DEFAULT_TARGET_SUFFIX.to_string()
}

fn default_query_kinds() -> Vec<String> {
    DEFAULT_QUERY_KINDS.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.marker_files, vec!["BUILD.bazel", "BUILD"]);
        assert_eq!(config.target_suffix, "...");
        assert_eq!(config.query_kinds.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_markers() {
        let config = BuildConfig {
            marker_files: vec![],
            ..BuildConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("marker_files cannot be empty"));
    }

    #[test]
    fn test_validate_marker_with_separator() {
        let config = BuildConfig {
            marker_files: vec!["sub/BUILD".to_string()],
            ..BuildConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must be a file name"));
    }

    #[test]
    fn test_validate_empty_marker_name() {
        let config = BuildConfig {
            marker_files: vec!["BUILD".to_string(), String::new()],
            ..BuildConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_empty_suffix() {
        let config = BuildConfig {
            target_suffix: String::new(),
            ..BuildConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("target_suffix"));
    }
}
