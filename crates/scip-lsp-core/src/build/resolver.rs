//! Build marker search and build target derivation.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};

use super::fs::{FileSystem, OsFileSystem};
use crate::config::{BuildConfig, DEFAULT_MARKER_FILES, DEFAULT_TARGET_SUFFIX};
use crate::error::{Error, Result};

/// Resolves the build target governing a source file.
///
/// The resolver holds no state between calls; every lookup walks the
/// filesystem afresh.
#[derive(Debug, Clone)]
pub struct BuildTargetResolver<F = OsFileSystem> {
    fs: F,
    marker_files: Vec<String>,
    target_suffix: String,
}

impl BuildTargetResolver<OsFileSystem> {
    /// Create a resolver over the real filesystem with default markers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_file_system(OsFileSystem)
    }

    /// Create a resolver over the real filesystem from configuration.
    #[must_use]
    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new()
            .with_marker_files(config.marker_files.iter().cloned())
            .with_target_suffix(config.target_suffix.clone())
    }
}

impl Default for BuildTargetResolver<OsFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> BuildTargetResolver<F> {
    /// Create a resolver over a custom filesystem with default markers.
    pub fn with_file_system(fs: F) -> Self {
        Self {
            fs,
            marker_files: DEFAULT_MARKER_FILES.iter().map(ToString::to_string).collect(),
            target_suffix: DEFAULT_TARGET_SUFFIX.to_string(),
        }
    }

    /// Replace the recognized marker file names. When a directory holds
    /// several markers, the one whose name sorts first wins.
    #[must_use]
    pub fn with_marker_files<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.marker_files = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the wildcard suffix appended to resolved targets.
    #[must_use]
    pub fn with_target_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.target_suffix = suffix.into();
        self
    }

    /// Recognized marker file names.
    #[must_use]
    pub fn marker_files(&self) -> &[String] {
        &self.marker_files
    }

    /// Whether `name` is a recognized build marker file name.
    #[must_use]
    pub fn is_build_marker(&self, name: &OsStr) -> bool {
        self.marker_files.iter().any(|m| OsStr::new(m) == name)
    }

    /// Find the build marker closest to `file`.
    ///
    /// Starts at `file` if it is a directory, otherwise at its parent, and
    /// walks upward. Directories strictly below `workspace_root` are
    /// searched; the root itself is not. Returns the marker file path when
    /// `include_marker` is set, otherwise the directory containing it.
    ///
    /// # Errors
    ///
    /// - `Error::PathOutsideWorkspace` if `file` is not inside
    ///   `workspace_root`; the filesystem is not touched in that case.
    /// - `Error::FileIo` if `file` does not exist or a directory cannot be listed.
    /// - `Error::NoBuildMarker` if the walk reaches the root without a match.
    pub fn find_build_marker(
        &self,
        workspace_root: &Path,
        file: &Path,
        include_marker: bool,
    ) -> Result<PathBuf> {
        ensure_in_workspace(workspace_root, file)?;

        let is_dir = self.fs.is_dir(file).map_err(|source| Error::FileIo {
            path: file.to_path_buf(),
            source,
        })?;

        let mut current = if is_dir {
            file
        } else {
            file.parent().unwrap_or(workspace_root)
        };

        while current != workspace_root {
            let mut children = self.fs.list_dir(current).map_err(|source| Error::FileIo {
                path: current.to_path_buf(),
                source,
            })?;
            children.sort();

            let marker = children.iter().find(|child| self.is_build_marker(child));

            if let Some(marker) = marker {
                debug!(dir = %current.display(), marker = ?marker, "found build marker");
                return Ok(if include_marker {
                    current.join(marker)
                } else {
                    current.to_path_buf()
                });
            }

            trace!(dir = %current.display(), "no build marker");
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        debug!(file = %file.display(), "reached workspace root without a build marker");
        Err(Error::NoBuildMarker(file.to_path_buf()))
    }

    /// Resolve the workspace-relative build target for `file`, e.g. `a/b/...`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::find_build_marker`], or
    /// `Error::MissingWorkspaceRoot` if the marker directory does not lie
    /// strictly below `workspace_root`.
    pub fn resolve_build_target(&self, workspace_root: &Path, file: &Path) -> Result<String> {
        let dir = self.find_build_marker(workspace_root, file, false)?;

        let Some(relative) = dir
            .strip_prefix(workspace_root)
            .ok()
            .filter(|rel| rel.components().next().is_some())
        else {
            return Err(Error::MissingWorkspaceRoot {
                dir: dir.clone(),
                root: workspace_root.to_path_buf(),
            });
        };

        let mut segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        segments.push(self.target_suffix.clone());

        let target = segments.join("/");
        debug!(file = %file.display(), %target, "resolved build target");
        Ok(target)
    }
}

/// Reject paths that are not lexically inside the workspace, including ones
/// that climb out of it through `..`.
fn ensure_in_workspace(workspace_root: &Path, file: &Path) -> Result<()> {
    match file.strip_prefix(workspace_root) {
        Ok(rest) if !rest.components().any(|c| matches!(c, Component::ParentDir)) => Ok(()),
        _ => Err(Error::PathOutsideWorkspace {
            path: file.to_path_buf(),
            root: workspace_root.to_path_buf(),
        }),
    }
}

/// Find the build marker closest to `file` on the real filesystem.
///
/// # Errors
///
/// See [`BuildTargetResolver::find_build_marker`].
pub fn find_build_marker(
    workspace_root: &Path,
    file: &Path,
    include_marker: bool,
) -> Result<PathBuf> {
    BuildTargetResolver::new().find_build_marker(workspace_root, file, include_marker)
}

/// Resolve the build target for `file` on the real filesystem.
///
/// # Errors
///
/// See [`BuildTargetResolver::resolve_build_target`].
pub fn resolve_build_target(workspace_root: &Path, file: &Path) -> Result<String> {
    BuildTargetResolver::new().resolve_build_target(workspace_root, file)
}
