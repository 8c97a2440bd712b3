//! Error types for scip-lsp-core.
//!
//! Geometry never fails (see [`crate::mapper`]); everything reported here
//! comes from build target resolution, query construction, or configuration.

use std::path::PathBuf;

/// The main error type for scip-lsp-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file is not a descendant of the workspace root.
    #[error("path {path:?} is not inside workspace {root:?}")]
    PathOutsideWorkspace {
        /// The rejected path.
        path: PathBuf,
        /// The workspace root it was checked against.
        root: PathBuf,
    },

    /// No ancestor directory below the workspace root contains a build marker.
    #[error("no build marker found for {0:?}")]
    NoBuildMarker(PathBuf),

    /// The marker directory does not lie strictly below the workspace root.
    #[error("build marker directory {dir:?} is missing workspace root {root:?}")]
    MissingWorkspaceRoot {
        /// The marker directory.
        dir: PathBuf,
        /// The workspace root.
        root: PathBuf,
    },

    /// File I/O error occurred.
    #[error("file I/O error for {path:?}: {source}")]
    FileIo {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A Bazel query could not be built from the given inputs.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Invalid configuration format.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// A specialized Result type for scip-lsp-core operations.
pub type Result<T> = std::result::Result<T, Error>;
