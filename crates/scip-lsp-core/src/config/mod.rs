//! Configuration types and loading.
//!
//! This module provides configuration structures for scip-lsp,
//! covering the workspace root, build marker discovery, and symbol output.

mod build;

use std::path::{Path, PathBuf};

pub use build::{BuildConfig, DEFAULT_MARKER_FILES, DEFAULT_QUERY_KINDS, DEFAULT_TARGET_SUFFIX};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mapper::DEFAULT_DETAIL_PREFIX;

/// Name of the configuration file looked up in the current and user config directories.
pub const CONFIG_FILE_NAME: &str = "scip-lsp.toml";

/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "SCIP_LSP_CONFIG";

/// Main configuration for scip-lsp.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Workspace configuration.
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    /// Build target resolution configuration.
    #[serde(default)]
    pub build: BuildConfig,

    /// Document symbol output configuration.
    #[serde(default)]
    pub symbols: SymbolConfig,
}

/// Workspace-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Absolute workspace root. Callers fall back to the current directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

/// Document symbol configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymbolConfig {
    /// Prefix prepended to the display name in `DocumentSymbol.detail`.
    #[serde(default = "default_detail_prefix")]
    pub detail_prefix: String,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            detail_prefix: default_detail_prefix(),
        }
    }
}

fn default_detail_prefix() -> String {
    DEFAULT_DETAIL_PREFIX.to_string()
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// Default paths checked in order:
    /// 1. `$SCIP_LSP_CONFIG` environment variable
    /// 2. `./scip-lsp.toml` (current directory)
    /// 3. `~/.config/scip-lsp/scip-lsp.toml` (Linux/macOS)
    /// 4. `%APPDATA%\scip-lsp\scip-lsp.toml` (Windows)
    ///
    /// Falls back to the built-in defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing configuration file cannot be read,
    /// parsed, or validated.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&path));
        }

        let local_config = PathBuf::from(CONFIG_FILE_NAME);
        if local_config.exists() {
            return Self::load_from(&local_config);
        }

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                return Self::load_from(&user_config);
            }
        }

        tracing::debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or parsing fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Path of the per-user configuration file, if the platform has a config directory.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scip-lsp").join(CONFIG_FILE_NAME))
    }

    /// Render the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The configured workspace root, or `fallback` when none is set.
    #[must_use]
    pub fn workspace_root_or(&self, fallback: &Path) -> PathBuf {
        self.workspace
            .root
            .clone()
            .unwrap_or_else(|| fallback.to_path_buf())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if let Some(root) = &self.workspace.root {
            if !root.is_absolute() {
                return Err(Error::InvalidConfig(format!(
                    "workspace.root must be absolute: {}",
                    root.display()
                )));
            }
        }
        self.build.validate()
    }
}
