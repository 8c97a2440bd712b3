//! Command-line argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SCIP to LSP translation and Bazel build target resolution
///
/// Converts SCIP index data into Language Server Protocol structures and
/// finds the Bazel package that governs a source file.
#[derive(Debug, Parser)]
#[command(name = "scip-lsp")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to configuration file
    ///
    /// If not specified, searches for scip-lsp.toml in:
    /// 1. $SCIP_LSP_CONFIG environment variable
    /// 2. Current directory
    /// 3. ~/.config/scip-lsp/scip-lsp.toml
    #[arg(short, long, value_name = "FILE", env = "SCIP_LSP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level
    ///
    /// Valid values: trace, debug, info, warn, error
    #[arg(short, long, default_value = "info", env = "SCIP_LSP_LOG", global = true)]
    pub log_level: String,

    /// Output logs as JSON (for structured logging)
    #[arg(long, default_value = "false", env = "SCIP_LSP_LOG_JSON", global = true)]
    pub log_json: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed by the CLI.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve the build target governing a file, e.g. `a/b/...`
    Target {
        /// Source file or directory inside the workspace
        file: PathBuf,

        /// Workspace root (defaults to the configured root, then the current directory)
        #[arg(short, long, value_name = "DIR")]
        root: Option<PathBuf>,
    },

    /// Find the nearest build marker for a file
    Marker {
        /// Source file or directory inside the workspace
        file: PathBuf,

        /// Workspace root (defaults to the configured root, then the current directory)
        #[arg(short, long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Print the marker file itself instead of its directory
        #[arg(long)]
        include_marker: bool,
    },

    /// Convert a raw SCIP range to an LSP range
    Range {
        /// Range values: `line start end` or `start_line start_char end_line end_char`
        #[arg(allow_negative_numbers = true, num_args = 0..)]
        values: Vec<i32>,
    },

    /// Classify a SCIP symbol kind by name (`Trait`) or protobuf tag (`53`)
    Kind {
        /// Kind name or tag
        #[arg(allow_negative_numbers = true)]
        kind: String,
    },

    /// Print the document symbols of a SCIP document dumped as JSON
    Symbols {
        /// SCIP document in protobuf JSON form
        document: PathBuf,
    },

    /// Print the LSP locations of the occurrences in a SCIP document
    Locations {
        /// SCIP document in protobuf JSON form
        document: PathBuf,

        /// URI of the source file the document describes
        #[arg(long)]
        uri: String,

        /// Only occurrences of this symbol
        #[arg(long)]
        symbol: Option<String>,
    },

    /// Build a Bazel query expression over the targets of the given files
    Query {
        /// Source files inside the workspace
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Workspace root (defaults to the configured root, then the current directory)
        #[arg(short, long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Include transitive dependencies
        #[arg(long, conflicts_with = "rdeps")]
        deps: bool,

        /// Include reverse dependencies
        #[arg(long)]
        rdeps: bool,

        /// Universe for reverse dependencies (defaults to //...)
        #[arg(long, requires = "rdeps")]
        universe: Option<String>,

        /// Maximum depth of the deps/rdeps traversal
        #[arg(long)]
        depth: Option<u32>,

        /// Rule kinds to keep (defaults to the configured query kinds)
        #[arg(long = "kind", value_name = "KIND")]
        kinds: Vec<String>,

        /// Do not filter by rule kind
        #[arg(long, conflicts_with = "kinds")]
        any_kind: bool,

        /// Tags to keep
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Keep only labels containing this text
        #[arg(long)]
        filter: Option<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}
