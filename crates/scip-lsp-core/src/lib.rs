//! # scip-lsp-core
//!
//! Core library for translating SCIP (code indexing protocol) data into LSP
//! (Language Server Protocol) structures, and for resolving the Bazel build
//! target that governs a source file.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`scip`] - SCIP entities: occurrences, symbol metadata, kinds, ranges
//! - [`mapper`] - Pure SCIP to LSP conversion (ranges, locations, document symbols)
//! - [`build`] - Build marker search, build targets, and Bazel query expressions
//! - [`config`] - Configuration types and loading
//! - [`error`] - Error types for the library
//!
//! Geometry conversion is fail-soft: a malformed SCIP range becomes the zero
//! range instead of an error. Build resolution is fail-fast: every failure is
//! a distinct [`Error`] variant.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::path::Path;
//!
//! use scip_lsp_core::build::resolve_build_target;
//! use scip_lsp_core::mapper::occurrence_to_location;
//!
//! let target = resolve_build_target(Path::new("/ws"), Path::new("/ws/a/b/Foo.java"))?;
//! assert_eq!(target, "a/...");
//!
//! let location = occurrence_to_location(&uri, &occurrence);
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod mapper;
pub mod scip;

pub use build::BuildTargetResolver;
pub use config::Config;
pub use error::{Error, Result};
pub use mapper::SymbolMapper;
