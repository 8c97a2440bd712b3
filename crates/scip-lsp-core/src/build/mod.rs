//! Build target resolution for Bazel workspaces.
//!
//! A source file belongs to the package of the nearest ancestor directory
//! holding a build marker (`BUILD.bazel` or `BUILD`). Failures are reported
//! as distinct [`crate::Error`] variants; nothing is retried or cached.

mod fs;
pub mod query;
mod resolver;

pub use fs::{FileSystem, OsFileSystem};
pub use query::{ALL_TARGETS, QueryDirection, TargetQuery, target_label};
pub use resolver::{BuildTargetResolver, find_build_marker, resolve_build_target};
