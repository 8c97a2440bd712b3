//! Filesystem access used by the build target resolver.

use std::ffi::OsString;
use std::io;
use std::path::Path;

/// The filesystem queries the resolver needs.
pub trait FileSystem {
    /// Whether `path` is a directory. Fails if `path` does not exist.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if `path` cannot be inspected.
    fn is_dir(&self, path: &Path) -> io::Result<bool>;

    /// Names of the immediate children of the directory `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the directory cannot be listed.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<OsString>>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        (**self).is_dir(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        (**self).list_dir(path)
    }
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(std::fs::metadata(path)?.is_dir())
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }
}
