// portable-dirs - platform/fs.rs
//
// Filesystem abstraction trait.
// Enables testing the directory walk without real filesystem access.

use std::io;
use std::path::Path;

/// The two filesystem operations the directory ensurer needs.
pub trait FileSystem {
    /// Whether `path` exists.
    ///
    /// `Ok(false)` means definitively absent. Errors are returned unmapped
    /// so the caller can decide which kinds are recoverable.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Create exactly one directory; the parent must already exist.
    fn create_dir(&self, path: &Path) -> io::Result<()>;
}

/// The host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        // `try_exists` already maps NotFound to Ok(false) and surfaces every
        // other failure, including PermissionDenied.
        path.try_exists()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir(path)
    }
}
