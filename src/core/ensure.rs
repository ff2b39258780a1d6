// portable-dirs - core/ensure.rs
//
// Idempotent directory ensurer.
//
// Walks a path one component at a time, probing the accumulated prefix and
// creating exactly the missing segment. Ancestors are always handled first,
// so every create is non-recursive. Generic over `FileSystem` so the walk
// can be exercised against injected probe failures.

use crate::platform::fs::FileSystem;
use crate::util::error::PathError;
use std::io;
use std::path::{Path, PathBuf};

/// What a single probe told us about one prefix of the path.
#[derive(Debug, PartialEq, Eq)]
enum Probe {
    Present,
    /// Exists, but we may not look at it. Treated as present.
    Inaccessible,
    Absent,
}

fn classify(result: io::Result<bool>) -> io::Result<Probe> {
    match result {
        Ok(true) => Ok(Probe::Present),
        Ok(false) => Ok(Probe::Absent),
        Err(e) => match e.kind() {
            io::ErrorKind::PermissionDenied => Ok(Probe::Inaccessible),
            io::ErrorKind::NotFound => Ok(Probe::Absent),
            _ => Err(e),
        },
    }
}

/// Guarantee that every component of `path` exists as a directory.
///
/// Returns the number of segments that were created, which is zero when the
/// whole path was already present.
///
/// # Errors
/// - [`PathError::Unverifiable`] if a probe fails with anything other than
///   "not found" or "permission denied". Nothing further is created.
/// - [`PathError::CreateDir`] if a missing segment cannot be created.
///
/// Segments created before a failure are left in place.
pub fn ensure_path_exists_with<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
) -> Result<usize, PathError> {
    let mut prefix = PathBuf::new();
    let mut created = 0;

    for component in path.components() {
        prefix.push(component);

        let probe = classify(fs.exists(&prefix)).map_err(|source| {
            tracing::warn!(
                path = %prefix.display(),
                error = %source,
                "Existence check failed; aborting directory walk"
            );
            PathError::Unverifiable {
                path: prefix.clone(),
                source,
            }
        })?;

        match probe {
            Probe::Present => {}
            Probe::Inaccessible => {
                tracing::debug!(
                    path = %prefix.display(),
                    "Segment not accessible; assuming it exists"
                );
            }
            Probe::Absent => match fs.create_dir(&prefix) {
                Ok(()) => {
                    tracing::debug!(path = %prefix.display(), "Created directory");
                    created += 1;
                }
                // Another process got there between the probe and the create.
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
                Err(source) => {
                    return Err(PathError::CreateDir {
                        path: prefix,
                        source,
                    });
                }
            },
        }
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    /// In-memory filesystem that records every directory it creates.
    #[derive(Default)]
    struct RecordingFs {
        existing: RefCell<HashSet<PathBuf>>,
        probe_failures: HashMap<PathBuf, io::ErrorKind>,
        create_failures: HashMap<PathBuf, io::ErrorKind>,
        created: RefCell<Vec<PathBuf>>,
    }

    impl RecordingFs {
        fn with_existing(paths: &[&str]) -> Self {
            let fs = Self::default();
            fs.existing
                .borrow_mut()
                .extend(paths.iter().map(PathBuf::from));
            fs
        }

        fn created(&self) -> Vec<PathBuf> {
            self.created.borrow().clone()
        }
    }

    impl FileSystem for RecordingFs {
        fn exists(&self, path: &Path) -> io::Result<bool> {
            if let Some(kind) = self.probe_failures.get(path) {
                return Err(io::Error::from(*kind));
            }
            Ok(self.existing.borrow().contains(path))
        }

        fn create_dir(&self, path: &Path) -> io::Result<()> {
            if let Some(kind) = self.create_failures.get(path) {
                return Err(io::Error::from(*kind));
            }
            self.existing.borrow_mut().insert(path.to_path_buf());
            self.created.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn creates_only_missing_levels_in_order() {
        let fs = RecordingFs::with_existing(&["/", "/a"]);
        let created = ensure_path_exists_with(&fs, Path::new("/a/b/c")).unwrap();

        assert_eq!(created, 2);
        assert_eq!(
            fs.created(),
            vec![PathBuf::from("/a/b"), PathBuf::from("/a/b/c")]
        );
    }

    #[test]
    fn second_call_creates_nothing() {
        let fs = RecordingFs::with_existing(&["/"]);
        ensure_path_exists_with(&fs, Path::new("/x/y")).unwrap();
        let before = fs.created().len();

        let created = ensure_path_exists_with(&fs, Path::new("/x/y")).unwrap();

        assert_eq!(created, 0);
        assert_eq!(fs.created().len(), before);
    }

    #[test]
    fn not_found_probe_error_creates_segment() {
        let mut fs = RecordingFs::with_existing(&["/", "/a"]);
        fs.probe_failures
            .insert(PathBuf::from("/a/b"), io::ErrorKind::NotFound);

        ensure_path_exists_with(&fs, Path::new("/a/b")).unwrap();

        assert_eq!(fs.created(), vec![PathBuf::from("/a/b")]);
    }

    #[test]
    fn permission_denied_probe_is_treated_as_present() {
        let mut fs = RecordingFs::with_existing(&["/"]);
        fs.probe_failures
            .insert(PathBuf::from("/locked"), io::ErrorKind::PermissionDenied);

        ensure_path_exists_with(&fs, Path::new("/locked/inner")).unwrap();

        assert_eq!(fs.created(), vec![PathBuf::from("/locked/inner")]);
    }

    #[test]
    fn unexpected_probe_error_aborts_without_creating() {
        let mut fs = RecordingFs::with_existing(&["/"]);
        fs.probe_failures
            .insert(PathBuf::from("/a"), io::ErrorKind::Other);

        let err = ensure_path_exists_with(&fs, Path::new("/a/b/c")).unwrap_err();

        assert!(
            matches!(&err, PathError::Unverifiable { path, .. } if path == Path::new("/a")),
            "expected Unverifiable for /a, got {err:?}"
        );
        assert!(fs.created().is_empty());
    }

    #[test]
    fn unexpected_error_midway_keeps_earlier_segments() {
        let mut fs = RecordingFs::with_existing(&["/"]);
        fs.probe_failures
            .insert(PathBuf::from("/a/b"), io::ErrorKind::InvalidData);

        assert!(ensure_path_exists_with(&fs, Path::new("/a/b/c")).is_err());
        assert_eq!(fs.created(), vec![PathBuf::from("/a")]);
    }

    #[test]
    fn create_failure_is_reported() {
        let mut fs = RecordingFs::with_existing(&["/"]);
        fs.create_failures
            .insert(PathBuf::from("/ro"), io::ErrorKind::PermissionDenied);

        let err = ensure_path_exists_with(&fs, Path::new("/ro/sub")).unwrap_err();
        assert!(matches!(err, PathError::CreateDir { .. }));
    }

    #[test]
    fn already_exists_on_create_is_success() {
        let mut fs = RecordingFs::with_existing(&["/"]);
        fs.create_failures
            .insert(PathBuf::from("/raced"), io::ErrorKind::AlreadyExists);

        let created = ensure_path_exists_with(&fs, Path::new("/raced")).unwrap();
        assert_eq!(created, 0);
    }

    #[test]
    fn empty_path_is_a_no_op() {
        let fs = RecordingFs::default();
        assert_eq!(ensure_path_exists_with(&fs, Path::new("")).unwrap(), 0);
        assert!(fs.created().is_empty());
    }
}
