// portable-dirs - platform/base.rs
//
// Base directory resolver: the private root beside the executable under
// which every redirected role lives.
//
// Resolved once per process and frozen. Creation on first access is best
// effort; a failure here resurfaces from the ensurer the first time a role
// getter runs.

use crate::platform::exe::executable_dir;
use crate::util::constants;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static BASE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// The process-wide base directory, `<executable dir>/PortableData`.
pub fn base_dir() -> &'static Path {
    BASE_DIR.get_or_init(|| resolve_base_dir(&executable_dir()))
}

/// Compute the base directory for `exe_dir` and try to create it.
///
/// Creation errors are logged and otherwise ignored.
pub fn resolve_base_dir(exe_dir: &Path) -> PathBuf {
    let base = exe_dir.join(constants::BASE_DIR_NAME);

    let exists = base.try_exists().unwrap_or(false);
    if !exists {
        if let Err(e) = std::fs::create_dir_all(&base) {
            tracing::warn!(
                path = %base.display(),
                error = %e,
                "Could not pre-create base directory"
            );
        }
    }

    tracing::debug!(path = %base.display(), "Base directory resolved");
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_base_beside_executable() {
        let exe_dir = TempDir::new().unwrap();
        let base = resolve_base_dir(exe_dir.path());

        assert_eq!(base, exe_dir.path().join("PortableData"));
        assert!(base.is_dir());
    }

    #[test]
    fn existing_base_is_reused() {
        let exe_dir = TempDir::new().unwrap();
        let first = resolve_base_dir(exe_dir.path());
        std::fs::write(first.join("marker"), b"x").unwrap();

        let second = resolve_base_dir(exe_dir.path());
        assert_eq!(first, second);
        assert!(second.join("marker").exists());
    }

    #[test]
    fn creation_failure_is_swallowed() {
        let exe_dir = TempDir::new().unwrap();
        // A regular file where the executable directory should be makes
        // create_dir_all fail.
        let blocker = exe_dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        let base = resolve_base_dir(&blocker);
        assert_eq!(base, blocker.join("PortableData"));
        assert!(!base.exists());
    }

    #[test]
    fn base_dir_is_cached() {
        let first = base_dir();
        let second = base_dir();
        assert!(std::ptr::eq(first, second));
        assert!(first.ends_with("PortableData"));
    }
}
