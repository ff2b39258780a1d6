// portable-dirs - platform/dirs.rs
//
// Build-target selection of the directory table, plus the directories an
// Android host injects after launch.

use crate::core::table;
use crate::platform::base::base_dir;

/// Directory table for the build target.
#[cfg(all(windows, not(target_vendor = "uwp")))]
pub type NativeTable = table::WindowsTable;

#[cfg(all(windows, target_vendor = "uwp"))]
pub type NativeTable = table::WindowsStoreTable;

#[cfg(target_vendor = "apple")]
pub type NativeTable = table::AppleTable;

#[cfg(target_os = "android")]
pub type NativeTable = table::MobileTable;

#[cfg(all(unix, not(target_vendor = "apple"), not(target_os = "android")))]
pub type NativeTable = table::UnixTable;

#[cfg(not(any(windows, unix)))]
pub type NativeTable = table::FallbackTable;

/// Build the directory table for the running process.
///
/// Cheap; callers build a fresh one per lookup so environment markers and
/// injected directories are always current.
pub fn native_table() -> NativeTable {
    let base = base_dir().to_path_buf();

    #[cfg(all(windows, not(target_vendor = "uwp")))]
    {
        table::WindowsTable {
            base,
            exe_dir: crate::platform::exe::executable_dir(),
        }
    }

    #[cfg(all(windows, target_vendor = "uwp"))]
    {
        table::WindowsStoreTable { base }
    }

    #[cfg(target_vendor = "apple")]
    {
        table::AppleTable {
            base,
            exe_dir: crate::platform::exe::executable_dir(),
        }
    }

    #[cfg(target_os = "android")]
    {
        table::MobileTable {
            base,
            files_dir: mobile::files_dir(),
            cache_dir: mobile::cache_dir(),
        }
    }

    #[cfg(all(unix, not(target_vendor = "apple"), not(target_os = "android")))]
    {
        table::UnixTable::from_env(base, crate::platform::exe::executable_dir())
    }

    #[cfg(not(any(windows, unix)))]
    {
        table::FallbackTable { base }
    }
}

/// Host-injected directories on Android.
///
/// The activity learns its real files and cache directories only after
/// launch (`Context.getFilesDir()` / `getCacheDir()`) and hands them over
/// through these setters. The latest value wins.
///
/// Built for host tests too; only the crate-root re-export is Android-only.
#[cfg(any(test, target_os = "android"))]
pub mod mobile {
    use std::path::PathBuf;
    use std::sync::{PoisonError, RwLock};

    static FILES_DIR: RwLock<Option<PathBuf>> = RwLock::new(None);
    static CACHE_DIR: RwLock<Option<PathBuf>> = RwLock::new(None);

    /// Root the roaming and personal roles under `path` from now on.
    pub fn set_files_dir_path(path: impl Into<PathBuf>) {
        let path = path.into();
        tracing::debug!(path = %path.display(), "Files directory injected");
        *FILES_DIR.write().unwrap_or_else(PoisonError::into_inner) = Some(path);
    }

    /// Use `path` verbatim for the cache role from now on.
    pub fn set_cache_dir_path(path: impl Into<PathBuf>) {
        let path = path.into();
        tracing::debug!(path = %path.display(), "Cache directory injected");
        *CACHE_DIR.write().unwrap_or_else(PoisonError::into_inner) = Some(path);
    }

    pub(crate) fn files_dir() -> Option<PathBuf> {
        FILES_DIR
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn cache_dir() -> Option<PathBuf> {
        CACHE_DIR
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
