// portable-dirs - app/paths.rs
//
// Role-based path getters: the public face of the crate.
//
// Each getter resolves its role through the build target's directory table
// and runs the directory ensurer before handing the path back. App
// resources are the exception: they may sit in a read-only bundle or
// install location and are returned as-is.

use crate::core::ensure::ensure_path_exists_with;
use crate::core::model::{ResolvedPath, Role};
use crate::core::table::DirectoryTable;
use crate::platform::dirs::native_table;
use crate::platform::fs::{FileSystem, RealFs};
use crate::util::error::PathError;
use std::path::{Path, PathBuf};

/// Resolve `role` through `table`, ensuring the directory when the role
/// calls for it.
pub fn resolve_with<T, F>(table: &T, role: Role, fs: &F) -> Result<ResolvedPath, PathError>
where
    T: DirectoryTable + ?Sized,
    F: FileSystem + ?Sized,
{
    let path = table
        .dir_for(role)
        .ok_or(PathError::Unsupported { role: role.name() })?;

    let ensured = role.is_ensured();
    if ensured {
        ensure_path_exists_with(fs, &path)?;
    }

    tracing::debug!(role = %role, path = %path.display(), ensured, "Path resolved");
    Ok(ResolvedPath {
        role,
        path,
        ensured,
    })
}

/// Location for `role` on this platform.
///
/// # Errors
/// [`PathError::Unsupported`] when the platform has no location for the
/// role; otherwise any error from [`ensure_path_exists`].
pub fn get_path(role: Role) -> Result<PathBuf, PathError> {
    resolve_with(&native_table(), role, &RealFs).map(|resolved| resolved.path)
}

/// Roaming configuration directory. Created if missing.
pub fn get_roaming_data_path() -> Result<PathBuf, PathError> {
    get_path(Role::RoamingData)
}

/// Personal data directory. Created if missing.
pub fn get_personal_data_path() -> Result<PathBuf, PathError> {
    get_path(Role::PersonalData)
}

/// Cache directory. Created if missing.
pub fn get_cache_path() -> Result<PathBuf, PathError> {
    get_path(Role::Cache)
}

/// Read-only application resources. Never created.
pub fn get_app_resources_path() -> Result<PathBuf, PathError> {
    get_path(Role::AppResources)
}

/// Redirected directory for a legacy shell folder identifier (`CSIDL_*`).
///
/// The returned directory is not created.
#[cfg(all(windows, not(target_vendor = "uwp")))]
pub fn get_path_from_csidl(csidl: i32) -> PathBuf {
    native_table().path_from_csidl(csidl)
}

/// Make sure every component of `path` exists as a directory.
///
/// # Errors
/// [`PathError::Unverifiable`] when a segment's existence cannot be
/// determined, [`PathError::CreateDir`] when a missing segment cannot be
/// created.
pub fn ensure_path_exists(path: &Path) -> Result<(), PathError> {
    ensure_path_exists_with(&RealFs, path).map(|_| ())
}
