// portable-dirs - core/table.rs
//
// Platform directory table.
//
// One `DirectoryTable` implementation per platform family maps the four
// roles onto the base directory. Every variant is plain path arithmetic over
// inputs captured at construction, so all of them compile and test on any
// host; `platform::dirs` picks the one that matches the build target.

use crate::core::model::Role;
use crate::util::constants;
use std::path::{Path, PathBuf};

/// Role-to-location mapping for one platform family.
///
/// Roles the platform has no location for return `None`. Nothing here
/// creates directories; the only disk access is the package probe in
/// `UnixTable::app_resources_dir`.
pub trait DirectoryTable {
    fn roaming_data_dir(&self) -> Option<PathBuf> {
        None
    }

    fn personal_data_dir(&self) -> PathBuf;

    fn cache_dir(&self) -> Option<PathBuf> {
        None
    }

    fn app_resources_dir(&self) -> Option<PathBuf> {
        None
    }

    /// Dispatch on `role`.
    fn dir_for(&self, role: Role) -> Option<PathBuf> {
        match role {
            Role::RoamingData => self.roaming_data_dir(),
            Role::PersonalData => Some(self.personal_data_dir()),
            Role::Cache => self.cache_dir(),
            Role::AppResources => self.app_resources_dir(),
        }
    }
}

fn roaming_under(root: &Path) -> PathBuf {
    root.join(constants::APPDATA_DIR_NAME)
        .join(constants::ROAMING_DIR_NAME)
}

fn local_under(root: &Path) -> PathBuf {
    root.join(constants::APPDATA_DIR_NAME)
        .join(constants::LOCAL_DIR_NAME)
}

fn documents_under(root: &Path) -> PathBuf {
    root.join(constants::DOCUMENTS_DIR_NAME)
}

fn cache_under(root: &Path) -> PathBuf {
    root.join(constants::CACHE_DIR_NAME)
}

/// Existence check that never fails: an error reads as "absent".
fn dir_exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

// =============================================================================
// Windows desktop
// =============================================================================

/// Windows desktop: the shell folders (CSIDL roles) are redirected into the
/// base directory, resources stay beside the executable.
#[derive(Debug, Clone)]
pub struct WindowsTable {
    pub base: PathBuf,
    pub exe_dir: PathBuf,
}

impl WindowsTable {
    /// Redirected location for a legacy CSIDL identifier.
    ///
    /// Flag bits (e.g. `CSIDL_FLAG_CREATE`) are masked off first. Unknown
    /// identifiers map to the local application data directory. The
    /// directory is not created.
    pub fn path_from_csidl(&self, csidl: i32) -> PathBuf {
        match csidl & constants::CSIDL_ROLE_MASK {
            constants::CSIDL_APPDATA => roaming_under(&self.base),
            constants::CSIDL_LOCAL_APPDATA => local_under(&self.base),
            constants::CSIDL_PERSONAL => documents_under(&self.base),
            _ => local_under(&self.base),
        }
    }
}

impl DirectoryTable for WindowsTable {
    fn roaming_data_dir(&self) -> Option<PathBuf> {
        Some(roaming_under(&self.base))
    }

    fn personal_data_dir(&self) -> PathBuf {
        documents_under(&self.base)
    }

    fn cache_dir(&self) -> Option<PathBuf> {
        Some(cache_under(&local_under(&self.base)))
    }

    fn app_resources_dir(&self) -> Option<PathBuf> {
        Some(self.exe_dir.clone())
    }
}

// =============================================================================
// Windows Store (UWP app partition)
// =============================================================================

/// Sandboxed Windows Store apps only get a personal directory, which lives
/// under the local application data tree.
#[derive(Debug, Clone)]
pub struct WindowsStoreTable {
    pub base: PathBuf,
}

impl DirectoryTable for WindowsStoreTable {
    fn personal_data_dir(&self) -> PathBuf {
        local_under(&self.base)
    }
}

// =============================================================================
// Generic Unix (every unix target that is neither Apple nor Android)
// =============================================================================

/// Generic Unix desktop. Resources prefer the share directory of an
/// AppImage or Flatpak package when the process runs inside one.
#[derive(Debug, Clone)]
pub struct UnixTable {
    pub base: PathBuf,
    pub exe_dir: PathBuf,
    /// `$APPDIR`, captured only when `$APPIMAGE` is also set.
    pub appimage_dir: Option<PathBuf>,
    /// Share directory of an immutable package mount (`/app/share`).
    pub flatpak_share: PathBuf,
}

impl UnixTable {
    /// Capture the packaging markers from the process environment.
    pub fn from_env(base: PathBuf, exe_dir: PathBuf) -> Self {
        let appimage_dir = std::env::var_os(constants::APPIMAGE_ENV)
            .and_then(|_| std::env::var_os(constants::APPDIR_ENV))
            .map(PathBuf::from);
        Self {
            base,
            exe_dir,
            appimage_dir,
            flatpak_share: PathBuf::from(constants::FLATPAK_SHARE_DIR),
        }
    }
}

impl DirectoryTable for UnixTable {
    fn roaming_data_dir(&self) -> Option<PathBuf> {
        Some(roaming_under(&self.base))
    }

    fn personal_data_dir(&self) -> PathBuf {
        documents_under(&self.base)
    }

    fn cache_dir(&self) -> Option<PathBuf> {
        Some(cache_under(&self.base))
    }

    fn app_resources_dir(&self) -> Option<PathBuf> {
        if let Some(appdir) = &self.appimage_dir {
            let share = appdir.join(constants::APPIMAGE_SHARE_SUBDIR);
            if dir_exists(&share) {
                tracing::debug!(path = %share.display(), "Using AppImage share directory");
                return Some(share);
            }
        }

        if dir_exists(&self.flatpak_share) {
            tracing::debug!(
                path = %self.flatpak_share.display(),
                "Using Flatpak share directory"
            );
            return Some(self.flatpak_share.clone());
        }

        Some(self.exe_dir.clone())
    }
}

// =============================================================================
// Apple (macOS, iOS)
// =============================================================================

/// Apple platforms. Resources come from the application bundle when the
/// executable lives in one.
#[derive(Debug, Clone)]
pub struct AppleTable {
    pub base: PathBuf,
    pub exe_dir: PathBuf,
}

impl AppleTable {
    /// `X.app/Contents/Resources` when `exe_dir` is `X.app/Contents/MacOS`.
    pub fn bundle_resources_dir(&self) -> Option<PathBuf> {
        if self.exe_dir.file_name()? != constants::BUNDLE_EXECUTABLE_DIR {
            return None;
        }
        let contents = self.exe_dir.parent()?;
        if contents.file_name()? != constants::BUNDLE_CONTENTS_DIR {
            return None;
        }
        let bundle = contents.parent()?;
        if bundle.extension()? != constants::BUNDLE_EXTENSION {
            return None;
        }
        Some(contents.join(constants::BUNDLE_RESOURCES_DIR))
    }
}

impl DirectoryTable for AppleTable {
    fn roaming_data_dir(&self) -> Option<PathBuf> {
        Some(roaming_under(&self.base))
    }

    fn personal_data_dir(&self) -> PathBuf {
        documents_under(&self.base)
    }

    fn cache_dir(&self) -> Option<PathBuf> {
        Some(cache_under(&self.base))
    }

    fn app_resources_dir(&self) -> Option<PathBuf> {
        Some(
            self.bundle_resources_dir()
                .unwrap_or_else(|| self.exe_dir.clone()),
        )
    }
}

// =============================================================================
// Mobile (Android)
// =============================================================================

/// Android. There is no bundle concept, so resources resolve to the base
/// directory. The host activity may inject the real files and cache
/// directories after launch; injected values take precedence.
#[derive(Debug, Clone)]
pub struct MobileTable {
    pub base: PathBuf,
    pub files_dir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
}

impl MobileTable {
    fn data_root(&self) -> &Path {
        self.files_dir.as_deref().unwrap_or(&self.base)
    }
}

impl DirectoryTable for MobileTable {
    fn roaming_data_dir(&self) -> Option<PathBuf> {
        Some(roaming_under(self.data_root()))
    }

    fn personal_data_dir(&self) -> PathBuf {
        documents_under(self.data_root())
    }

    fn cache_dir(&self) -> Option<PathBuf> {
        Some(
            self.cache_dir
                .clone()
                .unwrap_or_else(|| cache_under(&self.base)),
        )
    }

    fn app_resources_dir(&self) -> Option<PathBuf> {
        Some(self.base.clone())
    }
}

// =============================================================================
// Fallback
// =============================================================================

/// Unknown targets: only the personal directory is defined.
#[derive(Debug, Clone)]
pub struct FallbackTable {
    pub base: PathBuf,
}

impl DirectoryTable for FallbackTable {
    fn personal_data_dir(&self) -> PathBuf {
        documents_under(&self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants::{
        CSIDL_APPDATA, CSIDL_FLAG_CREATE, CSIDL_LOCAL_APPDATA, CSIDL_PERSONAL,
    };
    use tempfile::TempDir;

    fn base() -> PathBuf {
        PathBuf::from("/opt/game/PortableData")
    }

    fn windows() -> WindowsTable {
        WindowsTable {
            base: base(),
            exe_dir: PathBuf::from("/opt/game"),
        }
    }

    fn unix(appimage_dir: Option<PathBuf>, flatpak_share: PathBuf) -> UnixTable {
        UnixTable {
            base: base(),
            exe_dir: PathBuf::from("/opt/game"),
            appimage_dir,
            flatpak_share,
        }
    }

    #[test]
    fn windows_layout() {
        let t = windows();
        assert_eq!(
            t.roaming_data_dir(),
            Some(base().join("AppData").join("Roaming"))
        );
        assert_eq!(t.personal_data_dir(), base().join("Documents"));
        assert_eq!(
            t.cache_dir(),
            Some(base().join("AppData").join("Local").join("Cache"))
        );
        assert_eq!(t.app_resources_dir(), Some(PathBuf::from("/opt/game")));
    }

    #[test]
    fn csidl_roles_map_to_redirected_dirs() {
        let t = windows();
        assert_eq!(
            t.path_from_csidl(CSIDL_APPDATA),
            base().join("AppData").join("Roaming")
        );
        assert_eq!(
            t.path_from_csidl(CSIDL_LOCAL_APPDATA),
            base().join("AppData").join("Local")
        );
        assert_eq!(t.path_from_csidl(CSIDL_PERSONAL), base().join("Documents"));
    }

    #[test]
    fn csidl_flag_bits_are_ignored() {
        let t = windows();
        assert_eq!(
            t.path_from_csidl(CSIDL_LOCAL_APPDATA | CSIDL_FLAG_CREATE),
            t.path_from_csidl(CSIDL_LOCAL_APPDATA)
        );
        assert_eq!(
            t.path_from_csidl(CSIDL_PERSONAL | CSIDL_FLAG_CREATE),
            base().join("Documents")
        );
    }

    #[test]
    fn unknown_csidl_defaults_to_local_appdata() {
        let t = windows();
        // CSIDL_DESKTOP (0x0000) and CSIDL_FONTS (0x0014) are not redirected.
        assert_eq!(t.path_from_csidl(0x0000), base().join("AppData").join("Local"));
        assert_eq!(t.path_from_csidl(0x0014), base().join("AppData").join("Local"));
    }

    #[test]
    fn store_table_only_has_personal() {
        let t = WindowsStoreTable { base: base() };
        assert_eq!(
            t.personal_data_dir(),
            base().join("AppData").join("Local")
        );
        assert_eq!(t.dir_for(Role::RoamingData), None);
        assert_eq!(t.dir_for(Role::Cache), None);
        assert_eq!(t.dir_for(Role::AppResources), None);
    }

    #[test]
    fn unix_layout() {
        let t = unix(None, PathBuf::from("/nonexistent/flatpak/share"));
        assert_eq!(
            t.roaming_data_dir(),
            Some(base().join("AppData").join("Roaming"))
        );
        assert_eq!(t.personal_data_dir(), base().join("Documents"));
        assert_eq!(t.cache_dir(), Some(base().join("Cache")));
        assert_eq!(t.app_resources_dir(), Some(PathBuf::from("/opt/game")));
    }

    #[test]
    fn unix_prefers_appimage_share_when_present() {
        let appdir = TempDir::new().unwrap();
        let share = appdir.path().join("usr").join("share");
        std::fs::create_dir_all(&share).unwrap();

        let t = unix(
            Some(appdir.path().to_path_buf()),
            PathBuf::from("/nonexistent/flatpak/share"),
        );
        assert_eq!(t.app_resources_dir(), Some(share));
    }

    #[test]
    fn unix_ignores_appimage_without_share_dir() {
        let appdir = TempDir::new().unwrap();
        let t = unix(
            Some(appdir.path().to_path_buf()),
            PathBuf::from("/nonexistent/flatpak/share"),
        );
        assert_eq!(t.app_resources_dir(), Some(PathBuf::from("/opt/game")));
    }

    #[test]
    fn unix_uses_flatpak_share_when_mounted() {
        let flatpak = TempDir::new().unwrap();
        let t = unix(None, flatpak.path().to_path_buf());
        assert_eq!(t.app_resources_dir(), Some(flatpak.path().to_path_buf()));
    }

    #[test]
    fn appimage_beats_flatpak() {
        let appdir = TempDir::new().unwrap();
        let share = appdir.path().join("usr").join("share");
        std::fs::create_dir_all(&share).unwrap();
        let flatpak = TempDir::new().unwrap();

        let t = unix(
            Some(appdir.path().to_path_buf()),
            flatpak.path().to_path_buf(),
        );
        assert_eq!(t.app_resources_dir(), Some(share));
    }

    #[test]
    fn apple_bundle_resources() {
        let t = AppleTable {
            base: base(),
            exe_dir: PathBuf::from("/Applications/Game.app/Contents/MacOS"),
        };
        assert_eq!(
            t.app_resources_dir(),
            Some(PathBuf::from("/Applications/Game.app/Contents/Resources"))
        );
        assert_eq!(t.cache_dir(), Some(base().join("Cache")));
    }

    #[test]
    fn apple_outside_bundle_uses_exe_dir() {
        let t = AppleTable {
            base: base(),
            exe_dir: PathBuf::from("/usr/local/bin"),
        };
        assert_eq!(t.bundle_resources_dir(), None);
        assert_eq!(t.app_resources_dir(), Some(PathBuf::from("/usr/local/bin")));

        // Right shape, but the bundle directory lacks the .app extension.
        let t = AppleTable {
            base: base(),
            exe_dir: PathBuf::from("/tmp/Game/Contents/MacOS"),
        };
        assert_eq!(t.bundle_resources_dir(), None);
    }

    #[test]
    fn mobile_defaults_to_base() {
        let t = MobileTable {
            base: base(),
            files_dir: None,
            cache_dir: None,
        };
        assert_eq!(t.personal_data_dir(), base().join("Documents"));
        assert_eq!(t.cache_dir(), Some(base().join("Cache")));
        assert_eq!(t.app_resources_dir(), Some(base()));
    }

    #[test]
    fn mobile_uses_injected_dirs() {
        let t = MobileTable {
            base: base(),
            files_dir: Some(PathBuf::from("/data/user/0/org.game/files")),
            cache_dir: Some(PathBuf::from("/data/user/0/org.game/cache")),
        };
        assert_eq!(
            t.roaming_data_dir(),
            Some(PathBuf::from("/data/user/0/org.game/files/AppData/Roaming"))
        );
        assert_eq!(
            t.personal_data_dir(),
            PathBuf::from("/data/user/0/org.game/files/Documents")
        );
        assert_eq!(
            t.cache_dir(),
            Some(PathBuf::from("/data/user/0/org.game/cache"))
        );
        assert_eq!(t.app_resources_dir(), Some(base()));
    }

    #[test]
    fn fallback_only_has_personal() {
        let t = FallbackTable { base: base() };
        assert_eq!(t.dir_for(Role::PersonalData), Some(base().join("Documents")));
        for role in [Role::RoamingData, Role::Cache, Role::AppResources] {
            assert_eq!(t.dir_for(role), None, "{role} should be unsupported");
        }
    }
}
