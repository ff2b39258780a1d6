// portable-dirs - util/constants.rs
//
// Single source of truth for directory names, environment variable names,
// legacy role identifiers, and logging/config defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "portable-dirs";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Redirected directory layout
// =============================================================================

/// Name of the private root created inside the executable directory.
/// Every redirected role lives somewhere beneath it.
pub const BASE_DIR_NAME: &str = "PortableData";

/// `AppData` level shared by the roaming and local roles.
pub const APPDATA_DIR_NAME: &str = "AppData";

/// Roaming leaf under `AppData`.
pub const ROAMING_DIR_NAME: &str = "Roaming";

/// Local leaf under `AppData`.
pub const LOCAL_DIR_NAME: &str = "Local";

/// Personal documents directory.
pub const DOCUMENTS_DIR_NAME: &str = "Documents";

/// Cache directory. On Windows it sits under `AppData/Local`, elsewhere
/// directly under the base directory.
pub const CACHE_DIR_NAME: &str = "Cache";

// =============================================================================
// Packaging detection (Unix)
// =============================================================================

/// Set by the AppImage runtime when the process was launched from an AppImage.
pub const APPIMAGE_ENV: &str = "APPIMAGE";

/// Mount point of the AppImage's squashfs, exported by the AppImage runtime.
pub const APPDIR_ENV: &str = "APPDIR";

/// Share directory relative to `$APPDIR`.
pub const APPIMAGE_SHARE_SUBDIR: &str = "usr/share";

/// Read-only share directory inside a Flatpak sandbox.
pub const FLATPAK_SHARE_DIR: &str = "/app/share";

// =============================================================================
// Application bundles (Apple)
// =============================================================================

/// Extension of an application bundle directory.
pub const BUNDLE_EXTENSION: &str = "app";

/// `Contents` level inside an application bundle.
pub const BUNDLE_CONTENTS_DIR: &str = "Contents";

/// Directory holding the bundle's executables.
pub const BUNDLE_EXECUTABLE_DIR: &str = "MacOS";

/// Directory holding the bundle's resources.
pub const BUNDLE_RESOURCES_DIR: &str = "Resources";

// =============================================================================
// Legacy CSIDL role identifiers (Windows shell)
// =============================================================================

/// `CSIDL_PERSONAL`: the user's documents folder.
pub const CSIDL_PERSONAL: i32 = 0x0005;

/// `CSIDL_APPDATA`: roaming application data.
pub const CSIDL_APPDATA: i32 = 0x001a;

/// `CSIDL_LOCAL_APPDATA`: non-roaming application data.
pub const CSIDL_LOCAL_APPDATA: i32 = 0x001c;

/// `CSIDL_FLAG_CREATE`: ask the shell to create the folder.
pub const CSIDL_FLAG_CREATE: i32 = 0x8000;

/// Bits of a CSIDL value that identify the folder; the rest are flags.
pub const CSIDL_ROLE_MASK: i32 = 0x00ff;

// =============================================================================
// Configuration and logging
// =============================================================================

/// Config file name, looked up in the roaming data directory.
pub const CONFIG_FILE_NAME: &str = "portable-dirs.toml";

/// Maximum config file size accepted by the loader.
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Default log level when neither RUST_LOG, --debug, nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
