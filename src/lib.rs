// portable-dirs - lib.rs
//
// Library entry point.
//
// Resolves configuration, personal data, cache and resource directories for
// an application running in portable mode: instead of the OS-standard
// locations, everything lives in a private `PortableData` tree inside the
// executable's directory. Also converts paths to and from portable UTF-8.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;

pub use crate::app::paths::{
    ensure_path_exists, get_app_resources_path, get_cache_path, get_path, get_personal_data_path,
    get_roaming_data_path,
};
#[cfg(all(windows, not(target_vendor = "uwp")))]
pub use crate::app::paths::get_path_from_csidl;
pub use crate::core::model::Role;
pub use crate::platform::base::base_dir;
#[cfg(target_os = "android")]
pub use crate::platform::dirs::mobile::{set_cache_dir_path, set_files_dir_path};
pub use crate::platform::exe::executable_dir;
pub use crate::platform::native::{native_string_from_path, path_from_native_string};
pub use crate::util::error::{PathError, PortableDirsError, Result};
