// portable-dirs - platform/native.rs
//
// Native string <-> path conversion for the host.
//
// Unix paths are byte strings (narrow), Windows paths are UTF-16 unit
// sequences (wide). The matching codec from `core::codec` converts them to
// and from portable UTF-8.

use crate::util::error::PathError;
use std::path::{Path, PathBuf};

/// Portable UTF-8 form of `path`.
///
/// # Errors
/// [`PathError::NotUnicode`] when the native representation is not valid
/// Unicode (stray bytes on Unix, unpaired surrogates on Windows). The
/// conversion never substitutes replacement characters.
pub fn native_string_from_path(path: &Path) -> Result<String, PathError> {
    to_portable(path).map_err(|_| PathError::NotUnicode {
        path: path.to_path_buf(),
    })
}

/// Path whose native representation encodes `portable`.
pub fn path_from_native_string(portable: &str) -> PathBuf {
    from_portable(portable)
}

#[cfg(unix)]
fn to_portable(path: &Path) -> Result<String, crate::core::codec::InvalidUnicode> {
    use crate::core::codec::{NarrowCodec, NativeCodec};
    use std::os::unix::ffi::OsStrExt;

    NarrowCodec::to_portable(path.as_os_str().as_bytes())
}

#[cfg(unix)]
fn from_portable(portable: &str) -> PathBuf {
    use crate::core::codec::{NarrowCodec, NativeCodec};
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    PathBuf::from(OsString::from_vec(NarrowCodec::from_portable(portable)))
}

#[cfg(windows)]
fn to_portable(path: &Path) -> Result<String, crate::core::codec::InvalidUnicode> {
    use crate::core::codec::{NativeCodec, WideCodec};
    use std::os::windows::ffi::OsStrExt;

    let wide: Vec<u16> = path.as_os_str().encode_wide().collect();
    WideCodec::to_portable(&wide)
}

#[cfg(windows)]
fn from_portable(portable: &str) -> PathBuf {
    use crate::core::codec::{NativeCodec, WideCodec};
    use std::ffi::OsString;
    use std::os::windows::ffi::OsStringExt;

    PathBuf::from(OsString::from_wide(&WideCodec::from_portable(portable)))
}

// Other targets only ever hold UTF-8 in an `OsStr`.
#[cfg(not(any(unix, windows)))]
fn to_portable(path: &Path) -> Result<String, crate::core::codec::InvalidUnicode> {
    path.to_str()
        .map(str::to_owned)
        .ok_or(crate::core::codec::InvalidUnicode)
}

#[cfg(not(any(unix, windows)))]
fn from_portable(portable: &str) -> PathBuf {
    PathBuf::from(portable)
}
