// portable-dirs - core/codec.rs
//
// Native string codec: converts between the unit sequence the host OS uses
// for paths (narrow bytes or wide UTF-16 units) and portable UTF-8.
//
// Both codecs compile everywhere; `platform::native` wires the one matching
// the host's `OsStr` representation to real paths.

use std::fmt;

/// The native sequence was not valid Unicode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidUnicode;

impl fmt::Display for InvalidUnicode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("native string is not valid Unicode")
    }
}

impl std::error::Error for InvalidUnicode {}

/// Lossless conversion between native path units and UTF-8.
///
/// For every `s: &str`, `to_portable(&from_portable(s)) == Ok(s.to_owned())`.
pub trait NativeCodec {
    /// One code unit of the native representation.
    type Unit: Copy;

    fn to_portable(native: &[Self::Unit]) -> Result<String, InvalidUnicode>;

    fn from_portable(portable: &str) -> Vec<Self::Unit>;
}

/// Narrow platforms: native bytes already are the portable form.
pub struct NarrowCodec;

impl NativeCodec for NarrowCodec {
    type Unit = u8;

    fn to_portable(native: &[u8]) -> Result<String, InvalidUnicode> {
        std::str::from_utf8(native)
            .map(str::to_owned)
            .map_err(|_| InvalidUnicode)
    }

    fn from_portable(portable: &str) -> Vec<u8> {
        portable.as_bytes().to_vec()
    }
}

/// Wide platforms: UTF-16 units, surrogate pairs included.
pub struct WideCodec;

impl NativeCodec for WideCodec {
    type Unit = u16;

    fn to_portable(native: &[u16]) -> Result<String, InvalidUnicode> {
        String::from_utf16(native).map_err(|_| InvalidUnicode)
    }

    fn from_portable(portable: &str) -> Vec<u16> {
        portable.encode_utf16().collect()
    }
}
