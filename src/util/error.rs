// portable-dirs - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every variant that wraps an OS error keeps it as `source` so callers can
// log the full causal chain.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all portable-dirs operations.
#[derive(Debug)]
pub enum PortableDirsError {
    /// Directory resolution, creation, or path encoding failed.
    Path(PathError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for PortableDirsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(e) => write!(f, "Path error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for PortableDirsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Path(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Path errors
// ---------------------------------------------------------------------------

/// Errors raised while resolving, creating, or encoding paths.
#[derive(Debug)]
pub enum PathError {
    /// The existence of a path segment could not be determined. The probe
    /// failed with something other than "not found" or "permission denied",
    /// so the directory walk was aborted.
    Unverifiable { path: PathBuf, source: io::Error },

    /// A missing path segment could not be created.
    CreateDir { path: PathBuf, source: io::Error },

    /// The requested role has no location on this platform.
    Unsupported { role: &'static str },

    /// The native path is not valid Unicode and has no portable form.
    NotUnicode { path: PathBuf },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unverifiable { path, source } => write!(
                f,
                "Couldn't ensure that '{}' exists: existence check failed: {source}",
                path.display()
            ),
            Self::CreateDir { path, source } => {
                write!(
                    f,
                    "Failed to create directory '{}': {source}",
                    path.display()
                )
            }
            Self::Unsupported { role } => {
                write!(f, "The {role} directory is not available on this platform")
            }
            Self::NotUnicode { path } => write!(
                f,
                "Path '{}' is not valid Unicode and cannot be converted to UTF-8",
                path.display()
            ),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unverifiable { source, .. } => Some(source),
            Self::CreateDir { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<PathError> for PortableDirsError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config file exceeds the maximum accepted size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Config '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for PortableDirsError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for portable-dirs results.
pub type Result<T> = std::result::Result<T, PortableDirsError>;
