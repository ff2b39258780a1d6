// portable-dirs - core/model.rs
//
// Core data types: the abstract directory roles and a resolved location.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Abstract purpose a path getter resolves to a concrete location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Configuration that would roam with a user profile.
    RoamingData,
    /// Personal documents and local application data.
    PersonalData,
    /// Disposable cached data.
    Cache,
    /// Read-only resources shipped with the application.
    AppResources,
}

impl Role {
    /// All roles in reporting order.
    pub const ALL: [Role; 4] = [
        Role::RoamingData,
        Role::PersonalData,
        Role::Cache,
        Role::AppResources,
    ];

    /// Human-readable name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::RoamingData => "roaming data",
            Self::PersonalData => "personal data",
            Self::Cache => "cache",
            Self::AppResources => "app resources",
        }
    }

    /// Whether getters for this role create the directory before returning.
    ///
    /// App resources may point into a read-only bundle or install location
    /// and are never created.
    pub fn is_ensured(self) -> bool {
        !matches!(self, Self::AppResources)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A location resolved for a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub role: Role,
    pub path: PathBuf,
    /// True once the directory ensurer has run successfully on `path`.
    pub ensured: bool,
}
