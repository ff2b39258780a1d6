// portable-dirs - app/report.rs
//
// Resolution report printed by the diagnostic binary: one entry per role,
// with the portable path string or the reason resolution failed.

use crate::app::paths::resolve_with;
use crate::core::model::Role;
use crate::core::table::DirectoryTable;
use crate::platform::fs::FileSystem;
use crate::platform::native::native_string_from_path;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Everything the binary knows about the current layout.
#[derive(Debug, Serialize)]
pub struct PathReport {
    pub executable_dir: String,
    pub base_dir: String,
    pub entries: Vec<ReportEntry>,
}

/// Outcome for one role.
#[derive(Debug, Serialize)]
pub struct ReportEntry {
    pub role: Role,
    pub path: Option<String>,
    pub ensured: bool,
    pub error: Option<String>,
}

impl PathReport {
    /// Resolve each of `roles` through `table` and collect the outcomes.
    pub fn build<T, F>(table: &T, fs: &F, roles: &[Role], exe_dir: &Path, base_dir: &Path) -> Self
    where
        T: DirectoryTable + ?Sized,
        F: FileSystem + ?Sized,
    {
        let entries = roles
            .iter()
            .map(|&role| match resolve_with(table, role, fs) {
                Ok(resolved) => ReportEntry {
                    role,
                    path: Some(portable(&resolved.path)),
                    ensured: resolved.ensured,
                    error: None,
                },
                Err(e) => {
                    tracing::warn!(role = %role, error = %e, "Role could not be resolved");
                    ReportEntry {
                        role,
                        path: None,
                        ensured: false,
                        error: Some(e.to_string()),
                    }
                }
            })
            .collect();

        Self {
            executable_dir: portable(exe_dir),
            base_dir: portable(base_dir),
            entries,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.error.is_some())
    }

    /// Human-readable rendering, one line per role.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:<16}{}", "executable", self.executable_dir);
        let _ = writeln!(out, "{:<16}{}", "base", self.base_dir);
        for entry in &self.entries {
            match (&entry.path, &entry.error) {
                (Some(path), _) => {
                    let marker = if entry.ensured { "" } else { " (not created)" };
                    let _ = writeln!(out, "{:<16}{path}{marker}", entry.role.name());
                }
                (None, Some(error)) => {
                    let _ = writeln!(out, "{:<16}error: {error}", entry.role.name());
                }
                (None, None) => {}
            }
        }
        out
    }
}

/// Portable string for display; falls back to a lossy rendering for paths
/// that are not valid Unicode.
fn portable(path: &Path) -> String {
    native_string_from_path(path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Reporting path lossily");
        path.to_string_lossy().into_owned()
    })
}
