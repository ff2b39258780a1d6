// portable-dirs - platform/exe.rs
//
// Executable locator.
//
// `std::env::current_exe` wraps the OS self-path facility on every target
// we care about: GetModuleFileNameW on Windows, _NSGetExecutablePath on
// Apple platforms, /proc/self/exe on Linux and Android, sysctl on the BSDs.

use std::path::{Path, PathBuf};

/// Directory containing the running executable.
///
/// Falls back to the current working directory, then to `.`, when the OS
/// cannot tell us where the binary lives. Never fails.
pub fn executable_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => match parent_dir(&exe) {
            Some(dir) => return dir,
            None => {
                tracing::warn!(
                    exe = %exe.display(),
                    "Executable path has no parent; falling back to current directory"
                );
            }
        },
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Could not determine executable path; falling back to current directory"
            );
        }
    }

    std::env::current_dir().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Could not determine current directory; using '.'");
        PathBuf::from(".")
    })
}

fn parent_dir(exe: &Path) -> Option<PathBuf> {
    exe.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executable_dir_is_the_test_binary_parent() {
        let exe = std::env::current_exe().unwrap();
        assert_eq!(executable_dir(), exe.parent().unwrap());
    }

    #[test]
    fn bare_file_name_has_no_parent_dir() {
        assert_eq!(parent_dir(Path::new("game")), None);
        assert_eq!(
            parent_dir(Path::new("/opt/game/bin/game")),
            Some(PathBuf::from("/opt/game/bin"))
        );
    }
}
