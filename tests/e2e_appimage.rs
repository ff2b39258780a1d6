// portable-dirs - tests/e2e_appimage.rs
//
// AppImage resource redirection through the public getter.
//
// Kept in its own test binary because it mutates the process environment.

#![cfg(all(unix, not(target_vendor = "apple"), not(target_os = "android")))]

use tempfile::TempDir;

#[test]
fn e2e_appimage_share_dir_is_used_for_resources() {
    let appdir = TempDir::new().unwrap();
    let share = appdir.path().join("usr").join("share");
    std::fs::create_dir_all(&share).unwrap();

    std::env::set_var("APPIMAGE", appdir.path().join("Game.AppImage"));
    std::env::set_var("APPDIR", appdir.path());

    let resources = portable_dirs::get_app_resources_path().unwrap();

    std::env::remove_var("APPIMAGE");
    std::env::remove_var("APPDIR");

    assert_eq!(resources, share);
}
