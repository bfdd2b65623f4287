//! Tests for resolving the rotel executable
#![cfg(unix)]

use rotel_otel_wrapper::error::WrapperLaunchError;
use rotel_otel_wrapper::launch::resolve_executable;
use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

fn write_file(path: &Path, mode: u32) {
    fs::write(path, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

#[test]
fn test_absolute_path_used_as_is() {
    let temp_dir = TempDir::new().unwrap();
    let rotel = temp_dir.path().join("rotel");
    write_file(&rotel, 0o755);

    let resolved = resolve_executable(rotel.to_str().unwrap(), None).unwrap();
    assert_eq!(resolved, rotel);
}

#[test]
fn test_bare_name_searched_in_path() {
    let empty_dir = TempDir::new().unwrap();
    let bin_dir = TempDir::new().unwrap();
    let rotel = bin_dir.path().join("rotel");
    write_file(&rotel, 0o755);

    let search = std::env::join_paths([empty_dir.path(), bin_dir.path()]).unwrap();
    let resolved = resolve_executable("rotel", Some(search.as_os_str())).unwrap();
    assert_eq!(resolved, rotel);
}

#[test]
fn test_first_path_entry_wins() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_file(&first.path().join("rotel"), 0o755);
    write_file(&second.path().join("rotel"), 0o755);

    let search = std::env::join_paths([first.path(), second.path()]).unwrap();
    let resolved = resolve_executable("rotel", Some(search.as_os_str())).unwrap();
    assert_eq!(resolved, first.path().join("rotel"));
}

#[test]
fn test_non_executable_skipped() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_file(&first.path().join("rotel"), 0o644);
    write_file(&second.path().join("rotel"), 0o755);

    let search = std::env::join_paths([first.path(), second.path()]).unwrap();
    let resolved = resolve_executable("rotel", Some(search.as_os_str())).unwrap();
    assert_eq!(resolved, second.path().join("rotel"));
}

#[test]
fn test_non_executable_absolute_path_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let rotel = temp_dir.path().join("rotel");
    write_file(&rotel, 0o644);

    let err = resolve_executable(rotel.to_str().unwrap(), None).unwrap_err();
    assert!(matches!(err, WrapperLaunchError::NotFound { .. }));
}

#[test]
fn test_directory_not_executable() {
    let temp_dir = TempDir::new().unwrap();
    let err = resolve_executable(temp_dir.path().to_str().unwrap(), None).unwrap_err();
    assert!(matches!(err, WrapperLaunchError::NotFound { .. }));
}

#[test]
fn test_missing_in_path() {
    let temp_dir = TempDir::new().unwrap();
    let search = OsString::from(temp_dir.path());

    let err = resolve_executable("rotel", Some(search.as_os_str())).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error finding executable rotel: executable file not found in $PATH"
    );
}
