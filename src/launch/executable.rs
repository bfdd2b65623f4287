//! Executable resolution and process replacement

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::WrapperLaunchError;
use tracing::{debug, info};

/// Resolve `target` to an executable file
///
/// A target containing a path separator is checked as-is. A bare name is
/// looked up in each directory of `search_path`, in order.
pub fn resolve_executable(
    target: &str,
    search_path: Option<&OsStr>,
) -> Result<PathBuf, WrapperLaunchError> {
    let not_found = |reason: String| WrapperLaunchError::NotFound {
        path: target.to_string(),
        reason,
    };

    if target.is_empty() {
        return Err(not_found("empty executable path".to_string()));
    }

    if target.contains(std::path::MAIN_SEPARATOR) || target.contains('/') {
        let candidate = PathBuf::from(target);
        return match check_executable(&candidate) {
            Ok(()) => Ok(candidate),
            Err(reason) => Err(not_found(reason)),
        };
    }

    let Some(search_path) = search_path else {
        return Err(not_found("executable file not found in $PATH".to_string()));
    };

    for dir in std::env::split_paths(search_path) {
        // An empty PATH entry means the current directory.
        let dir = if dir.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            dir
        };
        let candidate = dir.join(target);
        if check_executable(&candidate).is_ok() {
            debug!(candidate = %candidate.display(), "Found executable in PATH");
            return Ok(candidate);
        }
    }

    Err(not_found("executable file not found in $PATH".to_string()))
}

fn check_executable(path: &Path) -> Result<(), String> {
    let metadata = std::fs::metadata(path).map_err(|e| e.to_string())?;
    if !metadata.is_file() {
        return Err("is not a regular file".to_string());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if metadata.permissions().mode() & 0o111 == 0 {
            return Err("permission denied".to_string());
        }
    }

    Ok(())
}

/// Argument zero for `target`: its final path component
pub fn program_name(target: &str) -> String {
    Path::new(target)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.to_string())
}

/// Replace the current process with `binary`
///
/// `argv0` becomes argument zero; `env` replaces the inherited environment
/// wholesale. Only returns on failure.
#[cfg(unix)]
pub fn exec_replace(
    binary: &Path,
    argv0: &str,
    args: &[String],
    env: &[(OsString, OsString)],
) -> WrapperLaunchError {
    use std::os::unix::process::CommandExt;

    info!(
        binary = %binary.display(),
        argv0 = argv0,
        argc = args.len(),
        "Replacing process with rotel"
    );

    let source = build_command(binary, args, env).arg0(argv0).exec();
    WrapperLaunchError::Exec {
        path: binary.to_path_buf(),
        source,
    }
}

/// Run `binary` as a child and exit with its status
///
/// Hosts without `exec` keep the wrapper alive as the parent; the exit code
/// is passed through unchanged.
#[cfg(not(unix))]
pub fn exec_replace(
    binary: &Path,
    argv0: &str,
    args: &[String],
    env: &[(OsString, OsString)],
) -> WrapperLaunchError {
    info!(
        binary = %binary.display(),
        argv0 = argv0,
        argc = args.len(),
        "Running rotel as a child process"
    );

    match build_command(binary, args, env).status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(source) => WrapperLaunchError::Exec {
            path: binary.to_path_buf(),
            source,
        },
    }
}

fn build_command(binary: &Path, args: &[String], env: &[(OsString, OsString)]) -> Command {
    let mut command = Command::new(binary);
    command
        .args(args)
        .env_clear()
        .envs(env.iter().map(|(k, v)| (k, v)));
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_name_is_basename() {
        assert_eq!(program_name("/opt/rotel/bin/rotel"), "rotel");
        assert_eq!(program_name("rotel"), "rotel");
        assert_eq!(program_name("./bin/rotel"), "rotel");
    }

    #[test]
    fn test_empty_target_not_found() {
        let err = resolve_executable("", None).unwrap_err();
        assert!(matches!(err, WrapperLaunchError::NotFound { .. }));
    }

    #[test]
    fn test_bare_name_without_path_not_found() {
        let err = resolve_executable("rotel", None).unwrap_err();
        assert!(err.to_string().contains("not found in $PATH"));
    }
}
