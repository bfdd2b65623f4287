//! Launch settings captured from the process environment
//!
//! The environment is read exactly once, at the boundary, and handed to the
//! launcher explicitly.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::WrapperLaunchError;
use tracing::debug;

/// Path to the rotel executable (required)
pub const ROTEL_PATH_ENV: &str = "ROTEL_PATH";

/// Path of the append-only diagnostic file (optional)
pub const DEBUG_FILE_ENV: &str = "ROTEL_WRAPPER_DEBUG_FILE";

/// Environment variable searched for executables
pub const PATH_ENV: &str = "PATH";

/// Everything the launcher needs from the environment
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    /// Target executable, as given in `ROTEL_PATH`
    pub rotel_path: String,

    /// Diagnostic file, if `ROTEL_WRAPPER_DEBUG_FILE` is set
    pub debug_file: Option<PathBuf>,

    /// Environment passed through to rotel unchanged
    pub env: Vec<(OsString, OsString)>,
}

impl LaunchSettings {
    /// Capture settings from the current process environment
    pub fn from_env() -> Result<Self, WrapperLaunchError> {
        let env: Vec<(OsString, OsString)> = std::env::vars_os().collect();
        Self::from_snapshot(env)
    }

    /// Build settings from an environment snapshot
    pub fn from_snapshot(env: Vec<(OsString, OsString)>) -> Result<Self, WrapperLaunchError> {
        let lookup = |key: &str| {
            env.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.to_string_lossy().into_owned())
        };

        let rotel_path = lookup(ROTEL_PATH_ENV)
            .filter(|v| !v.is_empty())
            .ok_or(WrapperLaunchError::MissingEnvVar(ROTEL_PATH_ENV))?;

        let debug_file = lookup(DEBUG_FILE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        debug!(
            rotel_path = %rotel_path,
            debug_file = ?debug_file,
            env_vars = env.len(),
            "Captured launch settings"
        );

        Ok(Self {
            rotel_path,
            debug_file,
            env,
        })
    }

    /// `PATH` from the captured environment
    pub fn search_path(&self) -> Option<&OsString> {
        self.env
            .iter()
            .find(|(k, _)| k == PATH_ENV)
            .map(|(_, v)| v)
    }
}
