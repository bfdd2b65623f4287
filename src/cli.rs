//! Command-line handling
//!
//! The wrapper is started by collector tooling that passes its own flags, so
//! only `--config` is recognised and everything else is ignored.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::error::WrapperError;

const CONFIG_FLAG: &str = "--config";
const CONFIG_FLAG_EQ: &str = "--config=";

/// Arguments the wrapper acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperArgs {
    /// Collector configuration file
    pub config: PathBuf,
}

impl WrapperArgs {
    /// Extract `--config <path>` (or `--config=<path>`) from a full argument
    /// vector, argument zero included. The first occurrence wins.
    ///
    /// Paths are kept as raw OS strings; they need not be UTF-8.
    pub fn from_args<S: AsRef<OsStr>>(args: &[S]) -> Result<Self, WrapperError> {
        let mut iter = args.iter().skip(1).map(AsRef::<OsStr>::as_ref);
        while let Some(arg) = iter.next() {
            if arg == CONFIG_FLAG {
                match iter.next() {
                    Some(value) if !value.is_empty() => {
                        return Ok(Self {
                            config: PathBuf::from(value),
                        });
                    }
                    _ => break,
                }
            }
            if let Some(value) = strip_config_eq(arg) {
                if !value.is_empty() {
                    return Ok(Self {
                        config: PathBuf::from(value),
                    });
                }
            }
        }
        Err(WrapperError::Usage)
    }
}

#[cfg(unix)]
fn strip_config_eq(arg: &OsStr) -> Option<OsString> {
    use std::os::unix::ffi::OsStrExt;

    arg.as_bytes()
        .strip_prefix(CONFIG_FLAG_EQ.as_bytes())
        .map(|value| OsStr::from_bytes(value).to_os_string())
}

#[cfg(not(unix))]
fn strip_config_eq(arg: &OsStr) -> Option<OsString> {
    arg.to_str()
        .and_then(|s| s.strip_prefix(CONFIG_FLAG_EQ))
        .map(OsString::from)
}
