//! Append-only diagnostic file
//!
//! Records what the wrapper was asked to do: its own argument vector,
//! the raw configuration file, and the final rotel command line. Writes are
//! best-effort; a failed write is logged and otherwise ignored.

use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::WrapperError;
use tracing::{debug, warn};

/// Marker written before the raw configuration bytes
pub const CONFIG_BEGIN_MARKER: &str = "--- Config file contents ---";

/// Marker written after the raw configuration bytes
pub const CONFIG_END_MARKER: &str = "--- End of config file ---";

/// Diagnostic sink; discards everything when no file is configured
///
/// Dropping the sink flushes and closes the file, so it is released on
/// every exit path. Call [`DebugSink::close`] before replacing the process
/// image, since `exec` skips destructors.
#[derive(Debug)]
pub struct DebugSink {
    file: Option<BufWriter<File>>,
    path: Option<PathBuf>,
}

impl DebugSink {
    /// A sink that writes nothing
    pub fn discard() -> Self {
        Self {
            file: None,
            path: None,
        }
    }

    /// Open `path` for appending, creating it if needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WrapperError> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let file = options.open(path).map_err(|e| WrapperError::io(path, e))?;
        debug!(debug_file = %path.display(), "Opened debug file");

        Ok(Self {
            file: Some(BufWriter::new(file)),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open `path` if given, otherwise discard
    pub fn from_option(path: Option<&Path>) -> Result<Self, WrapperError> {
        match path {
            Some(path) => Self::open(path),
            None => Ok(Self::discard()),
        }
    }

    /// Whether a file is attached
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Record the wrapper's own argument vector
    ///
    /// Arguments that are not valid UTF-8 are written lossily.
    pub fn record_args<S: AsRef<OsStr>>(&mut self, args: &[S]) {
        let joined = args
            .iter()
            .map(|a| a.as_ref().to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        self.write_all(format!("{joined}\n").as_bytes());
    }

    /// Record the raw configuration file between the markers
    pub fn record_config(&mut self, contents: &[u8]) {
        self.write_all(format!("{CONFIG_BEGIN_MARKER}\n").as_bytes());
        self.write_all(contents);
        self.write_all(format!("\n{CONFIG_END_MARKER}\n").as_bytes());
    }

    /// Record the resolved target and the argument vector it gets
    pub fn record_exec<S: AsRef<str>>(&mut self, rotel_path: &str, exec_args: &[S]) {
        let joined = exec_args
            .iter()
            .map(AsRef::<str>::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        self.write_all(format!("Executing rotel at: {rotel_path} ([{joined}])\n").as_bytes());
    }

    /// Flush and close the file
    pub fn close(mut self) {
        self.flush();
        self.file = None;
    }

    fn write_all(&mut self, bytes: &[u8]) {
        if let Some(file) = self.file.as_mut() {
            if let Err(e) = file.write_all(bytes) {
                warn!(
                    debug_file = ?self.path,
                    error = %e,
                    "Failed to write to debug file"
                );
            }
        }
    }

    fn flush(&mut self) {
        if let Some(file) = self.file.as_mut() {
            if let Err(e) = file.flush() {
                warn!(
                    debug_file = ?self.path,
                    error = %e,
                    "Failed to flush debug file"
                );
            }
        }
    }
}

impl Drop for DebugSink {
    fn drop(&mut self) {
        self.flush();
    }
}
