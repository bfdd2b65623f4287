//! Error types for the rotel wrapper
//!
//! Every failure is fatal to the run. The binary prints the `Display` form of
//! a [`WrapperError`] as a single line and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the rotel wrapper
#[derive(Error, Debug)]
pub enum WrapperError {
    /// `--config <path>` was not found on the command line
    #[error("Usage: rotel-otel-wrapper --config <path to config>")]
    Usage,

    /// A file could not be read or opened
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid YAML for the expected schema
    #[error("Error parsing YAML {}: {source}", path.display())]
    Parse {
        /// Configuration file that failed to parse
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_yaml::Error,
    },

    /// Receiver or exporter configuration is missing or ambiguous
    #[error("Configuration error: {0}")]
    Config(#[from] WrapperConfigError),

    /// The configuration asks for something rotel cannot do yet
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// The target executable could not be located or started
    #[error("Launch error: {0}")]
    Launch(#[from] WrapperLaunchError),
}

/// Configuration-related errors raised while translating
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapperConfigError {
    /// Neither an OTLP grpc nor http receiver is configured
    #[error("missing receiver configuration")]
    MissingReceiver,

    /// Both OTLP grpc and http receivers are configured
    #[error("multiple receiver protocols configured, expected exactly one of grpc or http")]
    MultipleReceivers,

    /// Neither an otlp nor otlphttp exporter is configured
    #[error("missing exporter configuration")]
    MissingExporter,

    /// Both otlp and otlphttp exporters are configured
    #[error("multiple exporters configured, expected exactly one of otlp or otlphttp")]
    MultipleExporters,
}

/// Errors raised while preparing or performing the exec of rotel
#[derive(Error, Debug)]
pub enum WrapperLaunchError {
    /// A required environment variable is unset or empty
    #[error("{0} environment variable not set")]
    MissingEnvVar(&'static str),

    /// The target executable could not be resolved
    #[error("Error finding executable {path}: {reason}")]
    NotFound {
        /// Target as given in `ROTEL_PATH`
        path: String,
        /// Why resolution failed
        reason: String,
    },

    /// The OS refused to execute the resolved binary
    #[error("Error executing {}: {source}", path.display())]
    Exec {
        /// Resolved binary path
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },
}

impl WrapperError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WrapperError::Io {
            path: path.into(),
            source,
        }
    }
}
