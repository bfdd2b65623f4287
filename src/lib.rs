//! rotel OpenTelemetry Collector wrapper
//!
//! Lets rotel stand in for an OpenTelemetry Collector binary. The wrapper
//! reads a collector-style YAML configuration, translates the parts rotel
//! understands into rotel command-line flags, and then replaces its own
//! process with rotel.
//!
//! # Features
//!
//! - One OTLP receiver protocol (grpc or http); the other listener is disabled
//! - One OTLP exporter (`otlp` over grpc or `otlphttp` over http)
//! - Plaintext exporter endpoints only
//! - Batching disabled unless some pipeline uses the `batch` processor
//! - Optional append-only debug file (`ROTEL_WRAPPER_DEBUG_FILE`)
//!
//! # Example
//!
//! ```
//! use rotel_otel_wrapper::{Config, translate};
//!
//! # fn main() -> Result<(), rotel_otel_wrapper::WrapperError> {
//! let config: Config = serde_yaml::from_str(
//!     r#"
//! receivers:
//!   otlp:
//!     protocols:
//!       http:
//!         endpoint: 0.0.0.0:4318
//! exporters:
//!   otlphttp:
//!     endpoint: http://collector:4318
//!     compression: none
//! service:
//!   pipelines:
//!     traces:
//!       processors: [batch]
//! "#,
//! )
//! .unwrap();
//!
//! let spec = translate(&config)?;
//! assert_eq!(spec.value_of("--otlp-exporter-protocol"), Some("http"));
//! assert!(!spec.contains("--disable-batching"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod invocation;
pub mod launch;
pub mod run;

// Re-export public API
pub use cli::WrapperArgs;
pub use config::{Config, ConfigLoader};
pub use error::{WrapperConfigError, WrapperError, WrapperLaunchError};
pub use invocation::{InvocationSpec, translate};
pub use launch::{DebugSink, LaunchSettings};

use tracing_subscriber::EnvFilter;

/// Initialize structured logging
///
/// Logs go to stderr so they never mix with rotel's stdout once the process
/// is replaced. Filtered by `RUST_LOG`.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
    }
}
