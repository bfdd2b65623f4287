//! Configuration loader
//!
//! Reads a collector configuration file and parses it into [`Config`]. The
//! loader does no validation of its own; deciding whether the document is
//! usable is the translator's job.

use std::path::Path;

use crate::config::types::Config;
use crate::error::WrapperError;
use tracing::{debug, info, warn};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Config, WrapperError> {
        let path = path.as_ref();
        let content = Self::read_raw(path)?;
        Self::from_yaml_bytes(path, &content)
    }

    /// Read the configuration file verbatim
    ///
    /// Used on its own when the caller also needs the raw bytes, e.g. to
    /// mirror them into the debug file before parsing.
    pub fn read_raw(path: impl AsRef<Path>) -> Result<Vec<u8>, WrapperError> {
        let path = path.as_ref();
        info!(
            config_path = %path.display(),
            "Loading configuration from YAML file"
        );

        let content = std::fs::read(path).map_err(|e| {
            warn!(
                config_path = %path.display(),
                error = %e,
                "Failed to read configuration file"
            );
            WrapperError::io(path, e)
        })?;

        debug!(
            config_path = %path.display(),
            file_size_bytes = content.len(),
            "Read configuration file"
        );

        Ok(content)
    }

    /// Parse configuration already read from `path`
    pub fn from_yaml_bytes(path: impl AsRef<Path>, content: &[u8]) -> Result<Config, WrapperError> {
        let path = path.as_ref();

        // An empty document is a valid, empty configuration.
        if content.iter().all(u8::is_ascii_whitespace) {
            debug!(config_path = %path.display(), "Configuration file is empty");
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_slice(content).map_err(|e| {
            warn!(
                config_path = %path.display(),
                error = %e,
                "Failed to parse YAML configuration"
            );
            WrapperError::Parse {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        info!(
            config_path = %path.display(),
            grpc_receiver = config.grpc_receiver().is_some(),
            http_receiver = config.http_receiver().is_some(),
            otlp_exporter = config.exporters.otlp.is_some(),
            otlphttp_exporter = config.exporters.otlphttp.is_some(),
            pipelines = config.service.pipelines.len(),
            "Parsed YAML configuration successfully"
        );

        Ok(config)
    }
}
