//! Collector configuration to rotel command line
//!
//! The argument order is fixed so that rotel's flag parser sees the same
//! sequence for the same configuration every time.

use crate::config::{Config, EndpointConfig, OtlpExporterConfig};
use crate::error::{WrapperConfigError, WrapperError};
use crate::invocation::scheme::endpoint_with_scheme;
use tracing::{debug, warn};

/// Address that leaves a rotel receiver listener effectively inert
pub const DISABLED_ENDPOINT: &str = "localhost:0";

const START_COMMAND: &str = "start";
const EXPORTER_FLAG: &str = "--exporter";
const EXPORTER_OTLP: &str = "otlp";
const GRPC_ENDPOINT_FLAG: &str = "--otlp-grpc-endpoint";
const HTTP_ENDPOINT_FLAG: &str = "--otlp-http-endpoint";
const EXPORTER_ENDPOINT_FLAG: &str = "--otlp-exporter-endpoint";
const EXPORTER_PROTOCOL_FLAG: &str = "--otlp-exporter-protocol";
const EXPORTER_COMPRESSION_FLAG: &str = "--otlp-exporter-compression";
const DISABLE_BATCHING_FLAG: &str = "--disable-batching";

/// Transport used by the configured exporter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExporterProtocol {
    /// `exporters.otlp`
    Grpc,
    /// `exporters.otlphttp`
    Http,
}

impl ExporterProtocol {
    /// Value passed to `--otlp-exporter-protocol`
    pub fn as_str(&self) -> &'static str {
        match self {
            ExporterProtocol::Grpc => "grpc",
            ExporterProtocol::Http => "http",
        }
    }
}

/// Ordered rotel arguments, excluding argument zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    args: Vec<String>,
}

impl InvocationSpec {
    /// Arguments in the order they are passed to rotel
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Consume the invocation, yielding the argument list
    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Whether `flag` appears in the argument list
    pub fn contains(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }

    /// The value following `flag`, if the flag is present
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }

    fn push_flag(&mut self, flag: &str, value: impl Into<String>) {
        self.args.push(flag.to_string());
        self.args.push(value.into());
    }
}

/// Translate a collector configuration into rotel arguments
///
/// Requires exactly one OTLP receiver protocol and exactly one of the
/// `otlp`/`otlphttp` exporters. The unused receiver protocol is bound to
/// [`DISABLED_ENDPOINT`]. `--disable-batching` is appended when no pipeline
/// lists the `batch` processor.
pub fn translate(config: &Config) -> Result<InvocationSpec, WrapperError> {
    let mut spec = InvocationSpec {
        args: vec![
            START_COMMAND.to_string(),
            EXPORTER_FLAG.to_string(),
            EXPORTER_OTLP.to_string(),
        ],
    };

    push_receiver(&mut spec, config)?;
    push_exporter(&mut spec, config)?;

    if !config.has_batch_processor() {
        debug!("No pipeline uses the batch processor, disabling batching");
        spec.args.push(DISABLE_BATCHING_FLAG.to_string());
    }

    Ok(spec)
}

fn push_receiver(spec: &mut InvocationSpec, config: &Config) -> Result<(), WrapperError> {
    match (config.grpc_receiver(), config.http_receiver()) {
        (Some(EndpointConfig { endpoint }), None) => {
            debug!(endpoint = %endpoint, "Using OTLP grpc receiver");
            spec.push_flag(GRPC_ENDPOINT_FLAG, endpoint.as_str());
            spec.push_flag(HTTP_ENDPOINT_FLAG, DISABLED_ENDPOINT);
        }
        (None, Some(EndpointConfig { endpoint })) => {
            debug!(endpoint = %endpoint, "Using OTLP http receiver");
            spec.push_flag(HTTP_ENDPOINT_FLAG, endpoint.as_str());
            spec.push_flag(GRPC_ENDPOINT_FLAG, DISABLED_ENDPOINT);
        }
        (Some(_), Some(_)) => {
            warn!("Both grpc and http OTLP receivers are configured");
            return Err(WrapperConfigError::MultipleReceivers.into());
        }
        (None, None) => {
            warn!("No OTLP receiver is configured");
            return Err(WrapperConfigError::MissingReceiver.into());
        }
    }
    Ok(())
}

fn push_exporter(spec: &mut InvocationSpec, config: &Config) -> Result<(), WrapperError> {
    let (exporter, protocol) = select_exporter(config)?;
    let endpoint = endpoint_with_scheme(exporter).inspect_err(|e| {
        warn!(
            endpoint = %exporter.endpoint,
            insecure = exporter.tls.insecure,
            error = %e,
            "Exporter endpoint cannot be used"
        );
    })?;

    debug!(
        endpoint = %endpoint,
        protocol = protocol.as_str(),
        compression = %exporter.compression,
        "Using OTLP exporter"
    );

    spec.push_flag(EXPORTER_ENDPOINT_FLAG, endpoint);
    spec.push_flag(EXPORTER_PROTOCOL_FLAG, protocol.as_str());
    spec.push_flag(EXPORTER_COMPRESSION_FLAG, exporter.compression.as_str());
    Ok(())
}

fn select_exporter(
    config: &Config,
) -> Result<(&OtlpExporterConfig, ExporterProtocol), WrapperConfigError> {
    match (&config.exporters.otlp, &config.exporters.otlphttp) {
        (Some(otlp), None) => Ok((otlp, ExporterProtocol::Grpc)),
        (None, Some(otlphttp)) => Ok((otlphttp, ExporterProtocol::Http)),
        (Some(_), Some(_)) => {
            warn!("Both otlp and otlphttp exporters are configured");
            Err(WrapperConfigError::MultipleExporters)
        }
        (None, None) => {
            warn!("No OTLP exporter is configured");
            Err(WrapperConfigError::MissingExporter)
        }
    }
}
