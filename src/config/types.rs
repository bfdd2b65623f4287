//! Configuration type definitions
//!
//! Mirrors the subset of the OpenTelemetry Collector configuration document
//! that the wrapper understands. Sections that the collector treats as
//! "present or not" are `Option`s so an absent block can be told apart from
//! a block with empty fields. Keys the wrapper does not know about are
//! ignored, which lets real collector configurations load unchanged.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Name of the processor whose presence keeps batching enabled in rotel
pub const BATCH_PROCESSOR: &str = "batch";

/// Root of the collector configuration document
///
/// # Example
///
/// ```
/// use rotel_otel_wrapper::Config;
///
/// let config: Config = serde_yaml::from_str(
///     r#"
/// receivers:
///   otlp:
///     protocols:
///       grpc:
///         endpoint: 0.0.0.0:4317
/// exporters:
///   otlp:
///     endpoint: collector:4317
///     tls:
///       insecure: true
/// "#,
/// )
/// .unwrap();
///
/// assert!(config.grpc_receiver().is_some());
/// assert!(config.exporters.otlp.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Inbound endpoints
    #[serde(default)]
    pub receivers: ReceiversConfig,

    /// Outbound endpoints
    #[serde(default)]
    pub exporters: ExportersConfig,

    /// Processor definitions
    #[serde(default)]
    pub processors: ProcessorsConfig,

    /// Extension definitions
    #[serde(default)]
    pub extensions: ExtensionsConfig,

    /// Pipeline wiring
    #[serde(default)]
    pub service: ServiceConfig,
}

impl Config {
    /// The OTLP grpc receiver, if one is configured
    pub fn grpc_receiver(&self) -> Option<&EndpointConfig> {
        self.receivers
            .otlp
            .as_ref()
            .and_then(|otlp| otlp.protocols.grpc.as_ref())
    }

    /// The OTLP http receiver, if one is configured
    pub fn http_receiver(&self) -> Option<&EndpointConfig> {
        self.receivers
            .otlp
            .as_ref()
            .and_then(|otlp| otlp.protocols.http.as_ref())
    }

    /// Whether any pipeline lists the `batch` processor
    pub fn has_batch_processor(&self) -> bool {
        self.service
            .pipelines
            .values()
            .any(|pipeline| pipeline.processors.iter().any(|p| p == BATCH_PROCESSOR))
    }
}

/// `receivers:` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReceiversConfig {
    /// `receivers.otlp`
    #[serde(default)]
    pub otlp: Option<OtlpReceiverConfig>,
}

/// `receivers.otlp:` block
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OtlpReceiverConfig {
    /// Enabled wire protocols
    #[serde(default)]
    pub protocols: ProtocolsConfig,
}

/// `receivers.otlp.protocols:` block
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProtocolsConfig {
    /// gRPC listener
    #[serde(default)]
    pub grpc: Option<EndpointConfig>,

    /// HTTP listener
    #[serde(default)]
    pub http: Option<EndpointConfig>,
}

/// A receiver protocol listener
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EndpointConfig {
    /// Listen address, e.g. `0.0.0.0:4317`. Empty when the key is omitted.
    #[serde(default)]
    pub endpoint: String,
}

/// `exporters:` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExportersConfig {
    /// OTLP over gRPC
    #[serde(default)]
    pub otlp: Option<OtlpExporterConfig>,

    /// OTLP over HTTP
    #[serde(default)]
    pub otlphttp: Option<OtlpExporterConfig>,
}

/// Settings shared by the `otlp` and `otlphttp` exporters
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OtlpExporterConfig {
    /// Destination address, with or without a scheme
    #[serde(default)]
    pub endpoint: String,

    /// Client TLS settings
    #[serde(default)]
    pub tls: TlsConfig,

    /// Compression algorithm name, passed to rotel verbatim
    #[serde(default)]
    pub compression: String,
}

/// `tls:` block of an exporter
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TlsConfig {
    /// Send plaintext to the endpoint (default: false)
    #[serde(default)]
    pub insecure: bool,
}

/// `processors:` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProcessorsConfig {
    /// Batch processor settings, kept as free-form YAML
    #[serde(default)]
    pub batch: Option<serde_yaml::Mapping>,
}

/// `extensions:` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExtensionsConfig {
    /// pprof extension
    #[serde(default)]
    pub pprof: Option<PprofConfig>,
}

/// `extensions.pprof:` block
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PprofConfig {
    /// File the profile is written to on shutdown
    #[serde(default)]
    pub save_to_file: Option<String>,
}

/// `service:` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServiceConfig {
    /// Enabled extension names
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Pipelines keyed by name (`traces`, `metrics/2`, ...)
    #[serde(default)]
    pub pipelines: BTreeMap<String, PipelineConfig>,
}

/// A single `service.pipelines.<name>` entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PipelineConfig {
    /// Receiver names
    #[serde(default)]
    pub receivers: Vec<String>,

    /// Processor names, in execution order
    #[serde(default)]
    pub processors: Vec<String>,

    /// Exporter names
    #[serde(default)]
    pub exporters: Vec<String>,
}
