//! Configuration module
//!
//! Provides the collector configuration model and the loader that reads it
//! from a YAML file.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    BATCH_PROCESSOR, Config, EndpointConfig, ExportersConfig, ExtensionsConfig,
    OtlpExporterConfig, OtlpReceiverConfig, PipelineConfig, PprofConfig, ProcessorsConfig,
    ProtocolsConfig, ReceiversConfig, ServiceConfig, TlsConfig,
};
