//! Unit tests for YAML configuration loading

use rotel_otel_wrapper::config::ConfigLoader;
use rotel_otel_wrapper::error::WrapperError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_full_collector_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.yaml");

    let yaml_content = r#"
receivers:
  otlp:
    protocols:
      grpc:
        endpoint: 0.0.0.0:4317
processors:
  batch:
    timeout: 1s
  memory_limiter:
    check_interval: 1s
exporters:
  otlp:
    endpoint: collector:4317
    tls:
      insecure: true
    compression: gzip
extensions:
  pprof:
    save_to_file: /tmp/cpu.pprof
service:
  extensions: [pprof]
  pipelines:
    traces:
      receivers: [otlp]
      processors: [memory_limiter, batch]
      exporters: [otlp]
"#;

    fs::write(&config_file, yaml_content).unwrap();

    let config = ConfigLoader::from_yaml(&config_file).unwrap();

    assert_eq!(config.grpc_receiver().unwrap().endpoint, "0.0.0.0:4317");
    assert!(config.http_receiver().is_none());

    let otlp = config.exporters.otlp.as_ref().unwrap();
    assert_eq!(otlp.endpoint, "collector:4317");
    assert!(otlp.tls.insecure);
    assert_eq!(otlp.compression, "gzip");
    assert!(config.exporters.otlphttp.is_none());

    assert!(config.processors.batch.is_some());
    assert_eq!(
        config.extensions.pprof.as_ref().unwrap().save_to_file.as_deref(),
        Some("/tmp/cpu.pprof")
    );
    assert_eq!(config.service.extensions, vec!["pprof".to_string()]);

    let traces = &config.service.pipelines["traces"];
    assert_eq!(traces.receivers, vec!["otlp".to_string()]);
    assert_eq!(
        traces.processors,
        vec!["memory_limiter".to_string(), "batch".to_string()]
    );
    assert_eq!(traces.exporters, vec!["otlp".to_string()]);
    assert!(config.has_batch_processor());
}

#[test]
fn test_absent_sections_are_none() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.yaml");

    let yaml_content = r#"
exporters:
  otlphttp:
    endpoint: http://collector:4318
"#;

    fs::write(&config_file, yaml_content).unwrap();

    let config = ConfigLoader::from_yaml(&config_file).unwrap();

    assert!(config.receivers.otlp.is_none());
    assert!(config.exporters.otlp.is_none());

    let otlphttp = config.exporters.otlphttp.as_ref().unwrap();
    assert!(!otlphttp.tls.insecure); // default
    assert_eq!(otlphttp.compression, ""); // unset
    assert!(config.service.pipelines.is_empty());
}

#[test]
fn test_present_but_empty_receiver_is_configured() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.yaml");

    let yaml_content = r#"
receivers:
  otlp:
    protocols:
      http: {}
"#;

    fs::write(&config_file, yaml_content).unwrap();

    let config = ConfigLoader::from_yaml(&config_file).unwrap();

    let http = config.http_receiver().expect("http receiver should be present");
    assert_eq!(http.endpoint, "");
    assert!(config.grpc_receiver().is_none());
}

#[test]
fn test_null_receiver_block_is_absent() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.yaml");

    let yaml_content = r#"
receivers:
  otlp:
    protocols:
      grpc:
"#;

    fs::write(&config_file, yaml_content).unwrap();

    let config = ConfigLoader::from_yaml(&config_file).unwrap();
    assert!(config.grpc_receiver().is_none());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.yaml");

    let yaml_content = r#"
receivers:
  otlp:
    protocols:
      grpc:
        endpoint: 0.0.0.0:4317
        max_recv_msg_size_mib: 16
  hostmetrics:
    collection_interval: 10s
connectors:
  spanmetrics: {}
service:
  telemetry:
    logs:
      level: debug
"#;

    fs::write(&config_file, yaml_content).unwrap();

    let config = ConfigLoader::from_yaml(&config_file).unwrap();
    assert_eq!(config.grpc_receiver().unwrap().endpoint, "0.0.0.0:4317");
}

#[test]
fn test_empty_file_is_empty_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.yaml");
    fs::write(&config_file, "\n").unwrap();

    let config = ConfigLoader::from_yaml(&config_file).unwrap();
    assert!(config.receivers.otlp.is_none());
    assert!(config.service.pipelines.is_empty());
}

#[test]
fn test_load_yaml_with_invalid_syntax() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.yaml");

    let invalid_yaml = r#"
receivers:
  otlp:
    protocols: [invalid
"#;

    fs::write(&config_file, invalid_yaml).unwrap();

    let result = ConfigLoader::from_yaml(&config_file);
    match result.unwrap_err() {
        WrapperError::Parse { path, .. } => assert_eq!(path, config_file),
        other => panic!("Expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_load_yaml_with_wrong_types() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.yaml");

    let yaml_content = r#"
exporters:
  otlp:
    tls:
      insecure: [true]
"#;

    fs::write(&config_file, yaml_content).unwrap();

    assert!(matches!(
        ConfigLoader::from_yaml(&config_file),
        Err(WrapperError::Parse { .. })
    ));
}

#[test]
fn test_load_yaml_with_missing_file() {
    let result = ConfigLoader::from_yaml("/nonexistent/path/config.yaml");
    match result.unwrap_err() {
        WrapperError::Io { path, .. } => {
            assert_eq!(path.to_str(), Some("/nonexistent/path/config.yaml"))
        }
        other => panic!("Expected Io error for missing file, got {other:?}"),
    }
}

#[test]
fn test_read_raw_is_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.yaml");
    let content = b"# comment\nreceivers: {}\n";
    fs::write(&config_file, content).unwrap();

    assert_eq!(ConfigLoader::read_raw(&config_file).unwrap(), content.to_vec());
}
