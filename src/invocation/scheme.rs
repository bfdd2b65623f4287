//! Exporter endpoint scheme handling
//!
//! rotel is launched without TLS settings, so only plaintext `http://`
//! exporter endpoints can be expressed.

use crate::config::OtlpExporterConfig;
use crate::error::WrapperError;

const HTTP_SCHEME: &str = "http://";
const HTTPS_SCHEME: &str = "https://";

/// Return the exporter endpoint with an explicit `http://` scheme
///
/// | endpoint       | tls.insecure | result            |
/// |----------------|--------------|-------------------|
/// | `http://h:1`   | any          | `http://h:1`      |
/// | `h:1`          | true         | `http://h:1`      |
/// | `h:1`          | false        | `Unsupported`     |
/// | `https://h:1`  | any          | `Unsupported`     |
pub fn endpoint_with_scheme(exporter: &OtlpExporterConfig) -> Result<String, WrapperError> {
    let endpoint = exporter.endpoint.as_str();
    if endpoint.starts_with(HTTP_SCHEME) {
        return Ok(endpoint.to_string());
    }

    if endpoint.starts_with(HTTPS_SCHEME) || !exporter.tls.insecure {
        return Err(WrapperError::Unsupported(
            "https endpoints not supported".to_string(),
        ));
    }

    Ok(format!("{HTTP_SCHEME}{endpoint}"))
}
