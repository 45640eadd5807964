//! Operation invocation.
//!
//! [`ServiceClient`] is the seam between the pagination machinery and the
//! wire: one call in, one response out, no retries (retry policy belongs to
//! the transport layer or a wrapping caller, never here). The client handle
//! is constructed by the caller and passed in explicitly; nothing in this
//! crate holds ambient client state.
//!
//! [`HttpServiceClient`] is the production implementation: a JSON POST with
//! an `x-amz-target` header against a configured endpoint. Credential signing
//! and region resolution stay outside this crate (an authenticating proxy or
//! pre-configured headers stand in).

use crate::config::Config;
use crate::error::{Error, OperationError};
use crate::op::OpSpec;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::{Map, Value};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Default per-call timeout when the configuration does not set one.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A handle to a remote service: performs exactly one call per request.
#[async_trait]
pub trait ServiceClient: Send + Sync {
    /// Invokes `spec` once with `request`, returning the raw response body.
    async fn call(&self, spec: &OpSpec, request: &Value) -> Result<Value, OperationError>;
}

/// Invokes the operation once, racing it against cancellation.
///
/// Returns `Ok(None)` when the caller cancelled: the in-flight call is
/// abandoned and cancellation is a normal abort path, not an error.
pub async fn call_cancellable(
    client: &dyn ServiceClient,
    spec: &OpSpec,
    request: &Value,
    cancel: &CancellationToken,
) -> Result<Option<Value>, OperationError> {
    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!(operation = %spec.qualified_name(), "call cancelled");
            Ok(None)
        }
        response = client.call(spec, request) => response.map(Some),
    }
}

/// HTTP JSON transport for AWS-style services.
pub struct HttpServiceClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpServiceClient {
    /// Builds a client for one service from the merged configuration.
    pub fn from_config(config: &Config, service: &str) -> Result<Self, Error> {
        let endpoint = config.endpoint(service)?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let header = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Config(format!("invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::Config(format!("invalid header value for '{}': {}", name, e)))?;
            headers.insert(header, value);
        }

        let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let http = reqwest::Client::builder()
            .user_agent(concat!("awscmd/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, endpoint })
    }

    fn wrap_transport(&self, operation: &str, err: reqwest::Error) -> OperationError {
        let host = self.endpoint.host_str().unwrap_or_default().to_string();
        if is_name_resolution(&err) {
            tracing::debug!(%operation, %host, "classified transport failure as name resolution");
            OperationError::name_resolution(operation, host, Box::new(err))
        } else {
            let message = if err.is_timeout() {
                "request timed out".to_string()
            } else {
                err.to_string()
            };
            OperationError::transport(operation, message, Some(Box::new(err)))
        }
    }
}

#[async_trait]
impl ServiceClient for HttpServiceClient {
    async fn call(&self, spec: &OpSpec, request: &Value) -> Result<Value, OperationError> {
        let operation = spec.qualified_name();
        tracing::debug!(%operation, endpoint = %self.endpoint, "invoking");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(
                "x-amz-target",
                format!("{}.{}", spec.target_prefix, spec.name),
            )
            .header(CONTENT_TYPE, "application/x-amz-json-1.1")
            .json(request)
            .send()
            .await
            .map_err(|e| self.wrap_transport(&operation, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.wrap_transport(&operation, e))?;

        let value: Value = if body.trim().is_empty() {
            // Some operations (JoinStorageSession and friends) return no body.
            Value::Object(Map::new())
        } else {
            serde_json::from_str(&body).map_err(|e| OperationError::MalformedResponse {
                operation: operation.clone(),
                message: e.to_string(),
            })?
        };

        if status.is_success() {
            Ok(value)
        } else {
            Err(service_error(&operation, status.as_u16(), &value))
        }
    }
}

/// Maps an AWS JSON error body (`__type` + `message`) onto
/// [`OperationError::Service`], passing the service message through unchanged.
fn service_error(operation: &str, status: u16, body: &Value) -> OperationError {
    let code = body
        .get("__type")
        .and_then(Value::as_str)
        .map(|t| t.rsplit('#').next().unwrap_or(t).to_string())
        .unwrap_or_else(|| format!("HTTP{}", status));
    let message = body
        .get("message")
        .or_else(|| body.get("Message"))
        .and_then(Value::as_str)
        .unwrap_or("no error message provided")
        .to_string();
    OperationError::service(operation, code, message)
}

/// Walks the cause chain looking for a DNS/name-resolution class failure.
pub(crate) fn is_name_resolution(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = current {
        let message = e.to_string().to_lowercase();
        if message.contains("dns error")
            || message.contains("failed to lookup address")
            || message.contains("name or service not known")
            || message.contains("no such host")
        {
            return true;
        }
        current = e.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fmt;

    #[derive(Debug)]
    struct Layered {
        message: &'static str,
        inner: Option<Box<Layered>>,
    }

    impl fmt::Display for Layered {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl std::error::Error for Layered {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.inner
                .as_deref()
                .map(|e| e as &(dyn std::error::Error + 'static))
        }
    }

    #[test]
    fn name_resolution_detected_anywhere_in_chain() {
        let err = Layered {
            message: "error sending request",
            inner: Some(Box::new(Layered {
                message: "error trying to connect",
                inner: Some(Box::new(Layered {
                    message: "dns error: failed to lookup address information",
                    inner: None,
                })),
            })),
        };
        assert!(is_name_resolution(&err));
    }

    #[test]
    fn plain_connect_failure_is_not_name_resolution() {
        let err = Layered {
            message: "connection refused",
            inner: None,
        };
        assert!(!is_name_resolution(&err));
    }

    #[test]
    fn service_error_extracts_code_and_message() {
        let body = json!({
            "__type": "com.amazonaws.servicediscovery#ServiceNotFound",
            "message": "Service not found: srv-123"
        });
        let err = service_error("servicediscovery/GetService", 400, &body);
        match err {
            OperationError::Service { code, message, .. } => {
                assert_eq!(code, "ServiceNotFound");
                assert_eq!(message, "Service not found: srv-123");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn service_error_falls_back_to_http_status() {
        let err = service_error("svc/Op", 503, &json!({}));
        match err {
            OperationError::Service { code, .. } => assert_eq!(code, "HTTP503"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
