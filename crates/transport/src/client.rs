//! JSON-RPC 2.0 over HTTP POST.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::value::RpcValue;

/// First retry delay. Each further attempt doubles it.
const INITIAL_DELAY_MS: u64 = 125;

/// Anything able to send a named JSON-RPC call and hand back the raw result.
///
/// Generated method wrappers are written against this trait so they work with
/// [`RpcClient`] as well as with test doubles.
pub trait Invoke {
    fn invoke(
        &self,
        method: &str,
        params: Option<RpcValue>,
    ) -> impl Future<Output = Result<RpcValue, TransportError>> + Send;
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: String,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<&'a RpcValue>,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<RpcValue>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<RpcValue>,
}

/// HTTP JSON-RPC client bound to one endpoint.
#[derive(Debug)]
pub struct RpcClient {
    http: reqwest::Client,
    config: ClientConfig,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Build a client from explicit configuration.
    ///
    /// Fails with [`TransportError::Config`] if a header name or value is not
    /// valid HTTP.
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| TransportError::Config(format!("invalid header name '{name}': {e}")))?;
            let header_value = HeaderValue::try_from(value.as_str()).map_err(|e| {
                TransportError::Config(format!("invalid value for header '{name}': {e}"))
            })?;
            headers.insert(header_name, header_value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| TransportError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Call `method`, retrying network-class failures with exponential backoff.
    pub async fn call(
        &self,
        method: &str,
        params: Option<RpcValue>,
    ) -> Result<RpcValue, TransportError> {
        let mut attempt: u32 = 0;
        loop {
            match self.send_once(method, params.as_ref()).await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < self.config.retries => {
                    let delay = INITIAL_DELAY_MS.saturating_mul(2_u64.saturating_pow(attempt));
                    attempt += 1;
                    warn!(
                        attempt,
                        max_retries = self.config.retries,
                        delay_ms = delay,
                        method,
                        error = %e,
                        "RPC request failed, retrying"
                    );
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(
        &self,
        method: &str,
        params: Option<&RpcValue>,
    ) -> Result<RpcValue, TransportError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: id.to_string(),
            method,
            params,
        };
        debug!(id, method, "Sending RPC request");

        let response = self
            .http
            .post(self.config.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|source| TransportError::Network {
                method: method.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Http {
                method: method.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| TransportError::Network {
                method: method.to_string(),
                source,
            })?;
        let envelope: RpcResponse =
            serde_json::from_slice(&body).map_err(|e| TransportError::Decode {
                method: method.to_string(),
                reason: e.to_string(),
            })?;

        if let Some(error) = envelope.error {
            return Err(TransportError::Rpc {
                method: method.to_string(),
                code: error.code,
                message: error.message,
                data: error.data,
            });
        }
        Ok(envelope.result.unwrap_or_default())
    }
}

impl Invoke for RpcClient {
    fn invoke(
        &self,
        method: &str,
        params: Option<RpcValue>,
    ) -> impl Future<Output = Result<RpcValue, TransportError>> + Send {
        self.call(method, params)
    }
}
