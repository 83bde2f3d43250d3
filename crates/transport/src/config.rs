//! Explicit client configuration.

use std::collections::BTreeMap;
use std::time::Duration;

use url::Url;

use crate::error::TransportError;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retries after a network-class failure.
pub const DEFAULT_RETRIES: u32 = 3;

/// Options recognized by [`RpcClient`](crate::RpcClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// JSON-RPC endpoint every request is POSTed to.
    pub endpoint: Url,
    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,
    /// Per-request deadline.
    pub timeout: Duration,
    /// Maximum retry attempts after the first failed request.
    pub retries: u32,
}

impl ClientConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            headers: BTreeMap::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retries: DEFAULT_RETRIES,
        }
    }

    /// Parse `endpoint` and build a default configuration for it.
    pub fn parse(endpoint: &str) -> Result<Self, TransportError> {
        let url = Url::parse(endpoint)
            .map_err(|e| TransportError::Config(format!("invalid endpoint '{endpoint}': {e}")))?;
        Ok(Self::new(url))
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::parse("https://rpc.mainnet.near.org").unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retries, 3);
        assert!(config.headers.is_empty());
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = ClientConfig::parse("https://rpc.testnet.near.org")
            .unwrap()
            .with_header("x-api-key", "secret")
            .with_timeout(Duration::from_secs(5))
            .with_retries(0);
        assert_eq!(config.headers.get("x-api-key").map(String::as_str), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.retries, 0);
    }

    #[test]
    fn test_rejects_relative_endpoint() {
        let err = ClientConfig::parse("/rpc").unwrap_err();
        assert!(matches!(err, TransportError::Config(_)));
    }
}
