//! Transport error taxonomy.
//!
//! Network-class failures (connection problems, timeouts, HTTP 5xx) are
//! retryable. Protocol-level failures (a JSON-RPC `error` object, HTTP 4xx,
//! an undecodable body) are returned to the caller as-is.

use thiserror::Error;

use crate::value::RpcValue;

/// Errors produced while invoking a JSON-RPC method.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The client configuration is unusable (bad header, bad endpoint).
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// The request never produced an HTTP response.
    #[error("Network error calling '{method}': {source}")]
    Network {
        /// JSON-RPC method being called.
        method: String,
        /// Underlying HTTP client error.
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP {status} from RPC endpoint calling '{method}'")]
    Http {
        /// JSON-RPC method being called.
        method: String,
        /// HTTP status code.
        status: u16,
    },

    /// The server returned a JSON-RPC `error` object.
    #[error("RPC error {code} calling '{method}': {message}")]
    Rpc {
        /// JSON-RPC method being called.
        method: String,
        /// JSON-RPC error code.
        code: i64,
        /// Human-readable message from the server.
        message: String,
        /// Structured error payload, when the server sends one.
        data: Option<RpcValue>,
    },

    /// The response body was not a JSON-RPC envelope.
    #[error("Failed to decode RPC response for '{method}': {reason}")]
    Decode {
        /// JSON-RPC method being called.
        method: String,
        /// Decoder message.
        reason: String,
    },
}

impl TransportError {
    /// Whether a retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Http { status, .. } => *status >= 500,
            Self::Config(_) | Self::Rpc { .. } | Self::Decode { .. } => false,
        }
    }
}
