//! JSON-RPC transport for generated NEAR clients.
//!
//! Generated code only depends on [`Invoke`], [`RpcValue`] and
//! [`TransportError`]. [`RpcClient`] is the stock HTTP implementation.

mod client;
mod config;
mod error;
mod value;

pub use client::{Invoke, RpcClient};
pub use config::{ClientConfig, DEFAULT_RETRIES, DEFAULT_TIMEOUT_SECS};
pub use error::TransportError;
pub use value::RpcValue;
