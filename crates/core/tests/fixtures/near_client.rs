//! Generated by rpcgen from the OpenAPI document. Do not edit.
#![allow(non_snake_case)]

use std::future::Future;

use rpcgen_transport::{Invoke, RpcValue, TransportError};

use super::methods::RpcMethod;

/// Typed wrappers for every JSON-RPC method, available on any [`Invoke`] implementor.
pub trait RpcMethods: Invoke {
    /// Calls `EXPERIMENTAL_changes` (`POST /EXPERIMENTAL_changes`).
    ///
    /// Returns changes for a given account, contract or contract code
    /// for given block height or hash.
    fn experimentalChanges(&self, params: RpcValue) -> impl Future<Output = Result<RpcValue, TransportError>> + Send {
        self.invoke(RpcMethod::ExperimentalChanges.as_str(), Some(params))
    }

    /// Calls `EXPERIMENTAL_genesis_config` (`POST /EXPERIMENTAL_genesis_config`).
    ///
    /// Request: `GenesisConfigRequest`.
    fn experimentalGenesisConfig(&self) -> impl Future<Output = Result<RpcValue, TransportError>> + Send {
        self.invoke(RpcMethod::ExperimentalGenesisConfig.as_str(), None)
    }

    /// Calls `block` (`POST /block`).
    ///
    /// Returns block details for given height or hash
    ///
    /// Request: `RpcBlockRequest`.
    fn block(&self, params: RpcValue) -> impl Future<Output = Result<RpcValue, TransportError>> + Send {
        self.invoke(RpcMethod::Block.as_str(), Some(params))
    }

    /// Calls `network_info` (`POST /network_info`).
    fn networkInfo(&self) -> impl Future<Output = Result<RpcValue, TransportError>> + Send {
        self.invoke(RpcMethod::NetworkInfo.as_str(), None)
    }

    /// Calls `status` (`POST /status`).
    ///
    /// Requests the status of the connected RPC node.
    ///
    /// Response: `StatusSyncInfo`.
    fn status(&self) -> impl Future<Output = Result<RpcValue, TransportError>> + Send {
        self.invoke(RpcMethod::Status.as_str(), None)
    }
}

impl<T: Invoke> RpcMethods for T {}
