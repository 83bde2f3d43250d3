//! Generated by rpcgen from the OpenAPI document. Do not edit.

use std::fmt;
use std::str::FromStr;

/// JSON-RPC methods exposed by the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RpcMethod {
    /// `EXPERIMENTAL_changes`
    ExperimentalChanges,
    /// `EXPERIMENTAL_genesis_config`
    ExperimentalGenesisConfig,
    /// `block`
    Block,
    /// `network_info`
    NetworkInfo,
    /// `status`
    Status,
}

impl RpcMethod {
    /// Every method, sorted by wire name.
    pub const ALL: &'static [RpcMethod] = &[
        RpcMethod::ExperimentalChanges,
        RpcMethod::ExperimentalGenesisConfig,
        RpcMethod::Block,
        RpcMethod::NetworkInfo,
        RpcMethod::Status,
    ];

    /// Wire name sent as the JSON-RPC `method`.
    pub const fn as_str(self) -> &'static str {
        match self {
            RpcMethod::ExperimentalChanges => "EXPERIMENTAL_changes",
            RpcMethod::ExperimentalGenesisConfig => "EXPERIMENTAL_genesis_config",
            RpcMethod::Block => "block",
            RpcMethod::NetworkInfo => "network_info",
            RpcMethod::Status => "status",
        }
    }

    /// OpenAPI path the method is documented under.
    pub const fn path(self) -> &'static str {
        match self {
            RpcMethod::ExperimentalChanges => "/EXPERIMENTAL_changes",
            RpcMethod::ExperimentalGenesisConfig => "/EXPERIMENTAL_genesis_config",
            RpcMethod::Block => "/block",
            RpcMethod::NetworkInfo => "/network_info",
            RpcMethod::Status => "/status",
        }
    }

    /// Wire names of every method, in [`RpcMethod::ALL`] order.
    pub fn all_names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|m| m.as_str())
    }

    /// Method documented under `path`.
    pub fn from_path(path: &str) -> Option<Self> {
        PATH_TO_METHOD
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, m)| *m)
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RpcMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown RPC method '{s}'"))
    }
}

/// Path to method lookup, sorted by path.
pub const PATH_TO_METHOD: &[(&str, RpcMethod)] = &[
    ("/EXPERIMENTAL_changes", RpcMethod::ExperimentalChanges),
    ("/EXPERIMENTAL_genesis_config", RpcMethod::ExperimentalGenesisConfig),
    ("/block", RpcMethod::Block),
    ("/network_info", RpcMethod::NetworkInfo),
    ("/status", RpcMethod::Status),
];
