//! Generated by rpcgen from the OpenAPI document. Do not edit.

use serde::{Deserialize, Serialize};

/// Defines permissions for an access key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessKeyPermission {
    /// Grants full access to the account.
    #[serde(rename = "FullAccess")]
    FullAccess,
    /// Allows calling methods on a single contract.
    #[serde(untagged)]
    FunctionCall {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        allowance: Option<String>,
        receiver_id: AccountId,
    },
}

/// NEAR Account Identifier.
///
/// This is a unique, syntactically valid, human-readable account identifier on the NEAR network.
pub type AccountId = String;

pub type BlockHeight = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockId {
    BlockHeight(u64),
    Case1(CryptoHash),
}

pub type CryptoHash = String;

/// Different types of finality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Finality {
    /// Optimistic finality.
    #[serde(rename = "optimistic")]
    Optimistic,
    /// Ready to be included in a final block.
    #[serde(rename = "near-final")]
    NearFinal,
    #[serde(rename = "final")]
    Final,
}

/// Request for the genesis config. Takes no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisConfigRequest {}

impl GenesisConfigRequest {
    /// Creates an empty `GenesisConfigRequest`.
    pub fn new() -> Self {
        Self {}
    }
}

/// Parameters of the `block` method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcBlockRequest {
    /// Block height or hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<BlockId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finality: Option<Finality>,
}

impl RpcBlockRequest {
    /// Creates a new `RpcBlockRequest` from its required fields.
    ///
    /// Optional fields start as `None`; set them with the `with_*` methods.
    pub fn new() -> Self {
        Self {
            block_id: None,
            finality: None,
        }
    }

    /// Sets `block_id`.
    pub fn with_block_id(mut self, value: BlockId) -> Self {
        self.block_id = Some(value);
        self
    }

    /// Sets `finality`.
    pub fn with_finality(mut self, value: Finality) -> Self {
        self.finality = Some(value);
        self
    }
}

pub type ShardId = i64;

/// Why a state change happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateChangeCause {
    /// State change caused by a transaction.
    TransactionProcessing {
        tx_hash: CryptoHash,
        r#type: String,
    },
    Case1 {
        r#type: String,
    },
}

/// Sync status of the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSyncInfo {
    /// Timestamp of the earliest block, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earliest_block_time: Option<String>,
    /// Height of the first block of the current epoch.
    #[serde(rename = "epochStartHeight", default, skip_serializing_if = "Option::is_none")]
    pub epoch_start_height: Option<u64>,
    pub latest_block_hash: CryptoHash,
    pub latest_block_height: BlockHeight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shards: Option<Vec<i32>>,
    pub syncing: bool,
}

impl StatusSyncInfo {
    /// Creates a new `StatusSyncInfo` from its required fields.
    ///
    /// Optional fields start as `None`; set them with the `with_*` methods.
    pub fn new(latest_block_hash: CryptoHash, latest_block_height: BlockHeight, syncing: bool) -> Self {
        Self {
            earliest_block_time: None,
            epoch_start_height: None,
            latest_block_hash,
            latest_block_height,
            shards: None,
            syncing,
        }
    }

    /// Sets `earliest_block_time`.
    pub fn with_earliest_block_time(mut self, value: String) -> Self {
        self.earliest_block_time = Some(value);
        self
    }

    /// Sets `epochStartHeight`.
    pub fn with_epoch_start_height(mut self, value: u64) -> Self {
        self.epoch_start_height = Some(value);
        self
    }

    /// Sets `shards`.
    pub fn with_shards(mut self, value: Vec<i32>) -> Self {
        self.shards = Some(value);
        self
    }
}

/// Node of a merkle tree.
/// Children are stored inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<TreeNode>>,
    pub value: String,
}

impl TreeNode {
    /// Creates a new `TreeNode` from its required fields.
    ///
    /// Optional fields start as `None`; set them with the `with_*` methods.
    pub fn new(value: String) -> Self {
        Self {
            children: None,
            parent: None,
            value,
        }
    }

    /// Sets `children`.
    pub fn with_children(mut self, value: Vec<TreeNode>) -> Self {
        self.children = Some(value);
        self
    }

    /// Sets `parent`.
    pub fn with_parent(mut self, value: TreeNode) -> Self {
        self.parent = Some(Box::new(value));
        self
    }
}
