//! API-level IR for code generation.
//!
//! This layer is language-agnostic about layout but already has every OpenAPI
//! question answered: which paths are methods, what each method is called,
//! and which declaration every schema becomes.

use super::types::RsTypeDef;

/// A path whose `post` operation carries an operationId.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodEntry {
    pub path: String,
    /// Canonical JSON-RPC method name, used verbatim on the wire
    pub operation_id: String,
    /// Component referenced by the JSON request body, if any
    pub request_ref: Option<String>,
    /// Component referenced by the JSON 200 response, if any
    pub response_ref: Option<String>,
    pub summary: Option<String>,
}

/// Every method of a run, sorted by path, plus the paths that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodTable {
    pub entries: Vec<MethodEntry>,
    pub skipped: Vec<String>,
}

impl MethodTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalized method, ready for codegen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodIR {
    pub operation_id: String,
    pub path: String,
    /// Wrapper function name (camelCase, keyword-escaped)
    pub fn_name: String,
    /// `RpcMethod` variant name
    pub variant: String,
    pub takes_params: bool,
    pub request_schema: Option<String>,
    pub response_schema: Option<String>,
    pub summary: Option<String>,
}

/// Whole-document IR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiIR {
    /// Declarations sorted by schema name
    pub types: Vec<RsTypeDef>,
    /// Methods sorted by operationId
    pub methods: Vec<MethodIR>,
    pub skipped_paths: Vec<String>,
}
