//! Generator error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of a generator run.
///
/// Skipped paths are not errors; they are collected in
/// [`GenerationReport`](crate::GenerationReport) instead.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The OpenAPI document could not be downloaded or read.
    #[error("Failed to fetch OpenAPI spec from {location}: {reason}")]
    SpecFetch { location: String, reason: String },

    /// The document is not valid JSON or lacks an `openapi` field.
    #[error("Failed to parse OpenAPI spec: {0}")]
    SpecParse(String),

    /// The `openapi` field names a version this generator does not read.
    #[error("Failed to parse OpenAPI spec: unsupported openapi version '{found}' (expected {expected})")]
    UnsupportedVersion { found: String, expected: String },

    /// A `$ref` points at a schema missing from `components.schemas`.
    #[error("Dangling reference in {from}: '{reference}' does not resolve to a component schema")]
    DanglingReference { from: String, reference: String },

    /// Two paths share an operationId.
    #[error("Duplicate operationId '{operation_id}' on paths '{first}' and '{second}'")]
    DuplicateOperationId {
        operation_id: String,
        first: String,
        second: String,
    },

    /// An output directory or file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Whether this is one of the parse-class failures.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::SpecParse(_) | Self::UnsupportedVersion { .. })
    }
}

/// Shorthand used throughout the generator.
pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
