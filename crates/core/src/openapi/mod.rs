//! OpenAPI to Rust code generator.
//!
//! This module reads an OpenAPI 3.0 document describing a JSON-RPC API and
//! generates three Rust sources:
//! - Type declarations from component schemas
//! - A closed method enum plus the path lookup table
//! - An extension trait with one wrapper per method over the transport

mod emitter;
mod ir;
mod spec;

pub use emitter::{
    DeclarationKind, GeneratedArtifacts, GeneratedDeclaration, GenerationReport, generate,
};
pub use spec::OpenApiSpec;
