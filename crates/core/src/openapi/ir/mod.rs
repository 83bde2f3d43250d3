//! Intermediate representation for OpenAPI to Rust code generation.
//!
//! Three layers:
//! 1. API-level IR: component declarations and methods with every OpenAPI
//!    question answered
//! 2. Rust AST: declarations, the method enum and the extension trait
//! 3. Emission: AST to source text via the `Emit` trait
//!
//! ## Module Structure
//!
//! - `api`: API-level IR (MethodTable, MethodIR, ApiIR)
//! - `classify`: declaration strategy for a component schema
//! - `normalize`: OpenAPI spec -> API IR conversion
//! - `methods`: method extraction from the path table
//! - `types`: Rust AST (RsType, RsTypeDef, RsModule)
//! - `codegen`: API IR -> Rust AST, one module per output file
//! - `emit`: Rust AST -> code strings
//! - `utils`: identifier helpers shared across modules

mod api;
mod classify;
mod codegen;
mod emit;
mod methods;
mod normalize;
mod types;
pub mod utils;

pub use api::ApiIR;
pub use codegen::{codegen_client, codegen_methods, codegen_types};
pub use emit::Emit;
pub use normalize::normalize_spec;
pub use types::{RsTypeDef, TypeDefKind};
