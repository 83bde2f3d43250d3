//! NEAR JSON-RPC client generator.
//!
//! Reads nearcore's OpenAPI document and writes three Rust sources: the
//! component types, the method enum with its path table, and the typed
//! wrappers over [`rpcgen_transport`](https://docs.rs/rpcgen-transport)'s
//! `Invoke` trait.
//!
//! ```no_run
//! # async fn example() -> Result<(), rpcgen_core::GenerateError> {
//! let config = rpcgen_core::GeneratorConfig::from_env();
//! let report = rpcgen_core::run(&config).await?;
//! println!("{} methods", report.methods);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod generator;
mod loader;
mod openapi;
mod output;

pub use config::{
    CACHE_FILE_NAME, DEFAULT_OUTPUT_DIR, DEFAULT_SPEC_URL, GeneratorConfig, OutputFiles,
    SpecSource,
};
pub use error::{GenerateError, Result};
pub use generator::run;
pub use loader::{SUPPORTED_VERSION, load_spec, parse_spec};
pub use openapi::{
    DeclarationKind, GeneratedArtifacts, GeneratedDeclaration, GenerationReport, OpenApiSpec,
    generate,
};
pub use output::{replace_file, write_artifacts};
