//! Rust code emitter for OpenAPI specifications.
//!
//! This module is a thin wrapper around the IR-based code generation.
//! The pipeline is:
//! 1. Normalize: OpenApiSpec -> ApiIR (all OpenAPI logic resolved, refs checked)
//! 2. Codegen: ApiIR -> one RsModule per artifact
//! 3. Emit: RsModule -> String (via Emit trait)

use tracing::debug;

use crate::error::Result;
use crate::openapi::ir::{
    ApiIR, Emit, RsTypeDef, TypeDefKind, codegen_client, codegen_methods, codegen_types,
    normalize_spec,
};
use crate::openapi::spec::OpenApiSpec;

/// Declaration strategy a component schema was emitted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Alias,
    Record,
    Union,
    EmptyMarker,
}

impl DeclarationKind {
    fn of(def: &RsTypeDef) -> Self {
        match def.kind {
            TypeDefKind::Alias { .. } => Self::Alias,
            TypeDefKind::Record { .. } => Self::Record,
            TypeDefKind::Union { .. } => Self::Union,
            TypeDefKind::EmptyMarker => Self::EmptyMarker,
        }
    }
}

/// One emitted declaration of the types artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDeclaration {
    /// Key in `components.schemas`
    pub schema_name: String,
    /// Rust identifier
    pub name: String,
    pub kind: DeclarationKind,
    pub text: String,
}

/// Counts and non-fatal findings of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub aliases: usize,
    pub records: usize,
    pub unions: usize,
    pub empty_markers: usize,
    pub methods: usize,
    /// Paths without `post.operationId`, sorted
    pub skipped_paths: Vec<String>,
}

impl GenerationReport {
    fn from_ir(api: &ApiIR) -> Self {
        let mut report = Self {
            methods: api.methods.len(),
            skipped_paths: api.skipped_paths.clone(),
            ..Self::default()
        };
        for def in &api.types {
            match DeclarationKind::of(def) {
                DeclarationKind::Alias => report.aliases += 1,
                DeclarationKind::Record => report.records += 1,
                DeclarationKind::Union => report.unions += 1,
                DeclarationKind::EmptyMarker => report.empty_markers += 1,
            }
        }
        report
    }

    /// Number of component schemas declared.
    pub fn declarations(&self) -> usize {
        self.aliases + self.records + self.unions + self.empty_markers
    }
}

/// The three artifact texts of a run, all held in memory before any write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    pub types: String,
    pub methods: String,
    pub client: String,
    /// Declarations in types-file order
    pub declarations: Vec<GeneratedDeclaration>,
    pub report: GenerationReport,
}

/// Generate the types, methods and client sources from a parsed spec.
pub fn generate(spec: &OpenApiSpec) -> Result<GeneratedArtifacts> {
    let api_ir = normalize_spec(spec)?;

    let declarations: Vec<GeneratedDeclaration> = api_ir
        .types
        .iter()
        .map(|def| GeneratedDeclaration {
            schema_name: def.schema_name.clone(),
            name: def.name.clone(),
            kind: DeclarationKind::of(def),
            text: def.emit(),
        })
        .collect();

    let artifacts = GeneratedArtifacts {
        types: codegen_types(&api_ir).emit(),
        methods: codegen_methods(&api_ir).emit(),
        client: codegen_client(&api_ir).emit(),
        declarations,
        report: GenerationReport::from_ir(&api_ir),
    };

    debug!(
        types_bytes = artifacts.types.len(),
        methods_bytes = artifacts.methods.len(),
        client_bytes = artifacts.client.len(),
        "Emitted artifacts"
    );
    Ok(artifacts)
}
