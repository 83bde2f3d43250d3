//! Rust IR types for code generation.
//!
//! This module defines the Rust-side representation the codegen step builds
//! and the emit step prints:
//! - RsType: type expressions (primitives, `Vec`, `Box`, named references)
//! - RsTypeDef: one declaration per component schema
//! - RsModule: a whole generated file

/// Rust primitive types the type mapper can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsPrimitive {
    U64,
    I32,
    I64,
    String,
    Bool,
}

/// Rust type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsType {
    Primitive(RsPrimitive),
    /// `Vec<T>`
    Vec(Box<RsType>),
    /// `Box<T>`, used to break direct recursion
    Boxed(Box<RsType>),
    /// Named type from the same module
    Ref(String),
}

impl RsType {
    pub const fn string() -> Self {
        Self::Primitive(RsPrimitive::String)
    }

    /// Whether this type names `ident` directly (not through `Vec`).
    pub fn is_direct_ref_to(&self, ident: &str) -> bool {
        matches!(self, Self::Ref(name) if name == ident)
    }

    /// Box the type when it refers to the enclosing declaration.
    pub fn boxed_if_recursive(self, enclosing: &str) -> Self {
        if self.is_direct_ref_to(enclosing) {
            Self::Boxed(Box::new(self))
        } else {
            self
        }
    }
}

/// A struct field (also used for fields of struct-like enum variants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsField {
    /// Escaped Rust identifier
    pub name: String,
    /// Property name on the wire
    pub wire_name: String,
    pub ty: RsType,
    /// Emitted as `Option<ty>`
    pub optional: bool,
    pub doc: Option<String>,
}

impl RsField {
    /// Whether the wire name needs a `#[serde(rename)]`.
    pub fn needs_rename(&self) -> bool {
        super::utils::unraw(&self.name) != self.wire_name
    }
}

/// Payload shape of an enum variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsVariantKind {
    /// Unit variant encoded as a bare string literal
    Unit { literal: String },
    /// Struct-like variant built from an object branch
    Struct { fields: Vec<RsField> },
    /// Newtype variant carrying the branch's mapped type
    Tuple { ty: RsType },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsVariant {
    pub name: String,
    pub kind: RsVariantKind,
    pub doc: Option<String>,
}

impl RsVariant {
    pub fn is_literal(&self) -> bool {
        matches!(self.kind, RsVariantKind::Unit { .. })
    }
}

/// Type definition kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefKind {
    /// pub type Foo = ...;
    Alias { ty: RsType },
    /// pub struct Foo { ... }
    Record { fields: Vec<RsField> },
    /// pub enum Foo { ... }
    Union { variants: Vec<RsVariant> },
    /// pub struct Foo {}
    EmptyMarker,
}

/// Type definition for one component schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsTypeDef {
    /// Rust identifier
    pub name: String,
    /// Key in `components.schemas`
    pub schema_name: String,
    pub doc: Option<String>,
    pub kind: TypeDefKind,
}

impl RsTypeDef {
    /// Records whose fields are all optional can derive `Default`.
    pub fn derives_default(&self) -> bool {
        match &self.kind {
            TypeDefKind::Record { fields } => fields.iter().all(|f| f.optional),
            TypeDefKind::EmptyMarker => true,
            TypeDefKind::Alias { .. } | TypeDefKind::Union { .. } => false,
        }
    }
}

/// One variant of the generated method enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsMethodVariant {
    pub variant: String,
    /// operationId, sent as the JSON-RPC method name
    pub wire_name: String,
    pub path: String,
}

/// `pub enum RpcMethod` plus its inherent impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsMethodEnum {
    pub name: String,
    pub table_name: String,
    pub variants: Vec<RsMethodVariant>,
}

/// `pub const PATH_TO_METHOD: &[(&str, RpcMethod)]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsPathTable {
    pub name: String,
    pub enum_name: String,
    /// (path, variant), sorted by path
    pub entries: Vec<(String, String)>,
}

/// A provided method of the extension trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsWrapperFn {
    pub name: String,
    pub variant: String,
    pub takes_params: bool,
    pub doc: Vec<String>,
}

/// Extension trait with a blanket impl over the transport trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsExtensionTrait {
    pub name: String,
    pub supertrait: String,
    pub enum_name: String,
    pub doc: String,
    pub functions: Vec<RsWrapperFn>,
}

/// Top-level item of a generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsItem {
    TypeDef(RsTypeDef),
    MethodEnum(RsMethodEnum),
    PathTable(RsPathTable),
    ExtensionTrait(RsExtensionTrait),
}

/// Complete generated Rust file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsModule {
    /// Inner doc comments and inner attributes, emitted verbatim
    pub header: Vec<String>,
    /// `use` paths, one blank line between groups
    pub use_groups: Vec<Vec<String>>,
    pub items: Vec<RsItem>,
}
