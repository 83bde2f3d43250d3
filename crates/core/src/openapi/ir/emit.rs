//! Rust code emission via the Emit trait.
//!
//! Each AST type implements `Emit`; emission is plain string building with
//! no decisions left to make.

use super::types::{
    RsExtensionTrait, RsField, RsItem, RsMethodEnum, RsModule, RsPathTable, RsPrimitive, RsType,
    RsTypeDef, RsVariant, RsVariantKind, RsWrapperFn, TypeDefKind,
};
use super::utils::{escape_rust_string, unraw};

/// Trait for emitting Rust code from AST nodes.
pub trait Emit {
    /// Convert the AST node to its Rust source representation.
    fn emit(&self) -> String;
}

const DERIVES: [&str; 6] = ["Debug", "Clone", "PartialEq", "Eq", "Serialize", "Deserialize"];

/// `///` lines for a description, blank lines kept.
fn emit_doc(doc: Option<&str>, indent: &str) -> String {
    let Some(doc) = doc else {
        return String::new();
    };
    doc.lines()
        .map(|line| {
            let line = line.trim_end();
            if line.is_empty() {
                format!("{indent}///\n")
            } else {
                format!("{indent}/// {line}\n")
            }
        })
        .collect()
}

fn emit_derive(with_default: bool) -> String {
    let mut derives: Vec<&str> = DERIVES.to_vec();
    if with_default {
        derives.insert(2, "Default");
    }
    format!("#[derive({})]\n", derives.join(", "))
}

// =============================================================================
// Types
// =============================================================================

impl Emit for RsPrimitive {
    fn emit(&self) -> String {
        match self {
            Self::U64 => "u64",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::String => "String",
            Self::Bool => "bool",
        }
        .to_string()
    }
}

impl Emit for RsType {
    fn emit(&self) -> String {
        match self {
            Self::Primitive(p) => p.emit(),
            Self::Vec(inner) => format!("Vec<{}>", inner.emit()),
            Self::Boxed(inner) => format!("Box<{}>", inner.emit()),
            Self::Ref(name) => name.clone(),
        }
    }
}

impl RsField {
    /// Field type as written in the declaration.
    fn declared_type(&self) -> String {
        if self.optional {
            format!("Option<{}>", self.ty.emit())
        } else {
            self.ty.emit()
        }
    }

    /// Type accepted by `new` and `with_*`: the field type without `Option`
    /// or `Box`.
    fn value_type(&self) -> String {
        match &self.ty {
            RsType::Boxed(inner) => inner.emit(),
            other => other.emit(),
        }
    }

    /// Expression wrapping `value` into the field's storage type.
    fn store(&self, value: &str) -> String {
        match (&self.ty, self.optional) {
            (RsType::Boxed(_), true) => format!("Some(Box::new({value}))"),
            (RsType::Boxed(_), false) => format!("Box::new({value})"),
            (_, true) => format!("Some({value})"),
            (_, false) => value.to_string(),
        }
    }

    fn serde_attr(&self) -> Option<String> {
        let mut args = Vec::new();
        if self.needs_rename() {
            args.push(format!("rename = \"{}\"", escape_rust_string(&self.wire_name)));
        }
        if self.optional {
            args.push("default".to_string());
            args.push("skip_serializing_if = \"Option::is_none\"".to_string());
        }
        (!args.is_empty()).then(|| format!("#[serde({})]", args.join(", ")))
    }

    fn emit_declaration(&self, indent: &str, visibility: &str) -> String {
        let mut output = emit_doc(self.doc.as_deref(), indent);
        if let Some(attr) = self.serde_attr() {
            output.push_str(&format!("{indent}{attr}\n"));
        }
        output.push_str(&format!(
            "{indent}{visibility}{}: {},\n",
            self.name,
            self.declared_type()
        ));
        output
    }
}

// =============================================================================
// Type Definitions
// =============================================================================

impl Emit for RsTypeDef {
    fn emit(&self) -> String {
        let mut output = emit_doc(self.doc.as_deref(), "");
        match &self.kind {
            TypeDefKind::Alias { ty } => {
                output.push_str(&format!("pub type {} = {};\n", self.name, ty.emit()));
            }
            TypeDefKind::Record { fields } => {
                output.push_str(&emit_derive(self.derives_default()));
                output.push_str(&format!("pub struct {} {{\n", self.name));
                for field in fields {
                    output.push_str(&field.emit_declaration("    ", "pub "));
                }
                output.push_str("}\n\n");
                output.push_str(&emit_record_impl(&self.name, fields));
            }
            TypeDefKind::Union { variants } => {
                output.push_str(&emit_derive(false));
                let all_untagged = variants.iter().all(|v| !v.is_literal());
                if all_untagged {
                    output.push_str("#[serde(untagged)]\n");
                }
                output.push_str(&format!("pub enum {} {{\n", self.name));
                // serde wants untagged variants after the tagged ones
                let (literals, others): (Vec<&RsVariant>, Vec<&RsVariant>) =
                    variants.iter().partition(|v| v.is_literal());
                for variant in literals {
                    output.push_str(&emit_variant(variant, false));
                }
                for variant in others {
                    output.push_str(&emit_variant(variant, !all_untagged));
                }
                output.push_str("}\n");
            }
            TypeDefKind::EmptyMarker => {
                output.push_str(&emit_derive(true));
                output.push_str(&format!("pub struct {} {{}}\n\n", self.name));
                output.push_str(&format!("impl {} {{\n", self.name));
                output.push_str(&format!("    /// Creates an empty `{}`.\n", self.name));
                output.push_str("    pub fn new() -> Self {\n");
                output.push_str("        Self {}\n");
                output.push_str("    }\n");
                output.push_str("}\n");
            }
        }
        output
    }
}

/// `new` from the required fields, then one `with_*` setter per optional field.
fn emit_record_impl(name: &str, fields: &[RsField]) -> String {
    let params: Vec<String> = fields
        .iter()
        .filter(|f| !f.optional)
        .map(|f| format!("{}: {}", f.name, f.value_type()))
        .collect();

    let mut output = format!("impl {name} {{\n");
    output.push_str(&format!(
        "    /// Creates a new `{name}` from its required fields.\n"
    ));
    if fields.iter().any(|f| f.optional) {
        output.push_str("    ///\n");
        output.push_str("    /// Optional fields start as `None`; set them with the `with_*` methods.\n");
    }
    output.push_str(&format!(
        "    pub fn new({}) -> Self {{\n",
        params.join(", ")
    ));
    output.push_str("        Self {\n");
    for field in fields {
        let init = if field.optional {
            format!("{}: None", field.name)
        } else if matches!(field.ty, RsType::Boxed(_)) {
            format!("{}: {}", field.name, field.store(&field.name))
        } else {
            field.name.clone()
        };
        output.push_str(&format!("            {init},\n"));
    }
    output.push_str("        }\n");
    output.push_str("    }\n");

    for field in fields.iter().filter(|f| f.optional) {
        output.push('\n');
        output.push_str(&format!("    /// Sets `{}`.\n", field.wire_name));
        output.push_str(&format!(
            "    pub fn with_{}(mut self, value: {}) -> Self {{\n",
            unraw(&field.name),
            field.value_type()
        ));
        output.push_str(&format!(
            "        self.{} = {};\n",
            field.name,
            field.store("value")
        ));
        output.push_str("        self\n");
        output.push_str("    }\n");
    }

    output.push_str("}\n");
    output
}

fn emit_variant(variant: &RsVariant, untagged: bool) -> String {
    let mut output = emit_doc(variant.doc.as_deref(), "    ");
    match &variant.kind {
        RsVariantKind::Unit { literal } => {
            output.push_str(&format!(
                "    #[serde(rename = \"{}\")]\n",
                escape_rust_string(literal)
            ));
            output.push_str(&format!("    {},\n", variant.name));
        }
        RsVariantKind::Struct { fields } => {
            if untagged {
                output.push_str("    #[serde(untagged)]\n");
            }
            output.push_str(&format!("    {} {{\n", variant.name));
            for field in fields {
                output.push_str(&field.emit_declaration("        ", ""));
            }
            output.push_str("    },\n");
        }
        RsVariantKind::Tuple { ty } => {
            if untagged {
                output.push_str("    #[serde(untagged)]\n");
            }
            output.push_str(&format!("    {}({}),\n", variant.name, ty.emit()));
        }
    }
    output
}

// =============================================================================
// Methods
// =============================================================================

impl Emit for RsMethodEnum {
    fn emit(&self) -> String {
        let name = &self.name;
        let mut output = String::from("/// JSON-RPC methods exposed by the node.\n");
        output.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\n");
        output.push_str(&format!("pub enum {name} {{\n"));
        for v in &self.variants {
            output.push_str(&format!("    /// `{}`\n", v.wire_name));
            output.push_str(&format!("    {},\n", v.variant));
        }
        output.push_str("}\n\n");

        output.push_str(&format!("impl {name} {{\n"));

        output.push_str("    /// Every method, sorted by wire name.\n");
        output.push_str(&format!("    pub const ALL: &'static [{name}] = &[\n"));
        for v in &self.variants {
            output.push_str(&format!("        {name}::{},\n", v.variant));
        }
        output.push_str("    ];\n\n");

        output.push_str("    /// Wire name sent as the JSON-RPC `method`.\n");
        output.push_str("    pub const fn as_str(self) -> &'static str {\n");
        output.push_str("        match self {\n");
        for v in &self.variants {
            output.push_str(&format!(
                "            {name}::{} => \"{}\",\n",
                v.variant,
                escape_rust_string(&v.wire_name)
            ));
        }
        output.push_str("        }\n");
        output.push_str("    }\n\n");

        output.push_str("    /// OpenAPI path the method is documented under.\n");
        output.push_str("    pub const fn path(self) -> &'static str {\n");
        output.push_str("        match self {\n");
        for v in &self.variants {
            output.push_str(&format!(
                "            {name}::{} => \"{}\",\n",
                v.variant,
                escape_rust_string(&v.path)
            ));
        }
        output.push_str("        }\n");
        output.push_str("    }\n\n");

        output.push_str(&format!(
            "    /// Wire names of every method, in [`{name}::ALL`] order.\n"
        ));
        output.push_str("    pub fn all_names() -> impl Iterator<Item = &'static str> {\n");
        output.push_str("        Self::ALL.iter().map(|m| m.as_str())\n");
        output.push_str("    }\n\n");

        output.push_str("    /// Method documented under `path`.\n");
        output.push_str("    pub fn from_path(path: &str) -> Option<Self> {\n");
        output.push_str(&format!("        {}\n", self.table_name));
        output.push_str("            .iter()\n");
        output.push_str("            .find(|(p, _)| *p == path)\n");
        output.push_str("            .map(|(_, m)| *m)\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl fmt::Display for {name} {{\n"));
        output.push_str("    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {\n");
        output.push_str("        f.write_str(self.as_str())\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("impl FromStr for {name} {{\n"));
        output.push_str("    type Err = String;\n\n");
        output.push_str("    fn from_str(s: &str) -> Result<Self, Self::Err> {\n");
        output.push_str("        Self::ALL\n");
        output.push_str("            .iter()\n");
        output.push_str("            .copied()\n");
        output.push_str("            .find(|m| m.as_str() == s)\n");
        output.push_str("            .ok_or_else(|| format!(\"unknown RPC method '{s}'\"))\n");
        output.push_str("    }\n");
        output.push_str("}\n");
        output
    }
}

impl Emit for RsPathTable {
    fn emit(&self) -> String {
        let mut output = String::from("/// Path to method lookup, sorted by path.\n");
        output.push_str(&format!(
            "pub const {}: &[(&str, {})] = &[\n",
            self.name, self.enum_name
        ));
        for (path, variant) in &self.entries {
            output.push_str(&format!(
                "    (\"{}\", {}::{variant}),\n",
                escape_rust_string(path),
                self.enum_name
            ));
        }
        output.push_str("];\n");
        output
    }
}

// =============================================================================
// Client
// =============================================================================

impl RsWrapperFn {
    fn emit_in(&self, enum_name: &str) -> String {
        let mut output = String::new();
        for line in &self.doc {
            if line.is_empty() {
                output.push_str("    ///\n");
            } else {
                output.push_str(&format!("    /// {line}\n"));
            }
        }
        let (params, arg) = if self.takes_params {
            (", params: RpcValue", "Some(params)")
        } else {
            ("", "None")
        };
        output.push_str(&format!(
            "    fn {}(&self{params}) -> impl Future<Output = Result<RpcValue, TransportError>> + Send {{\n",
            self.name
        ));
        output.push_str(&format!(
            "        self.invoke({enum_name}::{}.as_str(), {arg})\n",
            self.variant
        ));
        output.push_str("    }\n");
        output
    }
}

impl Emit for RsExtensionTrait {
    fn emit(&self) -> String {
        let mut output = format!("/// {}\n", self.doc);
        output.push_str(&format!("pub trait {}: {} {{\n", self.name, self.supertrait));
        let functions: Vec<String> = self
            .functions
            .iter()
            .map(|f| f.emit_in(&self.enum_name))
            .collect();
        output.push_str(&functions.join("\n"));
        output.push_str("}\n\n");
        output.push_str(&format!(
            "impl<T: {}> {} for T {{}}\n",
            self.supertrait, self.name
        ));
        output
    }
}

// =============================================================================
// Module
// =============================================================================

impl Emit for RsItem {
    fn emit(&self) -> String {
        match self {
            Self::TypeDef(def) => def.emit(),
            Self::MethodEnum(e) => e.emit(),
            Self::PathTable(t) => t.emit(),
            Self::ExtensionTrait(t) => t.emit(),
        }
    }
}

impl Emit for RsModule {
    fn emit(&self) -> String {
        let mut output = String::new();

        for line in &self.header {
            output.push_str(line);
            output.push('\n');
        }
        if !self.header.is_empty() {
            output.push('\n');
        }

        for group in &self.use_groups {
            for path in group {
                output.push_str(&format!("use {path};\n"));
            }
            output.push('\n');
        }

        let items: Vec<String> = self.items.iter().map(Emit::emit).collect();
        output.push_str(&items.join("\n"));
        output
    }
}

// =============================================================================
// Tests
// =============================================================================
