//! Normalization from OpenAPI spec to API IR.
//!
//! This module handles all the schema-specific logic:
//! - Schema to Rust type conversion
//! - Declaration strategy per component schema
//! - Identifier sanitization and de-duplication
//! - Reference validation

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{GenerateError, Result};
use crate::openapi::spec::{OpenApiSpec, Schema, ref_to_schema_name};

use super::api::ApiIR;
use super::classify::{Classification, classify};
use super::methods::{extract_methods, normalize_methods};
use super::types::{
    RsField, RsPrimitive, RsType, RsTypeDef, RsVariant, RsVariantKind, TypeDefKind,
};
use super::utils::{field_ident, type_ident, unique_names};

/// Rust identifiers for every component schema.
#[derive(Debug, Clone, Default)]
pub struct TypeNames {
    by_schema: BTreeMap<String, String>,
}

impl TypeNames {
    /// Assign identifiers in sorted schema-name order, suffixing collisions.
    pub fn new<'a, I>(schema_names: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut sorted: Vec<&String> = schema_names.into_iter().collect();
        sorted.sort();
        sorted.dedup();
        let idents = unique_names(sorted.iter().map(|name| type_ident(name)));
        Self {
            by_schema: sorted.into_iter().cloned().zip(idents).collect(),
        }
    }

    /// Identifier for a schema name.
    pub fn resolve(&self, schema_name: &str) -> String {
        self.by_schema
            .get(schema_name)
            .cloned()
            .unwrap_or_else(|| type_ident(schema_name))
    }
}

/// Normalize an OpenAPI spec into API IR
pub fn normalize_spec(spec: &OpenApiSpec) -> Result<ApiIR> {
    let schemas = spec.schemas();
    check_component_refs(schemas)?;

    let names = TypeNames::new(schemas.keys());
    let types: Vec<RsTypeDef> = schemas
        .iter()
        .map(|(name, schema)| normalize_schema_to_typedef(name, schema, &names))
        .collect();

    let table = extract_methods(&spec.paths)?;
    if table.is_empty() {
        warn!("OpenAPI spec defines no methods");
    }
    let methods = normalize_methods(&table, schemas)?;

    debug!(
        types = types.len(),
        methods = table.len(),
        skipped_paths = table.skipped.len(),
        "Normalized OpenAPI spec."
    );

    Ok(ApiIR {
        types,
        methods,
        skipped_paths: table.skipped,
    })
}

/// Map a schema fragment to a Rust type. Never fails.
pub fn map_type(schema: &Schema, names: &TypeNames) -> RsType {
    if let Some(name) = schema.ref_name() {
        return RsType::Ref(names.resolve(name));
    }
    match schema.primary_type() {
        Some("integer") => RsType::Primitive(match schema.format.as_deref() {
            Some("uint64") => RsPrimitive::U64,
            Some("int32") => RsPrimitive::I32,
            _ => RsPrimitive::I64,
        }),
        Some("boolean") => RsType::Primitive(RsPrimitive::Bool),
        Some("array") => {
            let item = schema
                .items
                .as_deref()
                .map_or_else(RsType::string, |items| map_type(items, names));
            RsType::Vec(Box::new(item))
        }
        // string, object, and anything unrecognized
        _ => RsType::string(),
    }
}

/// Fail on the first `$ref` inside a component that names no component.
fn check_component_refs(schemas: &BTreeMap<String, Schema>) -> Result<()> {
    for (name, schema) in schemas {
        check_refs(&format!("components.schemas.{name}"), schema, schemas)?;
    }
    Ok(())
}

/// Fail if `schema` or anything nested in it has a dangling `$ref`.
pub fn check_refs(from: &str, schema: &Schema, schemas: &BTreeMap<String, Schema>) -> Result<()> {
    if let Some(reference) = &schema.ref_path
        && !schemas.contains_key(ref_to_schema_name(reference))
    {
        return Err(GenerateError::DanglingReference {
            from: from.to_string(),
            reference: reference.clone(),
        });
    }

    let properties = schema.properties.iter().flat_map(|p| p.values());
    let items = schema.items.as_deref().into_iter();
    let branches = schema.one_of.iter().chain(&schema.any_of).flatten();
    for child in properties.chain(items).chain(branches) {
        check_refs(from, child, schemas)?;
    }
    Ok(())
}

/// Convert a component schema to a type definition
fn normalize_schema_to_typedef(schema_name: &str, schema: &Schema, names: &TypeNames) -> RsTypeDef {
    let name = names.resolve(schema_name);
    let kind = match classify(schema) {
        Classification::Alias => TypeDefKind::Alias {
            ty: map_type(schema, names),
        },
        Classification::Union(branches) => TypeDefKind::Union {
            variants: normalize_union(&name, branches, names),
        },
        Classification::EmptyMarker => TypeDefKind::EmptyMarker,
        Classification::Record {
            properties,
            required,
        } => TypeDefKind::Record {
            fields: normalize_fields(&name, properties, required, names),
        },
    };

    RsTypeDef {
        name,
        schema_name: schema_name.to_string(),
        doc: clean_doc(schema.description.as_deref()),
        kind,
    }
}

/// Fields in property-name order. Nullable properties are optional even when
/// listed as required.
fn normalize_fields(
    enclosing: &str,
    properties: &BTreeMap<String, Schema>,
    required: &[String],
    names: &TypeNames,
) -> Vec<RsField> {
    let idents = unique_names(properties.keys().map(|wire| field_ident(wire)));
    properties
        .iter()
        .zip(idents)
        .map(|((wire_name, prop), name)| RsField {
            name,
            wire_name: wire_name.clone(),
            ty: map_type(prop, names).boxed_if_recursive(enclosing),
            optional: !required.contains(wire_name) || prop.nullable == Some(true),
            doc: clean_doc(prop.description.as_deref()),
        })
        .collect()
}

/// One variant per object branch, per string literal, or per other branch,
/// named in branch order and de-duplicated after PascalCase conversion.
fn normalize_union(enclosing: &str, branches: &[Schema], names: &TypeNames) -> Vec<RsVariant> {
    let mut drafts: Vec<(String, RsVariantKind, Option<String>)> = Vec::new();

    for (index, branch) in branches.iter().enumerate() {
        let doc = clean_doc(branch.description.as_deref());
        if let Some(properties) = branch.properties.as_ref().filter(|p| !p.is_empty()) {
            let required = branch.required.as_deref().unwrap_or_default();
            let fields = normalize_fields(enclosing, properties, required, names);
            drafts.push((branch_name(branch, index), RsVariantKind::Struct { fields }, doc));
        } else if let Some(literals) = branch.string_literals() {
            for literal in literals {
                let kind = RsVariantKind::Unit {
                    literal: literal.to_string(),
                };
                drafts.push((literal.to_string(), kind, doc.clone()));
            }
        } else {
            let ty = map_type(branch, names).boxed_if_recursive(enclosing);
            drafts.push((branch_name(branch, index), RsVariantKind::Tuple { ty }, doc));
        }
    }

    let variant_names = unique_names(drafts.iter().map(|(base, _, _)| type_ident(base)));
    drafts
        .into_iter()
        .zip(variant_names)
        .map(|((_, kind, doc), name)| RsVariant { name, kind, doc })
        .collect()
}

/// Branch `title`, or `case<N>` by position.
fn branch_name(branch: &Schema, index: usize) -> String {
    branch
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map_or_else(|| format!("case{index}"), str::to_string)
}

/// Trimmed description, `None` when blank.
fn clean_doc(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
