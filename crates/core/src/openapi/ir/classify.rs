//! Choosing a declaration strategy for a named schema.

use std::collections::BTreeMap;

use crate::openapi::spec::Schema;

/// How a component schema is declared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification<'a> {
    /// `$ref`, or a primitive type with no structure
    Alias,
    /// Non-empty `oneOf`/`anyOf`
    Union(&'a [Schema]),
    /// No properties and no branches
    EmptyMarker,
    Record {
        properties: &'a BTreeMap<String, Schema>,
        required: &'a [String],
    },
}

/// Classify a schema. Total and deterministic.
///
/// Precedence: `$ref`, then union branches, then a non-object `type` without
/// properties, then an empty schema, then a record.
pub fn classify(schema: &Schema) -> Classification<'_> {
    if schema.ref_path.is_some() {
        return Classification::Alias;
    }
    if let Some(branches) = schema.union_branches() {
        return Classification::Union(branches);
    }
    let is_primitive = schema.primary_type().is_some_and(|t| t != "object");
    if is_primitive && !schema.has_properties() {
        return Classification::Alias;
    }
    match &schema.properties {
        Some(properties) if !properties.is_empty() => Classification::Record {
            properties,
            required: schema.required.as_deref().unwrap_or_default(),
        },
        _ => Classification::EmptyMarker,
    }
}
