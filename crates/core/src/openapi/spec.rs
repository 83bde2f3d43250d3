//! OpenAPI document structs for serde deserialization.
//!
//! Only the subset of OpenAPI 3.0 that nearcore's JSON-RPC document uses is
//! modeled: component schemas and `post` operations with JSON bodies.
//! Maps are `BTreeMap` so every walk over them is already sorted.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Root OpenAPI document.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenApiSpec {
    pub openapi: String,
    #[serde(default)]
    pub info: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub paths: BTreeMap<String, PathItem>,
    pub components: Option<Components>,
}

/// Components section containing reusable schemas.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: BTreeMap<String, Schema>,
}

/// A path item. JSON-RPC methods are always exposed as `post`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    pub post: Option<Operation>,
}

/// An API operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub request_body: Option<RequestBody>,
    #[serde(default)]
    pub responses: BTreeMap<String, Response>,
}

/// A request body definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub content: BTreeMap<String, MediaType>,
}

/// A response definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    pub description: Option<String>,
    #[serde(default)]
    pub content: BTreeMap<String, MediaType>,
}

/// Media type content (e.g., application/json).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    pub schema: Option<Schema>,
}

/// JSON Schema fragment as used in OpenAPI 3.0.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// The type of the schema (string, integer, boolean, array, object).
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,

    /// Reference to another schema.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// Format hint (e.g., uint64, int32).
    pub format: Option<String>,

    pub description: Option<String>,

    /// Branch name inside a union.
    pub title: Option<String>,

    /// Properties for object types.
    pub properties: Option<BTreeMap<String, Schema>>,

    /// Required property names for object types.
    pub required: Option<Vec<String>>,

    /// Item schema for array types.
    pub items: Option<Box<Schema>>,

    /// Enum values (can be strings, integers, floats, booleans, or null).
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<EnumValue>>,

    /// Union type (exactly one of these schemas).
    pub one_of: Option<Vec<Schema>>,

    /// Union type (any of these schemas). Treated the same as `oneOf`.
    pub any_of: Option<Vec<Schema>>,

    /// OpenAPI 3.0 nullable flag.
    pub nullable: Option<bool>,
}

/// Enum value can be string, integer, float, boolean, or null.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

/// Schema type can be a single type or an array of types.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Multiple(Vec<String>),
}

static NO_SCHEMAS: BTreeMap<String, Schema> = BTreeMap::new();

impl OpenApiSpec {
    /// Parse a document from a JSON string, without version checks.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse OpenAPI spec: {e}"))
    }

    /// Component schemas, empty when the document has no `components`.
    pub fn schemas(&self) -> &BTreeMap<String, Schema> {
        self.components.as_ref().map_or(&NO_SCHEMAS, |c| &c.schemas)
    }
}

impl Operation {
    /// Schema of the `application/json` request body.
    pub fn request_schema(&self) -> Option<&Schema> {
        self.request_body
            .as_ref()
            .and_then(|body| body.content.get("application/json"))
            .and_then(|media| media.schema.as_ref())
    }

    /// Schema of the `application/json` body of the 200 response.
    pub fn response_schema(&self) -> Option<&Schema> {
        self.responses
            .get("200")
            .and_then(|response| response.content.get("application/json"))
            .and_then(|media| media.schema.as_ref())
    }
}

impl Schema {
    /// Union branches: the first non-empty of `oneOf` then `anyOf`.
    pub fn union_branches(&self) -> Option<&[Schema]> {
        [self.one_of.as_deref(), self.any_of.as_deref()]
            .into_iter()
            .flatten()
            .find(|branches| !branches.is_empty())
    }

    pub fn has_properties(&self) -> bool {
        self.properties.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// The first non-`null` entry of `type`.
    pub fn primary_type(&self) -> Option<&str> {
        match self.schema_type.as_ref()? {
            SchemaType::Single(t) => Some(t.as_str()),
            SchemaType::Multiple(types) => types.iter().map(String::as_str).find(|t| *t != "null"),
        }
    }

    /// String members of a non-empty `enum` made only of strings.
    pub fn string_literals(&self) -> Option<Vec<&str>> {
        let values = self.enum_values.as_ref().filter(|v| !v.is_empty())?;
        values
            .iter()
            .map(|v| match v {
                EnumValue::String(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Component name a `#/components/schemas/<Name>` reference points at.
    pub fn ref_name(&self) -> Option<&str> {
        self.ref_path.as_deref().map(ref_to_schema_name)
    }
}

/// Final path segment of a `$ref`.
pub fn ref_to_schema_name(ref_path: &str) -> &str {
    ref_path.rsplit('/').next().unwrap_or(ref_path)
}
