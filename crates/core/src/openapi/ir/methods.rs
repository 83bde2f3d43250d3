//! Method extraction from the path table.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{GenerateError, Result};
use crate::openapi::spec::{PathItem, Schema, ref_to_schema_name};

use super::api::{MethodEntry, MethodIR, MethodTable};
use super::normalize::check_refs;
use super::utils::{capitalize_first, escape_keyword, method_function_name, unique_names, unique_names_avoiding};

/// Methods whose wrappers take no parameters.
pub const PARAMETERLESS_METHODS: [&str; 5] = [
    "EXPERIMENTAL_genesis_config",
    "client_config",
    "health",
    "network_info",
    "status",
];

/// Names a wrapper cannot take because the `Invoke` supertrait already has them.
const RESERVED_WRAPPER_NAMES: [&str; 1] = ["invoke"];

/// Collect `post.operationId` for every path.
///
/// Paths without one are skipped and logged. A repeated operationId is fatal.
pub fn extract_methods(paths: &BTreeMap<String, PathItem>) -> Result<MethodTable> {
    let mut table = MethodTable::default();
    let mut seen: BTreeMap<&str, &str> = BTreeMap::new();

    for (path, item) in paths {
        let operation = item.post.as_ref();
        let Some(operation_id) = operation
            .and_then(|op| op.operation_id.as_deref())
            .filter(|id| !id.is_empty())
        else {
            warn!(path = %path, "Skipping path without post.operationId");
            table.skipped.push(path.clone());
            continue;
        };

        if let Some(first) = seen.insert(operation_id, path) {
            return Err(GenerateError::DuplicateOperationId {
                operation_id: operation_id.to_string(),
                first: first.to_string(),
                second: path.clone(),
            });
        }

        table.entries.push(MethodEntry {
            path: path.clone(),
            operation_id: operation_id.to_string(),
            request_ref: operation
                .and_then(|op| op.request_schema())
                .and_then(|s| s.ref_path.clone()),
            response_ref: operation
                .and_then(|op| op.response_schema())
                .and_then(|s| s.ref_path.clone()),
            summary: operation.and_then(|op| op.summary.clone()),
        });
    }

    Ok(table)
}

/// Validate method references and assign wrapper and variant names.
///
/// The result is sorted by operationId.
pub fn normalize_methods(
    table: &MethodTable,
    schemas: &BTreeMap<String, Schema>,
) -> Result<Vec<MethodIR>> {
    for entry in &table.entries {
        let refs = [
            ("requestBody", &entry.request_ref),
            ("responses.200", &entry.response_ref),
        ];
        for (location, reference) in refs {
            let Some(reference) = reference else {
                continue;
            };
            let probe = Schema {
                ref_path: Some(reference.clone()),
                ..Schema::default()
            };
            check_refs(&format!("paths.{}.post.{location}", entry.path), &probe, schemas)?;
        }
    }

    let mut sorted: Vec<&MethodEntry> = table.entries.iter().collect();
    sorted.sort_by(|a, b| a.operation_id.cmp(&b.operation_id));

    let bases: Vec<String> = sorted
        .iter()
        .map(|entry| method_function_name(&entry.operation_id))
        .collect();
    let fn_names = unique_names_avoiding(
        bases.iter().map(|base| escape_keyword(base)),
        &RESERVED_WRAPPER_NAMES,
    );
    let variants = unique_names(bases.iter().map(|base| escape_keyword(&capitalize_first(base))));

    Ok(sorted
        .into_iter()
        .zip(fn_names)
        .zip(variants)
        .map(|((entry, fn_name), variant)| MethodIR {
            operation_id: entry.operation_id.clone(),
            path: entry.path.clone(),
            fn_name,
            variant,
            takes_params: !PARAMETERLESS_METHODS.contains(&entry.operation_id.as_str()),
            request_schema: entry
                .request_ref
                .as_deref()
                .map(|r| ref_to_schema_name(r).to_string()),
            response_schema: entry
                .response_ref
                .as_deref()
                .map(|r| ref_to_schema_name(r).to_string()),
            summary: entry.summary.clone(),
        })
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn paths(json: &str) -> BTreeMap<String, PathItem> {
        serde_json::from_str(json).unwrap()
    }

    const NEAR_PATHS: &str = r##"{
      "/status": {"post": {"operationId": "status"}},
      "/block": {"post": {
        "operationId": "block",
        "summary": "Returns block details.",
        "requestBody": {"content": {"application/json": {"schema": {"$ref": "#/components/schemas/RpcBlockRequest"}}}},
        "responses": {"200": {"description": "ok", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/RpcBlockResponse"}}}}}
      }},
      "/EXPERIMENTAL_changes": {"post": {"operationId": "EXPERIMENTAL_changes"}},
      "/network_info": {"post": {"operationId": "network_info"}},
      "/legacy": {"get": {"operationId": "legacy"}},
      "/broken": {"post": {"summary": "no id"}}
    }"##;

    fn near_schemas() -> BTreeMap<String, Schema> {
        ["RpcBlockRequest", "RpcBlockResponse"]
            .into_iter()
            .map(|name| (name.to_string(), Schema::default()))
            .collect()
    }

    #[test]
    fn test_extract_skips_paths_without_operation_id() {
        let table = extract_methods(&paths(NEAR_PATHS)).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.skipped, vec!["/broken".to_string(), "/legacy".to_string()]);
        let paths: Vec<&str> = table.entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/EXPERIMENTAL_changes", "/block", "/network_info", "/status"]
        );
    }

    #[test]
    fn test_extract_captures_refs() {
        let table = extract_methods(&paths(NEAR_PATHS)).unwrap();
        let block = table.entries.iter().find(|e| e.operation_id == "block").unwrap();
        assert_eq!(
            block.request_ref.as_deref(),
            Some("#/components/schemas/RpcBlockRequest")
        );
        assert_eq!(
            block.response_ref.as_deref(),
            Some("#/components/schemas/RpcBlockResponse")
        );
        assert_eq!(block.summary.as_deref(), Some("Returns block details."));
    }

    #[test]
    fn test_duplicate_operation_id_is_fatal() {
        let err = extract_methods(&paths(
            r#"{
              "/a": {"post": {"operationId": "status"}},
              "/b": {"post": {"operationId": "status"}}
            }"#,
        ))
        .unwrap_err();
        match err {
            GenerateError::DuplicateOperationId {
                operation_id,
                first,
                second,
            } => {
                assert_eq!(operation_id, "status");
                assert_eq!(first, "/a");
                assert_eq!(second, "/b");
            }
            other => unreachable!("expected duplicate operationId, got {other:?}"),
        }
    }

    #[test]
    fn test_methods_sorted_and_named() {
        let table = extract_methods(&paths(NEAR_PATHS)).unwrap();
        let methods = normalize_methods(&table, &near_schemas()).unwrap();

        let summary: Vec<(&str, &str, &str, bool)> = methods
            .iter()
            .map(|m| {
                (
                    m.operation_id.as_str(),
                    m.fn_name.as_str(),
                    m.variant.as_str(),
                    m.takes_params,
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("EXPERIMENTAL_changes", "experimentalChanges", "ExperimentalChanges", true),
                ("block", "block", "Block", true),
                ("network_info", "networkInfo", "NetworkInfo", false),
                ("status", "status", "Status", false),
            ]
        );
        assert_eq!(methods[1].request_schema.as_deref(), Some("RpcBlockRequest"));
    }

    #[test]
    fn test_method_with_dangling_response_ref_is_fatal() {
        let table = extract_methods(&paths(NEAR_PATHS)).unwrap();
        let mut schemas = near_schemas();
        schemas.remove("RpcBlockResponse");

        let err = normalize_methods(&table, &schemas).unwrap_err();
        match err {
            GenerateError::DanglingReference { from, reference } => {
                assert_eq!(from, "paths./block.post.responses.200");
                assert_eq!(reference, "#/components/schemas/RpcBlockResponse");
            }
            other => unreachable!("expected dangling reference, got {other:?}"),
        }
    }

    #[test]
    fn test_keyword_method_names_are_escaped() {
        let table = extract_methods(&paths(r#"{"/match": {"post": {"operationId": "match"}}}"#))
            .unwrap();
        let methods = normalize_methods(&table, &BTreeMap::new()).unwrap();
        assert_eq!(methods[0].fn_name, "r#match");
        assert_eq!(methods[0].variant, "Match");
    }

    #[test]
    fn test_wrapper_never_shadows_invoke() {
        let table = extract_methods(&paths(
            r#"{"/invoke": {"post": {"operationId": "invoke"}}, "/status": {"post": {"operationId": "status"}}}"#,
        ))
        .unwrap();
        let methods = normalize_methods(&table, &BTreeMap::new()).unwrap();
        assert_eq!(methods[0].fn_name, "invoke1");
        assert_eq!(methods[0].variant, "Invoke");
        assert_eq!(methods[0].operation_id, "invoke");
        assert_eq!(methods[1].fn_name, "status");
    }
}
