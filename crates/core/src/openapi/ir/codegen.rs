//! Code generation from API IR to Rust AST.
//!
//! Each generated file is built as an `RsModule`; turning it into text is the
//! emit step's job.

use super::api::{ApiIR, MethodIR};
use super::types::{
    RsExtensionTrait, RsItem, RsMethodEnum, RsMethodVariant, RsModule, RsPathTable, RsWrapperFn,
    TypeDefKind,
};

/// First line of every generated file.
pub const GENERATED_HEADER: &str =
    "//! Generated by rpcgen from the OpenAPI document. Do not edit.";

pub const METHOD_ENUM: &str = "RpcMethod";
pub const PATH_TABLE: &str = "PATH_TO_METHOD";
pub const EXTENSION_TRAIT: &str = "RpcMethods";
pub const TRANSPORT_TRAIT: &str = "Invoke";
pub const TRANSPORT_CRATE: &str = "rpcgen_transport";

/// Types file: one declaration per component schema.
pub fn codegen_types(api: &ApiIR) -> RsModule {
    let needs_serde = api
        .types
        .iter()
        .any(|t| !matches!(t.kind, TypeDefKind::Alias { .. }));
    let use_groups = if needs_serde {
        vec![vec!["serde::{Deserialize, Serialize}".to_string()]]
    } else {
        Vec::new()
    };

    RsModule {
        header: vec![GENERATED_HEADER.to_string()],
        use_groups,
        items: api.types.iter().cloned().map(RsItem::TypeDef).collect(),
    }
}

/// Methods file: the method enum and the path lookup table.
pub fn codegen_methods(api: &ApiIR) -> RsModule {
    let variants: Vec<RsMethodVariant> = api
        .methods
        .iter()
        .map(|m| RsMethodVariant {
            variant: m.variant.clone(),
            wire_name: m.operation_id.clone(),
            path: m.path.clone(),
        })
        .collect();

    let mut entries: Vec<(String, String)> = api
        .methods
        .iter()
        .map(|m| (m.path.clone(), m.variant.clone()))
        .collect();
    entries.sort();

    RsModule {
        header: vec![GENERATED_HEADER.to_string()],
        use_groups: vec![vec!["std::fmt".to_string(), "std::str::FromStr".to_string()]],
        items: vec![
            RsItem::MethodEnum(RsMethodEnum {
                name: METHOD_ENUM.to_string(),
                table_name: PATH_TABLE.to_string(),
                variants,
            }),
            RsItem::PathTable(RsPathTable {
                name: PATH_TABLE.to_string(),
                enum_name: METHOD_ENUM.to_string(),
                entries,
            }),
        ],
    }
}

/// Client file: the extension trait with one wrapper per method.
pub fn codegen_client(api: &ApiIR) -> RsModule {
    let use_groups = vec![
        vec!["std::future::Future".to_string()],
        vec![format!(
            "{TRANSPORT_CRATE}::{{{TRANSPORT_TRAIT}, RpcValue, TransportError}}"
        )],
        vec![format!("super::methods::{METHOD_ENUM}")],
    ];

    RsModule {
        header: vec![
            GENERATED_HEADER.to_string(),
            "#![allow(non_snake_case)]".to_string(),
        ],
        use_groups,
        items: vec![RsItem::ExtensionTrait(RsExtensionTrait {
            name: EXTENSION_TRAIT.to_string(),
            supertrait: TRANSPORT_TRAIT.to_string(),
            enum_name: METHOD_ENUM.to_string(),
            doc: format!(
                "Typed wrappers for every JSON-RPC method, available on any [`{TRANSPORT_TRAIT}`] implementor."
            ),
            functions: api.methods.iter().map(codegen_wrapper).collect(),
        })],
    }
}

fn codegen_wrapper(method: &MethodIR) -> RsWrapperFn {
    let mut doc = vec![format!(
        "Calls `{}` (`POST {}`).",
        method.operation_id, method.path
    )];

    if let Some(summary) = method.summary.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        doc.push(String::new());
        doc.extend(summary.lines().map(|l| l.trim_end().to_string()));
    }

    let schemas: Vec<String> = [
        ("Request", &method.request_schema),
        ("Response", &method.response_schema),
    ]
    .into_iter()
    .filter_map(|(label, name)| name.as_ref().map(|n| format!("{label}: `{n}`.")))
    .collect();
    if !schemas.is_empty() {
        doc.push(String::new());
        doc.extend(schemas);
    }

    RsWrapperFn {
        name: method.fn_name.clone(),
        variant: method.variant.clone(),
        takes_params: method.takes_params,
        doc,
    }
}
