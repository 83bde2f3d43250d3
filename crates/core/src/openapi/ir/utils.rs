//! Common utilities for Rust code generation.
//!
//! Identifier sanitization and casing helpers shared by normalization and
//! emission.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Rust keywords (strict and reserved) that cannot be used as bare identifiers.
pub static RUST_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ]
    .into_iter()
    .collect()
});

/// Keywords that are not allowed as raw identifiers.
const NON_RAW_KEYWORDS: [&str; 4] = ["crate", "self", "Self", "super"];

/// Make `ident` usable as a Rust identifier.
///
/// Keywords become raw identifiers (`r#type`), except the four that cannot be
/// raw, which get an underscore suffix (`self_`).
pub fn escape_keyword(ident: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&ident) {
        format!("{ident}_")
    } else if RUST_KEYWORDS.contains(ident) {
        format!("r#{ident}")
    } else {
        ident.to_string()
    }
}

/// Strip a leading `r#` from an escaped identifier.
pub fn unraw(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}

/// Split a name into words on separators and case boundaries.
///
/// `"latestBlockHeight"` -> `["latest", "Block", "Height"]`,
/// `"HTTPServer"` -> `["HTTP", "Server"]`, `"near-final"` -> `["near", "final"]`.
pub fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    for segment in name.split(|c: char| !c.is_ascii_alphanumeric()) {
        let chars: Vec<char> = segment.chars().collect();
        let mut current = String::new();
        for (i, &c) in chars.iter().enumerate() {
            if i > 0 && c.is_ascii_uppercase() {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
                let boundary = prev.is_ascii_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_ascii_uppercase() && next_is_lower);
                if boundary && !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            current.push(c);
        }
        if !current.is_empty() {
            words.push(current);
        }
    }
    words
}

/// Convert a wire name to a snake_case identifier (not keyword-escaped).
pub fn to_snake_case(name: &str) -> String {
    let snake = split_words(name)
        .iter()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_");
    if snake.is_empty() {
        return "field".to_string();
    }
    if snake.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{snake}");
    }
    snake
}

/// Convert a name to a PascalCase identifier (not keyword-escaped).
pub fn to_pascal_case(name: &str) -> String {
    let pascal: String = split_words(name)
        .iter()
        .map(|w| capitalize_first(&w.to_ascii_lowercase()))
        .collect();
    if pascal.is_empty() {
        return "Empty".to_string();
    }
    if pascal.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{pascal}");
    }
    pascal
}

/// Field identifier for a property name.
pub fn field_ident(wire_name: &str) -> String {
    escape_keyword(&to_snake_case(wire_name))
}

/// Type or variant identifier for a schema, title, or literal.
pub fn type_ident(name: &str) -> String {
    escape_keyword(&to_pascal_case(name))
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Join underscore-separated words in camelCase.
///
/// The first word is lowercased, later words get their first letter
/// capitalized and are otherwise kept as is.
pub fn camel_case(name: &str) -> String {
    let mut out = String::new();
    for segment in name.split('_').filter(|s| !s.is_empty()) {
        if out.is_empty() {
            out.push_str(&segment.to_lowercase());
        } else {
            out.push_str(&capitalize_first(segment));
        }
    }
    out
}

/// Marker on operationIds of unstable methods.
pub const EXPERIMENTAL_PREFIX: &str = "EXPERIMENTAL_";

/// Wrapper function name for an operationId, before keyword escaping.
///
/// `EXPERIMENTAL_changes` -> `experimentalChanges`, `network_info` -> `networkInfo`.
pub fn method_function_name(operation_id: &str) -> String {
    let name = match operation_id.strip_prefix(EXPERIMENTAL_PREFIX) {
        Some(rest) => format!("experimental{}", capitalize_first(&camel_case(rest))),
        None => camel_case(operation_id),
    };
    if name.is_empty() {
        return "method".to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{name}");
    }
    name
}

/// Make every name unique by appending the smallest free numeric suffix.
///
/// The first occurrence keeps its name: `x, x, x` -> `x, x1, x2`.
pub fn unique_names<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    unique_names_avoiding(names, &[])
}

/// Like [`unique_names`], with `reserved` treated as already taken.
pub fn unique_names_avoiding<I>(names: I, reserved: &[&str]) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut used: HashSet<String> = reserved.iter().map(|r| (*r).to_string()).collect();
    let mut out = Vec::new();
    for name in names {
        let mut candidate = name.clone();
        let mut suffix = 1_usize;
        while used.contains(&candidate) {
            candidate = format!("{name}{suffix}");
            suffix += 1;
        }
        used.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

/// Escape a string for use inside a Rust string literal.
pub fn escape_rust_string(s: &str) -> String {
    s.escape_default().to_string()
}
