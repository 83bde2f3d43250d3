//! Dynamically shaped JSON values crossing the client boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A JSON value as a closed sum type.
///
/// Used for request parameters and raw results. Integers and floats are kept
/// apart so that `u64`-sized heights and hashes are never silently rounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcValue {
    #[default]
    Null,
    Bool(bool),
    /// Any JSON number that fits in an `i64`.
    Int(i64),
    /// Non-negative integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    String(String),
    Array(Vec<RpcValue>),
    /// Object with keys kept in sorted order.
    Object(BTreeMap<String, RpcValue>),
}

impl RpcValue {
    /// Build an object from key/value pairs.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Look up a key on an object value.
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int(n) => u64::try_from(*n).ok(),
            Self::UInt(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for RpcValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for RpcValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for RpcValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for RpcValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for RpcValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::UInt(value), Self::Int)
    }
}

impl From<f64> for RpcValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RpcValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for RpcValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for RpcValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Self>> for RpcValue {
    fn from(map: BTreeMap<String, Self>) -> Self {
        Self::Object(map)
    }
}

impl<T: Into<Self>> From<Option<T>> for RpcValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for RpcValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::UInt(u)
                } else {
                    n.as_f64().map_or(Self::Null, Self::Float)
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<RpcValue> for serde_json::Value {
    fn from(value: RpcValue) -> Self {
        match value {
            RpcValue::Null => Self::Null,
            RpcValue::Bool(b) => Self::Bool(b),
            RpcValue::Int(i) => Self::from(i),
            RpcValue::UInt(u) => Self::from(u),
            RpcValue::Float(f) => serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number),
            RpcValue::String(s) => Self::String(s),
            RpcValue::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            RpcValue::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}
