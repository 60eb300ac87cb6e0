//! Typed override trees.
//!
//! A patch item describes its differences from the cloned template as a
//! nested JSON record. Each value in that record is classified once, when
//! the patch is loaded, as either a leaf (scalar or list) that replaces the
//! target value, or a nested record that is merged into the target.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{TypesError, TypesResult};

/// A nested record of overrides, keyed by field name.
pub type OverrideTree = BTreeMap<String, OverrideValue>;

/// A scalar leaf value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// Convert into a plain JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
        }
    }
}

/// A single override, already classified as leaf or nested.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum OverrideValue {
    /// Replaces the target value.
    Scalar(Scalar),
    /// Replaces the target array as a whole; elements are never merged.
    List(Vec<Value>),
    /// Merged key by key into the target sub-record.
    Nested(OverrideTree),
}

impl OverrideValue {
    /// Classify a JSON value, reporting the dotted path of any `null`.
    pub fn from_value_at(value: Value, path: &str) -> TypesResult<Self> {
        match value {
            Value::Null => Err(TypesError::NullOverride {
                path: if path.is_empty() { "<root>".into() } else { path.to_string() },
            }),
            Value::Bool(b) => Ok(Self::Scalar(Scalar::Bool(b))),
            Value::Number(n) => Ok(Self::Scalar(Scalar::Number(n))),
            Value::String(s) => Ok(Self::Scalar(Scalar::String(s))),
            Value::Array(items) => Ok(Self::List(items)),
            Value::Object(map) => tree_from_map(map, path).map(Self::Nested),
        }
    }

    /// Returns `true` for scalars and lists.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Nested(_))
    }

    /// Convert back into a plain JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Scalar(s) => s.to_value(),
            Self::List(items) => Value::Array(items.clone()),
            Self::Nested(tree) => Value::Object(
                tree.iter()
                    .map(|(k, v)| (k.clone(), v.to_value()))
                    .collect(),
            ),
        }
    }
}

/// Classify every value of a JSON object into an [`OverrideTree`].
pub fn tree_from_map(map: Map<String, Value>, path: &str) -> TypesResult<OverrideTree> {
    map.into_iter()
        .map(|(key, value)| {
            let child = if path.is_empty() { key.clone() } else { format!("{path}.{key}") };
            OverrideValue::from_value_at(value, &child).map(|v| (key, v))
        })
        .collect()
}

impl TryFrom<Value> for OverrideValue {
    type Error = TypesError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value_at(value, "")
    }
}

impl From<OverrideValue> for Value {
    fn from(value: OverrideValue) -> Self {
        value.to_value()
    }
}
