//! Stable identities for items and groups

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable key used to match items and groups across reconciliation passes.
///
/// Untagged on the wire: a JSON number becomes `Int`, a JSON string becomes
/// `Str`. The two never compare equal, so the integer `1` and the string
/// `"1"` remain distinct identities (and distinct groups).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Int(i64),
    Str(String),
}

impl Id {
    /// Whether this value counts as absent under the falsy-group filter:
    /// the integer zero and the empty string are both treated as "no group".
    pub fn is_falsy(&self) -> bool {
        match self {
            Id::Int(n) => *n == 0,
            Id::Str(s) => s.is_empty(),
        }
    }

    /// Convert a loose JSON value into an identity, if it is one of the
    /// two supported scalar kinds.
    pub fn from_json(value: &serde_json::Value) -> Option<Id> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().map(Id::Int),
            serde_json::Value::String(s) => Some(Id::Str(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(n) => write!(f, "{}", n),
            Id::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Int(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Str(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Str(s)
    }
}
