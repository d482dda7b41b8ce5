//! Loosely-typed timestamp values as supplied by configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// A timestamp value exactly as it arrived in configuration: either an
/// already-canonical epoch-millisecond integer, some other number, or a
/// free-form date string that still needs heuristic parsing.
///
/// The row-mapping and single-record paths always store `Millis` (parsed
/// up front); the direct-items shape passes values through untouched, so
/// `Text` can survive all the way to engine-item building, where the time
/// parser runs again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    Millis(i64),
    Number(f64),
    Text(String),
}

impl TimeValue {
    /// Convert a loose JSON value into a time value. `null` and
    /// non-scalar values carry no timestamp.
    pub fn from_json(value: &serde_json::Value) -> Option<TimeValue> {
        match value {
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Some(TimeValue::Millis(i)),
                None => n.as_f64().map(TimeValue::Number),
            },
            serde_json::Value::String(s) => Some(TimeValue::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeValue::Millis(n) => write!(f, "{}", n),
            TimeValue::Number(x) => write!(f, "{}", x),
            TimeValue::Text(s) => f.write_str(s),
        }
    }
}
