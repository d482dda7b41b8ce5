//! Canonical event records and the row field mapping

use serde::{Deserialize, Serialize};

use crate::id::Id;
use crate::value::TimeValue;

/// Canonical normalized event record, the unit the reconciliation step
/// consumes.
///
/// Items built by the row mapper or the single-record path always carry a
/// parsed `TimeValue::Millis` start. Items supplied directly through the
/// direct-items configuration shape are passed through unparsed; their
/// loose time values are resolved again when engine items are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    /// Stable identity; assigned shape-locally (sequential from 1) when
    /// the input did not supply one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    /// Display label. May arrive empty from the direct-items shape; the
    /// placeholder label is substituted at engine-item build time.
    #[serde(default)]
    pub event_name: String,
    /// Auxiliary text, shown as tooltip content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_description: Option<String>,
    pub start_time: TimeValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeValue>,
    /// Group label; items without one render ungrouped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Id>,
}

/// Declares which named field of a generic row supplies which item
/// attribute. Only the start field is required; absent optional mappings
/// simply leave the attribute unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMapper {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}
