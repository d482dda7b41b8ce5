//! Configuration shapes accepted from the dashboard host
//!
//! The host hands over one loosely-structured JSON value per update. The
//! value carries no explicit discriminant; which shape it is follows from
//! which keys are present, resolved by a fixed priority:
//! `items` beats `data` + `mapper`, which beats interpreting the top-level
//! record fields directly. [`TimelineConfig::from_value`] applies that
//! rule explicitly and never fails: a value that matches no shape (or
//! fails to deserialize) degrades to an empty single-record configuration,
//! which renders an empty timeline.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::Id;
use crate::item::{FieldMapper, RawItem};
use crate::value::TimeValue;

/// Label substituted for an absent or empty event name.
pub const UNNAMED_LABEL: &str = "(untitled)";

/// Default title template; `{{time}}` is replaced with the wall-clock
/// time at render.
pub const DEFAULT_TITLE_TEMPLATE: &str = "My Timeline – {{time}}";

/// Default title color.
pub const DEFAULT_TITLE_COLOR: &str = "#2E3A59";

/// Fields common to all three configuration shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonConfig {
    /// Opaque pass-through to the rendering engine's own configuration
    /// surface.
    #[serde(default)]
    pub options: Map<String, Value>,
    #[serde(default = "default_show_title")]
    pub show_title: bool,
    #[serde(default)]
    pub title_text: String,
    #[serde(default)]
    pub color: String,
}

fn default_show_title() -> bool {
    true
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            options: Map::new(),
            show_title: true,
            title_text: String::new(),
            color: String::new(),
        }
    }
}

impl CommonConfig {
    /// Title template with the empty-string fallback applied.
    pub fn resolved_template(&self) -> &str {
        if self.title_text.is_empty() {
            DEFAULT_TITLE_TEMPLATE
        } else {
            &self.title_text
        }
    }

    /// Title color with the empty-string fallback applied.
    pub fn resolved_color(&self) -> &str {
        if self.color.is_empty() {
            DEFAULT_TITLE_COLOR
        } else {
            &self.color
        }
    }
}

/// Direct-items shape: the caller supplies ready-made items.
///
/// Items are trusted as-is here; no time parsing or name substitution is
/// applied at this layer (engine-item building resolves loose time values
/// again downstream).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsConfig {
    pub items: Vec<RawItem>,
    #[serde(flatten)]
    pub common: CommonConfig,
}

/// Row-mapping shape: a generic row list plus a field-name mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowsConfig {
    pub data: Vec<Map<String, Value>>,
    pub mapper: FieldMapper,
    #[serde(flatten)]
    pub common: CommonConfig,
}

/// Single-record shape: top-level event fields describe one item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingleConfig {
    #[serde(flatten)]
    pub record: SingleRecord,
    #[serde(flatten)]
    pub common: CommonConfig,
}

/// The event fields of the single-record shape, all optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<TimeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Id>,
}

/// One configuration value, resolved into an explicit shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TimelineConfig {
    Items(ItemsConfig),
    Rows(RowsConfig),
    Single(SingleConfig),
}

impl TimelineConfig {
    /// Resolve a raw host configuration value into a shape.
    ///
    /// Shape priority: a non-null `items` key wins, then `data` together
    /// with `mapper`, then the single-record reading. Never fails; any
    /// value that does not deserialize degrades to an empty single-record
    /// configuration.
    pub fn from_value(value: &Value) -> Self {
        if let Some(map) = value.as_object() {
            if has_key(map, "items") {
                match serde_json::from_value::<ItemsConfig>(value.clone()) {
                    Ok(cfg) => return TimelineConfig::Items(cfg),
                    Err(e) => log::warn!("direct-items configuration rejected: {}", e),
                }
            } else if has_key(map, "data") && has_key(map, "mapper") {
                match serde_json::from_value::<RowsConfig>(value.clone()) {
                    Ok(cfg) => return TimelineConfig::Rows(cfg),
                    Err(e) => log::warn!("row-mapping configuration rejected: {}", e),
                }
            } else {
                match serde_json::from_value::<SingleConfig>(value.clone()) {
                    Ok(cfg) => return TimelineConfig::Single(cfg),
                    Err(e) => log::warn!("single-record configuration rejected: {}", e),
                }
            }
        }
        TimelineConfig::Single(SingleConfig::default())
    }

    /// The common fields of whichever shape this is.
    pub fn common(&self) -> &CommonConfig {
        match self {
            TimelineConfig::Items(cfg) => &cfg.common,
            TimelineConfig::Rows(cfg) => &cfg.common,
            TimelineConfig::Single(cfg) => &cfg.common,
        }
    }
}

/// Key presence in the host-value sense: present and not JSON null.
fn has_key(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).is_some_and(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_shape_wins_over_other_keys() {
        let value = json!({
            "items": [{"eventName": "A", "startTime": 1}],
            "data": [{"T": "2025-10-01"}],
            "mapper": {"start": "T"},
            "startTime": "2025-10-01"
        });
        let config = TimelineConfig::from_value(&value);
        match config {
            TimelineConfig::Items(cfg) => assert_eq!(cfg.items.len(), 1),
            other => panic!("expected direct-items shape, got {:?}", other),
        }
    }

    #[test]
    fn test_data_plus_mapper_beats_single_record() {
        let value = json!({
            "data": [{"T": "2025-10-01"}],
            "mapper": {"start": "T"},
            "startTime": "2025-10-01"
        });
        assert!(matches!(
            TimelineConfig::from_value(&value),
            TimelineConfig::Rows(_)
        ));
    }

    #[test]
    fn test_data_without_mapper_falls_through_to_single_record() {
        let value = json!({"data": [{"T": "x"}], "startTime": "2025-10-01"});
        assert!(matches!(
            TimelineConfig::from_value(&value),
            TimelineConfig::Single(_)
        ));
    }

    #[test]
    fn test_null_items_key_is_not_present() {
        let value = json!({"items": null, "data": [], "mapper": {"start": "T"}});
        assert!(matches!(
            TimelineConfig::from_value(&value),
            TimelineConfig::Rows(_)
        ));
    }

    #[test]
    fn test_empty_object_degrades_to_empty_single_record() {
        let config = TimelineConfig::from_value(&json!({}));
        match config {
            TimelineConfig::Single(cfg) => {
                assert_eq!(cfg.record, SingleRecord::default());
                assert!(cfg.common.show_title);
            }
            other => panic!("expected single-record shape, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_value_degrades_without_error() {
        assert!(matches!(
            TimelineConfig::from_value(&json!("nonsense")),
            TimelineConfig::Single(_)
        ));
    }

    #[test]
    fn test_common_defaults_and_fallbacks() {
        let common = CommonConfig::default();
        assert!(common.show_title);
        assert_eq!(common.resolved_template(), DEFAULT_TITLE_TEMPLATE);
        assert_eq!(common.resolved_color(), DEFAULT_TITLE_COLOR);

        let custom: CommonConfig =
            serde_json::from_value(json!({"titleText": "T {{time}}", "color": "#fff"})).unwrap();
        assert_eq!(custom.resolved_template(), "T {{time}}");
        assert_eq!(custom.resolved_color(), "#fff");
    }

    #[test]
    fn test_show_title_false_survives_deserialization() {
        let cfg: CommonConfig = serde_json::from_value(json!({"showTitle": false})).unwrap();
        assert!(!cfg.show_title);
    }
}
