//! Shape dispatch: one configuration value to canonical render state

use chrono::{DateTime, Local};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use chronoline_types::{
    Id, RawItem, RenderState, SingleRecord, TimeValue, TimelineConfig, UNNAMED_LABEL,
};

use crate::rows::map_rows;
use crate::time::parse_time;

/// `{{time}}`, with optional inner whitespace.
static TIME_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*time\s*\}\}").expect("placeholder pattern is valid"));

/// Normalize a configuration value against the current wall clock.
pub fn normalize(config: &TimelineConfig) -> RenderState {
    normalize_at(config, Local::now())
}

/// Normalize a configuration value, with the clock supplied by the
/// caller. Pure: same config and instant, same render state.
///
/// Shape dispatch per the configuration priority rule:
/// - direct-items passes items through unchanged — deliberately without
///   running the time parser; engine-item building re-parses loose time
///   values downstream (the single-record and row-mapping shapes, by
///   contrast, parse here);
/// - row-mapping delegates to [`map_rows`];
/// - single-record yields one item, or none at all when its start time
///   does not resolve (the record is dropped whole, never partially
///   rendered).
pub fn normalize_at(config: &TimelineConfig, now: DateTime<Local>) -> RenderState {
    let common = config.common();

    let title = if common.show_title {
        let now_text = now.format("%Y-%m-%d %H:%M:%S").to_string();
        Some(
            TIME_PLACEHOLDER
                .replace_all(common.resolved_template(), now_text.as_str())
                .into_owned(),
        )
    } else {
        None
    };

    let items = match config {
        TimelineConfig::Items(cfg) => cfg.items.clone(),
        TimelineConfig::Rows(cfg) => map_rows(&cfg.data, &cfg.mapper),
        TimelineConfig::Single(cfg) => single_item(&cfg.record),
    };

    RenderState {
        items,
        options: common.options.clone(),
        title,
        color: common.resolved_color().to_string(),
    }
}

fn single_item(record: &SingleRecord) -> Vec<RawItem> {
    let start = parse_time(record.start_time.as_ref());
    let Some(start) = start.filter(|ms| *ms != 0) else {
        debug!("single record dropped: start time did not resolve");
        return Vec::new();
    };

    // End-time failure does not suppress the item.
    let end = parse_time(record.end_time.as_ref());

    vec![RawItem {
        id: Some(Id::Int(1)),
        event_name: record
            .event_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNNAMED_LABEL.to_string()),
        event_description: record.event_description.clone(),
        start_time: TimeValue::Millis(start),
        end_time: end.map(TimeValue::Millis),
        group: record.group.clone(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn config(value: serde_json::Value) -> TimelineConfig {
        TimelineConfig::from_value(&value)
    }

    fn fixed_now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 10, 1, 12, 30, 45)
            .earliest()
            .unwrap()
    }

    #[test]
    fn test_single_record_produces_one_item() {
        let state = normalize(&config(json!({
            "eventName": "Review",
            "startTime": "2025-10-01 09:00:00",
            "endTime": "2025-10-01 12:00:00",
            "group": "Product"
        })));
        assert_eq!(state.items.len(), 1);
        let item = &state.items[0];
        assert_eq!(item.id, Some(Id::Int(1)));
        assert_eq!(item.event_name, "Review");
        assert!(matches!(item.start_time, TimeValue::Millis(_)));
        assert!(matches!(item.end_time, Some(TimeValue::Millis(_))));
        assert_eq!(item.group, Some(Id::from("Product")));
    }

    #[test]
    fn test_single_record_with_unresolvable_start_drops_whole_record() {
        let state = normalize(&config(json!({
            "eventName": "Review",
            "startTime": "N/A",
            "endTime": "2025-10-01 12:00:00",
            "group": "Product"
        })));
        assert!(state.items.is_empty());
        // Title and color still resolve.
        assert!(state.title.is_some());
        assert_eq!(state.color, chronoline_types::DEFAULT_TITLE_COLOR);
    }

    #[test]
    fn test_single_record_bad_end_keeps_the_item() {
        let state = normalize(&config(json!({
            "startTime": "2025-10-01",
            "endTime": "garbage"
        })));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].end_time, None);
        assert_eq!(state.items[0].event_name, UNNAMED_LABEL);
    }

    #[test]
    fn test_direct_items_pass_through_unparsed() {
        let state = normalize(&config(json!({
            "items": [
                {"eventName": "A", "startTime": "2025/10/01 09:00:00"},
                {"id": 7, "eventName": "B", "startTime": 1696147200000i64}
            ]
        })));
        assert_eq!(state.items.len(), 2);
        // The loose string survives normalization untouched.
        assert_eq!(
            state.items[0].start_time,
            TimeValue::Text("2025/10/01 09:00:00".to_string())
        );
        assert_eq!(state.items[1].id, Some(Id::Int(7)));
    }

    #[test]
    fn test_rows_shape_delegates_to_row_mapper() {
        let state = normalize(&config(json!({
            "data": [
                {"T": "2025-10-01 09:00:00", "N": "A"},
                {"T": "bad", "N": "B"}
            ],
            "mapper": {"start": "T", "title": "N"}
        })));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].event_name, "A");
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let cfg = config(json!({
            "data": [
                {"T": "2025-10-01", "N": "A"},
                {"T": "2025-10-02", "N": "B"}
            ],
            "mapper": {"start": "T", "title": "N"}
        }));
        let now = fixed_now();
        assert_eq!(normalize_at(&cfg, now), normalize_at(&cfg, now));
    }

    #[test]
    fn test_title_placeholder_substitution() {
        let state = normalize_at(
            &config(json!({"titleText": "From {{time}} to {{ time }}"})),
            fixed_now(),
        );
        assert_eq!(
            state.title.as_deref(),
            Some("From 2025-10-01 12:30:45 to 2025-10-01 12:30:45")
        );
    }

    #[test]
    fn test_default_template_carries_the_clock() {
        let state = normalize_at(&config(json!({})), fixed_now());
        assert_eq!(
            state.title.as_deref(),
            Some("My Timeline – 2025-10-01 12:30:45")
        );
    }

    #[test]
    fn test_show_title_false_yields_no_title() {
        let state = normalize(&config(json!({"showTitle": false, "titleText": "x"})));
        assert_eq!(state.title, None);
    }

    #[test]
    fn test_options_pass_through_verbatim() {
        let state = normalize(&config(json!({
            "options": {"stack": true, "zoomable": false}
        })));
        assert_eq!(state.options.get("stack"), Some(&json!(true)));
        assert_eq!(state.options.get("zoomable"), Some(&json!(false)));
    }

    #[test]
    fn test_custom_color_wins_over_default() {
        let state = normalize(&config(json!({"color": "#ff0000"})));
        assert_eq!(state.color, "#ff0000");
    }
}
