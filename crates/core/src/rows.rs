//! Mapping generic rows to canonical items

use log::debug;
use serde_json::{Map, Value};

use chronoline_types::{FieldMapper, Id, RawItem, TimeValue, UNNAMED_LABEL};

use crate::time::parse_time;

/// Build canonical items from a generic row list and a field-name mapping.
///
/// Rows are visited in input order. A row whose mapped start field does
/// not resolve to a usable time is skipped entirely, silently; note that
/// the zero epoch counts as "no start time" here (documented behavior: a
/// true start of exactly epoch 0 is indistinguishable from absence).
/// Auto-increment ids start at 1 and advance only for rows that produce
/// an item.
pub fn map_rows(rows: &[Map<String, Value>], mapper: &FieldMapper) -> Vec<RawItem> {
    let mut items = Vec::new();
    let mut auto_id = 1i64;

    for (index, row) in rows.iter().enumerate() {
        let start = parse_time(time_field(row, &mapper.start).as_ref());
        let Some(start) = start.filter(|ms| *ms != 0) else {
            debug!(
                "skipping row {}: field {:?} has no usable start time",
                index, mapper.start
            );
            continue;
        };

        let end = mapper
            .end
            .as_deref()
            .and_then(|field| parse_time(time_field(row, field).as_ref()));

        let event_name = mapper
            .title
            .as_deref()
            .and_then(|field| row.get(field))
            .map(stringify)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNNAMED_LABEL.to_string());

        let event_description = mapper
            .desc
            .as_deref()
            .and_then(|field| row.get(field))
            .filter(|v| is_truthy(v))
            .map(stringify);

        // Group values pass through with their original type; they are
        // not stringified here.
        let group = mapper
            .group
            .as_deref()
            .and_then(|field| row.get(field))
            .and_then(Id::from_json);

        items.push(RawItem {
            id: Some(Id::Int(auto_id)),
            event_name,
            event_description,
            start_time: TimeValue::Millis(start),
            end_time: end.map(TimeValue::Millis),
            group,
        });
        auto_id += 1;
    }

    items
}

fn time_field(row: &Map<String, Value>, field: &str) -> Option<TimeValue> {
    row.get(field).and_then(TimeValue::from_json)
}

/// Display-stringification of a loose field value.
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// JS-style truthiness for loose field values: null, false, zero and the
/// empty string are absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|x| x != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
