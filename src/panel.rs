//! The timeline panel: configuration snapshots in, engine updates out
//!
//! One panel owns the two engine datasets (items and groups) for its
//! lifetime. Each configuration snapshot is consumed synchronously:
//! normalize, build engine items, reconcile the items dataset by
//! identity (removals before upserts), rebuild the groups dataset
//! (clear-then-add; group descriptors are cheap and few), then push
//! options, title and datasets to the engine. A superseded snapshot
//! needs no cancellation; the next apply simply recomputes from scratch.

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use chronoline_core::{extract_groups, normalize, parse_time, reconcile};
use chronoline_types::{
    EngineItem, GroupDescriptor, Id, RawItem, RenderState, TimelineConfig, UNNAMED_LABEL,
};

use crate::engine::{MutableDataSet, RenderingEngine};

/// What one apply pass did, for the host's render-completion signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSummary {
    pub items_upserted: usize,
    pub items_removed: usize,
    pub group_count: usize,
    /// The resolved display title, `None` when hidden.
    pub title: Option<String>,
}

pub struct TimelinePanel<E: RenderingEngine> {
    engine: E,
    items: MutableDataSet<EngineItem>,
    groups: MutableDataSet<GroupDescriptor>,
}

impl<E: RenderingEngine> TimelinePanel<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            items: MutableDataSet::new(),
            groups: MutableDataSet::new(),
        }
    }

    /// Consume a raw host configuration value.
    pub fn apply_value(&mut self, config: &Value) -> RenderSummary {
        self.apply(&TimelineConfig::from_value(config))
    }

    /// Consume a resolved configuration snapshot.
    pub fn apply(&mut self, config: &TimelineConfig) -> RenderSummary {
        self.render(normalize(config))
    }

    fn render(&mut self, state: RenderState) -> RenderSummary {
        let engine_items = build_engine_items(&state.items);

        let diff = reconcile(&self.items.id_set(), engine_items);
        let (items_removed, items_upserted) = self.items.apply(diff);

        self.groups.clear();
        self.groups.add(extract_groups(&state.items));

        self.engine.set_options(&state.options);
        self.engine.set_title(state.title.as_deref(), &state.color);
        self.engine.redraw(&self.items, &self.groups);

        info!(
            "timeline synced: {} upserted, {} removed, {} group(s)",
            items_upserted,
            items_removed,
            self.groups.len()
        );

        RenderSummary {
            items_upserted,
            items_removed,
            group_count: self.groups.len(),
            title: state.title,
        }
    }

    pub fn items(&self) -> &MutableDataSet<EngineItem> {
        &self.items
    }

    pub fn groups(&self) -> &MutableDataSet<GroupDescriptor> {
        &self.groups
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

/// Turn canonical items into engine-ready records.
///
/// The time parser runs again here: items from the row-mapping and
/// single-record paths already carry parsed milliseconds (a passthrough),
/// while direct-items values get their one and only parse. An item whose
/// loose start value still fails to resolve is dropped at this point.
/// Items without an id fall back to the `"{name}-{start}"` composite
/// identity, which stays stable across re-renders of the same input.
pub fn build_engine_items(items: &[RawItem]) -> Vec<EngineItem> {
    items
        .iter()
        .filter_map(|item| {
            let Some(start) = parse_time(Some(&item.start_time)) else {
                debug!(
                    "dropping item with unresolvable start {:?}",
                    item.start_time
                );
                return None;
            };
            let id = item
                .id
                .clone()
                .unwrap_or_else(|| Id::Str(format!("{}-{}", item.event_name, item.start_time)));
            let content = if item.event_name.is_empty() {
                UNNAMED_LABEL.to_string()
            } else {
                item.event_name.clone()
            };
            Some(EngineItem {
                id,
                content,
                start,
                end: parse_time(item.end_time.as_ref()),
                group: item.group.clone(),
                title: item.event_description.clone(),
            })
        })
        .collect()
}
