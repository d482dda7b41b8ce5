//! Derived render-state types and the engine-facing record shapes

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::Id;
use crate::item::RawItem;

/// Anything carrying the stable identity the reconciler keys on.
pub trait Keyed {
    fn key(&self) -> &Id;
}

/// One distinct group referenced by the current item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDescriptor {
    /// The raw group value; the engine uses it to associate items with
    /// groups, so it keeps the original type.
    pub id: Id,
    /// The group value stringified for display.
    pub content: String,
}

impl Keyed for GroupDescriptor {
    fn key(&self) -> &Id {
        &self.id
    }
}

/// Engine-ready item: all times resolved to epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineItem {
    pub id: Id,
    /// Display label (never empty; the placeholder label substitutes).
    pub content: String,
    /// Start, epoch milliseconds.
    pub start: i64,
    /// Optional end, epoch milliseconds. No ordering against `start` is
    /// enforced; an end before start is the engine's problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Id>,
    /// Tooltip text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Keyed for EngineItem {
    fn key(&self) -> &Id {
        &self.id
    }
}

/// Canonical render state derived from one configuration value. Fully
/// recomputed on every configuration change, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub items: Vec<RawItem>,
    /// Opaque engine options, passed through verbatim.
    pub options: Map<String, Value>,
    /// Resolved display title; `None` when the title is disabled.
    pub title: Option<String>,
    pub color: String,
}
