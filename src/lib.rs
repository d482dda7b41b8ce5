//! chronoline: A configurable timeline panel for dashboard hosts
//!
//! This library provides the integration layer around the chronoline
//! pipeline, including:
//! - The rendering-engine boundary and its mutable datasets
//! - The timeline panel that syncs configuration snapshots to the engine
//! - The host configuration provider

pub mod engine;
pub mod host;
pub mod panel;

// Re-export commonly used types
pub use chronoline_core::{
    extract_groups, map_rows, normalize, normalize_at, parse_time, reconcile, DatasetDiff,
};
pub use chronoline_types::{
    EngineItem, FieldMapper, GroupDescriptor, Id, Keyed, RawItem, RenderState, TimeValue,
    TimelineConfig,
};
pub use engine::{LogEngine, MutableDataSet, RenderingEngine};
pub use host::{ConfigProvider, FileConfigProvider};
pub use panel::{RenderSummary, TimelinePanel};
