//! chronoline-core: Normalization and reconciliation pipeline.
//!
//! This crate turns one host configuration value into canonical render
//! state (heuristic time parsing, shape dispatch, row mapping, group
//! derivation) and computes the minimal remove/upsert operations needed
//! to converge an external mutable dataset to that state.
//!
//! Everything here is pure and infallible: bad input degrades to fewer
//! items, never to an error.

mod groups;
mod normalize;
mod reconcile;
mod rows;
mod time;

pub use groups::extract_groups;
pub use normalize::{normalize, normalize_at};
pub use reconcile::{reconcile, DatasetDiff};
pub use rows::map_rows;
pub use time::parse_time;

// Re-export types used in function signatures for convenience
pub use chronoline_types::{
    EngineItem, FieldMapper, GroupDescriptor, Id, Keyed, RawItem, RenderState, TimeValue,
    TimelineConfig,
};
