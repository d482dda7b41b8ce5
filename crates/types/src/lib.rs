//! chronoline-types: Shared data types for the chronoline timeline panel.
//!
//! This crate contains pure data types (configuration shapes, canonical
//! items, identities, engine-facing records) that are shared across all
//! chronoline crates. These types have no rendering or host dependencies,
//! making them suitable as a foundation layer.

pub mod config;
pub mod id;
pub mod item;
pub mod render;
pub mod value;

// Re-export commonly used types at the crate root for convenience
pub use config::{
    CommonConfig, ItemsConfig, RowsConfig, SingleConfig, SingleRecord, TimelineConfig,
    DEFAULT_TITLE_COLOR, DEFAULT_TITLE_TEMPLATE, UNNAMED_LABEL,
};
pub use id::Id;
pub use item::{FieldMapper, RawItem};
pub use render::{EngineItem, GroupDescriptor, Keyed, RenderState};
pub use value::TimeValue;
