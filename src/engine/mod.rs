//! Rendering engine boundary
//!
//! The visual timeline is drawn by an external engine. The panel never
//! reaches inside it: it owns the engine's two datasets, converges them
//! by identity, and tells the engine about options, title and dataset
//! changes through the [`RenderingEngine`] trait.

mod dataset;

pub use dataset::MutableDataSet;

use log::{debug, info};
use serde_json::{Map, Value};

use chronoline_types::{EngineItem, GroupDescriptor};

/// What the panel is allowed to tell the rendering engine.
pub trait RenderingEngine {
    /// Engine options, passed through verbatim from configuration.
    fn set_options(&mut self, options: &Map<String, Value>);

    /// The display title (or its absence) and the title color.
    fn set_title(&mut self, title: Option<&str>, color: &str);

    /// The datasets changed; redraw from their current contents.
    fn redraw(
        &mut self,
        items: &MutableDataSet<EngineItem>,
        groups: &MutableDataSet<GroupDescriptor>,
    );
}

/// Engine stand-in that logs what it is told. Used by the CLI driver and
/// anywhere a visual engine is not attached.
#[derive(Debug, Default)]
pub struct LogEngine;

impl RenderingEngine for LogEngine {
    fn set_options(&mut self, options: &Map<String, Value>) {
        debug!("engine options: {}", Value::Object(options.clone()));
    }

    fn set_title(&mut self, title: Option<&str>, color: &str) {
        match title {
            Some(text) => info!("title: {:?} (color {})", text, color),
            None => info!("title hidden"),
        }
    }

    fn redraw(
        &mut self,
        items: &MutableDataSet<EngineItem>,
        groups: &MutableDataSet<GroupDescriptor>,
    ) {
        info!("redraw: {} item(s), {} group(s)", items.len(), groups.len());
        for item in items.iter() {
            debug!(
                "  item {}: {:?} start={} end={:?} group={:?}",
                item.id, item.content, item.start, item.end, item.group
            );
        }
        for group in groups.iter() {
            debug!("  group {}: {:?}", group.id, group.content);
        }
    }
}
