//! Host configuration provider
//!
//! The dashboard host owns configuration persistence; this side only
//! consumes raw configuration values and hands edited ones back. The
//! debounced update plumbing lives with the host: whatever snapshot
//! arrives last is the one the panel applies.

use anyhow::Result;
use serde_json::Value;
use std::path::PathBuf;

/// Supplies and persists the raw configuration value.
pub trait ConfigProvider {
    /// Load the current configuration value. A missing configuration is
    /// an empty object (which renders an empty timeline), not an error.
    fn load(&self) -> Result<Value>;

    /// Persist a configuration value.
    fn save(&self, config: &Value) -> Result<()>;
}

/// File-backed provider: one JSON document at a fixed path.
pub struct FileConfigProvider {
    path: PathBuf,
}

impl FileConfigProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Provider at the per-user default configuration location.
    pub fn default_location() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("com", "chronoline", "chronoline")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(Self::new(dirs.config_dir().join("config.json")))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ConfigProvider for FileConfigProvider {
    fn load(&self) -> Result<Value> {
        if !self.path.exists() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        let content = std::fs::read_to_string(&self.path)?;
        let value = serde_json::from_str(&content)?;
        Ok(value)
    }

    fn save(&self, config: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
