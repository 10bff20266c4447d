use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Tunables for the interaction layer. The keyword vocabulary and the
/// table-introducing keyword set are compile-time constants, not
/// configuration.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Re-probe the suggestion list on ordinary edits, not only on the
    /// explicit trigger gesture.
    pub auto_trigger: bool,
    /// Token length required before a passive probe opens a closed list.
    /// Zero probes on every edit.
    pub auto_trigger_min_chars: usize,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            auto_trigger: true,
            auto_trigger_min_chars: 1,
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("spark_assist");
            path.push("config.json");
            path
        })
    }

    /// Loads the saved configuration, falling back to defaults when the file
    /// is absent or unreadable.
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                if let Ok(content) = fs::read_to_string(&path) {
                    if let Ok(config) = serde_json::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::new()
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                if let Err(err) = fs::create_dir_all(parent) {
                    log::warn!("config persistence error: {err}");
                    return Err(Box::new(err));
                }
            }
            let content = match serde_json::to_string_pretty(self) {
                Ok(content) => content,
                Err(err) => {
                    log::warn!("config persistence error: {err}");
                    return Err(Box::new(err));
                }
            };
            if let Err(err) = fs::write(path, content) {
                log::warn!("config persistence error: {err}");
                return Err(Box::new(err));
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
