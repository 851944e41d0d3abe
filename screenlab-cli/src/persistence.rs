//! Preset persistence: user presets saved as JSON across runs.

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use screenlab_core::{Preset, PresetStore};

/// Load the preset store: built-ins first, then user presets from `path`.
///
/// Returns built-ins only if the file is missing or is not a JSON array.
/// Entries that fail to parse, or whose id collides with one already loaded,
/// are skipped one at a time so the rest still load.
pub fn load(path: &Path) -> PresetStore {
    let mut store = PresetStore::with_builtins();
    let entries: Vec<serde_json::Value> = match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
            warn!(path = %path.display(), %err, "corrupt presets file, ignoring");
            Vec::new()
        }),
        Err(_) => Vec::new(),
    };
    for entry in entries {
        let preset: Preset = match serde_json::from_value(entry) {
            Ok(preset) => preset,
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unreadable preset");
                continue;
            }
        };
        if let Err(err) = store.insert(preset) {
            warn!(%err, "skipping preset");
        }
    }
    store
}

/// Save user presets to disk. Built-ins are never written. Creates parent
/// directories if needed.
pub fn save(path: &Path, store: &PresetStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let custom: Vec<&Preset> = store.custom().collect();
    let json = serde_json::to_string_pretty(&custom)?;
    std::fs::write(path, json)?;
    Ok(())
}
