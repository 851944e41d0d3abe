//! Preset store: named snapshots of (tab, selection).
//!
//! Built-in presets are seeded first; user presets get `custom-` ids. The
//! store itself allows deleting any preset; keeping built-ins undeletable is
//! left to the presentation layer (see [`Preset::is_custom`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::Tab;
use crate::selection::FilterSelection;

/// Id prefix marking user-created presets.
pub const CUSTOM_PREFIX: &str = "custom-";

/// A saved filter view. Serializes as `{id, name, tab, filters}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub tab: Tab,
    pub filters: FilterSelection,
}

impl Preset {
    pub fn is_custom(&self) -> bool {
        self.id.starts_with(CUSTOM_PREFIX)
    }

    /// The (tab, selection) pair to install. The caller applies it.
    pub fn apply(&self) -> (Tab, FilterSelection) {
        (self.tab, self.filters.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("preset name must not be empty")]
    EmptyName,

    #[error("duplicate preset id: {0}")]
    DuplicateId(String),
}

/// In-memory, insertion-ordered preset list with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetStore {
    presets: Vec<Preset>,
}

impl Default for PresetStore {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl PresetStore {
    /// A store with no presets at all.
    pub fn empty() -> Self {
        Self {
            presets: Vec::new(),
        }
    }

    /// A store seeded with the built-in presets.
    pub fn with_builtins() -> Self {
        Self {
            presets: builtin_presets(),
        }
    }

    /// Snapshot `(tab, selection)` under `name`. Blank names are refused.
    ///
    /// Names need not be unique; ids are `custom-<unix millis>`, with a
    /// numeric suffix when that id is already taken.
    pub fn save(
        &mut self,
        name: &str,
        tab: Tab,
        selection: &FilterSelection,
    ) -> Result<Preset, PresetError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }

        let preset = Preset {
            id: self.next_custom_id(chrono::Utc::now().timestamp_millis()),
            name: name.to_string(),
            tab,
            filters: selection.clone(),
        };
        info!(id = %preset.id, name = %preset.name, tab = %tab, "preset saved");
        self.presets.push(preset.clone());
        Ok(preset)
    }

    /// Append an existing preset (e.g. one loaded from disk), keeping ids unique.
    pub fn insert(&mut self, preset: Preset) -> Result<(), PresetError> {
        if self.get(&preset.id).is_some() {
            return Err(PresetError::DuplicateId(preset.id));
        }
        self.presets.push(preset);
        Ok(())
    }

    /// All presets in insertion order, built-ins first.
    pub fn list(&self) -> &[Preset] {
        &self.presets
    }

    /// User-created presets only.
    pub fn custom(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter().filter(|p| p.is_custom())
    }

    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// First preset with this exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Remove a preset by id, returning it if it existed.
    pub fn delete(&mut self, id: &str) -> Option<Preset> {
        let pos = self.presets.iter().position(|p| p.id == id)?;
        let removed = self.presets.remove(pos);
        info!(id, "preset deleted");
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    fn next_custom_id(&self, millis: i64) -> String {
        let base = format!("{CUSTOM_PREFIX}{millis}");
        if self.get(&base).is_none() {
            return base;
        }
        let mut n = 1u32;
        loop {
            let candidate = format!("{base}-{n}");
            if self.get(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }
}

/// The presets every store starts with.
pub fn builtin_presets() -> Vec<Preset> {
    fn preset(id: &str, name: &str, tab: Tab, filters: &[(&str, &str)]) -> Preset {
        Preset {
            id: id.to_string(),
            name: name.to_string(),
            tab,
            filters: filters.iter().copied().collect(),
        }
    }

    vec![
        preset(
            "growth-stocks",
            "Growth Stocks",
            Tab::Financial,
            &[
                ("Market Cap", "Large ($10bln to $200bln)"),
                ("EPS Growth", "Over 20%"),
                ("ROE", "Over 20%"),
            ],
        ),
        preset(
            "value-stocks",
            "Value Stocks",
            Tab::Valuation,
            &[
                ("P/E", "Under 15"),
                ("P/B", "Under 3"),
                ("Dividend Yield", "Over 2%"),
            ],
        ),
        preset(
            "tech-leaders",
            "Tech Leaders",
            Tab::Overview,
            &[
                ("Sector", "Technology"),
                ("Market Cap", "Mega ($200bln+)"),
                ("ROE", "Over 30%"),
            ],
        ),
        preset(
            "dividend-kings",
            "Dividend Kings",
            Tab::Valuation,
            &[
                ("Dividend Yield", "Over 3%"),
                ("Market Cap", "Large ($10bln to $200bln)"),
                ("P/E", "Under 20"),
            ],
        ),
    ]
}
