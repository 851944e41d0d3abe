//! Filter state: selected options per category, active tab, search text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{is_unconstrained, ANY};
use crate::domain::Tab;
use crate::preset::Preset;

/// Category name → selected option label. Single-select per category.
///
/// Unconstrained values (`""`, `"Any"`) are never stored, so absence of a key
/// is the only representation of "no constraint". `BTreeMap` keeps iteration
/// (and therefore URL and fingerprint output) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct FilterSelection {
    entries: BTreeMap<String, String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `category` to `option`; an unconstrained option removes the entry.
    pub fn select(&mut self, category: impl Into<String>, option: impl Into<String>) {
        let category = category.into();
        let option = option.into();
        if is_unconstrained(&option) {
            self.entries.remove(&category);
        } else {
            self.entries.insert(category, option);
        }
    }

    /// Select `option`, or clear the category if `option` is already selected.
    pub fn toggle(&mut self, category: &str, option: &str) {
        if self.get(category) == option {
            self.entries.remove(category);
        } else {
            self.select(category, option);
        }
    }

    pub fn clear(&mut self, category: &str) {
        self.entries.remove(category);
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// The selected option for `category`, `"Any"` if none.
    pub fn get(&self, category: &str) -> &str {
        self.entries.get(category).map_or(ANY, String::as_str)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    /// Number of constraining entries.
    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for FilterSelection {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<FilterSelection> for BTreeMap<String, String> {
    fn from(selection: FilterSelection) -> Self {
        selection.entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut selection = FilterSelection::new();
        for (k, v) in iter {
            selection.select(k, v);
        }
        selection
    }
}

/// Everything that determines what the screener shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub tab: Tab,
    pub selection: FilterSelection,
    pub search: String,
}

impl FilterState {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    /// Clear every filter and the search text. The tab is kept.
    pub fn clear_all(&mut self) {
        self.selection.clear_all();
        self.search.clear();
    }

    /// Replace tab and selection wholesale with a preset's. Search is kept.
    pub fn apply_preset(&mut self, preset: &Preset) {
        let (tab, selection) = preset.apply();
        self.tab = tab;
        self.selection = selection;
    }
}
