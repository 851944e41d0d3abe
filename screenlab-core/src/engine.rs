//! Screener engine: AND-composes the search predicate and every active
//! criterion into a stable filter over the row set.
//!
//! - [`CompiledFilter`]: selection + search resolved once against the catalog.
//! - [`filter_rows`] / [`filter_indices`]: pure, order-preserving passes.
//! - [`FilterMemo`]: caches the last pass keyed on dataset identity and the
//!   filter fingerprint.
//! - [`Screener`]: owns the dataset and the current [`FilterState`]; every
//!   user action goes through it.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{Row, Tab};
use crate::fingerprint::FilterFingerprint;
use crate::predicate::{Criterion, Unresolved};
use crate::preset::Preset;
use crate::selection::{FilterSelection, FilterState};

/// A selection and search query resolved into row tests.
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    needle: String,
    criteria: Vec<Criterion>,
}

impl CompiledFilter {
    pub fn new(selection: &FilterSelection, search: &str) -> Self {
        let mut criteria = Vec::with_capacity(selection.active_count());
        for (category, option) in selection.iter() {
            match Criterion::resolve(category, option) {
                Ok(criterion) => criteria.push(criterion),
                Err(Unresolved::Unconstrained | Unresolved::Informational) => {}
                Err(reason) => {
                    warn!(category, option, ?reason, "filter entry ignored");
                }
            }
        }

        Self {
            needle: search.to_lowercase(),
            criteria,
        }
    }

    /// Search first; criteria are only evaluated for rows the search keeps.
    pub fn matches(&self, row: &Row) -> bool {
        row.matches_search_lowercase(&self.needle) && self.criteria.iter().all(|c| c.matches(row))
    }

    /// Number of criteria that actually restrict rows.
    pub fn criteria_count(&self) -> usize {
        self.criteria.len()
    }
}

/// Rows passing every active filter, in input order.
pub fn filter_rows<'a>(rows: &'a [Row], selection: &FilterSelection, search: &str) -> Vec<&'a Row> {
    let compiled = CompiledFilter::new(selection, search);
    rows.iter().filter(|r| compiled.matches(r)).collect()
}

/// Indices of rows passing every active filter, ascending.
pub fn filter_indices(rows: &[Row], selection: &FilterSelection, search: &str) -> Vec<usize> {
    let compiled = CompiledFilter::new(selection, search);
    rows.iter()
        .enumerate()
        .filter(|(_, r)| compiled.matches(r))
        .map(|(i, _)| i)
        .collect()
}

/// Single-entry cache of the last filter pass.
#[derive(Debug, Default)]
pub struct FilterMemo {
    key: Option<(Arc<[Row]>, FilterFingerprint)>,
    indices: Vec<usize>,
    hits: u64,
    misses: u64,
}

impl FilterMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices of matching rows, recomputed only when the dataset or the
    /// selection/search changed since the previous call.
    pub fn indices(&mut self, rows: &Arc<[Row]>, selection: &FilterSelection, search: &str) -> &[usize] {
        let fingerprint = FilterFingerprint::of(selection, search);
        let fresh = matches!(&self.key, Some((cached, fp)) if Arc::ptr_eq(cached, rows) && *fp == fingerprint);

        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.indices = filter_indices(rows, selection, search);
            self.key = Some((Arc::clone(rows), fingerprint));
            debug!(
                rows_in = rows.len(),
                rows_out = self.indices.len(),
                %fingerprint,
                "filter pass"
            );
        }
        &self.indices
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.indices.clear();
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

/// Owner of the dataset and the current filter state.
#[derive(Debug)]
pub struct Screener {
    rows: Arc<[Row]>,
    state: FilterState,
    memo: FilterMemo,
}

impl Screener {
    pub fn new(rows: impl Into<Arc<[Row]>>) -> Self {
        Self::with_state(rows, FilterState::default())
    }

    pub fn with_state(rows: impl Into<Arc<[Row]>>, state: FilterState) -> Self {
        Self {
            rows: rows.into(),
            state,
            memo: FilterMemo::new(),
        }
    }

    pub fn rows(&self) -> &Arc<[Row]> {
        &self.rows
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Swap in a new dataset; the next read recomputes. The memo drops its
    /// handle on the old rows right away.
    pub fn set_rows(&mut self, rows: impl Into<Arc<[Row]>>) {
        self.rows = rows.into();
        self.memo.invalidate();
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.state.tab = tab;
    }

    pub fn select(&mut self, category: &str, option: &str) {
        self.state.selection.select(category, option);
    }

    pub fn toggle(&mut self, category: &str, option: &str) {
        self.state.selection.toggle(category, option);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.search = search.into();
    }

    pub fn clear_all(&mut self) {
        self.state.clear_all();
    }

    pub fn apply_preset(&mut self, preset: &Preset) {
        self.state.apply_preset(preset);
    }

    /// Replace the whole state, e.g. after rehydrating from a URL.
    pub fn replace_state(&mut self, state: FilterState) {
        self.state = state;
    }

    pub fn active_filter_count(&self) -> usize {
        self.state.selection.active_count()
    }

    /// Rows matching the current state, in dataset order.
    pub fn visible_rows(&mut self) -> Vec<&Row> {
        let indices = self
            .memo
            .indices(&self.rows, &self.state.selection, &self.state.search);
        indices.iter().map(|&i| &self.rows[i]).collect()
    }

    pub fn memo(&self) -> &FilterMemo {
        &self.memo
    }
}
