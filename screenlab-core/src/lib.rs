//! ScreenLab Core: criterion catalog, predicate evaluator, filter engine.
//!
//! This crate contains everything a screener front end needs below the UI:
//! - Domain types (rows, tabs)
//! - Static criterion catalog with typed threshold rules per option
//! - Predicate evaluator resolving (category, option) pairs into row tests
//! - Filter state, the memoized screener engine, and fingerprints
//! - Preset store with built-in presets
//! - URL query synchronization
//! - Dataset loading (JSON/CSV), bundled sample and synthetic rows
//! - TOML configuration

pub mod catalog;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod fingerprint;
pub mod predicate;
pub mod preset;
pub mod selection;
pub mod url_sync;

pub use catalog::{categories_for_tab, find_category, Category, CategoryId, CategoryKind};
pub use config::{ConfigError, ScreenerConfig};
pub use data::{load_rows, sample_rows, synthetic_rows, DatasetError};
pub use domain::{Row, Tab};
pub use engine::{filter_indices, filter_rows, CompiledFilter, FilterMemo, Screener};
pub use fingerprint::FilterFingerprint;
pub use predicate::{matches, Criterion};
pub use preset::{Preset, PresetError, PresetStore};
pub use selection::{FilterSelection, FilterState};
pub use url_sync::UrlSync;
