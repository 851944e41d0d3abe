//! Filter fingerprinting: deterministic identity of what a filter pass selects.
//!
//! Only the inputs that change which rows pass (selection + search) are hashed;
//! the active tab is left out, so switching tabs reuses results.

use serde_json::json;
use std::fmt;

use crate::selection::FilterSelection;

/// BLAKE3 hash of the canonical (selection, search) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterFingerprint([u8; 32]);

impl FilterFingerprint {
    pub fn of(selection: &FilterSelection, search: &str) -> Self {
        // FilterSelection iterates in key order, so the JSON is canonical.
        let canonical = json!({
            "selection": selection,
            "search": search.to_lowercase(),
        });
        Self(*blake3::hash(canonical.to_string().as_bytes()).as_bytes())
    }

    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for FilterFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
