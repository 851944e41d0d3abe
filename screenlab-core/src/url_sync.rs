//! URL synchronizer: filter state to and from query strings.
//!
//! Reserved keys are `tab` and `search`; every other key is a category name
//! whose value is an option label. Decoding never fails: unknown tabs fall
//! back to the default tab, unconstrained values are dropped, and filter
//! entries are taken verbatim without validation against the catalog.

use tracing::{debug, warn};
use url::{form_urlencoded, Url};

use crate::domain::Tab;
use crate::selection::{FilterSelection, FilterState};

pub const TAB_KEY: &str = "tab";
pub const SEARCH_KEY: &str = "search";

/// Serializer/deserializer between [`FilterState`] and query strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlSync {
    default_tab: Tab,
}

impl UrlSync {
    pub fn new(default_tab: Tab) -> Self {
        Self { default_tab }
    }

    pub fn default_tab(&self) -> Tab {
        self.default_tab
    }

    /// Encode `state` as a query string (no leading `?`).
    ///
    /// `tab` is omitted when it is the default tab, `search` when empty.
    pub fn serialize(&self, state: &FilterState) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if state.tab != self.default_tab {
            query.append_pair(TAB_KEY, state.tab.label());
        }
        if !state.search.is_empty() {
            query.append_pair(SEARCH_KEY, &state.search);
        }
        for (category, option) in state.selection.iter() {
            query.append_pair(category, option);
        }
        query.finish()
    }

    /// Decode a query string, with or without a leading `?`.
    pub fn deserialize(&self, query: &str) -> FilterState {
        let query = query.strip_prefix('?').unwrap_or(query);
        self.from_pairs(form_urlencoded::parse(query.as_bytes()).into_owned())
    }

    /// Decode the query of a full URL. An unparsable URL yields the default
    /// state.
    pub fn from_url(&self, url: &str) -> FilterState {
        match Url::parse(url) {
            Ok(parsed) => self.from_pairs(parsed.query_pairs().into_owned()),
            Err(err) => {
                warn!(url, %err, "unparsable url, using default filter state");
                FilterState::new(self.default_tab)
            }
        }
    }

    /// `base` with its query replaced by the encoded state. This is the
    /// replace-in-place target; no navigation history is implied.
    pub fn to_url(&self, base: &Url, state: &FilterState) -> Url {
        let mut url = base.clone();
        let query = self.serialize(state);
        url.set_query((!query.is_empty()).then_some(query.as_str()));
        url
    }

    fn from_pairs(&self, pairs: impl IntoIterator<Item = (String, String)>) -> FilterState {
        let mut tab = self.default_tab;
        let mut search = String::new();
        let mut selection = FilterSelection::new();

        for (key, value) in pairs {
            match key.as_str() {
                TAB_KEY => match value.parse::<Tab>() {
                    Ok(parsed) => tab = parsed,
                    Err(err) => debug!(%err, "ignoring tab parameter"),
                },
                SEARCH_KEY => search = value,
                "" => {}
                _ => selection.select(key, value),
            }
        }

        FilterState {
            tab,
            selection,
            search,
        }
    }
}
