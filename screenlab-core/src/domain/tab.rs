//! Screener tabs: the groupings the criterion catalog is organized by.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A screener tab. Labels are the exact strings shown to users and carried in
/// URLs and presets (`"ETF Perf"` contains a space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Overview,
    Valuation,
    Financial,
    Ownership,
    Performance,
    Technical,
    #[serde(rename = "ETF")]
    Etf,
    #[serde(rename = "ETF Perf")]
    EtfPerf,
    Custom,
    Charts,
    Tickers,
    Basic,
    #[serde(rename = "TA")]
    Ta,
    News,
    Snapshot,
    Maps,
    Stats,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 17] = [
        Tab::Overview,
        Tab::Valuation,
        Tab::Financial,
        Tab::Ownership,
        Tab::Performance,
        Tab::Technical,
        Tab::Etf,
        Tab::EtfPerf,
        Tab::Custom,
        Tab::Charts,
        Tab::Tickers,
        Tab::Basic,
        Tab::Ta,
        Tab::News,
        Tab::Snapshot,
        Tab::Maps,
        Tab::Stats,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Valuation => "Valuation",
            Tab::Financial => "Financial",
            Tab::Ownership => "Ownership",
            Tab::Performance => "Performance",
            Tab::Technical => "Technical",
            Tab::Etf => "ETF",
            Tab::EtfPerf => "ETF Perf",
            Tab::Custom => "Custom",
            Tab::Charts => "Charts",
            Tab::Tickers => "Tickers",
            Tab::Basic => "Basic",
            Tab::Ta => "TA",
            Tab::News => "News",
            Tab::Snapshot => "Snapshot",
            Tab::Maps => "Maps",
            Tab::Stats => "Stats",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no known tab.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab: {0:?}")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    /// Exact label match; a case-insensitive match is accepted as a fallback
    /// so hand-typed CLI arguments like `valuation` still resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .iter()
            .copied()
            .find(|t| t.label() == s)
            .or_else(|| {
                Tab::ALL
                    .iter()
                    .copied()
                    .find(|t| t.label().eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for tab in Tab::ALL {
            assert_eq!(tab.label().parse::<Tab>().unwrap(), tab);
        }
    }

    #[test]
    fn parse_is_case_insensitive_fallback() {
        assert_eq!("etf perf".parse::<Tab>().unwrap(), Tab::EtfPerf);
        assert_eq!("VALUATION".parse::<Tab>().unwrap(), Tab::Valuation);
    }

    #[test]
    fn unknown_tab_is_an_error() {
        assert_eq!(
            "Crypto".parse::<Tab>(),
            Err(UnknownTab("Crypto".to_string()))
        );
    }

    #[test]
    fn serde_uses_display_labels() {
        assert_eq!(serde_json::to_string(&Tab::EtfPerf).unwrap(), "\"ETF Perf\"");
        let tab: Tab = serde_json::from_str("\"TA\"").unwrap();
        assert_eq!(tab, Tab::Ta);
    }

    #[test]
    fn default_is_overview() {
        assert_eq!(Tab::default(), Tab::Overview);
    }
}
