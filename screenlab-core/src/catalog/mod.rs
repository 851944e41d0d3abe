//! Criterion catalog: static filter categories grouped by tab.
//!
//! Every category's first option is the `"Any"` sentinel. Numeric options
//! carry a [`Rule`]; text categories compare the selected label against a row
//! field; informational categories describe data the row set does not carry
//! and never restrict.

mod definitions;
pub mod rule;

pub use rule::{Comparator, Metric, Rule, TextField};

use crate::domain::Tab;

/// Option label meaning "no constraint".
pub const ANY: &str = "Any";

/// True when an option value places no constraint on a category.
pub fn is_unconstrained(option: &str) -> bool {
    option.is_empty() || option == ANY
}

/// Identity of a filter category. Names are unique across the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryId {
    // Overview
    Exchange,
    Sector,
    Industry,
    Country,
    MarketCap,
    // Valuation
    Pe,
    ForwardPe,
    Peg,
    Ps,
    Pb,
    // Financial
    DividendYield,
    Roe,
    Roa,
    CurrentRatio,
    DebtEquity,
    GrossMargin,
    OperatingMargin,
    NetProfitMargin,
    // Ownership
    InsiderOwnership,
    InstitutionalOwnership,
    // Performance
    PerformanceWeek,
    PerformanceMonth,
    PerformanceYear,
    EpsGrowth,
    // Technical
    Price,
    Volume,
    RelativeVolume,
    Beta,
    Rsi,
    Change,
    // ETF
    EtfCategory,
    Issuer,
    Assets,
    // ETF Perf
    EtfPerformance,
    Volatility,
    // Custom
    AnalystRecom,
    OptionShort,
    EarningsDate,
    IpoDate,
    TargetPrice,
    // Charts
    ChartType,
    Timeframe,
    // Tickers
    Display,
    // Basic
    View,
    // TA
    Pattern,
    Candlestick,
    Gap,
    // News
    NewsType,
    // Snapshot
    SnapshotView,
    // Maps
    MapType,
    Grouping,
    // Stats
    Statistics,
}

/// How a category's selected option is evaluated against a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Each option carries a [`Rule`].
    Numeric,
    /// The selected label must equal the row's field verbatim.
    Text(TextField),
    /// No row data backs this category; it never restricts.
    Informational,
}

impl CategoryId {
    pub const ALL: [CategoryId; 52] = [
        CategoryId::Exchange,
        CategoryId::Sector,
        CategoryId::Industry,
        CategoryId::Country,
        CategoryId::MarketCap,
        CategoryId::Pe,
        CategoryId::ForwardPe,
        CategoryId::Peg,
        CategoryId::Ps,
        CategoryId::Pb,
        CategoryId::DividendYield,
        CategoryId::Roe,
        CategoryId::Roa,
        CategoryId::CurrentRatio,
        CategoryId::DebtEquity,
        CategoryId::GrossMargin,
        CategoryId::OperatingMargin,
        CategoryId::NetProfitMargin,
        CategoryId::InsiderOwnership,
        CategoryId::InstitutionalOwnership,
        CategoryId::PerformanceWeek,
        CategoryId::PerformanceMonth,
        CategoryId::PerformanceYear,
        CategoryId::EpsGrowth,
        CategoryId::Price,
        CategoryId::Volume,
        CategoryId::RelativeVolume,
        CategoryId::Beta,
        CategoryId::Rsi,
        CategoryId::Change,
        CategoryId::EtfCategory,
        CategoryId::Issuer,
        CategoryId::Assets,
        CategoryId::EtfPerformance,
        CategoryId::Volatility,
        CategoryId::AnalystRecom,
        CategoryId::OptionShort,
        CategoryId::EarningsDate,
        CategoryId::IpoDate,
        CategoryId::TargetPrice,
        CategoryId::ChartType,
        CategoryId::Timeframe,
        CategoryId::Display,
        CategoryId::View,
        CategoryId::Pattern,
        CategoryId::Candlestick,
        CategoryId::Gap,
        CategoryId::NewsType,
        CategoryId::SnapshotView,
        CategoryId::MapType,
        CategoryId::Grouping,
        CategoryId::Statistics,
    ];

    /// The display name, also used as the URL/preset key.
    pub fn name(self) -> &'static str {
        match self {
            CategoryId::Exchange => "Exchange",
            CategoryId::Sector => "Sector",
            CategoryId::Industry => "Industry",
            CategoryId::Country => "Country",
            CategoryId::MarketCap => "Market Cap",
            CategoryId::Pe => "P/E",
            CategoryId::ForwardPe => "Forward P/E",
            CategoryId::Peg => "PEG",
            CategoryId::Ps => "P/S",
            CategoryId::Pb => "P/B",
            CategoryId::DividendYield => "Dividend Yield",
            CategoryId::Roe => "ROE",
            CategoryId::Roa => "ROA",
            CategoryId::CurrentRatio => "Current Ratio",
            CategoryId::DebtEquity => "Debt/Equity",
            CategoryId::GrossMargin => "Gross Margin",
            CategoryId::OperatingMargin => "Operating Margin",
            CategoryId::NetProfitMargin => "Net Profit Margin",
            CategoryId::InsiderOwnership => "Insider Ownership",
            CategoryId::InstitutionalOwnership => "Institutional Ownership",
            CategoryId::PerformanceWeek => "Performance Week",
            CategoryId::PerformanceMonth => "Performance Month",
            CategoryId::PerformanceYear => "Performance Year",
            CategoryId::EpsGrowth => "EPS Growth",
            CategoryId::Price => "Price",
            CategoryId::Volume => "Volume",
            CategoryId::RelativeVolume => "Relative Volume",
            CategoryId::Beta => "Beta",
            CategoryId::Rsi => "RSI",
            CategoryId::Change => "Change",
            CategoryId::EtfCategory => "Category",
            CategoryId::Issuer => "Issuer",
            CategoryId::Assets => "Assets",
            CategoryId::EtfPerformance => "Performance",
            CategoryId::Volatility => "Volatility",
            CategoryId::AnalystRecom => "Analyst Recom.",
            CategoryId::OptionShort => "Option/Short",
            CategoryId::EarningsDate => "Earnings Date",
            CategoryId::IpoDate => "IPO Date",
            CategoryId::TargetPrice => "Target Price",
            CategoryId::ChartType => "Chart Type",
            CategoryId::Timeframe => "Timeframe",
            CategoryId::Display => "Display",
            CategoryId::View => "View",
            CategoryId::Pattern => "Pattern",
            CategoryId::Candlestick => "Candlestick",
            CategoryId::Gap => "Gap",
            CategoryId::NewsType => "News Type",
            CategoryId::SnapshotView => "Snapshot View",
            CategoryId::MapType => "Map Type",
            CategoryId::Grouping => "Grouping",
            CategoryId::Statistics => "Statistics",
        }
    }

    /// Resolve a category by its exact display name.
    pub fn from_name(name: &str) -> Option<CategoryId> {
        CategoryId::ALL.iter().copied().find(|c| c.name() == name)
    }

    pub fn kind(self) -> CategoryKind {
        match self {
            CategoryId::Exchange => CategoryKind::Text(TextField::Exchange),
            CategoryId::Sector => CategoryKind::Text(TextField::Sector),
            CategoryId::Industry => CategoryKind::Text(TextField::Industry),
            CategoryId::Country => CategoryKind::Text(TextField::Country),
            CategoryId::MarketCap
            | CategoryId::Pe
            | CategoryId::ForwardPe
            | CategoryId::Peg
            | CategoryId::Ps
            | CategoryId::Pb
            | CategoryId::DividendYield
            | CategoryId::Roe
            | CategoryId::Roa
            | CategoryId::CurrentRatio
            | CategoryId::DebtEquity
            | CategoryId::GrossMargin
            | CategoryId::OperatingMargin
            | CategoryId::NetProfitMargin
            | CategoryId::InsiderOwnership
            | CategoryId::InstitutionalOwnership
            | CategoryId::PerformanceWeek
            | CategoryId::PerformanceMonth
            | CategoryId::PerformanceYear
            | CategoryId::EpsGrowth
            | CategoryId::Price
            | CategoryId::Volume
            | CategoryId::RelativeVolume
            | CategoryId::Beta
            | CategoryId::Rsi
            | CategoryId::Change => CategoryKind::Numeric,
            CategoryId::EtfCategory
            | CategoryId::Issuer
            | CategoryId::Assets
            | CategoryId::EtfPerformance
            | CategoryId::Volatility
            | CategoryId::AnalystRecom
            | CategoryId::OptionShort
            | CategoryId::EarningsDate
            | CategoryId::IpoDate
            | CategoryId::TargetPrice
            | CategoryId::ChartType
            | CategoryId::Timeframe
            | CategoryId::Display
            | CategoryId::View
            | CategoryId::Pattern
            | CategoryId::Candlestick
            | CategoryId::Gap
            | CategoryId::NewsType
            | CategoryId::SnapshotView
            | CategoryId::MapType
            | CategoryId::Grouping
            | CategoryId::Statistics => CategoryKind::Informational,
        }
    }

    /// The catalog entry defining this category's options.
    pub fn category(self) -> &'static Category {
        Tab::ALL
            .iter()
            .flat_map(|tab| categories_for_tab(*tab))
            .find(|c| c.id == self)
            .unwrap_or_else(|| unreachable!("every CategoryId has a catalog entry"))
    }
}

/// One selectable option: its display label plus, for numeric categories,
/// the rule it stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionOption {
    pub label: &'static str,
    pub rule: Option<Rule>,
}

/// A named filter axis and its ordered options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub options: &'static [CriterionOption],
}

impl Category {
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn kind(&self) -> CategoryKind {
        self.id.kind()
    }

    /// Look up an option by its exact label.
    pub fn option(&self, label: &str) -> Option<&'static CriterionOption> {
        self.options.iter().find(|o| o.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        self.options.iter().map(|o| o.label)
    }
}

/// Ordered categories shown under `tab`.
pub fn categories_for_tab(tab: Tab) -> &'static [Category] {
    definitions::for_tab(tab)
}

/// Find a category by name anywhere in the catalog.
pub fn find_category(name: &str) -> Option<&'static Category> {
    CategoryId::from_name(name).map(CategoryId::category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_tab_has_categories() {
        for tab in Tab::ALL {
            assert!(!categories_for_tab(tab).is_empty(), "{tab} has no categories");
        }
    }

    #[test]
    fn first_option_is_any() {
        for tab in Tab::ALL {
            for cat in categories_for_tab(tab) {
                assert_eq!(cat.options[0].label, ANY, "{} in {tab}", cat.name());
                assert!(cat.options[0].rule.is_none());
            }
        }
    }

    #[test]
    fn category_names_are_unique_across_tabs() {
        let mut seen = HashSet::new();
        for tab in Tab::ALL {
            for cat in categories_for_tab(tab) {
                assert!(seen.insert(cat.name()), "duplicate category {}", cat.name());
            }
        }
        assert_eq!(seen.len(), CategoryId::ALL.len());
    }

    #[test]
    fn every_id_resolves_by_name() {
        for id in CategoryId::ALL {
            assert_eq!(CategoryId::from_name(id.name()), Some(id));
            assert_eq!(id.category().id, id);
        }
        assert_eq!(CategoryId::from_name("p/e"), None);
    }

    #[test]
    fn numeric_options_all_carry_rules() {
        for id in CategoryId::ALL {
            let cat = id.category();
            match id.kind() {
                CategoryKind::Numeric => {
                    for opt in &cat.options[1..] {
                        assert!(opt.rule.is_some(), "{} / {} has no rule", cat.name(), opt.label);
                    }
                }
                CategoryKind::Text(_) | CategoryKind::Informational => {
                    assert!(cat.options.iter().all(|o| o.rule.is_none()));
                }
            }
        }
    }

    #[test]
    fn option_labels_unique_within_category() {
        for id in CategoryId::ALL {
            let cat = id.category();
            let labels: HashSet<_> = cat.labels().collect();
            assert_eq!(labels.len(), cat.options.len(), "{}", cat.name());
        }
    }


    #[test]
    fn unconstrained_values() {
        assert!(is_unconstrained(""));
        assert!(is_unconstrained("Any"));
        assert!(!is_unconstrained("any"));
        assert!(!is_unconstrained("Under 15"));
    }
}
