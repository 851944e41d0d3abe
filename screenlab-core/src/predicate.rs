//! Predicate evaluator: turns a (category, option) pair into a row test.
//!
//! Resolution happens once per pair through [`Criterion::resolve`]; the
//! resulting value is a typed test that never looks at label text again.
//! Pairs that cannot be resolved (unknown category, unknown numeric option,
//! informational category) do not restrict: showing more rows is preferred
//! over failing on catalog drift or a hand-edited URL.

use crate::catalog::{is_unconstrained, CategoryId, CategoryKind, Rule, TextField};
use crate::domain::Row;

/// A resolved, restrictive row test.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    Numeric { category: CategoryId, rule: Rule },
    Text { field: TextField, value: String },
}

/// Why a selection entry places no constraint on rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unresolved {
    /// Option is empty or `"Any"`.
    Unconstrained,
    /// The catalog has no category with this name.
    UnknownCategory,
    /// The category exists but has no option with this label.
    UnknownOption,
    /// The category has no row data behind it.
    Informational,
}

impl Criterion {
    /// Resolve a selection entry against the catalog.
    pub fn resolve(category: &str, option: &str) -> Result<Criterion, Unresolved> {
        if is_unconstrained(option) {
            return Err(Unresolved::Unconstrained);
        }
        let id = CategoryId::from_name(category).ok_or(Unresolved::UnknownCategory)?;

        match id.kind() {
            CategoryKind::Text(field) => Ok(Criterion::Text {
                field,
                value: option.to_string(),
            }),
            CategoryKind::Numeric => id
                .category()
                .option(option)
                .and_then(|o| o.rule)
                .map(|rule| Criterion::Numeric { category: id, rule })
                .ok_or(Unresolved::UnknownOption),
            CategoryKind::Informational => Err(Unresolved::Informational),
        }
    }

    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Criterion::Numeric { rule, .. } => rule.matches(row),
            Criterion::Text { field, value } => field.value(row) == value.as_str(),
        }
    }
}

/// Does `row` satisfy `option` for `category`?
///
/// Empty or `"Any"` options, and any pair the catalog cannot resolve, return
/// `true`.
pub fn matches(row: &Row, category: &str, option: &str) -> bool {
    Criterion::resolve(category, option).map_or(true, |c| c.matches(row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_rows;

    fn row(ticker: &str) -> Row {
        sample_rows()
            .into_iter()
            .find(|r| r.ticker == ticker)
            .unwrap()
    }

    #[test]
    fn any_and_empty_always_match() {
        let nvda = row("NVDA");
        assert!(matches(&nvda, "P/E", "Any"));
        assert!(matches(&nvda, "P/E", ""));
        assert!(matches(&nvda, "Sector", "Any"));
    }

    #[test]
    fn text_categories_use_exact_equality() {
        let jpm = row("JPM");
        assert!(matches(&jpm, "Exchange", "NYSE"));
        assert!(!matches(&jpm, "Exchange", "NASDAQ"));
        assert!(matches(&jpm, "Industry", "Banks"));
        assert!(!matches(&jpm, "Sector", "financial"));
    }

    #[test]
    fn text_values_outside_catalog_still_compare() {
        let wmt = row("WMT");
        assert!(matches(&wmt, "Sector", "Consumer Defensive"));
        assert!(!matches(&wmt, "Sector", "Consumer Cyclical"));
    }

    #[test]
    fn over_is_inclusive_under_is_exclusive() {
        let mut r = row("JPM");
        r.roe = 30.0;
        assert!(matches(&r, "ROE", "Over 30%"));
        r.roe = 29.99;
        assert!(!matches(&r, "ROE", "Over 30%"));

        r.pe = 15.0;
        assert!(!matches(&r, "P/E", "Under 15"));
        assert!(!matches(&r, "P/E", "Low (<15)"));
        r.pe = 14.99;
        assert!(matches(&r, "P/E", "Under 15"));
        assert!(matches(&r, "P/E", "Low (<15)"));
    }

    #[test]
    fn positive_is_strict() {
        let mut r = row("GOOGL");
        r.dividend = 0.0;
        assert!(!matches(&r, "Dividend Yield", "Positive (>0%)"));
        assert!(matches(&r, "Dividend Yield", "None (0%)"));
        r.dividend = 0.01;
        assert!(matches(&r, "Dividend Yield", "Positive (>0%)"));
        assert!(!matches(&r, "Dividend Yield", "None (0%)"));
    }

    #[test]
    fn down_thresholds_are_negative_and_inclusive() {
        let mut r = row("TSLA");
        r.perf_week = -5.0;
        assert!(matches(&r, "Performance Week", "Down 5%+"));
        assert!(matches(&r, "Performance Week", "Down"));
        r.perf_week = -4.9;
        assert!(!matches(&r, "Performance Week", "Down 5%+"));
        r.perf_week = 0.0;
        assert!(!matches(&r, "Performance Week", "Down"));
        assert!(!matches(&r, "Performance Week", "Up"));
    }

    #[test]
    fn market_cap_bucket_edges() {
        let mut r = row("NVDA");
        r.market_cap = 200_000_000_000.0;
        assert!(matches(&r, "Market Cap", "Mega ($200bln+)"));
        assert!(!matches(&r, "Market Cap", "Large ($10bln to $200bln)"));

        r.market_cap = 9_999_999_999.0;
        assert!(!matches(&r, "Market Cap", "Large ($10bln to $200bln)"));
        assert!(matches(&r, "Market Cap", "Mid ($2bln to $10bln)"));

        r.market_cap = 300_000_000.0;
        assert!(matches(&r, "Market Cap", "Small ($300mln to $2bln)"));
        r.market_cap = 299_999_999.0;
        assert!(!matches(&r, "Market Cap", "Small ($300mln to $2bln)"));
    }

    #[test]
    fn rsi_not_overbought_is_plain_below() {
        let mut r = row("META");
        r.rsi = 65.0;
        assert!(matches(&r, "RSI", "Not Overbought (<70)"));
        assert!(!matches(&r, "RSI", "Overbought (>70)"));
        r.rsi = 70.0;
        assert!(!matches(&r, "RSI", "Not Overbought (<70)"));
        assert!(matches(&r, "RSI", "Overbought (>70)"));
        r.rsi = 25.0;
        assert!(matches(&r, "RSI", "Oversold (<30)"));
        assert!(!matches(&r, "RSI", "Not Oversold (>30)"));
    }

    #[test]
    fn volume_rules_use_share_counts() {
        let xom = row("XOM"); // 18.5M
        assert!(matches(&xom, "Volume", "Over 5M"));
        let brk = row("BRK.B"); // 3.2M
        assert!(!matches(&brk, "Volume", "Over 5M"));
        assert!(matches(&brk, "Volume", "Over 1M"));
    }

    #[test]
    fn unresolvable_pairs_do_not_restrict() {
        let nvda = row("NVDA");
        assert!(matches(&nvda, "Moat", "Wide"));
        assert!(matches(&nvda, "P/E", "Under 7"));
        assert!(matches(&nvda, "Issuer", "Vanguard"));

        assert_eq!(
            Criterion::resolve("Moat", "Wide"),
            Err(Unresolved::UnknownCategory)
        );
        assert_eq!(
            Criterion::resolve("P/E", "Under 7"),
            Err(Unresolved::UnknownOption)
        );
        assert_eq!(
            Criterion::resolve("Issuer", "Vanguard"),
            Err(Unresolved::Informational)
        );
        assert_eq!(
            Criterion::resolve("P/E", "Any"),
            Err(Unresolved::Unconstrained)
        );
    }
}
