//! Machine-readable threshold descriptors attached to catalog options.
//!
//! Option labels such as `"Over 30%"` are for display only. Each numeric
//! option carries a `Rule` that the evaluator applies directly, so no label
//! text is ever parsed at filter time.

use std::fmt;

use crate::domain::Row;

/// A numeric row field a rule can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Market capitalization in billions.
    MarketCap,
    Price,
    Change,
    Volume,
    RelativeVolume,
    Pe,
    ForwardPe,
    Peg,
    Ps,
    Pb,
    DividendYield,
    Roe,
    Roa,
    CurrentRatio,
    DebtEquity,
    GrossMargin,
    OperatingMargin,
    NetMargin,
    EpsGrowth,
    InsiderOwnership,
    InstitutionalOwnership,
    PerfWeek,
    PerfMonth,
    PerfYear,
    Beta,
    Rsi,
}

impl Metric {
    pub fn value(self, row: &Row) -> f64 {
        match self {
            Metric::MarketCap => row.market_cap_billions(),
            Metric::Price => row.price,
            Metric::Change => row.change,
            Metric::Volume => row.volume,
            Metric::RelativeVolume => row.relative_volume,
            Metric::Pe => row.pe,
            Metric::ForwardPe => row.forward_pe,
            Metric::Peg => row.peg,
            Metric::Ps => row.ps,
            Metric::Pb => row.pb,
            Metric::DividendYield => row.dividend,
            Metric::Roe => row.roe,
            Metric::Roa => row.roa,
            Metric::CurrentRatio => row.current_ratio,
            Metric::DebtEquity => row.debt_equity,
            Metric::GrossMargin => row.gross_margin,
            Metric::OperatingMargin => row.operating_margin,
            Metric::NetMargin => row.net_margin,
            Metric::EpsGrowth => row.eps_growth_this_year,
            Metric::InsiderOwnership => row.insider_ownership,
            Metric::InstitutionalOwnership => row.institutional_ownership,
            Metric::PerfWeek => row.perf_week,
            Metric::PerfMonth => row.perf_month,
            Metric::PerfYear => row.perf_year,
            Metric::Beta => row.beta,
            Metric::Rsi => row.rsi,
        }
    }
}

/// A categorical row field compared by exact string equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Exchange,
    Sector,
    Industry,
    Country,
}

impl TextField {
    pub fn value(self, row: &Row) -> &str {
        match self {
            TextField::Exchange => &row.exchange,
            TextField::Sector => &row.sector,
            TextField::Industry => &row.industry,
            TextField::Country => &row.country,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// `>`
    Above,
    /// `>=`
    AtLeast,
    /// `<`
    Below,
    /// `<=`
    AtMost,
}

impl Comparator {
    pub fn test(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparator::Above => value > threshold,
            Comparator::AtLeast => value >= threshold,
            Comparator::Below => value < threshold,
            Comparator::AtMost => value <= threshold,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::Above => ">",
            Comparator::AtLeast => ">=",
            Comparator::Below => "<",
            Comparator::AtMost => "<=",
        }
    }
}

/// Structured test behind a numeric option label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Threshold {
        metric: Metric,
        comparator: Comparator,
        value: f64,
    },
    /// Half-open interval `[min, max)`.
    Between { metric: Metric, min: f64, max: f64 },
}

impl Rule {
    pub fn matches(&self, row: &Row) -> bool {
        match *self {
            Rule::Threshold {
                metric,
                comparator,
                value,
            } => comparator.test(metric.value(row), value),
            Rule::Between { metric, min, max } => {
                let v = metric.value(row);
                v >= min && v < max
            }
        }
    }

    pub fn metric(&self) -> Metric {
        match *self {
            Rule::Threshold { metric, .. } | Rule::Between { metric, .. } => metric,
        }
    }
}

/// Renders as `Pe < 15` or `MarketCap in [10, 200)`.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metric = self.metric();
        match *self {
            Rule::Threshold {
                comparator, value, ..
            } => write!(f, "{metric:?} {} {value}", comparator.symbol()),
            Rule::Between { min, max, .. } => write!(f, "{metric:?} in [{min}, {max})"),
        }
    }
}

// Constructors used by the catalog tables.

pub(crate) const fn at_least(metric: Metric, value: f64) -> Rule {
    Rule::Threshold {
        metric,
        comparator: Comparator::AtLeast,
        value,
    }
}

pub(crate) const fn above(metric: Metric, value: f64) -> Rule {
    Rule::Threshold {
        metric,
        comparator: Comparator::Above,
        value,
    }
}

pub(crate) const fn below(metric: Metric, value: f64) -> Rule {
    Rule::Threshold {
        metric,
        comparator: Comparator::Below,
        value,
    }
}

pub(crate) const fn at_most(metric: Metric, value: f64) -> Rule {
    Rule::Threshold {
        metric,
        comparator: Comparator::AtMost,
        value,
    }
}

pub(crate) const fn between(metric: Metric, min: f64, max: f64) -> Rule {
    Rule::Between { metric, min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_rows;

    #[test]
    fn comparators_at_the_boundary() {
        assert!(Comparator::AtLeast.test(30.0, 30.0));
        assert!(!Comparator::Above.test(30.0, 30.0));
        assert!(!Comparator::Below.test(15.0, 15.0));
        assert!(Comparator::AtMost.test(0.0, 0.0));
    }

    #[test]
    fn between_is_half_open() {
        let rows = sample_rows();
        let mut row = rows[0].clone();
        let rule = between(Metric::MarketCap, 10.0, 200.0);

        row.market_cap = 10_000_000_000.0;
        assert!(rule.matches(&row));
        row.market_cap = 200_000_000_000.0;
        assert!(!rule.matches(&row));
        row.market_cap = 9_999_999_999.0;
        assert!(!rule.matches(&row));
    }

    #[test]
    fn metric_reads_market_cap_in_billions() {
        let rows = sample_rows();
        let nvda = rows.iter().find(|r| r.ticker == "NVDA").unwrap();
        assert!((Metric::MarketCap.value(nvda) - 2150.0).abs() < 1e-9);
    }

    #[test]
    fn rules_display_metric_and_bounds() {
        assert_eq!(below(Metric::Pe, 15.0).to_string(), "Pe < 15");
        assert_eq!(at_least(Metric::Roe, 20.0).to_string(), "Roe >= 20");
        assert_eq!(above(Metric::Beta, 1.5).to_string(), "Beta > 1.5");
        assert_eq!(
            between(Metric::MarketCap, 10.0, 200.0).to_string(),
            "MarketCap in [10, 200)"
        );
        assert_eq!(at_most(Metric::DebtEquity, 0.5).metric(), Metric::DebtEquity);
    }
}
