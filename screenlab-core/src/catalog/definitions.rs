//! Catalog tables, one static array per tab.

use super::rule::{above, at_least, at_most, below, between, Metric, Rule};
use super::{Category, CategoryId, CriterionOption, ANY};
use crate::domain::Tab;

const fn any() -> CriterionOption {
    CriterionOption {
        label: ANY,
        rule: None,
    }
}

const fn label(label: &'static str) -> CriterionOption {
    CriterionOption { label, rule: None }
}

const fn opt(label: &'static str, rule: Rule) -> CriterionOption {
    CriterionOption {
        label,
        rule: Some(rule),
    }
}

const fn cat(id: CategoryId, options: &'static [CriterionOption]) -> Category {
    Category { id, options }
}

static OVERVIEW: [Category; 5] = [
    cat(
        CategoryId::Exchange,
        &[any(), label("NYSE"), label("NASDAQ"), label("AMEX")],
    ),
    cat(
        CategoryId::Sector,
        &[
            any(),
            label("Technology"),
            label("Healthcare"),
            label("Financial"),
            label("Consumer Cyclical"),
            label("Industrials"),
            label("Energy"),
            label("Communication Services"),
        ],
    ),
    cat(
        CategoryId::Industry,
        &[
            any(),
            label("Software"),
            label("Semiconductors"),
            label("Biotechnology"),
            label("Banks"),
            label("Oil & Gas"),
            label("Pharmaceuticals"),
            label("Auto Manufacturers"),
        ],
    ),
    cat(
        CategoryId::Country,
        &[
            any(),
            label("USA"),
            label("China"),
            label("Japan"),
            label("United Kingdom"),
            label("Canada"),
        ],
    ),
    cat(
        CategoryId::MarketCap,
        &[
            any(),
            opt("Mega ($200bln+)", at_least(Metric::MarketCap, 200.0)),
            opt(
                "Large ($10bln to $200bln)",
                between(Metric::MarketCap, 10.0, 200.0),
            ),
            opt("Mid ($2bln to $10bln)", between(Metric::MarketCap, 2.0, 10.0)),
            opt(
                "Small ($300mln to $2bln)",
                between(Metric::MarketCap, 0.3, 2.0),
            ),
        ],
    ),
];

static VALUATION: [Category; 5] = [
    cat(
        CategoryId::Pe,
        &[
            any(),
            opt("Low (<15)", below(Metric::Pe, 15.0)),
            opt("Profitable (>0)", above(Metric::Pe, 0.0)),
            opt("High (>50)", at_least(Metric::Pe, 50.0)),
            opt("Under 15", below(Metric::Pe, 15.0)),
            opt("Under 20", below(Metric::Pe, 20.0)),
            opt("Under 30", below(Metric::Pe, 30.0)),
            opt("Over 30", at_least(Metric::Pe, 30.0)),
        ],
    ),
    cat(
        CategoryId::ForwardPe,
        &[
            any(),
            opt("Low (<15)", below(Metric::ForwardPe, 15.0)),
            opt("Under 15", below(Metric::ForwardPe, 15.0)),
            opt("Under 20", below(Metric::ForwardPe, 20.0)),
            opt("Over 20", at_least(Metric::ForwardPe, 20.0)),
        ],
    ),
    cat(
        CategoryId::Peg,
        &[
            any(),
            opt("Low (<1)", below(Metric::Peg, 1.0)),
            opt("High (>2)", at_least(Metric::Peg, 2.0)),
            opt("Under 1", below(Metric::Peg, 1.0)),
            opt("Under 2", below(Metric::Peg, 2.0)),
            opt("Over 2", at_least(Metric::Peg, 2.0)),
        ],
    ),
    cat(
        CategoryId::Ps,
        &[
            any(),
            opt("Low (<1)", below(Metric::Ps, 1.0)),
            opt("Under 1", below(Metric::Ps, 1.0)),
            opt("Under 3", below(Metric::Ps, 3.0)),
            opt("Over 3", at_least(Metric::Ps, 3.0)),
            opt("Over 10", at_least(Metric::Ps, 10.0)),
        ],
    ),
    cat(
        CategoryId::Pb,
        &[
            any(),
            opt("Low (<1)", below(Metric::Pb, 1.0)),
            opt("Under 1", below(Metric::Pb, 1.0)),
            opt("Under 3", below(Metric::Pb, 3.0)),
            opt("Over 3", at_least(Metric::Pb, 3.0)),
            opt("Over 5", at_least(Metric::Pb, 5.0)),
        ],
    ),
];

static FINANCIAL: [Category; 8] = [
    cat(
        CategoryId::DividendYield,
        &[
            any(),
            opt("None (0%)", at_most(Metric::DividendYield, 0.0)),
            opt("Positive (>0%)", above(Metric::DividendYield, 0.0)),
            opt("Over 2%", at_least(Metric::DividendYield, 2.0)),
            opt("Over 3%", at_least(Metric::DividendYield, 3.0)),
            opt("Over 5%", at_least(Metric::DividendYield, 5.0)),
        ],
    ),
    cat(
        CategoryId::Roe,
        &[
            any(),
            opt("Positive (>0%)", above(Metric::Roe, 0.0)),
            opt("Very Positive (>15%)", at_least(Metric::Roe, 15.0)),
            opt("Over 15%", at_least(Metric::Roe, 15.0)),
            opt("Over 20%", at_least(Metric::Roe, 20.0)),
            opt("Over 30%", at_least(Metric::Roe, 30.0)),
        ],
    ),
    cat(
        CategoryId::Roa,
        &[
            any(),
            opt("Positive (>0%)", above(Metric::Roa, 0.0)),
            opt("Over 10%", at_least(Metric::Roa, 10.0)),
            opt("Over 15%", at_least(Metric::Roa, 15.0)),
        ],
    ),
    cat(
        CategoryId::CurrentRatio,
        &[
            any(),
            opt("Over 1", at_least(Metric::CurrentRatio, 1.0)),
            opt("Over 1.5", at_least(Metric::CurrentRatio, 1.5)),
            opt("Over 2", at_least(Metric::CurrentRatio, 2.0)),
        ],
    ),
    cat(
        CategoryId::DebtEquity,
        &[
            any(),
            opt("Low (<0.1)", below(Metric::DebtEquity, 0.1)),
            opt("Under 0.5", below(Metric::DebtEquity, 0.5)),
            opt("Over 0.5", at_least(Metric::DebtEquity, 0.5)),
        ],
    ),
    cat(
        CategoryId::GrossMargin,
        &[
            any(),
            opt("Positive (>0%)", above(Metric::GrossMargin, 0.0)),
            opt("Over 30%", at_least(Metric::GrossMargin, 30.0)),
            opt("Over 50%", at_least(Metric::GrossMargin, 50.0)),
        ],
    ),
    cat(
        CategoryId::OperatingMargin,
        &[
            any(),
            opt("Positive (>0%)", above(Metric::OperatingMargin, 0.0)),
            opt("Over 10%", at_least(Metric::OperatingMargin, 10.0)),
            opt("Over 20%", at_least(Metric::OperatingMargin, 20.0)),
        ],
    ),
    cat(
        CategoryId::NetProfitMargin,
        &[
            any(),
            opt("Positive (>0%)", above(Metric::NetMargin, 0.0)),
            opt("Over 10%", at_least(Metric::NetMargin, 10.0)),
            opt("Over 20%", at_least(Metric::NetMargin, 20.0)),
        ],
    ),
];

static OWNERSHIP: [Category; 2] = [
    cat(
        CategoryId::InsiderOwnership,
        &[
            any(),
            opt("Low (<5%)", below(Metric::InsiderOwnership, 5.0)),
            opt("High (>30%)", at_least(Metric::InsiderOwnership, 30.0)),
            opt("Over 10%", at_least(Metric::InsiderOwnership, 10.0)),
            opt("Over 20%", at_least(Metric::InsiderOwnership, 20.0)),
            opt("Over 30%", at_least(Metric::InsiderOwnership, 30.0)),
        ],
    ),
    cat(
        CategoryId::InstitutionalOwnership,
        &[
            any(),
            opt("Low (<5%)", below(Metric::InstitutionalOwnership, 5.0)),
            opt("High (>90%)", at_least(Metric::InstitutionalOwnership, 90.0)),
            opt("Over 50%", at_least(Metric::InstitutionalOwnership, 50.0)),
            opt("Over 70%", at_least(Metric::InstitutionalOwnership, 70.0)),
        ],
    ),
];

static PERFORMANCE: [Category; 4] = [
    cat(
        CategoryId::PerformanceWeek,
        &[
            any(),
            opt("Up", above(Metric::PerfWeek, 0.0)),
            opt("Down", below(Metric::PerfWeek, 0.0)),
            opt("Up 5%+", at_least(Metric::PerfWeek, 5.0)),
            opt("Up 10%+", at_least(Metric::PerfWeek, 10.0)),
            opt("Down 5%+", at_most(Metric::PerfWeek, -5.0)),
            opt("Down 10%+", at_most(Metric::PerfWeek, -10.0)),
        ],
    ),
    cat(
        CategoryId::PerformanceMonth,
        &[
            any(),
            opt("Up", above(Metric::PerfMonth, 0.0)),
            opt("Down", below(Metric::PerfMonth, 0.0)),
            opt("Up 10%+", at_least(Metric::PerfMonth, 10.0)),
            opt("Up 20%+", at_least(Metric::PerfMonth, 20.0)),
            opt("Down 10%+", at_most(Metric::PerfMonth, -10.0)),
        ],
    ),
    cat(
        CategoryId::PerformanceYear,
        &[
            any(),
            opt("Up", above(Metric::PerfYear, 0.0)),
            opt("Down", below(Metric::PerfYear, 0.0)),
            opt("Up 50%+", at_least(Metric::PerfYear, 50.0)),
            opt("Up 100%+", at_least(Metric::PerfYear, 100.0)),
            opt("Down 50%+", at_most(Metric::PerfYear, -50.0)),
        ],
    ),
    cat(
        CategoryId::EpsGrowth,
        &[
            any(),
            opt("Positive (>0%)", above(Metric::EpsGrowth, 0.0)),
            opt("Over 10%", at_least(Metric::EpsGrowth, 10.0)),
            opt("Over 20%", at_least(Metric::EpsGrowth, 20.0)),
            opt("Over 25%", at_least(Metric::EpsGrowth, 25.0)),
        ],
    ),
];

static TECHNICAL: [Category; 6] = [
    cat(
        CategoryId::Price,
        &[
            any(),
            opt("Under $10", below(Metric::Price, 10.0)),
            opt("Under $20", below(Metric::Price, 20.0)),
            opt("Under $50", below(Metric::Price, 50.0)),
            opt("Over $10", at_least(Metric::Price, 10.0)),
            opt("Over $50", at_least(Metric::Price, 50.0)),
            opt("Over $100", at_least(Metric::Price, 100.0)),
        ],
    ),
    cat(
        CategoryId::Volume,
        &[
            any(),
            opt("Over 100K", at_least(Metric::Volume, 100_000.0)),
            opt("Over 500K", at_least(Metric::Volume, 500_000.0)),
            opt("Over 1M", at_least(Metric::Volume, 1_000_000.0)),
            opt("Over 5M", at_least(Metric::Volume, 5_000_000.0)),
        ],
    ),
    cat(
        CategoryId::RelativeVolume,
        &[
            any(),
            opt("Over 0.5", at_least(Metric::RelativeVolume, 0.5)),
            opt("Over 1", at_least(Metric::RelativeVolume, 1.0)),
            opt("Over 1.5", at_least(Metric::RelativeVolume, 1.5)),
            opt("Over 2", at_least(Metric::RelativeVolume, 2.0)),
        ],
    ),
    cat(
        CategoryId::Beta,
        &[
            any(),
            opt("Under 1", below(Metric::Beta, 1.0)),
            opt("Under 1.5", below(Metric::Beta, 1.5)),
            opt("Over 1", at_least(Metric::Beta, 1.0)),
            opt("Over 1.5", at_least(Metric::Beta, 1.5)),
            opt("Over 2", at_least(Metric::Beta, 2.0)),
        ],
    ),
    cat(
        CategoryId::Rsi,
        &[
            any(),
            opt("Overbought (>70)", at_least(Metric::Rsi, 70.0)),
            opt("Oversold (<30)", below(Metric::Rsi, 30.0)),
            opt("Not Overbought (<70)", below(Metric::Rsi, 70.0)),
            opt("Not Oversold (>30)", at_least(Metric::Rsi, 30.0)),
        ],
    ),
    cat(
        CategoryId::Change,
        &[
            any(),
            opt("Up", above(Metric::Change, 0.0)),
            opt("Down", below(Metric::Change, 0.0)),
            opt("Up 1%", at_least(Metric::Change, 1.0)),
            opt("Up 5%", at_least(Metric::Change, 5.0)),
            opt("Down 1%", at_most(Metric::Change, -1.0)),
            opt("Down 5%", at_most(Metric::Change, -5.0)),
        ],
    ),
];

static ETF: [Category; 3] = [
    cat(
        CategoryId::EtfCategory,
        &[
            any(),
            label("Equity"),
            label("Bond"),
            label("Commodity"),
            label("Currency"),
            label("Hybrid"),
        ],
    ),
    cat(
        CategoryId::Issuer,
        &[
            any(),
            label("Vanguard"),
            label("iShares"),
            label("SPDR"),
            label("Invesco"),
            label("Schwab"),
        ],
    ),
    cat(
        CategoryId::Assets,
        &[any(), label("Over $1B"), label("Over $5B"), label("Over $10B")],
    ),
];

static ETF_PERF: [Category; 2] = [
    cat(
        CategoryId::EtfPerformance,
        &[
            any(),
            label("Up Today"),
            label("Down Today"),
            label("Up Week"),
            label("Down Week"),
            label("Up Month"),
            label("Down Month"),
        ],
    ),
    cat(
        CategoryId::Volatility,
        &[any(), label("Low"), label("Medium"), label("High")],
    ),
];

static CUSTOM: [Category; 5] = [
    cat(
        CategoryId::AnalystRecom,
        &[
            any(),
            label("Strong Buy"),
            label("Buy"),
            label("Hold"),
            label("Underperform"),
            label("Sell"),
        ],
    ),
    cat(
        CategoryId::OptionShort,
        &[
            any(),
            label("Optionable"),
            label("Shortable"),
            label("Optionable & Shortable"),
        ],
    ),
    cat(
        CategoryId::EarningsDate,
        &[
            any(),
            label("Today"),
            label("This Week"),
            label("Next Week"),
            label("This Month"),
        ],
    ),
    cat(
        CategoryId::IpoDate,
        &[
            any(),
            label("Last Year"),
            label("Last 2 Years"),
            label("Last 5 Years"),
            label("More than 5 Years"),
        ],
    ),
    cat(
        CategoryId::TargetPrice,
        &[
            any(),
            label("Above Price"),
            label("Below Price"),
            label("10% Above"),
            label("10% Below"),
        ],
    ),
];

static CHARTS: [Category; 2] = [
    cat(
        CategoryId::ChartType,
        &[
            any(),
            label("Candlestick"),
            label("Line"),
            label("Area"),
            label("OHLC"),
        ],
    ),
    cat(
        CategoryId::Timeframe,
        &[
            any(),
            label("Intraday"),
            label("Daily"),
            label("Weekly"),
            label("Monthly"),
        ],
    ),
];

static TICKERS: [Category; 1] = [cat(
    CategoryId::Display,
    &[
        any(),
        label("Ticker Only"),
        label("Ticker + Name"),
        label("Name Only"),
    ],
)];

static BASIC: [Category; 1] = [cat(
    CategoryId::View,
    &[
        any(),
        label("Overview"),
        label("Valuation"),
        label("Financial"),
        label("Ownership"),
        label("Performance"),
        label("Technical"),
    ],
)];

static TA: [Category; 3] = [
    cat(
        CategoryId::Pattern,
        &[
            any(),
            label("Head and Shoulders"),
            label("Triangle"),
            label("Wedge"),
            label("Channel"),
            label("Double Top"),
            label("Double Bottom"),
        ],
    ),
    cat(
        CategoryId::Candlestick,
        &[
            any(),
            label("Doji"),
            label("Hammer"),
            label("Shooting Star"),
            label("Engulfing"),
            label("Morning Star"),
            label("Evening Star"),
        ],
    ),
    cat(
        CategoryId::Gap,
        &[any(), label("Gap Up"), label("Gap Down"), label("No Gap")],
    ),
];

static NEWS: [Category; 1] = [cat(
    CategoryId::NewsType,
    &[
        any(),
        label("All News"),
        label("Earnings"),
        label("FDA"),
        label("Upgrades"),
        label("Downgrades"),
    ],
)];

static SNAPSHOT: [Category; 1] = [cat(
    CategoryId::SnapshotView,
    &[any(), label("Compact"), label("Detailed"), label("Grid")],
)];

static MAPS: [Category; 2] = [
    cat(
        CategoryId::MapType,
        &[
            any(),
            label("Performance"),
            label("Market Cap"),
            label("Volume"),
        ],
    ),
    cat(
        CategoryId::Grouping,
        &[any(), label("Sector"), label("Industry"), label("Country")],
    ),
];

static STATS: [Category; 1] = [cat(
    CategoryId::Statistics,
    &[
        any(),
        label("Key Stats"),
        label("Trading Info"),
        label("Share Stats"),
        label("Dividends"),
    ],
)];

pub(super) fn for_tab(tab: Tab) -> &'static [Category] {
    match tab {
        Tab::Overview => &OVERVIEW,
        Tab::Valuation => &VALUATION,
        Tab::Financial => &FINANCIAL,
        Tab::Ownership => &OWNERSHIP,
        Tab::Performance => &PERFORMANCE,
        Tab::Technical => &TECHNICAL,
        Tab::Etf => &ETF,
        Tab::EtfPerf => &ETF_PERF,
        Tab::Custom => &CUSTOM,
        Tab::Charts => &CHARTS,
        Tab::Tickers => &TICKERS,
        Tab::Basic => &BASIC,
        Tab::Ta => &TA,
        Tab::News => &NEWS,
        Tab::Snapshot => &SNAPSHOT,
        Tab::Maps => &MAPS,
        Tab::Stats => &STATS,
    }
}
