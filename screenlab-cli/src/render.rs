//! Result rendering: per-tab column sets as a terminal table, JSON or CSV.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};

use screenlab_core::{Row, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// A result-table column. `No.` is the 1-based position in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    No,
    Ticker,
    Company,
    Sector,
    Industry,
    Country,
    MarketCap,
    MktCap,
    Price,
    Change,
    Volume,
    Float,
    Pe,
    ForwardPe,
    Peg,
    Ps,
    Pb,
    Dividend,
    Roe,
    Roa,
    DebtEquity,
    CurrentRatio,
    GrossMargin,
    OperatingMargin,
    NetMargin,
    InsiderOwn,
    InstOwn,
    PerfWeek,
    PerfMonth,
    PerfYear,
    EpsGrowth,
    RelVolume,
    Beta,
    Rsi,
    Sma20,
    Sma50,
    Sma200,
    High,
    Low,
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::No => "No.",
            Column::Ticker => "Ticker",
            Column::Company => "Company",
            Column::Sector => "Sector",
            Column::Industry => "Industry",
            Column::Country => "Country",
            Column::MarketCap => "Market Cap",
            Column::MktCap => "Mkt Cap",
            Column::Price => "Price",
            Column::Change => "Change %",
            Column::Volume => "Volume",
            Column::Float => "Float",
            Column::Pe => "P/E",
            Column::ForwardPe => "Fwd P/E",
            Column::Peg => "PEG",
            Column::Ps => "P/S",
            Column::Pb => "P/B",
            Column::Dividend => "Dividend %",
            Column::Roe => "ROE %",
            Column::Roa => "ROA %",
            Column::DebtEquity => "Debt/Eq",
            Column::CurrentRatio => "Curr Ratio",
            Column::GrossMargin => "Gross M%",
            Column::OperatingMargin => "Oper M%",
            Column::NetMargin => "Net M%",
            Column::InsiderOwn => "Insider Own%",
            Column::InstOwn => "Inst Own%",
            Column::PerfWeek => "Week %",
            Column::PerfMonth => "Month %",
            Column::PerfYear => "Year %",
            Column::EpsGrowth => "EPS Growth %",
            Column::RelVolume => "Rel Vol",
            Column::Beta => "Beta",
            Column::Rsi => "RSI",
            Column::Sma20 => "SMA20",
            Column::Sma50 => "SMA50",
            Column::Sma200 => "SMA200",
            Column::High => "High",
            Column::Low => "Low",
        }
    }

    pub fn cell(self, row: &Row, position: usize) -> String {
        match self {
            Column::No => position.to_string(),
            Column::Ticker => row.ticker.clone(),
            Column::Company => row.company.clone(),
            Column::Sector => row.sector.clone(),
            Column::Industry => row.industry.clone(),
            Column::Country => row.country.clone(),
            Column::MarketCap | Column::MktCap => format_market_cap(row.market_cap),
            Column::Price => format!("${:.2}", row.price),
            Column::Change => signed_percent(row.change, 2),
            Column::Volume | Column::Float => format_volume(row.volume),
            Column::Pe => format!("{:.1}", row.pe),
            Column::ForwardPe => format!("{:.1}", row.forward_pe),
            Column::Peg => format!("{:.2}", row.peg),
            Column::Ps => format!("{:.2}", row.ps),
            Column::Pb => format!("{:.2}", row.pb),
            Column::Dividend if row.dividend > 0.0 => format!("{:.2}%", row.dividend),
            Column::Dividend => "-".to_string(),
            Column::Roe => format!("{:.1}%", row.roe),
            Column::Roa => format!("{:.1}%", row.roa),
            Column::DebtEquity => format!("{:.2}", row.debt_equity),
            Column::CurrentRatio => format!("{:.2}", row.current_ratio),
            Column::GrossMargin => format!("{:.1}%", row.gross_margin),
            Column::OperatingMargin => format!("{:.1}%", row.operating_margin),
            Column::NetMargin => format!("{:.1}%", row.net_margin),
            Column::InsiderOwn => format!("{:.1}%", row.insider_ownership),
            Column::InstOwn => format!("{:.1}%", row.institutional_ownership),
            Column::PerfWeek => signed_percent(row.perf_week, 1),
            Column::PerfMonth => signed_percent(row.perf_month, 1),
            Column::PerfYear => signed_percent(row.perf_year, 1),
            Column::EpsGrowth => format!("{:.1}%", row.eps_growth_this_year),
            Column::RelVolume => format!("{:.2}", row.relative_volume),
            Column::Beta => format!("{:.2}", row.beta),
            Column::Rsi => format!("{:.0}", row.rsi),
            Column::Sma20 => format!("${:.0}", row.sma20),
            Column::Sma50 => format!("${:.0}", row.sma50),
            Column::Sma200 => format!("${:.0}", row.sma200),
            Column::High => format!("${:.2}", row.week52_high),
            Column::Low => format!("${:.2}", row.week52_low),
        }
    }

    /// Signed value driving red/green colouring, for change-style columns.
    fn direction(self, row: &Row) -> Option<f64> {
        match self {
            Column::Change => Some(row.change),
            Column::PerfWeek => Some(row.perf_week),
            Column::PerfMonth => Some(row.perf_month),
            Column::PerfYear => Some(row.perf_year),
            _ => None,
        }
    }

    fn is_text(self) -> bool {
        matches!(
            self,
            Column::Ticker | Column::Company | Column::Sector | Column::Industry | Column::Country
        )
    }
}

/// Column set shown for each tab.
pub fn columns_for_tab(tab: Tab) -> &'static [Column] {
    use Column::*;
    match tab {
        Tab::Overview => &[No, Ticker, Company, Sector, Industry, Country, MarketCap, Price, Change, Volume],
        Tab::Valuation => &[No, Ticker, Company, Price, Pe, ForwardPe, Peg, Ps, Pb, MktCap],
        Tab::Financial => &[
            No, Ticker, Company, Dividend, Roe, Roa, DebtEquity, CurrentRatio, GrossMargin,
            OperatingMargin, NetMargin,
        ],
        Tab::Ownership => &[No, Ticker, Company, Price, InsiderOwn, InstOwn, Float, Volume],
        Tab::Performance => &[No, Ticker, Company, Price, Change, PerfWeek, PerfMonth, PerfYear, EpsGrowth],
        Tab::Technical => &[
            No, Ticker, Company, Price, Change, Volume, RelVolume, Beta, Rsi, Sma20, Sma50, Sma200,
        ],
        Tab::Etf => &[No, Ticker, Company, Price, Change, Volume, MktCap],
        Tab::EtfPerf => &[No, Ticker, Company, Price, Change, PerfWeek, PerfMonth, PerfYear],
        Tab::Custom => &[No, Ticker, Company, Price, Change, Volume, MktCap, Pe],
        Tab::Charts => &[No, Ticker, Company, Price, Change, Volume, High, Low],
        Tab::Tickers => &[No, Ticker, Company, Sector, Price, Change, Volume],
        Tab::Basic => &[No, Ticker, Company, Sector, Price, Change, Volume, MktCap],
        Tab::Ta => &[No, Ticker, Company, Price, Change, Rsi, Beta, Volume],
        Tab::News => &[No, Ticker, Company, Price, Change, Volume],
        Tab::Snapshot => &[No, Ticker, Company, Sector, Price, Change, Volume, MktCap, Pe],
        Tab::Maps => &[No, Ticker, Company, Sector, MarketCap, Change],
        Tab::Stats => &[No, Ticker, Company, Price, Volume, MktCap, Pe, Beta],
    }
}

/// `$3.18T`, `$564.00B`, `$850.00M`.
pub fn format_market_cap(value: f64) -> String {
    if value >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else {
        format!("${:.2}M", value / 1e6)
    }
}

/// Abbreviated share count: `45.2M`, `850.0K`.
pub fn format_volume(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}

fn signed_percent(value: f64, decimals: usize) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.decimals$}%")
}

/// Terminal table of `rows` using the tab's columns.
pub fn table(tab: Tab, rows: &[&Row]) -> Table {
    let columns = columns_for_tab(tab);
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(columns.iter().map(|c| c.header()));

    for (i, row) in rows.iter().enumerate() {
        table.add_row(columns.iter().map(|&column| {
            let mut cell = Cell::new(column.cell(row, i + 1));
            if !column.is_text() {
                cell = cell.set_alignment(CellAlignment::Right);
            }
            match column.direction(row) {
                Some(v) if v > 0.0 => cell.fg(Color::Green),
                Some(v) if v < 0.0 => cell.fg(Color::Red),
                _ => cell,
            }
        }));
    }
    table
}

/// Write `rows` in `format`. Table output is capped at `max_rows` when set.
pub fn write_rows<W: Write>(
    out: &mut W,
    format: OutputFormat,
    tab: Tab,
    rows: &[&Row],
    max_rows: Option<usize>,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let shown = max_rows.map_or(rows.len(), |cap| cap.min(rows.len()));
            writeln!(out, "{}", table(tab, &rows[..shown]))?;
            if shown < rows.len() {
                writeln!(out, "… {} more rows", rows.len() - shown)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}
