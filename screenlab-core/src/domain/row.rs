//! Screenable instrument row.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One screenable instrument: descriptive fields plus numeric metrics.
///
/// Percent-valued metrics (change, margins, ownership, performance) are stored
/// as percentages, e.g. `12.5` means 12.5%. `market_cap` is the raw dollar
/// value; `volume` is a share count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub ticker: String,
    pub company: String,
    pub sector: String,
    pub industry: String,
    pub country: String,
    pub exchange: String,

    pub market_cap: f64,
    pub price: f64,
    pub change: f64,
    #[serde(deserialize_with = "deserialize_volume")]
    pub volume: f64,
    pub relative_volume: f64,

    pub pe: f64,
    #[serde(rename = "forwardPE")]
    pub forward_pe: f64,
    pub peg: f64,
    pub ps: f64,
    pub pb: f64,

    pub dividend: f64,
    pub roe: f64,
    pub roa: f64,
    pub debt_equity: f64,
    pub current_ratio: f64,
    pub gross_margin: f64,
    pub operating_margin: f64,
    pub net_margin: f64,
    pub eps_growth_this_year: f64,

    pub insider_ownership: f64,
    pub institutional_ownership: f64,

    pub perf_week: f64,
    pub perf_month: f64,
    pub perf_year: f64,

    pub beta: f64,
    pub rsi: f64,
    pub sma20: f64,
    pub sma50: f64,
    pub sma200: f64,
    pub week52_high: f64,
    pub week52_low: f64,
}

impl Row {
    /// Market capitalization in billions of dollars.
    pub fn market_cap_billions(&self) -> f64 {
        self.market_cap / 1_000_000_000.0
    }

    /// Case-insensitive substring match on ticker or company name.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_search_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.ticker.to_lowercase().contains(needle)
            || self.company.to_lowercase().contains(needle)
    }
}

/// Parse an abbreviated share count: `"45.2M"`, `"850K"`, `"1.2B"`, `"12,400"`.
pub fn parse_volume(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }

    let (digits, multiplier) = match cleaned.chars().last()? {
        'k' | 'K' => (&cleaned[..cleaned.len() - 1], 1e3),
        'm' | 'M' => (&cleaned[..cleaned.len() - 1], 1e6),
        'b' | 'B' => (&cleaned[..cleaned.len() - 1], 1e9),
        _ => (cleaned.as_str(), 1.0),
    };

    let value: f64 = digits.trim().parse().ok()?;
    value.is_finite().then_some(value * multiplier)
}

fn deserialize_volume<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct VolumeVisitor;

    impl<'de> Visitor<'de> for VolumeVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a share count as a number or an abbreviated string like \"45.2M\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            parse_volume(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_any(VolumeVisitor)
}
