//! Built-in sample dataset and a seeded synthetic generator.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::Row;

const SAMPLE_JSON: &str = include_str!("sample_rows.json");

/// Fifteen large-cap US instruments with a full set of metrics.
pub fn sample_rows() -> Vec<Row> {
    serde_json::from_str(SAMPLE_JSON).expect("bundled sample rows must parse")
}

const SECTORS: [(&str, &[&str]); 6] = [
    ("Technology", &["Software", "Semiconductors", "Consumer Electronics"]),
    ("Healthcare", &["Biotechnology", "Pharmaceuticals", "Healthcare Plans"]),
    ("Financial", &["Banks", "Asset Management", "Credit Services"]),
    ("Energy", &["Oil & Gas"]),
    ("Consumer Cyclical", &["Auto Manufacturers", "Internet Retail"]),
    ("Industrials", &["Aerospace & Defense", "Railroads"]),
];
const COUNTRIES: [&str; 5] = ["USA", "China", "Japan", "United Kingdom", "Canada"];
const EXCHANGES: [&str; 3] = ["NYSE", "NASDAQ", "AMEX"];

/// `n` plausible rows from a fixed seed. The same `(n, seed)` always yields
/// the same rows.
pub fn synthetic_rows(n: usize, seed: u64) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|i| synthetic_row(&mut rng, i)).collect()
}

fn synthetic_row(rng: &mut StdRng, index: usize) -> Row {
    let (sector, industries) = SECTORS[rng.gen_range(0..SECTORS.len())];
    let industry = industries.choose(rng).copied().unwrap_or(sector);
    let price: f64 = rng.gen_range(2.0..900.0);
    let sma200 = price * rng.gen_range(0.7..1.2);

    // Log-uniform between $50M and $3T.
    let market_cap = 10f64.powf(rng.gen_range(7.7..12.5));

    Row {
        ticker: format!("SYN{index:04}"),
        company: format!("Synthetic {sector} {index}"),
        sector: sector.to_string(),
        industry: industry.to_string(),
        country: COUNTRIES[rng.gen_range(0..COUNTRIES.len())].to_string(),
        exchange: EXCHANGES[rng.gen_range(0..EXCHANGES.len())].to_string(),
        market_cap,
        price,
        change: rng.gen_range(-8.0..8.0),
        volume: 10f64.powf(rng.gen_range(4.0..8.0)),
        relative_volume: rng.gen_range(0.2..3.0),
        pe: rng.gen_range(-20.0..120.0),
        forward_pe: rng.gen_range(5.0..80.0),
        peg: rng.gen_range(0.2..5.0),
        ps: rng.gen_range(0.2..30.0),
        pb: rng.gen_range(0.3..50.0),
        dividend: if rng.gen_bool(0.4) { 0.0 } else { rng.gen_range(0.1..7.0) },
        roe: rng.gen_range(-30.0..150.0),
        roa: rng.gen_range(-10.0..40.0),
        debt_equity: rng.gen_range(0.0..3.0),
        current_ratio: rng.gen_range(0.5..4.0),
        gross_margin: rng.gen_range(5.0..95.0),
        operating_margin: rng.gen_range(-20.0..60.0),
        net_margin: rng.gen_range(-25.0..50.0),
        eps_growth_this_year: rng.gen_range(-50.0..150.0),
        insider_ownership: rng.gen_range(0.0..50.0),
        institutional_ownership: rng.gen_range(5.0..95.0),
        perf_week: rng.gen_range(-12.0..12.0),
        perf_month: rng.gen_range(-25.0..25.0),
        perf_year: rng.gen_range(-60.0..200.0),
        beta: rng.gen_range(0.2..2.8),
        rsi: rng.gen_range(10.0..90.0),
        sma20: price * rng.gen_range(0.9..1.1),
        sma50: price * rng.gen_range(0.8..1.15),
        sma200,
        week52_high: price.max(sma200) * rng.gen_range(1.0..1.4),
        week52_low: price.min(sma200) * rng.gen_range(0.5..1.0),
    }
}
