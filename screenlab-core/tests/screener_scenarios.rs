//! Scenario tests for the screener pipeline.
//!
//! Tests:
//! 1. Two-row NVDA/JPM dataset under P/E and Market Cap filters
//! 2. Market-cap bucket boundaries
//! 3. Preset save/apply round trip through the screener
//! 4. URL round trip into a screener's state
//! 5. Informational tabs never restrict

use screenlab_core::catalog::categories_for_tab;
use screenlab_core::{
    filter_rows, sample_rows, FilterSelection, FilterState, PresetStore, Row, Screener, Tab,
    UrlSync,
};

// ──────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────

fn row(ticker: &str) -> Row {
    sample_rows()
        .into_iter()
        .find(|r| r.ticker == ticker)
        .unwrap_or_else(|| panic!("{ticker} missing from sample"))
}

fn with_market_cap(market_cap: f64) -> Row {
    Row {
        ticker: format!("CAP{market_cap}"),
        market_cap,
        ..row("JNJ")
    }
}

fn sel(pairs: &[(&str, &str)]) -> FilterSelection {
    pairs.iter().copied().collect()
}

fn tickers(rows: &[&Row]) -> Vec<String> {
    rows.iter().map(|r| r.ticker.clone()).collect()
}

// ──────────────────────────────────────────────
// 1. NVDA / JPM
// ──────────────────────────────────────────────

#[test]
fn nvda_jpm_pe_under_15() {
    let rows = vec![row("NVDA"), row("JPM")];
    assert_eq!(rows[0].pe, 68.5);
    assert_eq!(rows[1].market_cap, 5.64e11);

    let out = filter_rows(&rows, &sel(&[("P/E", "Under 15")]), "");
    assert_eq!(tickers(&out), vec!["JPM"]);
}

#[test]
fn nvda_jpm_market_cap_buckets() {
    let rows = vec![row("NVDA"), row("JPM")];

    // Both clear the $200bln floor.
    let mega = filter_rows(&rows, &sel(&[("Market Cap", "Mega ($200bln+)")]), "");
    assert_eq!(tickers(&mega), vec!["NVDA", "JPM"]);

    let large = filter_rows(&rows, &sel(&[("Market Cap", "Large ($10bln to $200bln)")]), "");
    assert!(large.is_empty());

    let both = filter_rows(
        &rows,
        &sel(&[("Market Cap", "Mega ($200bln+)"), ("P/E", "Under 15")]),
        "",
    );
    assert_eq!(tickers(&both), vec!["JPM"]);

    let nvda_only = filter_rows(&rows, &sel(&[("Market Cap", "Mega ($200bln+)")]), "nvidia");
    assert_eq!(tickers(&nvda_only), vec!["NVDA"]);
}

// ──────────────────────────────────────────────
// 2. Market-cap boundaries
// ──────────────────────────────────────────────

#[test]
fn market_cap_boundaries() {
    let exactly_200bn = [with_market_cap(200_000_000_000.0)];
    let just_under_10bn = [with_market_cap(9_999_999_999.0)];
    let exactly_10bn = [with_market_cap(10_000_000_000.0)];
    let exactly_300mn = [with_market_cap(300_000_000.0)];

    let mega = sel(&[("Market Cap", "Mega ($200bln+)")]);
    let large = sel(&[("Market Cap", "Large ($10bln to $200bln)")]);
    let mid = sel(&[("Market Cap", "Mid ($2bln to $10bln)")]);
    let small = sel(&[("Market Cap", "Small ($300mln to $2bln)")]);

    assert_eq!(filter_rows(&exactly_200bn, &mega, "").len(), 1);
    assert_eq!(filter_rows(&exactly_200bn, &large, "").len(), 0);

    assert_eq!(filter_rows(&just_under_10bn, &large, "").len(), 0);
    assert_eq!(filter_rows(&just_under_10bn, &mid, "").len(), 1);
    assert_eq!(filter_rows(&exactly_10bn, &large, "").len(), 1);

    assert_eq!(filter_rows(&exactly_300mn, &small, "").len(), 1);
}

// ──────────────────────────────────────────────
// 3. Presets
// ──────────────────────────────────────────────

#[test]
fn preset_round_trip_through_screener() {
    let mut store = PresetStore::default();
    let mut screener = Screener::new(sample_rows());
    screener.set_tab(Tab::Financial);
    screener.select("ROE", "Over 30%");
    screener.select("Sector", "Technology");
    let expected = tickers(&screener.visible_rows());

    let state = screener.state().clone();
    store.save("X", state.tab, &state.selection).unwrap();

    screener.clear_all();
    screener.set_tab(Tab::Overview);
    assert_eq!(screener.active_filter_count(), 0);

    let preset = store.find_by_name("X").unwrap().clone();
    assert_eq!(preset.apply(), (Tab::Financial, state.selection.clone()));
    screener.apply_preset(&preset);
    assert_eq!(screener.state().tab, Tab::Financial);
    assert_eq!(tickers(&screener.visible_rows()), expected);
    assert_eq!(expected, vec!["NVDA", "AAPL", "MSFT"]);
}

#[test]
fn builtin_presets_reference_real_options() {
    for preset in PresetStore::default().list() {
        for (category, option) in preset.filters.iter() {
            let cat = screenlab_core::find_category(category)
                .unwrap_or_else(|| panic!("{} uses unknown category {category}", preset.id));
            assert!(cat.option(option).is_some(), "{} uses unknown option {option}", preset.id);
        }
    }
}

#[test]
fn tech_leaders_on_sample() {
    let store = PresetStore::default();
    let mut screener = Screener::new(sample_rows());
    screener.apply_preset(store.get("tech-leaders").unwrap());
    assert_eq!(tickers(&screener.visible_rows()), vec!["NVDA", "AAPL", "MSFT"]);
}

// ──────────────────────────────────────────────
// 4. URL
// ──────────────────────────────────────────────

#[test]
fn url_round_trip_restores_results() {
    let sync = UrlSync::default();
    let mut screener = Screener::new(sample_rows());
    screener.set_tab(Tab::Valuation);
    screener.select("P/E", "Under 15");
    screener.set_search("nv");
    let query = sync.serialize(screener.state());

    let restored = sync.deserialize(&query);
    assert_eq!(&restored, screener.state());

    let mut other = Screener::with_state(sample_rows(), restored);
    assert_eq!(
        tickers(&other.visible_rows()),
        tickers(&screener.visible_rows())
    );
}

#[test]
fn url_with_unknown_category_still_screens() {
    let sync = UrlSync::default();
    let state = sync.deserialize("?Moat=Wide&Exchange=NYSE");
    let mut screener = Screener::with_state(sample_rows(), state);
    let visible = screener.visible_rows();
    assert_eq!(visible.len(), 8);
    assert!(visible.iter().all(|r| r.exchange == "NYSE"));
}

// ──────────────────────────────────────────────
// 5. Informational tabs
// ──────────────────────────────────────────────

#[test]
fn informational_categories_never_restrict() {
    let rows = sample_rows();
    for tab in [Tab::Etf, Tab::EtfPerf, Tab::News, Tab::Stats] {
        for category in categories_for_tab(tab) {
            for label in category.labels() {
                let out = filter_rows(&rows, &sel(&[(category.name(), label)]), "");
                assert_eq!(out.len(), rows.len(), "{tab}/{}={label}", category.name());
            }
        }
    }
}

#[test]
fn clear_all_keeps_tab() {
    let mut state = FilterState::new(Tab::Technical);
    state.selection.select("RSI", "Oversold (<30)");
    state.search = "x".into();
    state.clear_all();
    assert_eq!(state, FilterState::new(Tab::Technical));
}
