//! Property tests for filter invariants.
//!
//! Uses proptest to verify:
//! 1. Idempotence: filtering a filtered set with the same state is a no-op
//! 2. AND composition: two criteria at once equal one after the other
//! 3. Toggle symmetry: toggling an option twice restores the selection
//! 4. URL round trip: serialize then deserialize reconstructs the state
//! 5. Search is a case-insensitive substring test

use proptest::prelude::*;
use screenlab_core::catalog::{categories_for_tab, CategoryId};
use screenlab_core::{
    filter_rows, synthetic_rows, FilterSelection, FilterState, Row, Tab, UrlSync,
};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_tab() -> impl Strategy<Value = Tab> {
    prop::sample::select(Tab::ALL.to_vec())
}

/// Any (category, option) pair from the catalog, "Any" included.
fn arb_entry() -> impl Strategy<Value = (String, String)> {
    prop::sample::select(CategoryId::ALL.to_vec()).prop_flat_map(|id| {
        let labels: Vec<&'static str> = id.category().labels().collect();
        prop::sample::select(labels).prop_map(move |label| (id.name().to_string(), label.to_string()))
    })
}

fn arb_selection() -> impl Strategy<Value = FilterSelection> {
    prop::collection::vec(arb_entry(), 0..5).prop_map(|entries| entries.into_iter().collect())
}

fn arb_search() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-zA-Z0-9 ]{1,4}"]
}

fn rows() -> Vec<Row> {
    synthetic_rows(120, 0x5eed)
}

fn tickers(rows: &[&Row]) -> Vec<String> {
    rows.iter().map(|r| r.ticker.clone()).collect()
}

// ── 1. Idempotence ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn filtering_is_idempotent(selection in arb_selection(), search in arb_search()) {
        let rows = rows();
        let once: Vec<Row> = filter_rows(&rows, &selection, &search).into_iter().cloned().collect();
        let twice = filter_rows(&once, &selection, &search);
        prop_assert_eq!(twice.len(), once.len());
    }

    /// Results are a subsequence of the input.
    #[test]
    fn filtering_preserves_order(selection in arb_selection()) {
        let rows = rows();
        let out = filter_rows(&rows, &selection, "");
        let positions: Vec<usize> = out
            .iter()
            .map(|r| rows.iter().position(|x| x.ticker == r.ticker).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

// ── 2. AND composition ───────────────────────────────────────────────

proptest! {
    #[test]
    fn criteria_compose_by_and(a in arb_entry(), b in arb_entry()) {
        prop_assume!(a.0 != b.0);
        let rows = rows();

        let both: FilterSelection = [a.clone(), b.clone()].into_iter().collect();
        let first: FilterSelection = [a].into_iter().collect();
        let second: FilterSelection = [b].into_iter().collect();

        let combined = tickers(&filter_rows(&rows, &both, ""));
        let staged: Vec<Row> = filter_rows(&rows, &first, "").into_iter().cloned().collect();
        let chained = tickers(&filter_rows(&staged, &second, ""));
        prop_assert_eq!(combined, chained);
    }

    /// Adding a criterion never grows the result.
    #[test]
    fn more_criteria_never_widen(selection in arb_selection(), extra in arb_entry()) {
        prop_assume!(!selection.contains(&extra.0));
        let rows = rows();
        let before = filter_rows(&rows, &selection, "").len();
        let mut narrowed = selection.clone();
        narrowed.select(extra.0, extra.1);
        prop_assert!(filter_rows(&rows, &narrowed, "").len() <= before);
    }
}

// ── 3. Toggle symmetry ───────────────────────────────────────────────

proptest! {
    #[test]
    fn toggle_twice_restores(selection in arb_selection(), entry in arb_entry()) {
        prop_assume!(!selection.contains(&entry.0));
        let rows = rows();

        let mut toggled = selection.clone();
        toggled.toggle(&entry.0, &entry.1);
        toggled.toggle(&entry.0, &entry.1);

        prop_assert!(!toggled.contains(&entry.0));
        prop_assert_eq!(&toggled, &selection);
        prop_assert_eq!(
            tickers(&filter_rows(&rows, &toggled, "")),
            tickers(&filter_rows(&rows, &selection, ""))
        );
    }
}

// ── 4. URL round trip ────────────────────────────────────────────────

proptest! {
    #[test]
    fn url_round_trip(
        tab in arb_tab(),
        selection in arb_selection(),
        search in arb_search(),
        default_tab in arb_tab(),
    ) {
        let sync = UrlSync::new(default_tab);
        let state = FilterState { tab, selection, search };
        let query = sync.serialize(&state);
        prop_assert_eq!(sync.deserialize(&query), state.clone());
        prop_assert_eq!(sync.deserialize(&format!("?{query}")), state);
    }

    /// Arbitrary category names and labels survive encoding.
    #[test]
    fn url_round_trip_arbitrary_text(
        key in "[A-Za-z/()%$+&= ]{1,12}",
        value in "[A-Za-z0-9/()%$+&=<> .]{1,16}",
    ) {
        prop_assume!(key != "tab" && key != "search" && value != "Any");
        let sync = UrlSync::default();
        let mut state = FilterState::default();
        state.selection.select(key, value);
        prop_assert_eq!(sync.deserialize(&sync.serialize(&state)), state);
    }
}

// ── 5. Search ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn search_ignores_case(index in 0usize..120) {
        let rows = rows();
        let ticker = rows[index].ticker.clone();
        let lower = filter_rows(&rows, &FilterSelection::new(), &ticker.to_lowercase());
        let upper = filter_rows(&rows, &FilterSelection::new(), &ticker.to_uppercase());
        prop_assert_eq!(tickers(&lower), tickers(&upper));
        prop_assert!(lower.iter().any(|r| r.ticker == ticker));
    }
}

#[test]
fn every_tab_has_categories() {
    for tab in Tab::ALL {
        assert!(!categories_for_tab(tab).is_empty(), "{tab}");
    }
}
