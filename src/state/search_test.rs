use super::*;

fn seed() -> Vec<Opportunity> {
    mock::opportunities()
}

fn ids(items: &[&Opportunity]) -> Vec<String> {
    items.iter().map(|o| o.id.clone()).collect()
}

fn with(dimension: FilterDimension, value: &str) -> FilterState {
    let mut filters = FilterState::default();
    filters.set(dimension, Some(value.to_owned()));
    filters
}

// =============================================================
// InvestmentRange
// =============================================================

#[test]
fn investment_range_parses_option_values() {
    assert_eq!(InvestmentRange::parse("0-500000"), Some(InvestmentRange { min: 0, max: 500_000 }));
    assert_eq!(
        InvestmentRange::parse("2000000-3000000"),
        Some(InvestmentRange { min: 2_000_000, max: 3_000_000 })
    );
}

#[test]
fn investment_range_rejects_malformed_values() {
    assert_eq!(InvestmentRange::parse("lots"), None);
    assert_eq!(InvestmentRange::parse("10-"), None);
    assert_eq!(InvestmentRange::parse("a-b"), None);
}

#[test]
fn investment_range_bounds_are_inclusive() {
    let range = InvestmentRange { min: 375_000, max: 1_100_000 };
    assert!(range.contains(375_000));
    assert!(range.contains(1_100_000));
    assert!(!range.contains(374_999));
    assert!(!range.contains(1_100_001));
}

// =============================================================
// apply_filters
// =============================================================

#[test]
fn no_filters_returns_input_unchanged() {
    let all = seed();
    let filtered = apply_filters(&all, &FilterState::default());
    assert_eq!(ids(&filtered), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn every_range_option_only_returns_listings_inside_it() {
    let all = seed();
    for option in INVESTMENT_RANGE_OPTIONS {
        let range = InvestmentRange::parse(option.value).unwrap();
        let filtered = apply_filters(&all, &with(FilterDimension::InvestmentRange, option.value));
        assert!(filtered.iter().all(|o| range.min <= o.total_required && o.total_required <= range.max));
    }
}

#[test]
fn range_filter_selects_expected_listings() {
    let all = seed();
    let filtered = apply_filters(&all, &with(FilterDimension::InvestmentRange, "1000000-2000000"));
    assert_eq!(ids(&filtered), vec!["2", "5"]);
}

#[test]
fn unparseable_range_is_ignored() {
    let all = seed();
    let filtered = apply_filters(&all, &with(FilterDimension::InvestmentRange, "cheap"));
    assert_eq!(filtered.len(), all.len());
}

#[test]
fn country_and_location_match_substrings_case_insensitively() {
    let all = seed();
    assert_eq!(ids(&apply_filters(&all, &with(FilterDimension::Country, "germany"))), vec!["1", "3"]);
    assert_eq!(ids(&apply_filters(&all, &with(FilterDimension::Location, "VIENNA"))), vec!["5"]);
}

#[test]
fn industry_and_funding_type_require_equality() {
    let all = seed();
    assert_eq!(ids(&apply_filters(&all, &with(FilterDimension::Industry, "Food"))), vec!["2", "4"]);
    assert!(apply_filters(&all, &with(FilterDimension::Industry, "foo")).is_empty());
    assert_eq!(ids(&apply_filters(&all, &with(FilterDimension::FundingType, "series a"))), vec!["1", "3"]);
}

#[test]
fn industry_and_funding_type_fold_non_ascii_case() {
    let mut listing = seed()[0].clone();
    listing.industry = "ÉNERGIE".to_owned();
    listing.funding_type = "SÉRIE A".to_owned();
    let all = vec![listing];
    assert_eq!(apply_filters(&all, &with(FilterDimension::Industry, "énergie")).len(), 1);
    assert_eq!(apply_filters(&all, &with(FilterDimension::FundingType, "série a")).len(), 1);
    assert!(apply_filters(&all, &with(FilterDimension::Industry, "energie")).is_empty());
}

#[test]
fn get_reads_back_each_dimension() {
    let mut filters = FilterState::default();
    for (i, dimension) in FilterDimension::ALL.iter().enumerate() {
        filters.set(*dimension, Some(format!("value {i}")));
    }
    for (i, dimension) in FilterDimension::ALL.iter().enumerate() {
        assert_eq!(filters.get(*dimension), Some(format!("value {i}").as_str()));
    }
    assert!(!filters.is_empty());
}

#[test]
fn stage_matches_badge_text() {
    let all = seed();
    assert_eq!(apply_filters(&all, &with(FilterDimension::Stage, "executive")).len(), 5);
    assert!(apply_filters(&all, &with(FilterDimension::Stage, "growth")).is_empty());
}

#[test]
fn query_matches_title_or_description() {
    let all = seed();
    let mut filters = FilterState::default();
    filters.query = "iot".to_owned();
    assert_eq!(ids(&apply_filters(&all, &filters)), vec!["5"]);
    filters.query = "TRUST".to_owned();
    assert_eq!(ids(&apply_filters(&all, &filters)), vec!["3"]);
}

#[test]
fn dimensions_combine_as_conjunction() {
    let all = seed();
    let mut filters = with(FilterDimension::Industry, "food");
    filters.set(FilterDimension::Country, Some("Singapore".to_owned()));
    assert_eq!(ids(&apply_filters(&all, &filters)), vec!["4"]);
    filters.query = "cocktails".to_owned();
    assert!(apply_filters(&all, &filters).is_empty());
}

#[test]
fn empty_value_clears_dimension() {
    let mut filters = with(FilterDimension::Country, "Canada");
    filters.set(FilterDimension::Country, Some(String::new()));
    assert_eq!(filters.get(FilterDimension::Country), None);
    assert!(filters.is_empty());
}

// =============================================================
// paginate
// =============================================================

#[test]
fn five_listings_fit_on_one_page_of_six() {
    let all = seed();
    let filtered = apply_filters(&all, &FilterState::default());
    let page = paginate(&filtered, 1, 6);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items.len(), 5);
    assert!(!page.has_previous());
    assert!(!page.has_next());
}

#[test]
fn empty_result_still_has_one_page() {
    let page = paginate(&[], 1, 6);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page, 1);
    assert!(page.items.is_empty());
}

#[test]
fn out_of_range_page_is_clamped() {
    let all = seed();
    let filtered = apply_filters(&all, &FilterState::default());
    for requested in [0, 1, 2, 3, 99] {
        let page = paginate(&filtered, requested, 2);
        assert_eq!(page.total_pages, 3);
        assert!((1..=page.total_pages).contains(&page.page));
    }
    assert_eq!(ids(&paginate(&filtered, 99, 2).items), vec!["5"]);
    assert_eq!(ids(&paginate(&filtered, 0, 2).items), vec!["1", "2"]);
}

#[test]
fn zero_page_size_is_treated_as_one() {
    let all = seed();
    let filtered = apply_filters(&all, &FilterState::default());
    let page = paginate(&filtered, 2, 0);
    assert_eq!(page.total_pages, 5);
    assert_eq!(ids(&page.items), vec!["2"]);
}

// =============================================================
// SearchState
// =============================================================

#[test]
fn filter_change_resets_page() {
    let mut state = SearchState::new(seed(), 2);
    state.next_page();
    assert_eq!(state.page, 2);
    state.set_filter(FilterDimension::Industry, Some("food".to_owned()));
    assert_eq!(state.page, 1);
    state.next_page();
    state.set_query("cocktail");
    assert_eq!(state.page, 1);
}

#[test]
fn page_steps_stay_in_bounds() {
    let mut state = SearchState::new(seed(), 2);
    state.previous_page();
    assert_eq!(state.page, 1);
    state.next_page();
    state.next_page();
    state.next_page();
    assert_eq!(state.page, 3);
    assert_eq!(state.current_page().items.len(), 1);
}

#[test]
fn clear_filters_resets_everything_but_page_size() {
    let mut state = SearchState::new(seed(), 4);
    for dimension in FilterDimension::ALL {
        state.set_filter(dimension, Some(dimension.options()[0].value.to_owned()));
    }
    state.set_query("fund");
    state.clear_filters();
    for dimension in FilterDimension::ALL {
        assert_eq!(state.filters.get(dimension), None);
    }
    assert_eq!(state.filters.query, "");
    assert_eq!(state.page, 1);
    assert_eq!(state.page_size, 4);
}

#[test]
fn default_state_shows_all_listings() {
    let state = SearchState::default();
    let page = state.current_page();
    assert_eq!(page.total_items, 5);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn every_dimension_has_options() {
    for dimension in FilterDimension::ALL {
        assert!(!dimension.options().is_empty(), "{}", dimension.label());
    }
}
