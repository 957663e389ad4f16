//! Tests for the query engine
//!
//! These tests verify:
//! - Stable sorting by text, integer and float columns
//! - Absent values ordering
//! - Sort toggle state and header arrows
//! - Predicate search (name, equality, price range, AND semantics)
//! - Search filters built from forms

use listings::form::FormInput;
use listings::query::{
    search, sort_by_field, sorted_indices, Direction, Predicate, SearchFilter, SortState,
};
use listings::record::{AreaField, AreaListing, Number, RoomField, RoomListing};
use listings::ListingError;

// =============================================================================
// Helper Functions
// =============================================================================

fn listing(name: &str, bedrooms: Option<i64>, bathrooms: Option<i64>, price: Option<f64>) -> RoomListing {
    RoomListing {
        name: name.to_string(),
        bedrooms,
        bathrooms,
        price,
    }
}

fn sample() -> Vec<RoomListing> {
    vec![
        listing("Alpha", Some(2), Some(1), Some(100000.0)),
        listing("bravo", Some(3), Some(2), Some(150000.0)),
        listing("Charlie", Some(3), Some(1), None),
        listing("delta", None, Some(2), Some(120000.0)),
    ]
}

fn names(records: &[&RoomListing]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

fn owned_names(records: &[RoomListing]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

// =============================================================================
// Sort Tests
// =============================================================================

#[test]
fn test_sort_by_price_ascending_puts_absent_first() {
    let mut records = sample();

    sort_by_field(&mut records, RoomField::Price, Direction::Ascending);

    assert_eq!(owned_names(&records), vec!["Charlie", "Alpha", "delta", "bravo"]);
}

#[test]
fn test_sort_by_price_descending() {
    let mut records = sample();

    sort_by_field(&mut records, RoomField::Price, Direction::Descending);

    assert_eq!(owned_names(&records), vec!["bravo", "delta", "Alpha", "Charlie"]);
}

#[test]
fn test_sort_by_name_is_case_insensitive() {
    let mut records = vec![
        listing("delta", None, None, None),
        listing("Bravo", None, None, None),
        listing("alpha", None, None, None),
    ];

    sort_by_field(&mut records, RoomField::Name, Direction::Ascending);

    assert_eq!(owned_names(&records), vec!["alpha", "Bravo", "delta"]);
}

#[test]
fn test_sort_is_stable_both_directions() {
    let mut records = sample();

    sort_by_field(&mut records, RoomField::Bedrooms, Direction::Ascending);
    assert_eq!(owned_names(&records), vec!["delta", "Alpha", "bravo", "Charlie"]);

    let mut records = sample();
    sort_by_field(&mut records, RoomField::Bedrooms, Direction::Descending);
    // bravo and Charlie tie on 3 and keep their input order
    assert_eq!(owned_names(&records), vec!["bravo", "Charlie", "Alpha", "delta"]);
}

#[test]
fn test_sorted_indices_leaves_input_alone() {
    let records = sample();

    let order = sorted_indices(&records, RoomField::Bathrooms, Direction::Ascending);

    assert_eq!(order, vec![0, 2, 1, 3]);
    assert_eq!(records, sample());
}

#[test]
fn test_sort_float_column_area_schema() {
    let mut records = vec![
        AreaListing::new("big").with_total_sqft(2400.0),
        AreaListing::new("small").with_total_sqft(650.5),
        AreaListing::new("mid").with_total_sqft(1200.0),
    ];

    sort_by_field(&mut records, AreaField::TotalSqft, Direction::Ascending);

    let order: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(order, vec!["small", "mid", "big"]);
}

// =============================================================================
// SortState Tests
// =============================================================================

#[test]
fn test_sort_state_toggle() {
    let mut state = SortState::new();
    assert_eq!(state.current(), None);

    assert_eq!(state.toggle(RoomField::Name), Direction::Ascending);
    assert_eq!(state.toggle(RoomField::Name), Direction::Descending);
    assert_eq!(state.toggle(RoomField::Price), Direction::Ascending);
    assert_eq!(state.current(), Some((RoomField::Price, Direction::Ascending)));
}

#[test]
fn test_sort_state_headers() {
    let mut state = SortState::new();
    state.toggle(AreaField::Bhk);
    state.toggle(AreaField::Bhk);

    assert_eq!(state.header(AreaField::Bhk), "BHK ↓");
    assert_eq!(state.header(AreaField::TotalSqft), "Total Sqft");

    state.clear();
    assert_eq!(state.header(AreaField::Bhk), "BHK");
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_no_predicates_matches_all() {
    let records = sample();

    let found = search(&records, &SearchFilter::new());

    assert_eq!(found.len(), records.len());
}

#[test]
fn test_search_name_case_insensitive() {
    let records = sample();

    let found = search(&records, &SearchFilter::new().name("CHARLIE"));

    assert_eq!(names(&found), vec!["Charlie"]);
}

#[test]
fn test_search_price_range_inclusive_excludes_absent() {
    let records = sample();

    let filter = SearchFilter::new().min_price(100000.0).max_price(120000.0);
    let found = search(&records, &filter);

    assert_eq!(names(&found), vec!["Alpha", "delta"]);
}

#[test]
fn test_search_min_price_only() {
    let records = sample();

    let found = search(&records, &SearchFilter::new().min_price(120000.0));

    assert_eq!(names(&found), vec!["bravo", "delta"]);
}

#[test]
fn test_search_equality_and_semantics() {
    let records = sample();

    let filter = SearchFilter::new()
        .equals(RoomField::Bedrooms, Number::Int(3))
        .equals(RoomField::Bathrooms, Number::Int(1));
    let found = search(&records, &filter);

    assert_eq!(names(&found), vec!["Charlie"]);
}

#[test]
fn test_search_equality_excludes_absent() {
    let records = sample();

    let filter = SearchFilter::new().with(Predicate::Equals(RoomField::Bedrooms, Number::Int(0)));
    let found = search(&records, &filter);

    assert!(found.is_empty());
}

#[test]
fn test_search_float_equality() {
    let records = vec![
        AreaListing::new("a").with_bath(2.0),
        AreaListing::new("b").with_bath(2.5),
        AreaListing::new("c"),
    ];

    let filter = SearchFilter::new().equals(AreaField::Bath, Number::Float(2.5));
    let found = search(&records, &filter);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "b");
}

#[test]
fn test_search_no_match() {
    let records = sample();

    let found = search(&records, &SearchFilter::new().name("nobody"));

    assert!(found.is_empty());
}

// =============================================================================
// Filter From Form Tests
// =============================================================================

#[test]
fn test_filter_from_empty_form_is_empty() {
    let filter = SearchFilter::<RoomField>::from_form::<RoomListing>(&FormInput::new()).unwrap();

    assert!(filter.is_empty());
}

#[test]
fn test_filter_from_form_builds_predicates() {
    let form = FormInput::new()
        .with("name", " alpha ")
        .with("bedrooms", "2")
        .with("bathrooms", "")
        .with("min_price", "1000")
        .with("max_price", "200000.5");

    let filter = SearchFilter::<RoomField>::from_form::<RoomListing>(&form).unwrap();

    assert_eq!(
        filter.predicates(),
        &[
            Predicate::NameEquals("alpha".to_string()),
            Predicate::Equals(RoomField::Bedrooms, Number::Int(2)),
            Predicate::AtLeast(RoomField::Price, 1000.0),
            Predicate::AtMost(RoomField::Price, 200000.5),
        ]
    );
    assert_eq!(names(&search(&sample(), &filter)), vec!["Alpha"]);
}

#[test]
fn test_filter_from_form_rejects_bad_number() {
    let form = FormInput::new().with("bhk", "three");

    let result = SearchFilter::<AreaField>::from_form::<AreaListing>(&form);

    match result {
        Err(ListingError::Validation(msg)) => {
            assert_eq!(
                msg,
                "Total Sqft, Bath, and Price must be numbers, and BHK must be an integer."
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_filter_from_form_rejects_foreign_field() {
    let form = FormInput::new().with("bhk", "3");

    let result = SearchFilter::<RoomField>::from_form::<RoomListing>(&form);

    assert!(matches!(result, Err(ListingError::Validation(_))));
}
