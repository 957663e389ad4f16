//! Tests for the price estimator
//!
//! These tests verify:
//! - Linear model evaluation and rounding
//! - Model file loading (valid, missing, malformed)
//! - Unavailable estimator reporting
//! - Estimating from records with missing features

use std::fs;

use listings::estimator::{
    Estimator, LinearModel, PriceModel, MISSING_FEATURES, NON_FINITE_PRICE,
};
use listings::record::{AreaListing, RoomListing};
use listings::{ListingError, Result};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn model() -> LinearModel {
    LinearModel::new(10.0, [0.05, 2.5, 3.0])
}

/// Always predicts the same value
struct Fixed(f64);

impl PriceModel for Fixed {
    fn predict(&self, _area: f64, _bath: f64, _bedrooms: i64) -> Result<f64> {
        Ok(self.0)
    }
}

// =============================================================================
// LinearModel Tests
// =============================================================================

#[test]
fn test_linear_model_predict() {
    // 10 + 0.05*1000 + 2.5*2 + 3*3 = 74
    let price = model().predict(1000.0, 2.0, 3).unwrap();

    assert!((price - 74.0).abs() < 1e-9);
}

#[test]
fn test_load_model_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("model.json");
    fs::write(&path, r#"{"intercept": 10.0, "coefficients": [0.05, 2.5, 3.0]}"#).unwrap();

    let loaded = LinearModel::load(&path).unwrap();

    assert_eq!(loaded, model());
}

#[test]
fn test_load_missing_model_is_unavailable() {
    let temp_dir = TempDir::new().unwrap();

    let result = LinearModel::load(&temp_dir.path().join("missing.json"));

    assert!(matches!(result, Err(ListingError::EstimatorUnavailable(_))));
}

#[test]
fn test_load_malformed_model_is_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("model.json");
    fs::write(&path, r#"{"intercept": 1.0, "coefficients": [1.0]}"#).unwrap();

    let result = LinearModel::load(&path);

    assert!(matches!(result, Err(ListingError::EstimatorUnavailable(_))));
}

// =============================================================================
// Estimator Tests
// =============================================================================

#[test]
fn test_estimate_rounds_to_cents() {
    let estimator = Estimator::with_model(Fixed(123.4567));

    assert_eq!(estimator.estimate(1.0, 1.0, 1).unwrap(), 123.46);
}

#[test]
fn test_estimator_load_missing_degrades() {
    let temp_dir = TempDir::new().unwrap();

    let estimator = Estimator::load(&temp_dir.path().join("missing.json"));

    assert!(!estimator.is_available());
    assert!(matches!(
        estimator.estimate(1000.0, 2.0, 3),
        Err(ListingError::EstimatorUnavailable(_))
    ));
}

#[test]
fn test_estimate_record() {
    let estimator = Estimator::with_model(model());
    let listing = AreaListing::new("Flat")
        .with_total_sqft(1000.0)
        .with_bath(2.0)
        .with_bhk(3);

    assert_eq!(estimator.estimate_record(&listing).unwrap(), 74.0);
}

#[test]
fn test_estimate_record_missing_feature() {
    let estimator = Estimator::with_model(model());
    let listing = AreaListing::new("Flat").with_total_sqft(1000.0).with_bhk(3);

    match estimator.estimate_record(&listing) {
        Err(ListingError::Validation(msg)) => assert_eq!(msg, MISSING_FEATURES),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_estimate_record_without_features_schema() {
    let estimator = Estimator::with_model(model());

    let result = estimator.estimate_record(&RoomListing::new("A").with_bedrooms(2));

    assert!(matches!(result, Err(ListingError::Validation(_))));
}

#[test]
fn test_unavailable_wins_over_missing_features() {
    let estimator = Estimator::unavailable("model.pkl not found");

    let result = estimator.estimate_record(&AreaListing::new("Flat"));

    match result {
        Err(ListingError::EstimatorUnavailable(reason)) => assert_eq!(reason, "model.pkl not found"),
        other => panic!("expected unavailable error, got {:?}", other),
    }
}

#[test]
fn test_non_finite_prediction_rejected() {
    let estimator = Estimator::with_model(Fixed(f64::INFINITY));

    match estimator.estimate(1.0, 1.0, 1) {
        Err(ListingError::EstimatorUnavailable(reason)) => assert_eq!(reason, NON_FINITE_PRICE),
        other => panic!("expected unavailable error, got {:?}", other),
    }
}

#[test]
fn test_non_finite_record_estimate_is_not_a_feature_error() {
    let estimator = Estimator::with_model(Fixed(f64::NAN));
    let listing = AreaListing::new("Flat")
        .with_total_sqft(1000.0)
        .with_bath(2.0)
        .with_bhk(3);

    let result = estimator.estimate_record(&listing);

    assert!(matches!(result, Err(ListingError::EstimatorUnavailable(_))));
}

#[test]
fn test_unavailable_estimate_reports_reason() {
    let estimator = Estimator::unavailable("no model file configured");

    match estimator.estimate(1000.0, 2.0, 3) {
        Err(ListingError::EstimatorUnavailable(reason)) => {
            assert_eq!(reason, "no model file configured")
        }
        other => panic!("expected unavailable error, got {:?}", other),
    }
}
