//! Price Estimator
//!
//! Wraps a pre-trained linear regression over `[total_sqft, bath, bhk]`.
//!
//! ## Model File
//! ```text
//! { "intercept": -12.3, "coefficients": [0.05, 4.1, 2.7] }
//! ```
//! Training happens elsewhere; this module only evaluates the model.
//!
//! A missing or unreadable model is never fatal: the estimator reports
//! itself unavailable and listings keep whatever price the user typed.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ListingError, Result};
use crate::record::Record;

/// Shown when an estimate is requested without all three inputs
pub const MISSING_FEATURES: &str = "Total Sqft, Bath, and BHK must be numeric values.";

/// Reason given when the model returns NaN or an infinite price
pub const NON_FINITE_PRICE: &str = "model produced a non-finite price";

/// Anything that can price a listing from its features
pub trait PriceModel {
    /// Raw (unrounded) prediction
    fn predict(&self, area: f64, bath: f64, bedrooms: i64) -> Result<f64>;
}

/// Ordinary least squares model: `intercept + Σ coefficientᵢ · xᵢ`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,

    /// Weights for total_sqft, bath, bhk (in that order)
    pub coefficients: [f64; 3],
}

impl LinearModel {
    pub fn new(intercept: f64, coefficients: [f64; 3]) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    /// Load a model file.
    ///
    /// Any failure, including a missing file, maps to
    /// `EstimatorUnavailable` so callers can carry on without estimates.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            let reason = match e.kind() {
                ErrorKind::NotFound => format!("{} not found", path.display()),
                _ => format!("{}: {}", path.display(), e),
            };
            ListingError::EstimatorUnavailable(reason)
        })?;

        let model: LinearModel = serde_json::from_str(&raw).map_err(|e| {
            ListingError::EstimatorUnavailable(format!("{}: {}", path.display(), e))
        })?;

        if !model.intercept.is_finite() || model.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ListingError::EstimatorUnavailable(format!(
                "{}: model weights must be finite",
                path.display()
            )));
        }

        debug!(path = %path.display(), "loaded price model");
        Ok(model)
    }
}

impl PriceModel for LinearModel {
    fn predict(&self, area: f64, bath: f64, bedrooms: i64) -> Result<f64> {
        let features = [area, bath, bedrooms as f64];
        let price = self
            .coefficients
            .iter()
            .zip(features.iter())
            .fold(self.intercept, |acc, (w, x)| acc + w * x);
        Ok(price)
    }
}

/// The estimator as seen by form submission
pub struct Estimator {
    model: Option<Box<dyn PriceModel>>,

    /// Why `model` is `None`
    unavailable: Option<String>,
}

impl Estimator {
    /// Use an already-built model
    pub fn with_model(model: impl PriceModel + 'static) -> Self {
        Self {
            model: Some(Box::new(model)),
            unavailable: None,
        }
    }

    /// An estimator that always reports `reason`
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            model: None,
            unavailable: Some(reason.into()),
        }
    }

    /// Load a linear model from disk, degrading to unavailable on failure
    pub fn load(path: &Path) -> Self {
        match LinearModel::load(path) {
            Ok(model) => Self::with_model(model),
            Err(e) => {
                warn!(error = %e, "price estimation disabled");
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    /// Predict a price rounded to two decimal places
    pub fn estimate(&self, area: f64, bath: f64, bedrooms: i64) -> Result<f64> {
        let model = self.model.as_ref().ok_or_else(|| self.unavailable_error())?;

        let price = model.predict(area, bath, bedrooms)?;
        if !price.is_finite() {
            return Err(ListingError::EstimatorUnavailable(
                NON_FINITE_PRICE.to_string(),
            ));
        }
        Ok(round_cents(price))
    }

    /// Predict a price for a record, using its estimator features
    pub fn estimate_record<R: Record>(&self, record: &R) -> Result<f64> {
        if !self.is_available() {
            // Same error whether or not the inputs are usable
            return Err(self.unavailable_error());
        }
        let (area, bath, bedrooms) = record
            .features()
            .ok_or_else(|| ListingError::Validation(MISSING_FEATURES.to_string()))?;
        self.estimate(area, bath, bedrooms)
    }

    fn unavailable_error(&self) -> ListingError {
        ListingError::EstimatorUnavailable(
            self.unavailable
                .clone()
                .unwrap_or_else(|| "no model loaded".to_string()),
        )
    }
}

/// Round to two decimal places
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
