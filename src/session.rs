//! Session Module
//!
//! What a form submission does, independent of how the form was drawn.
//!
//! ## Responsibilities
//! - Validate raw form input before touching the store
//! - Run the price estimator inline on add/update (when one is configured)
//! - Route column clicks, searches, reset and save to the store
//!
//! Validation failures abort with no side effects. Estimator failures are
//! warnings: the submission goes ahead with the price the user typed.

use tracing::{info, warn};

use crate::config::{Config, Schema};
use crate::error::{ListingError, Result};
use crate::estimator::Estimator;
use crate::form::FormInput;
use crate::query::{Direction, SearchFilter, NO_MATCHES};
use crate::record::{Field, FieldUpdate, Record};
use crate::store::Store;

/// Outcome of an add/update submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    /// Price written by the estimator, if it ran
    pub estimated_price: Option<f64>,

    /// Estimator problem to show the user (the submission still went ahead)
    pub warning: Option<String>,
}

/// Estimator reason when the area schema runs without a model file
pub const NO_MODEL_CONFIGURED: &str = "no model file configured";

/// A store plus the optional estimator, driven by form submissions
pub struct Session<R: Record> {
    store: Store<R>,
    estimator: Option<Estimator>,
}

impl<R: Record> Session<R> {
    /// Open the store and, for the `area` schema, the price model
    pub fn open(config: &Config) -> Result<Self> {
        if config.schema != R::SCHEMA {
            return Err(ListingError::Config(format!(
                "config selects schema '{}' but the session was opened for '{}'",
                config.schema,
                R::SCHEMA
            )));
        }

        let store = Store::open(config)?;
        let estimator = match (&config.model_file, R::SCHEMA) {
            (Some(path), Schema::Area) => Some(Estimator::load(path)),
            (Some(path), Schema::Rooms) => {
                warn!(path = %path.display(), "price model ignored for the rooms schema");
                None
            }
            (None, Schema::Area) => {
                warn!("no price model configured, estimation disabled");
                Some(Estimator::unavailable(NO_MODEL_CONFIGURED))
            }
            (None, Schema::Rooms) => None,
        };

        Ok(Self { store, estimator })
    }

    /// Wrap an already-open store
    pub fn new(store: Store<R>, estimator: Option<Estimator>) -> Self {
        Self { store, estimator }
    }

    // =========================================================================
    // Form Submissions
    // =========================================================================

    /// "Add Property" form
    pub fn submit_add(&mut self, form: &FormInput) -> Result<Submission> {
        let mut record = R::from_form(form)?;
        let outcome = self.estimate_into(&mut record);
        info!(name = record.name(), "adding listing");
        self.store.add(record)?;
        Ok(outcome)
    }

    /// "Update Property" form for the record named `name`.
    ///
    /// Keys missing from the form keep their values, blank keys clear them.
    /// Returns `Ok(None)` when no record has that name.
    pub fn submit_update(&mut self, name: &str, form: &FormInput) -> Result<Option<Submission>> {
        let mut patch = R::patch_from_form(form)?;

        let Some((_, existing)) = self.store.lookup(name) else {
            return Ok(None);
        };

        // Estimate on the record as it will look after the patch
        let mut merged = existing.clone();
        merged.apply(&patch);
        let outcome = self.estimate_into(&mut merged);
        if let Some(price) = outcome.estimated_price {
            R::set_patch_price(&mut patch, FieldUpdate::Set(price));
        }

        info!(name, "updating listing");
        self.store.update(name, &patch)?;
        Ok(Some(outcome))
    }

    /// "Search Property" form. Errors on bad numbers; an empty result is
    /// returned as-is (see [`NO_MATCHES`] for the message to show).
    pub fn submit_search(&self, form: &FormInput) -> Result<Vec<&R>> {
        let filter = SearchFilter::<R::Field>::from_form::<R>(form)?;
        let rows = self.store.search(&filter);
        if rows.is_empty() {
            info!("{}", NO_MATCHES);
        }
        Ok(rows)
    }

    /// "Remove Property" for the selected row
    pub fn remove(&mut self, name: &str) -> Result<usize> {
        info!(name, "removing listing");
        self.store.remove(name)
    }

    /// Column header click by key or label
    pub fn click_column(&mut self, column: &str) -> Result<Direction> {
        let field = R::Field::from_key(column)?;
        Ok(self.store.toggle_sort(field))
    }

    /// "Reset" button
    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// "Save to File" button
    pub fn save(&self) -> Result<()> {
        self.store.save()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &Store<R> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store<R> {
        &mut self.store
    }

    pub fn estimator(&self) -> Option<&Estimator> {
        self.estimator.as_ref()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Replace the record's price with an estimate, if possible
    fn estimate_into(&self, record: &mut R) -> Submission {
        let Some(estimator) = &self.estimator else {
            return Submission::default();
        };

        match estimator.estimate_record(record) {
            Ok(price) => {
                record.set_price(Some(price));
                Submission {
                    estimated_price: Some(price),
                    warning: None,
                }
            }
            Err(e) => {
                warn!(name = record.name(), error = %e, "price estimate skipped");
                Submission {
                    estimated_price: None,
                    warning: Some(e.to_string()),
                }
            }
        }
    }
}
