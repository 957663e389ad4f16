//! Predicate search

use crate::error::Result;
use crate::form::FormInput;
use crate::record::{Field, Kind, Number, Record, Value};

/// Form key for the lower price bound
pub const MIN_PRICE_KEY: &str = "min_price";

/// Form key for the upper price bound
pub const MAX_PRICE_KEY: &str = "max_price";

/// Shown when a search matches nothing
pub const NO_MATCHES: &str = "No properties found matching the criteria.";

/// A single field-level match condition
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<F> {
    /// Case-insensitive equality on the record name
    NameEquals(String),

    /// Exact equality on a numeric column
    Equals(F, Number),

    /// Inclusive lower bound on a numeric column
    AtLeast(F, f64),

    /// Inclusive upper bound on a numeric column
    AtMost(F, f64),
}

impl<F: Field> Predicate<F> {
    /// Check one record. A record missing the column never satisfies a
    /// numeric predicate on it.
    pub fn matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        match self {
            Predicate::NameEquals(name) => record.name().to_lowercase() == name.to_lowercase(),
            Predicate::Equals(field, number) => record.value(*field).equals_number(*number),
            Predicate::AtLeast(field, min) => bound(record.value(*field), |v| v >= *min),
            Predicate::AtMost(field, max) => bound(record.value(*field), |v| v <= *max),
        }
    }
}

fn bound(value: Value<'_>, check: impl Fn(f64) -> bool) -> bool {
    value.as_f64().map(check).unwrap_or(false)
}

/// Predicates combined with AND. An empty filter matches every record.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter<F> {
    predicates: Vec<Predicate<F>>,
}

impl<F: Field> Default for SearchFilter<F> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }
}

impl<F: Field> SearchFilter<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: Predicate<F>) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.with(Predicate::NameEquals(name.into()))
    }

    pub fn equals(self, field: F, number: Number) -> Self {
        self.with(Predicate::Equals(field, number))
    }

    pub fn min_price(self, min: f64) -> Self {
        self.with(Predicate::AtLeast(F::PRICE, min))
    }

    pub fn max_price(self, max: f64) -> Self {
        self.with(Predicate::AtMost(F::PRICE, max))
    }

    pub fn predicates(&self) -> &[Predicate<F>] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Build a filter from a search form.
    ///
    /// Accepted keys: every column of the schema (exact match; `name` is
    /// case-insensitive) plus `min_price` / `max_price`. Blank values add no
    /// predicate.
    pub fn from_form<R: Record<Field = F>>(form: &FormInput) -> Result<Self> {
        form.check_fields::<F>(&[MIN_PRICE_KEY, MAX_PRICE_KEY])?;
        let hint = R::NUMERIC_HINT;
        let mut filter = Self::new();

        for &field in F::ALL {
            let key = field.key();
            match field.kind() {
                Kind::Text => {
                    if let Some(name) = form.text(key) {
                        filter = filter.name(name);
                    }
                }
                Kind::Int => {
                    if let Some(v) = form.int(key, hint)? {
                        filter = filter.equals(field, Number::Int(v));
                    }
                }
                Kind::Float => {
                    if let Some(v) = form.float(key, hint)? {
                        filter = filter.equals(field, Number::Float(v));
                    }
                }
            }
        }

        if let Some(min) = form.float(MIN_PRICE_KEY, hint)? {
            filter = filter.min_price(min);
        }
        if let Some(max) = form.float(MAX_PRICE_KEY, hint)? {
            filter = filter.max_price(max);
        }

        Ok(filter)
    }
}

/// Records satisfying every predicate, in input order
pub fn search<'a, R: Record>(records: &'a [R], filter: &SearchFilter<R::Field>) -> Vec<&'a R> {
    records.iter().filter(|r| filter.matches(*r)).collect()
}
