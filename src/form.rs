//! Form input
//!
//! Raw text typed by the user, keyed by field, and the validation that turns
//! it into typed values. Validation happens before any store call, so a
//! rejected form never has side effects.
//!
//! Conventions:
//! - every value is trimmed
//! - an empty value means "absent"
//! - a key that is not in the form at all means "not submitted"

use crate::error::{ListingError, Result};
use crate::record::{Field, FieldUpdate};

/// Message for an add form without a name
pub const EMPTY_NAME: &str = "Name cannot be empty.";

/// A submitted form: field key → raw text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    entries: Vec<(String, String)>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field's raw text
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into().trim().to_ascii_lowercase();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.trim().is_empty())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Trimmed text, `None` when missing or blank
    pub fn text(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// The record name, required and non-empty
    pub fn required_name(&self) -> Result<String> {
        self.text("name")
            .map(str::to_string)
            .ok_or_else(|| ListingError::Validation(EMPTY_NAME.to_string()))
    }

    pub fn int(&self, key: &str, hint: &str) -> Result<Option<i64>> {
        self.text(key)
            .map(|raw| {
                raw.parse::<i64>()
                    .map_err(|_| ListingError::Validation(hint.to_string()))
            })
            .transpose()
    }

    pub fn float(&self, key: &str, hint: &str) -> Result<Option<f64>> {
        self.text(key)
            .map(|raw| match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(ListingError::Validation(hint.to_string())),
            })
            .transpose()
    }

    /// Patch semantics for an integer field: absent key keeps, blank clears
    pub fn int_update(&self, key: &str, hint: &str) -> Result<FieldUpdate<i64>> {
        if !self.contains(key) {
            return Ok(FieldUpdate::Keep);
        }
        Ok(self.int(key, hint)?.into())
    }

    /// Patch semantics for a float field: absent key keeps, blank clears
    pub fn float_update(&self, key: &str, hint: &str) -> Result<FieldUpdate<f64>> {
        if !self.contains(key) {
            return Ok(FieldUpdate::Keep);
        }
        Ok(self.float(key, hint)?.into())
    }

    /// A renamed record still needs a name
    pub fn name_update(&self) -> Result<Option<String>> {
        if !self.contains("name") {
            return Ok(None);
        }
        self.required_name().map(Some)
    }

    /// Reject keys that are not columns of `F` (or one of `extra`)
    pub fn check_fields<F: Field>(&self, extra: &[&str]) -> Result<()> {
        for key in self.keys() {
            let known = F::ALL.iter().any(|f| f.key() == key) || extra.contains(&key);
            if !known {
                return Err(ListingError::Validation(format!(
                    "'{}' is not a field of this listing type",
                    key
                )));
            }
        }
        Ok(())
    }
}
