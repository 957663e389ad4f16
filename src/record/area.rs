//! `area` schema: name, total_sqft, bath, bhk, price
//!
//! This is the shape the price estimator works on: `total_sqft`, `bath` and
//! `bhk` are its three input features.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Field, FieldUpdate, Kind, Record, Value};
use crate::config::Schema;
use crate::error::{ListingError, Result};
use crate::form::FormInput;

/// A listing described by floor area and BHK count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaListing {
    pub name: String,

    #[serde(default)]
    pub total_sqft: Option<f64>,

    #[serde(default)]
    pub bath: Option<f64>,

    #[serde(default)]
    pub price: Option<f64>,

    /// Bedroom/hall/kitchen count
    #[serde(default)]
    pub bhk: Option<i64>,
}

impl AreaListing {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_sqft: None,
            bath: None,
            price: None,
            bhk: None,
        }
    }

    pub fn with_total_sqft(mut self, sqft: f64) -> Self {
        self.total_sqft = Some(sqft);
        self
    }

    pub fn with_bath(mut self, bath: f64) -> Self {
        self.bath = Some(bath);
        self
    }

    pub fn with_bhk(mut self, bhk: i64) -> Self {
        self.bhk = Some(bhk);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

/// Columns of [`AreaListing`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaField {
    Name,
    TotalSqft,
    Bath,
    Price,
    Bhk,
}

impl Field for AreaField {
    const ALL: &'static [Self] = &[
        AreaField::Name,
        AreaField::TotalSqft,
        AreaField::Bath,
        AreaField::Price,
        AreaField::Bhk,
    ];
    const NAME: Self = AreaField::Name;
    const PRICE: Self = AreaField::Price;

    fn key(self) -> &'static str {
        match self {
            AreaField::Name => "name",
            AreaField::TotalSqft => "total_sqft",
            AreaField::Bath => "bath",
            AreaField::Price => "price",
            AreaField::Bhk => "bhk",
        }
    }

    fn label(self) -> &'static str {
        match self {
            AreaField::Name => "Name",
            AreaField::TotalSqft => "Total Sqft",
            AreaField::Bath => "Bath",
            AreaField::Price => "Price",
            AreaField::Bhk => "BHK",
        }
    }

    fn kind(self) -> Kind {
        match self {
            AreaField::Name => Kind::Text,
            AreaField::TotalSqft | AreaField::Bath | AreaField::Price => Kind::Float,
            AreaField::Bhk => Kind::Int,
        }
    }
}

impl fmt::Display for AreaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AreaField {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s)
    }
}

/// Changes to merge into an [`AreaListing`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaPatch {
    pub name: Option<String>,
    pub total_sqft: FieldUpdate<f64>,
    pub bath: FieldUpdate<f64>,
    pub price: FieldUpdate<f64>,
    pub bhk: FieldUpdate<i64>,
}

impl Record for AreaListing {
    type Field = AreaField;
    type Patch = AreaPatch;

    const SCHEMA: Schema = Schema::Area;
    const NUMERIC_HINT: &'static str =
        "Total Sqft, Bath, and Price must be numbers, and BHK must be an integer.";

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self, field: AreaField) -> Value<'_> {
        match field {
            AreaField::Name => Value::Text(&self.name),
            AreaField::TotalSqft => Value::Float(self.total_sqft),
            AreaField::Bath => Value::Float(self.bath),
            AreaField::Price => Value::Float(self.price),
            AreaField::Bhk => Value::Int(self.bhk),
        }
    }

    fn apply(&mut self, patch: &AreaPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        patch.total_sqft.apply_to(&mut self.total_sqft);
        patch.bath.apply_to(&mut self.bath);
        patch.price.apply_to(&mut self.price);
        patch.bhk.apply_to(&mut self.bhk);
    }

    fn from_form(form: &FormInput) -> Result<Self> {
        form.check_fields::<AreaField>(&[])?;
        let name = form.required_name()?;
        Ok(Self {
            name,
            total_sqft: form.float("total_sqft", Self::NUMERIC_HINT)?,
            bath: form.float("bath", Self::NUMERIC_HINT)?,
            price: form.float("price", Self::NUMERIC_HINT)?,
            bhk: form.int("bhk", Self::NUMERIC_HINT)?,
        })
    }

    fn patch_from_form(form: &FormInput) -> Result<AreaPatch> {
        form.check_fields::<AreaField>(&[])?;
        Ok(AreaPatch {
            name: form.name_update()?,
            total_sqft: form.float_update("total_sqft", Self::NUMERIC_HINT)?,
            bath: form.float_update("bath", Self::NUMERIC_HINT)?,
            price: form.float_update("price", Self::NUMERIC_HINT)?,
            bhk: form.int_update("bhk", Self::NUMERIC_HINT)?,
        })
    }

    fn set_price(&mut self, price: Option<f64>) {
        self.price = price;
    }

    fn set_patch_price(patch: &mut AreaPatch, price: FieldUpdate<f64>) {
        patch.price = price;
    }

    fn features(&self) -> Option<(f64, f64, i64)> {
        Some((self.total_sqft?, self.bath?, self.bhk?))
    }
}
