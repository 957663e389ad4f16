//! `rooms` schema: name, bedrooms, bathrooms, price

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Field, FieldUpdate, Kind, Record, Value};
use crate::config::Schema;
use crate::error::{ListingError, Result};
use crate::form::FormInput;

/// A listing described by its room counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomListing {
    pub name: String,

    #[serde(default)]
    pub bedrooms: Option<i64>,

    #[serde(default)]
    pub bathrooms: Option<i64>,

    #[serde(default)]
    pub price: Option<f64>,
}

impl RoomListing {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bedrooms: None,
            bathrooms: None,
            price: None,
        }
    }

    pub fn with_bedrooms(mut self, bedrooms: i64) -> Self {
        self.bedrooms = Some(bedrooms);
        self
    }

    pub fn with_bathrooms(mut self, bathrooms: i64) -> Self {
        self.bathrooms = Some(bathrooms);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

/// Columns of [`RoomListing`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomField {
    Name,
    Bedrooms,
    Bathrooms,
    Price,
}

impl Field for RoomField {
    const ALL: &'static [Self] = &[
        RoomField::Name,
        RoomField::Bedrooms,
        RoomField::Bathrooms,
        RoomField::Price,
    ];
    const NAME: Self = RoomField::Name;
    const PRICE: Self = RoomField::Price;

    fn key(self) -> &'static str {
        match self {
            RoomField::Name => "name",
            RoomField::Bedrooms => "bedrooms",
            RoomField::Bathrooms => "bathrooms",
            RoomField::Price => "price",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RoomField::Name => "Name",
            RoomField::Bedrooms => "Bedrooms",
            RoomField::Bathrooms => "Bathrooms",
            RoomField::Price => "Price",
        }
    }

    fn kind(self) -> Kind {
        match self {
            RoomField::Name => Kind::Text,
            RoomField::Bedrooms | RoomField::Bathrooms => Kind::Int,
            RoomField::Price => Kind::Float,
        }
    }
}

impl fmt::Display for RoomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RoomField {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s)
    }
}

/// Changes to merge into a [`RoomListing`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomPatch {
    pub name: Option<String>,
    pub bedrooms: FieldUpdate<i64>,
    pub bathrooms: FieldUpdate<i64>,
    pub price: FieldUpdate<f64>,
}

impl Record for RoomListing {
    type Field = RoomField;
    type Patch = RoomPatch;

    const SCHEMA: Schema = Schema::Rooms;
    const NUMERIC_HINT: &'static str =
        "Bedrooms and bathrooms must be integers, and price must be a number.";

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self, field: RoomField) -> Value<'_> {
        match field {
            RoomField::Name => Value::Text(&self.name),
            RoomField::Bedrooms => Value::Int(self.bedrooms),
            RoomField::Bathrooms => Value::Int(self.bathrooms),
            RoomField::Price => Value::Float(self.price),
        }
    }

    fn apply(&mut self, patch: &RoomPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        patch.bedrooms.apply_to(&mut self.bedrooms);
        patch.bathrooms.apply_to(&mut self.bathrooms);
        patch.price.apply_to(&mut self.price);
    }

    fn from_form(form: &FormInput) -> Result<Self> {
        form.check_fields::<RoomField>(&[])?;
        let name = form.required_name()?;
        Ok(Self {
            name,
            bedrooms: form.int("bedrooms", Self::NUMERIC_HINT)?,
            bathrooms: form.int("bathrooms", Self::NUMERIC_HINT)?,
            price: form.float("price", Self::NUMERIC_HINT)?,
        })
    }

    fn patch_from_form(form: &FormInput) -> Result<RoomPatch> {
        form.check_fields::<RoomField>(&[])?;
        Ok(RoomPatch {
            name: form.name_update()?,
            bedrooms: form.int_update("bedrooms", Self::NUMERIC_HINT)?,
            bathrooms: form.int_update("bathrooms", Self::NUMERIC_HINT)?,
            price: form.float_update("price", Self::NUMERIC_HINT)?,
        })
    }

    fn set_price(&mut self, price: Option<f64>) {
        self.price = price;
    }

    fn set_patch_price(patch: &mut RoomPatch, price: FieldUpdate<f64>) {
        patch.price = price;
    }
}
