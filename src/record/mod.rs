//! Record Module
//!
//! The listing schemas and the typed plumbing around them.
//!
//! ## Responsibilities
//! - Define the two listing shapes (`rooms` and `area`)
//! - Enumerate each shape's fields for sorting, searching and display
//! - Expose field values with a comparable, typed representation
//! - Merge patches into records in place
//!
//! Every numeric attribute is optional: absence (`null` in the data file)
//! is kept distinct from zero, and a key missing from the document reads
//! as absent.

mod area;
mod rooms;
mod value;

use std::fmt::{Debug, Display};
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Schema;
use crate::error::{ListingError, Result};
use crate::form::FormInput;

pub use area::{AreaField, AreaListing, AreaPatch};
pub use rooms::{RoomField, RoomListing, RoomPatch};
pub use value::{FieldUpdate, Kind, Number, Value};

/// A column of a record schema
pub trait Field:
    Copy + Eq + Debug + Display + FromStr<Err = ListingError> + 'static
{
    /// Every field, in table column order
    const ALL: &'static [Self];

    /// The lookup key
    const NAME: Self;

    /// The price column (range predicates, estimator output)
    const PRICE: Self;

    /// Key used in the data file and on the command line
    fn key(self) -> &'static str;

    /// Column header text
    fn label(self) -> &'static str;

    /// Value type stored in this column
    fn kind(self) -> Kind;

    /// Resolve a field from its key or its header label (case-insensitive)
    fn from_key(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(wanted) || f.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ListingError::UnknownField(wanted.to_string()))
    }
}

/// A listing held by the store
pub trait Record: Clone + Debug + PartialEq + Serialize + DeserializeOwned {
    type Field: Field;
    type Patch: Clone + Debug + Default;

    /// Schema this record type implements
    const SCHEMA: Schema;

    /// Shown when a numeric form field fails to parse
    const NUMERIC_HINT: &'static str;

    fn name(&self) -> &str;

    fn value(&self, field: Self::Field) -> Value<'_>;

    /// Merge the fields the patch sets into this record
    fn apply(&mut self, patch: &Self::Patch);

    /// Build a record from a submitted form (name required)
    fn from_form(form: &FormInput) -> Result<Self>;

    /// Build a patch from a submitted form; keys absent from the form are kept
    fn patch_from_form(form: &FormInput) -> Result<Self::Patch>;

    /// Set or clear the price
    fn set_price(&mut self, price: Option<f64>);

    /// Point a patch's price update at `price`
    fn set_patch_price(patch: &mut Self::Patch, price: FieldUpdate<f64>);

    /// Estimator inputs `(area, bath, bedrooms)`; `None` when the schema
    /// has no such features or one of them is absent
    fn features(&self) -> Option<(f64, f64, i64)> {
        None
    }

    fn price(&self) -> Option<f64> {
        self.value(Self::Field::PRICE).as_f64()
    }

    /// Lowercased name, the store's ordering key
    fn sort_key(&self) -> String {
        self.name().to_lowercase()
    }
}
