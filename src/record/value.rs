//! Field values
//!
//! Borrowed, typed views of a record's columns.

use std::cmp::Ordering;
use std::fmt;

/// Value type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Text,
    Int,
    Float,
}

/// A column value borrowed from a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Int(Option<i64>),
    Float(Option<f64>),
}

impl<'a> Value<'a> {
    /// Natural ordering for sorting.
    ///
    /// Text compares case-insensitively, floats by total order, and an
    /// absent number sorts before any present one.
    pub fn compare(&self, other: &Value<'_>) -> Ordering {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => match (a, b) {
                (Some(a), Some(b)) => a.total_cmp(b),
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
            },
            // Columns never mix kinds; fall back to a fixed kind order
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Numeric value, widened to f64
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Int(v) => v.map(|v| v as f64),
            Value::Float(v) => v,
            Value::Text(_) => None,
        }
    }

    /// Exact equality against a searched number.
    /// An absent value never matches.
    pub fn equals_number(&self, number: Number) -> bool {
        match (*self, number) {
            (Value::Int(Some(a)), Number::Int(b)) => a == b,
            (Value::Float(Some(a)), Number::Float(b)) => a == b,
            (Value::Float(Some(a)), Number::Int(b)) => a == b as f64,
            (Value::Int(Some(a)), Number::Float(b)) => a as f64 == b,
            _ => false,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Text(_) => 0,
            Value::Int(_) => 1,
            Value::Float(_) => 2,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int(Some(v)) => write!(f, "{}", v),
            Value::Float(Some(v)) => write!(f, "{}", v),
            Value::Int(None) | Value::Float(None) => f.write_str("-"),
        }
    }
}

/// A number typed into a search form
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// One field of a patch
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate<T> {
    /// Leave the current value alone
    Keep,

    /// Make the value absent
    Clear,

    /// Replace the value
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Keep
    }
}

impl<T: Clone> FieldUpdate<T> {
    /// Write this update into a record slot
    pub fn apply_to(&self, slot: &mut Option<T>) {
        match self {
            FieldUpdate::Keep => {}
            FieldUpdate::Clear => *slot = None,
            FieldUpdate::Set(v) => *slot = Some(v.clone()),
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => FieldUpdate::Set(v),
            None => FieldUpdate::Clear,
        }
    }
}
