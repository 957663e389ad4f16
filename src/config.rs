//! Configuration for the listing store
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ListingError;

/// Main configuration for a listing store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// The JSON document holding every record.
    /// Rewritten in full on every mutation.
    pub data_file: PathBuf,

    /// Write the document indented (true) or on a single line (false)
    pub pretty: bool,

    // -------------------------------------------------------------------------
    // Record Configuration
    // -------------------------------------------------------------------------
    /// Which attribute set the records carry
    pub schema: Schema,

    // -------------------------------------------------------------------------
    // Estimator Configuration
    // -------------------------------------------------------------------------
    /// Price model file (only used by the `area` schema)
    pub model_file: Option<PathBuf>,
}

/// Record schema variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// name, bedrooms, bathrooms, price
    Rooms,

    /// name, total_sqft, bath, bhk, price (price may be estimated)
    Area,
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Rooms => f.write_str("rooms"),
            Schema::Area => f.write_str("area"),
        }
    }
}

impl FromStr for Schema {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rooms" => Ok(Schema::Rooms),
            "area" => Ok(Schema::Area),
            other => Err(ListingError::Config(format!(
                "unknown schema '{}' (expected 'rooms' or 'area')",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("properties.json"),
            pretty: true,
            schema: Schema::Rooms,
            model_file: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Toggle indented output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// Set the record schema
    pub fn schema(mut self, schema: Schema) -> Self {
        self.config.schema = schema;
        self
    }

    /// Set the price model file
    pub fn model_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.model_file = Some(path.into());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
