//! Persistence Module
//!
//! Whole-document JSON persistence for the record collection.
//!
//! ## Responsibilities
//! - Load every record from the data file at startup
//! - Rewrite the full document after every mutation
//! - Treat a missing file as an empty collection
//!
//! ## File Format
//! ```text
//! [
//!   { "name": "A", "bedrooms": 2, "bathrooms": 1, "price": 100000.0 },
//!   { "name": "B", "bedrooms": null, "bathrooms": 2, "price": null }
//! ]
//! ```
//! No version tag, no partial updates. Absent numbers are written as `null`;
//! keys missing on read are treated as absent.

mod json_file;

pub use json_file::JsonFile;
