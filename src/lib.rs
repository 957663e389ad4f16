//! # listings
//!
//! A small real-estate listing store with:
//! - An in-memory record collection kept sorted by name
//! - Whole-file JSON persistence on every mutation
//! - Column sorting and multi-predicate search
//! - Optional price estimation from a linear regression model
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Front end (CLI / shell)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ forms, clicks
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Session                                │
//! │        (validation, inline price estimation)                 │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │      Store      │                │    Estimator    │
//!   │ (name-sorted)   │                │ (linear model)  │
//!   └───┬─────────┬───┘                └─────────────────┘
//!       │         │
//!       ▼         ▼
//!  ┌─────────┐ ┌─────────┐
//!  │  Query  │ │ Persist │
//!  │ (views) │ │ (JSON)  │
//!  └─────────┘ └─────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod form;
pub mod persist;
pub mod query;
pub mod estimator;
pub mod store;
pub mod session;
pub mod table;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ListingError, Result};
pub use config::{Config, Schema};
pub use record::{AreaListing, Record, RoomListing};
pub use session::Session;
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the listings crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
