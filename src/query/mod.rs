//! Query Module
//!
//! Sorting and filtering over a record collection.
//!
//! ## Responsibilities
//! - Stable sort by any column, either direction
//! - Column-header toggle state (same column flips, new column ascends)
//! - AND-combined predicate search producing a transient view
//!
//! Nothing here mutates the store. Search borrows records; sort works on
//! whatever slice or index list it is given.

mod search;
mod sort;

pub use search::{search, Predicate, SearchFilter, MAX_PRICE_KEY, MIN_PRICE_KEY, NO_MATCHES};
pub use sort::{sort_by_field, sorted_indices, Direction, SortState};
