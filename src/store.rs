//! Store Module
//!
//! The in-memory record collection that is the session's source of truth.
//!
//! ## Responsibilities
//! - Keep records sorted by case-insensitive name at all times
//! - Rewrite the data file after every add/remove/update
//! - Keep the load-time snapshot for `reset`
//! - Track the display sort and notify the observer after every change
//!
//! ## Ordering
//!
//! `records` is always in name order so `lookup` can binary search.
//! Sorting by another column only changes the *view*: a permutation computed
//! on demand from the current `SortState`. Callers can therefore never break
//! the lookup precondition.
//!
//! ## Duplicate names
//!
//! Names are not unique. `lookup` and `update` act on the first exact match;
//! `remove` deletes every exact match.

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::persist::JsonFile;
use crate::query::{self, Direction, SearchFilter, SortState};
use crate::record::Record;

/// Told to redraw whenever the store's contents or display order change
pub trait StoreObserver<R: Record> {
    /// `rows` is the full collection in display order, sorted per `sort`
    fn refresh(&mut self, rows: &[&R], sort: &SortState<R::Field>);
}

/// The listing store
///
/// ## Ownership
/// The store is owned by the front end's event loop and mutated through
/// `&mut self`; there is no internal locking.
pub struct Store<R: Record> {
    /// Data file (full rewrite on every mutation)
    file: JsonFile,

    /// Live records, sorted by lowercased name
    records: Vec<R>,

    /// Records as loaded at startup, in the same order
    snapshot: Vec<R>,

    /// Display sort column and direction
    sort: SortState<R::Field>,

    /// Presentation hook
    observer: Option<Box<dyn StoreObserver<R>>>,
}

impl<R: Record> Store<R> {
    /// Open the store described by `config`
    ///
    /// On startup:
    /// 1. Read the data file (missing file → empty)
    /// 2. Sort by name
    /// 3. Capture the snapshot
    pub fn open(config: &Config) -> Result<Self> {
        let file = JsonFile::new(&config.data_file, config.pretty);
        Self::with_file(file)
    }

    /// Open with an explicit data file adapter
    pub fn with_file(file: JsonFile) -> Result<Self> {
        let mut records: Vec<R> = file.load()?;
        sort_by_name(&mut records);
        let snapshot = records.clone();

        info!(
            path = %file.path().display(),
            schema = %R::SCHEMA,
            count = records.len(),
            "store opened"
        );

        Ok(Self {
            file,
            records,
            snapshot,
            sort: SortState::new(),
            observer: None,
        })
    }

    /// Install the presentation hook and draw once
    pub fn set_observer(&mut self, observer: impl StoreObserver<R> + 'static) {
        self.observer = Some(Box::new(observer));
        self.notify();
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a record
    ///
    /// Steps:
    /// 1. Append
    /// 2. Re-sort by name
    /// 3. Rewrite the data file
    /// 4. Notify
    pub fn add(&mut self, record: R) -> Result<()> {
        debug!(name = record.name(), "add");
        self.records.push(record);
        sort_by_name(&mut self.records);
        self.persist()?;
        self.notify();
        Ok(())
    }

    /// Remove every record named exactly `name` (case-sensitive)
    ///
    /// The data file is rewritten even when nothing matched.
    /// Returns the number of records removed.
    pub fn remove(&mut self, name: &str) -> Result<usize> {
        let before = self.records.len();
        self.records.retain(|r| r.name() != name);
        let removed = before - self.records.len();
        debug!(name, removed, "remove");

        self.persist()?;
        self.notify();
        Ok(removed)
    }

    /// Merge `patch` into the first record named exactly `name`
    ///
    /// Returns `false` (and writes nothing) when no record matches.
    pub fn update(&mut self, name: &str, patch: &R::Patch) -> Result<bool> {
        let Some((index, _)) = self.lookup(name) else {
            debug!(name, "update: no match");
            return Ok(false);
        };

        let record = &mut self.records[index];
        record.apply(patch);
        let renamed = record.name() != name;
        if renamed {
            sort_by_name(&mut self.records);
        }
        debug!(name, renamed, "update");

        self.persist()?;
        self.notify();
        Ok(true)
    }

    /// Discard in-session changes and return to the load-time snapshot.
    ///
    /// The data file is not touched.
    pub fn reset(&mut self) {
        self.records = self.snapshot.clone();
        debug!(count = self.records.len(), "reset to snapshot");
        self.notify();
    }

    /// Rewrite the data file with the current records
    pub fn save(&self) -> Result<()> {
        self.persist()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Binary search for the first record named exactly `name`
    ///
    /// Returns the record's index in name order, or `None`.
    pub fn lookup(&self, name: &str) -> Option<(usize, &R)> {
        let key = name.to_lowercase();
        let start = self.records.partition_point(|r| r.sort_key() < key);

        self.records[start..]
            .iter()
            .take_while(|r| r.sort_key() == key)
            .position(|r| r.name() == name)
            .map(|offset| (start + offset, &self.records[start + offset]))
    }

    /// Sort the display by `field`
    pub fn sort(&mut self, field: R::Field, direction: Direction) {
        self.sort.set(field, direction);
        self.notify();
    }

    /// Column-header click: same column flips, new column ascends
    pub fn toggle_sort(&mut self, field: R::Field) -> Direction {
        let direction = self.sort.toggle(field);
        self.notify();
        direction
    }

    /// Records satisfying `filter`, in display order. Never mutates.
    pub fn search(&self, filter: &SearchFilter<R::Field>) -> Vec<&R> {
        self.view().into_iter().filter(|r| filter.matches(*r)).collect()
    }

    /// All records in display order
    pub fn view(&self) -> Vec<&R> {
        view_of(&self.records, &self.sort)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Records in name order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Records as loaded at startup
    pub fn snapshot(&self) -> &[R] {
        &self.snapshot
    }

    pub fn sort_state(&self) -> &SortState<R::Field> {
        &self.sort
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn persist(&self) -> Result<()> {
        self.file.save(&self.records)
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            let rows = view_of(&self.records, &self.sort);
            observer.refresh(&rows, &self.sort);
        }
    }
}

/// Stable sort by lowercased name
fn sort_by_name<R: Record>(records: &mut [R]) {
    records.sort_by_cached_key(|r| r.sort_key());
}

fn view_of<'a, R: Record>(records: &'a [R], sort: &SortState<R::Field>) -> Vec<&'a R> {
    match sort.current() {
        Some((field, direction)) => query::sorted_indices(records, field, direction)
            .into_iter()
            .map(|i| &records[i])
            .collect(),
        None => records.iter().collect(),
    }
}
