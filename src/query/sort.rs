//! Column sorting

use std::cmp::Ordering;

use crate::record::{Field, Record};

/// Sort direction of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Marker appended to the active column header
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Ascending => " ↑",
            Direction::Descending => " ↓",
        }
    }

    fn flip(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// Which column the table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    column: Option<(F, Direction)>,
}

impl<F: Field> Default for SortState<F> {
    fn default() -> Self {
        Self { column: None }
    }
}

impl<F: Field> SortState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header click: the same column flips direction, a new column ascends
    pub fn toggle(&mut self, field: F) -> Direction {
        let direction = match self.column {
            Some((current, direction)) if current == field => direction.flip(),
            _ => Direction::Ascending,
        };
        self.column = Some((field, direction));
        direction
    }

    /// Set the column and direction directly
    pub fn set(&mut self, field: F, direction: Direction) {
        self.column = Some((field, direction));
    }

    pub fn clear(&mut self) {
        self.column = None;
    }

    pub fn current(&self) -> Option<(F, Direction)> {
        self.column
    }

    /// Header text for `field`, with an arrow if it is the sorted column
    pub fn header(&self, field: F) -> String {
        match self.column {
            Some((current, direction)) if current == field => {
                format!("{}{}", field.label(), direction.arrow())
            }
            _ => field.label().to_string(),
        }
    }
}

/// Compare two records on one column
fn compare<R: Record>(a: &R, b: &R, field: R::Field, direction: Direction) -> Ordering {
    let ord = a.value(field).compare(&b.value(field));
    match direction {
        Direction::Ascending => ord,
        // Reversing the comparator (not the output) keeps ties in input order
        Direction::Descending => ord.reverse(),
    }
}

/// Stable in-place sort of `records` by `field`
pub fn sort_by_field<R: Record>(records: &mut [R], field: R::Field, direction: Direction) {
    records.sort_by(|a, b| compare(a, b, field, direction));
}

/// Stable display order of `records` by `field`, as indices into the slice
pub fn sorted_indices<R: Record>(records: &[R], field: R::Field, direction: Direction) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| compare(&records[a], &records[b], field, direction));
    order
}
