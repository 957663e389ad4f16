//! Plain-text table rendering
//!
//! Column headers come from the schema; the sorted column carries an arrow.

use std::fmt::Write;

use crate::query::SortState;
use crate::record::{Field, Kind, Record};

/// Render `rows` as an aligned text table
pub fn render<R: Record>(rows: &[&R], sort: &SortState<R::Field>) -> String {
    let fields = R::Field::ALL;

    let headers: Vec<String> = fields.iter().map(|&f| sort.header(f)).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| fields.iter().map(|&f| r.value(f).to_string()).collect())
        .collect();

    let widths: Vec<usize> = (0..fields.len())
        .map(|col| {
            cells
                .iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(headers[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_row(&mut out, fields, &headers, &widths, true);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, fields, &rule, &widths, true);
    for row in &cells {
        push_row(&mut out, fields, row, &widths, false);
    }
    out
}

fn push_row<F: Field>(out: &mut String, fields: &[F], row: &[String], widths: &[usize], header: bool) {
    let mut line = String::new();
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let pad = widths[i].saturating_sub(cell.chars().count());
        // Numbers right-aligned, text left-aligned
        if !header && fields[i].kind() != Kind::Text {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        } else {
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
        }
    }
    let _ = writeln!(out, "{}", line.trim_end());
}
