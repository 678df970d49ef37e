// src/core/dates.rs

use crate::core::excel_date::excel_serial_to_datetime;
use crate::models::{Cell, Table};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Name of the column normalized before mapping.
pub const DATE_COLUMN: &str = "date";

/// Prova a interpretare un testo come data o data/ora.
///
/// Supported inputs, tried in order:
/// - RFC 3339 (`2024-03-01T10:00:00+02:00`)
/// - `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]`
/// - `YYYY-MM-DD`, `YYYY/MM/DD`
/// - `MM/DD/YYYY`, falling back to `DD/MM/YYYY` when the month is > 12
/// - `DD.MM.YYYY`
pub(crate) fn parse_date_text(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    let dt_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    for fmt in dt_formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%d.%m.%Y"];

    for fmt in date_formats.iter() {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Normalizes one cell to a `YYYY-MM-DD` text cell, or `Empty` when the
/// value cannot be read as a calendar date.
pub(crate) fn normalize_date_cell(cell: &Cell) -> Cell {
    let parsed = match cell {
        Cell::DateTime(dt) => Some(*dt),
        Cell::Text(s) => parse_date_text(s),
        Cell::Int(i) => excel_serial_to_datetime(*i as f64),
        Cell::Float(f) => excel_serial_to_datetime(*f),
        Cell::Empty | Cell::Bool(_) => None,
    };

    match parsed {
        Some(dt) => Cell::Text(dt.format("%Y-%m-%d").to_string()),
        None => Cell::Empty,
    }
}

/// Column-wide pass over `date`, run once before any row is mapped.
///
/// Returns how many non-empty values could not be parsed. A table without
/// a `date` column is left untouched.
pub fn normalize_date_column(table: &mut Table) -> usize {
    let Some(col) = table.column(DATE_COLUMN) else {
        return 0;
    };

    let mut unparsable = 0;
    for row in table.rows.iter_mut() {
        if let Some(cell) = row.get_mut(col) {
            let normalized = normalize_date_cell(cell);
            if normalized.is_empty() && !cell.is_empty() {
                unparsable += 1;
            }
            *cell = normalized;
        }
    }

    unparsable
}
