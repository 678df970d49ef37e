// src/core/mapping.rs

use crate::errors::{AppError, AppResult};
use crate::models::incident::DEFAULT_COLOR;
use crate::models::table::Row;
use crate::models::{Cell, Incident};

/// Maps one data row onto an `Incident`.
///
/// `index` is the 0-based position of the row; it supplies the id when the
/// `id` column is missing or blank. Missing or blank text fields become "",
/// a missing or blank `color` becomes the placeholder color.
pub fn map_row(row: &Row<'_>, index: usize) -> AppResult<Incident> {
    let position = index + 1;

    let id = match row.get("id") {
        Some(cell) if !cell.is_empty() => coerce_id(cell, position)?,
        _ => position as i64,
    };

    let text = |name: &str| row.get(name).map(Cell::to_text).unwrap_or_default();

    let color = match row.get("color") {
        Some(cell) if !cell.is_empty() => cell.to_text(),
        _ => DEFAULT_COLOR.to_string(),
    };

    Ok(Incident {
        id,
        title: text("title"),
        date: text("date"),
        country: text("country"),
        region: text("region"),
        kind: text("type"),
        actor: text("actor"),
        impact: text("impact"),
        source: text("source"),
        summary: text("summary"),
        color,
    })
}

/// Integer-like cell → id. Anything else aborts the run.
fn coerce_id(cell: &Cell, position: usize) -> AppResult<i64> {
    let invalid = || AppError::InvalidId {
        row: position,
        value: cell.to_text(),
    };

    match cell {
        Cell::Int(i) => Ok(*i),
        Cell::Float(f) => whole_float(*f).ok_or_else(invalid),
        Cell::Text(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                return Ok(i);
            }
            s.parse::<f64>()
                .ok()
                .and_then(whole_float)
                .ok_or_else(invalid)
        }
        Cell::Empty | Cell::Bool(_) | Cell::DateTime(_) => Err(invalid()),
    }
}

fn whole_float(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 {
        Some(f as i64)
    } else {
        None
    }
}
