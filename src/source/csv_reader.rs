// src/source/csv_reader.rs

use crate::errors::AppResult;
use crate::models::{Cell, Table};
use std::path::Path;

/// Reads a CSV file with a header row. Every value is text; blank values
/// are empty cells.
pub(crate) fn read_csv(path: &Path) -> AppResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row: Vec<Cell> = record.iter().map(Cell::text).collect();
        if row.iter().any(|c| !c.is_empty()) {
            rows.push(row);
        }
    }

    Ok(Table::new(headers, rows))
}
