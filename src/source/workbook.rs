// src/source/workbook.rs

use crate::core::dates::parse_date_text;
use crate::core::excel_date::excel_serial_to_datetime;
use crate::errors::{AppError, AppResult};
use crate::models::{Cell, Table};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Reads one worksheet of a workbook; first row is the header row.
pub(crate) fn read_workbook(path: &Path, sheet: Option<&str>) -> AppResult<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match sheet {
        Some(name) => workbook.worksheet_range(name)?,
        None => workbook.worksheet_range_at(0).ok_or_else(|| {
            AppError::Spreadsheet(format!("no worksheet found in {}", path.display()))
        })??,
    };

    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(first) => first
            .iter()
            .map(|c| data_to_cell(c).to_text().trim().to_string())
            .collect(),
        None => return Ok(Table::default()),
    };

    let data: Vec<Vec<Cell>> = rows
        .map(|r| r.iter().map(data_to_cell).collect::<Vec<_>>())
        .filter(|r: &Vec<Cell>| r.iter().any(|c| !c.is_empty()))
        .collect();

    Ok(Table::new(headers, data))
}

/// Maps a calamine cell onto our own `Cell`.
fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::text(s.as_str()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => match excel_serial_to_datetime(dt.as_f64()) {
            Some(ndt) => Cell::DateTime(ndt),
            None => Cell::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) => match parse_date_text(s) {
            Some(ndt) => Cell::DateTime(ndt),
            None => Cell::text(s.as_str()),
        },
        Data::DurationIso(s) => Cell::text(s.as_str()),
        Data::Error(_) => Cell::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_plain_values() {
        assert_eq!(data_to_cell(&Data::Empty), Cell::Empty);
        assert_eq!(data_to_cell(&Data::String("".into())), Cell::Empty);
        assert_eq!(data_to_cell(&Data::String("Lima".into())), Cell::Text("Lima".into()));
        assert_eq!(data_to_cell(&Data::Int(4)), Cell::Int(4));
        assert_eq!(data_to_cell(&Data::Float(4.5)), Cell::Float(4.5));
        assert_eq!(data_to_cell(&Data::Bool(false)), Cell::Bool(false));
    }

    #[test]
    fn maps_iso_datetime_text() {
        let cell = data_to_cell(&Data::DateTimeIso("2024-03-01T10:00:00".into()));
        assert_eq!(cell.to_text(), "2024-03-01 10:00:00");
    }

    #[test]
    fn error_cells_are_empty() {
        let cell = data_to_cell(&Data::Error(calamine::CellErrorType::NA));
        assert!(cell.is_empty());
    }
}
