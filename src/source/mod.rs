// src/source/mod.rs

mod csv_reader;
mod workbook;

use crate::errors::AppResult;
use crate::models::Table;
use crate::ui::messages::info;
use std::path::Path;

/// Loads the input table.
///
/// `.csv` files go through the CSV reader, everything else (`xlsx`, `xlsm`,
/// `xls`, `ods`) through the workbook reader. `sheet` picks a worksheet by
/// name; without it the first worksheet is used. CSV input ignores `sheet`.
pub fn read_table(path: &Path, sheet: Option<&str>) -> AppResult<Table> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let table = if is_csv {
        csv_reader::read_csv(path)?
    } else {
        workbook::read_workbook(path, sheet)?
    };

    info(format!(
        "Loaded {} row(s), {} column(s) from {}",
        table.len(),
        table.headers.len(),
        path.display()
    ));

    Ok(table)
}
