#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn rin() -> Command {
    cargo_bin_cmd!("rincidents")
}

/// Cell values used to build fixture workbooks.
pub enum Fx {
    Blank,
    Str(&'static str),
    Num(f64),
    Date(u16, u8, u8),
}

/// Create a fresh, empty working directory inside the system temp dir
pub fn setup_workdir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rincidents", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create workdir");
    path
}

/// Path of a config file that never exists, so the user's own config
/// cannot leak into a test run
pub fn no_config(dir: &Path) -> String {
    dir.join("absent.conf").to_string_lossy().to_string()
}

/// Write a one-sheet workbook: `headers` on row 0, `rows` below
pub fn write_xlsx(path: &Path, headers: &[&str], rows: &[Vec<Fx>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (col, h) in headers.iter().enumerate() {
        worksheet.write(0, col as u16, *h).expect("write header");
    }

    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, value) in row.iter().enumerate() {
            let c = c as u16;
            match value {
                Fx::Blank => {}
                Fx::Str(s) => {
                    worksheet.write(r, c, *s).expect("write string");
                }
                Fx::Num(n) => {
                    worksheet.write(r, c, *n).expect("write number");
                }
                Fx::Date(y, m, d) => {
                    let dt = ExcelDateTime::from_ymd(*y, *m, *d).expect("valid date");
                    worksheet
                        .write_datetime_with_format(r, c, &dt, &date_format)
                        .expect("write date");
                }
            }
        }
    }

    workbook.save(path).expect("save workbook");
}

pub fn read_json(path: &Path) -> Value {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
    serde_json::from_str(&content).expect("valid json")
}

pub fn manifest_files(path: &Path) -> Vec<String> {
    read_json(path)["files"]
        .as_array()
        .expect("files array")
        .iter()
        .map(|v| v.as_str().expect("string entry").to_string())
        .collect()
}
