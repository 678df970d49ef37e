//! Console output for export runs: one coloured, icon-prefixed line per
//! event. Errors go to stderr, everything else to stdout.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Width of the label column in `detail` lines.
const LABEL_WIDTH: usize = 9;

fn line<T: fmt::Display>(color: &str, icon: &str, msg: T) -> String {
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_CYAN, "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_GREEN, "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_YELLOW, "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(FG_RED, "❌", msg));
}

/// Run title, e.g. `📑 Incident export`.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{BOLD}📑 {msg}{RESET}");
}

/// Aligned `label : value` line under a header.
pub fn detail<T: fmt::Display>(label: &str, value: T) {
    println!("   {DIM}{label:<width$}:{RESET} {value}", width = LABEL_WIDTH);
}

/// Closing line of an export run.
pub fn summary(records: usize, duplicates: usize, manifest: Option<&std::path::Path>) {
    let index = match manifest {
        Some(path) => format!("indexed in {}", path.display()),
        None => "no manifest".to_string(),
    };
    let dup = if duplicates > 0 {
        format!(", {duplicates} duplicate id(s) overwritten")
    } else {
        String::new()
    };
    success(format!("Exported {records} incident(s), {index}{dup}"));
}
