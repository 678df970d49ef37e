// src/export/mod.rs

mod fs_utils;
pub mod logic;
pub mod manifest;
mod records;

pub use logic::{ExportLogic, ExportOptions, ExportSummary};
pub use manifest::Manifest;

use crate::ui::messages::success;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}
