// src/export/records.rs

use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_parent, write_pretty_json};
use crate::models::Incident;
use std::path::Path;

/// Writes one incident to `<dir>/<NNN>.json`.
/// An existing file with the same name is overwritten.
pub(crate) fn write_record(dir: &Path, incident: &Incident) -> AppResult<()> {
    write_pretty_json(&dir.join(incident.file_name()), incident)
}

/// Writes every incident as a single JSON array.
pub(crate) fn write_bundle(path: &Path, incidents: &[Incident]) -> AppResult<()> {
    ensure_parent(path)?;
    write_pretty_json(path, incidents)
}
