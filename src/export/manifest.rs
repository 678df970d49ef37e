// src/export/manifest.rs

use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_parent, write_pretty_json};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Index of every record file written during a run, in row order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Manifest {
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<String>,
}

impl Manifest {
    /// Appends `<prefix>/<file_name>`; an empty prefix keeps the bare name.
    pub fn push(&mut self, prefix: &str, file_name: &str) {
        let prefix = prefix.trim_end_matches('/');
        let entry = if prefix.is_empty() {
            file_name.to_string()
        } else {
            format!("{prefix}/{file_name}")
        };
        self.files.push(entry);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn write(&self, path: &Path) -> AppResult<()> {
        ensure_parent(path)?;
        write_pretty_json(path, self)
    }
}
