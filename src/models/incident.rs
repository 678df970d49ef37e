use serde::{Deserialize, Serialize};

/// Placeholder color used when a row carries no `color` value.
pub const DEFAULT_COLOR: &str = "#a78bfa";

/// Width of the zero-padded id used as file stem.
pub const ID_WIDTH: usize = 3;

/// One incident, derived from a single spreadsheet row.
///
/// Field order is the serialization order of the JSON files.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Incident {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub country: String,
    pub region: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub actor: String,
    pub impact: String,
    pub source: String,
    pub summary: String,
    pub color: String,
}

impl Incident {
    /// Empty record for `id`, every text field at its default.
    pub fn with_id(id: i64) -> Self {
        Self {
            id,
            title: String::new(),
            date: String::new(),
            country: String::new(),
            region: String::new(),
            kind: String::new(),
            actor: String::new(),
            impact: String::new(),
            source: String::new(),
            summary: String::new(),
            color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Output file name, e.g. `007.json`.
    pub fn file_name(&self) -> String {
        file_name_for(self.id)
    }
}

/// Zero-padded file name for an id: `7 -> 007.json`, `1234 -> 1234.json`.
pub fn file_name_for(id: i64) -> String {
    format!("{:0width$}.json", id, width = ID_WIDTH)
}
