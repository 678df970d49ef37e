// src/export/logic.rs

use crate::config::Config;
use crate::core::dates::normalize_date_column;
use crate::core::map_row;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_dir, relative_to_parent};
use crate::export::manifest::Manifest;
use crate::export::notify_export_success;
use crate::export::records::{write_bundle, write_record};
use crate::models::{Incident, Table};
use crate::source::read_table;
use crate::ui::messages::{info, warning};
use std::collections::HashSet;
use std::path::PathBuf;

/// Everything one export run needs to know.
///
/// `manifest: None` and `normalize_dates: false` together give the plain
/// per-file export without index.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportOptions {
    pub input: PathBuf,
    pub sheet: Option<String>,
    pub output_dir: PathBuf,
    pub manifest: Option<PathBuf>,
    pub manifest_prefix: String,
    pub bundle: Option<PathBuf>,
    pub normalize_dates: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ExportOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            input: PathBuf::from(&cfg.input),
            sheet: cfg.sheet.clone(),
            output_dir: PathBuf::from(&cfg.output_dir),
            manifest: cfg.manifest.as_ref().map(PathBuf::from),
            manifest_prefix: cfg.manifest_prefix.clone(),
            bundle: cfg.bundle.as_ref().map(PathBuf::from),
            normalize_dates: cfg.normalize_dates,
        }
    }
}

/// Outcome of a run, in row order.
#[derive(Debug, Default)]
pub struct ExportSummary {
    pub records: usize,
    /// Ids seen more than once; each repeat overwrote the earlier file.
    pub duplicates: Vec<i64>,
    pub unparsable_dates: usize,
    pub manifest: Option<PathBuf>,
}

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Reads the input spreadsheet and exports it.
    pub fn run(opts: &ExportOptions) -> AppResult<ExportSummary> {
        let mut table = read_table(&opts.input, opts.sheet.as_deref())?;
        Self::export_table(&mut table, opts)
    }

    /// Straight-line pass over an already loaded table:
    /// normalize dates → map rows → write record files → write bundle →
    /// write manifest. The manifest is written last, so a failed run
    /// leaves none behind.
    pub fn export_table(table: &mut Table, opts: &ExportOptions) -> AppResult<ExportSummary> {
        ensure_dir(&opts.output_dir)?;

        let mut summary = ExportSummary::default();

        if opts.normalize_dates {
            summary.unparsable_dates = normalize_date_column(table);
            if summary.unparsable_dates > 0 {
                warning(format!(
                    "{} date value(s) could not be parsed and were left empty",
                    summary.unparsable_dates
                ));
            }
        }

        let mut manifest = Manifest::default();
        let mut seen: HashSet<i64> = HashSet::new();
        let mut bundled: Vec<Incident> = Vec::new();

        for (index, row) in table.rows().enumerate() {
            let incident = map_row(&row, index)?;

            if !seen.insert(incident.id) {
                warning(format!(
                    "Duplicate id {} at row {}: {} overwritten",
                    incident.id,
                    index + 1,
                    incident.file_name()
                ));
                summary.duplicates.push(incident.id);
            }

            write_record(&opts.output_dir, &incident)?;
            manifest.push(&opts.manifest_prefix, &incident.file_name());
            summary.records += 1;

            if opts.bundle.is_some() {
                bundled.push(incident);
            }
        }

        notify_export_success(
            &format!("{} record file(s)", summary.records),
            &opts.output_dir,
        );

        if let Some(bundle_path) = &opts.bundle {
            write_bundle(bundle_path, &bundled)?;
            if let Some(manifest_path) = &opts.manifest {
                manifest.bundle = Some(relative_to_parent(manifest_path, bundle_path)?);
            }
            notify_export_success("Bundle", bundle_path);
        }

        match &opts.manifest {
            Some(manifest_path) => {
                manifest.write(manifest_path)?;
                notify_export_success(
                    &format!("Manifest ({} entries)", manifest.len()),
                    manifest_path,
                );
                summary.manifest = Some(manifest_path.clone());
            }
            None => info("Manifest disabled, no index written."),
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;
    use std::fs;

    fn temp_opts(name: &str) -> ExportOptions {
        let base = std::env::temp_dir().join(format!("rincidents_logic_{name}"));
        fs::remove_dir_all(&base).ok();
        ExportOptions {
            input: base.join("unused.xlsx"),
            sheet: None,
            output_dir: base.join("data").join("incidents"),
            manifest: Some(base.join("manifest.json")),
            manifest_prefix: "incidents".into(),
            bundle: None,
            normalize_dates: true,
        }
    }

    fn sample_table() -> Table {
        Table::new(
            vec!["id".into(), "title".into(), "date".into()],
            vec![
                vec![Cell::Int(3), Cell::Text("c".into()), Cell::Text("2024-01-03".into())],
                vec![Cell::Int(1), Cell::Text("a".into()), Cell::Text("garbage".into())],
                vec![Cell::Int(3), Cell::Text("c2".into()), Cell::Empty],
            ],
        )
    }

    #[test]
    fn writes_files_and_manifest_in_row_order() {
        let opts = temp_opts("row_order");
        let mut table = sample_table();

        let summary = ExportLogic::export_table(&mut table, &opts).unwrap();

        assert_eq!(summary.records, 3);
        assert_eq!(summary.duplicates, vec![3]);
        assert_eq!(summary.unparsable_dates, 1);

        let manifest: Manifest =
            serde_json::from_str(&fs::read_to_string(opts.manifest.as_ref().unwrap()).unwrap())
                .unwrap();
        assert_eq!(
            manifest.files,
            vec!["incidents/003.json", "incidents/001.json", "incidents/003.json"]
        );
        assert!(manifest.bundle.is_none());

        // the later row with id 3 wins
        let last: Incident = serde_json::from_str(
            &fs::read_to_string(opts.output_dir.join("003.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(last.title, "c2");
    }

    #[test]
    fn invalid_id_leaves_no_manifest() {
        let opts = temp_opts("invalid_id");
        let mut table = Table::new(
            vec!["id".into()],
            vec![vec![Cell::Int(1)], vec![Cell::Text("x1".into())]],
        );

        assert!(ExportLogic::export_table(&mut table, &opts).is_err());
        assert!(!opts.manifest.as_ref().unwrap().exists());
        assert!(opts.output_dir.join("001.json").exists());
    }

    #[test]
    fn raw_dates_are_kept_without_normalization() {
        let mut opts = temp_opts("raw_dates");
        opts.normalize_dates = false;
        opts.manifest = None;
        let mut table = sample_table();

        let summary = ExportLogic::export_table(&mut table, &opts).unwrap();
        assert!(summary.manifest.is_none());

        let one: Incident = serde_json::from_str(
            &fs::read_to_string(opts.output_dir.join("001.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(one.date, "garbage");
    }

    #[test]
    fn bundle_is_referenced_from_manifest() {
        let mut opts = temp_opts("bundle");
        let bundle = opts.manifest.as_ref().unwrap().with_file_name("incidents.bundle.json");
        opts.bundle = Some(bundle.clone());
        let mut table = sample_table();

        ExportLogic::export_table(&mut table, &opts).unwrap();

        let manifest: Manifest =
            serde_json::from_str(&fs::read_to_string(opts.manifest.as_ref().unwrap()).unwrap())
                .unwrap();
        assert_eq!(manifest.bundle.as_deref(), Some("incidents.bundle.json"));

        let all: Vec<Incident> =
            serde_json::from_str(&fs::read_to_string(&bundle).unwrap()).unwrap();
        let ids: Vec<i64> = all.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 3]);
    }
}
