use crate::cli::parser::ExportArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportOptions};
use crate::ui::messages::{detail, header, summary};
use std::path::PathBuf;

pub fn handle(args: &ExportArgs, cfg: &Config) -> AppResult<()> {
    let opts = build_options(args, cfg);

    header("Incident export");
    detail("input", opts.input.display());
    if let Some(sheet) = &opts.sheet {
        detail("sheet", sheet);
    }
    detail("output", opts.output_dir.display());
    detail("dates", if opts.normalize_dates { "YYYY-MM-DD" } else { "as read" });

    let outcome = ExportLogic::run(&opts)?;

    summary(
        outcome.records,
        outcome.duplicates.len(),
        outcome.manifest.as_deref(),
    );

    Ok(())
}

/// Config values first, command-line flags on top.
pub(crate) fn build_options(args: &ExportArgs, cfg: &Config) -> ExportOptions {
    let mut opts = ExportOptions::from_config(cfg);

    if let Some(input) = &args.input {
        opts.input = PathBuf::from(input);
    }
    if let Some(sheet) = &args.sheet {
        opts.sheet = Some(sheet.clone());
    }
    if let Some(output) = &args.output {
        opts.output_dir = PathBuf::from(output);
    }
    if let Some(manifest) = &args.manifest {
        opts.manifest = Some(PathBuf::from(manifest));
    }
    if let Some(prefix) = &args.prefix {
        opts.manifest_prefix = prefix.clone();
    }
    if let Some(bundle) = &args.bundle {
        opts.bundle = Some(PathBuf::from(bundle));
    }
    if args.no_manifest {
        opts.manifest = None;
    }
    if args.raw_dates {
        opts.normalize_dates = false;
    }
    if args.legacy {
        opts.manifest = None;
        opts.bundle = None;
        opts.normalize_dates = false;
    }

    opts
}
