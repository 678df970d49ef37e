use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rincidents
/// CLI application to export spreadsheet incidents to JSON files
#[derive(Parser)]
#[command(
    name = "rincidents",
    version = env!("CARGO_PKG_VERSION"),
    about = "Export spreadsheet incident records to per-record JSON files and a manifest",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Subcommand; without one, `export` runs with the configured defaults
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the effective configuration
    Config {
        /// Print the configuration as YAML
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Export every spreadsheet row to `<output>/<NNN>.json`
    Export(ExportArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct ExportArgs {
    /// Input spreadsheet (.xlsx, .xls, .ods or .csv)
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<String>,

    /// Worksheet name (default: first worksheet)
    #[arg(long, value_name = "NAME")]
    pub sheet: Option<String>,

    /// Output directory for the record files
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<String>,

    /// Manifest file path
    #[arg(long, value_name = "FILE", conflicts_with = "no_manifest")]
    pub manifest: Option<String>,

    /// Do not write a manifest
    #[arg(long)]
    pub no_manifest: bool,

    /// Path prefix of the manifest entries
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Also write every record into one JSON array
    #[arg(long, value_name = "FILE")]
    pub bundle: Option<String>,

    /// Keep the `date` column as read, without YYYY-MM-DD normalization
    #[arg(long)]
    pub raw_dates: bool,

    /// Plain export: no manifest, no date normalization
    #[arg(long, conflicts_with_all = ["manifest", "bundle"])]
    pub legacy: bool,
}
