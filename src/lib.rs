//! rincidents library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod source;
pub mod ui;

use clap::Parser;
use cli::parser::{Cli, Commands, ExportArgs};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Init { force }) => cli::commands::init::handle(cli, *force),
        Some(Commands::Config { print_config }) => {
            let source = cli
                .config
                .clone()
                .unwrap_or_else(|| Config::config_file().display().to_string());
            cli::commands::config::handle(*print_config, cfg, &source)
        }
        Some(Commands::Export(args)) => cli::commands::export::handle(args, cfg),
        None => cli::commands::export::handle(&ExportArgs::default(), cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` must not fail on a broken existing file it is about to replace
    let cfg = match &cli.command {
        Some(Commands::Init { .. }) => Config::default(),
        _ => Config::load(cli.config.as_deref().map(Path::new))?,
    };

    dispatch(&cli, &cfg)
}
