use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli, force: bool) -> AppResult<()> {
    let path = Config::init(cli.config.as_deref().map(Path::new), force)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
