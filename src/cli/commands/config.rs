use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

/// Handle the `config` command.
pub fn handle(print_config: bool, cfg: &Config, source: &str) -> AppResult<()> {
    if !print_config {
        info("Use --print to show the effective configuration.");
        return Ok(());
    }

    header(format!("Configuration ({source})"));
    print!("{}", cfg.to_yaml()?);
    Ok(())
}
