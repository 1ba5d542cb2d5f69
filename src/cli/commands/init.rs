use crate::cli::parser::Commands;
use crate::config::{Config, PASSWORD_ENV};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if config_path.exists() && !*force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                config_path.display()
            )));
        }

        let cfg = Config::write_default(config_path)?;

        success(format!("Config file: {}", config_path.display()));
        info(format!(
            "Store: {:?} at {}:{} (database `{}`)",
            cfg.store, cfg.mysql.host, cfg.mysql.port, cfg.mysql.database
        ));
        info(format!(
            "Set the MySQL password in the file or via {PASSWORD_ENV}."
        ));
    }
    Ok(())
}
