use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if !*print_config && !*check {
            info(format!("Config file: {}", config_path.display()));
            info("Use --print or --check.");
            return Ok(());
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_redacted_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !config_path.exists() {
                warning(format!(
                    "No configuration file at {}; defaults are in use.",
                    config_path.display()
                ));
                return Ok(());
            }

            let content = fs::read_to_string(config_path)?;
            let missing = Config::missing_keys(&content)?;

            if missing.is_empty() {
                success(format!("{} is complete.", config_path.display()));
            } else {
                warning(format!(
                    "Missing keys (defaults used): {}",
                    missing.join(", ")
                ));
            }
        }
    }
    Ok(())
}
