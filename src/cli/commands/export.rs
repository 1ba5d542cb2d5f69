use crate::cli::commands::open_fetcher;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ReportLogic;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::utils::date::parse_date;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        range,
        format,
        file,
        force,
    } = cmd
    {
        let start = parse_date(&range.from)?;
        let end = parse_date(&range.to)?;

        let fetcher = open_fetcher(cfg)?;
        let dash = ReportLogic::render(&fetcher, start, end)?;

        let path = output_path(file.as_deref(), cfg, *format);
        ExportLogic::export(&dash, *format, &path, *force)?;
    }
    Ok(())
}

/// `--file` if given, otherwise the configured name with the format's extension.
fn output_path(file: Option<&str>, cfg: &Config, format: ExportFormat) -> PathBuf {
    match file {
        Some(f) => expand_tilde(f),
        None => expand_tilde(&cfg.export_file).with_extension(format.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_follows_format() {
        let cfg = Config::default();
        assert_eq!(
            output_path(None, &cfg, ExportFormat::Xlsx),
            PathBuf::from("PTP_and_Agent_Posted_Payments.xlsx")
        );
        assert_eq!(
            output_path(None, &cfg, ExportFormat::Json),
            PathBuf::from("PTP_and_Agent_Posted_Payments.json")
        );
        assert_eq!(
            output_path(Some("/tmp/out.xlsx"), &cfg, ExportFormat::Json),
            PathBuf::from("/tmp/out.xlsx")
        );
    }
}
