// src/export/mod.rs

mod excel_date;
mod fs_utils;
pub mod json;
pub mod xlsx;

pub use xlsx::build_workbook;

use crate::errors::AppResult;
use crate::models::Dashboard;
use crate::ui::messages::{info, success, warning};
use clap::ValueEnum;
use fs_utils::ensure_writable;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
        }
    }
}

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Serialize `dash` in `format` and write it to `path`.
    ///
    /// The document is built fully in memory first; nothing touches the
    /// file system until serialization succeeded.
    pub fn export(dash: &Dashboard, format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
        ensure_writable(path, force)?;

        if dash.is_empty() {
            warning("No records found for the selected date range; both sheets will hold a placeholder.");
        }

        info(format!(
            "Exporting {} ({}) to {}",
            format.as_str().to_uppercase(),
            dash.range,
            path.display()
        ));

        let bytes = match format {
            ExportFormat::Xlsx => build_workbook(dash)?,
            ExportFormat::Json => json::to_json(dash)?.into_bytes(),
        };

        fs::write(path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), format = format.as_str(), "export written");

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        Ok(())
    }
}
