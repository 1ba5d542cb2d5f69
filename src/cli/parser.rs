use crate::export::ExportFormat;
use crate::utils::date::{DEFAULT_END, DEFAULT_START};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for ptpdash
/// CLI dashboard for PTP and agent posted payment records
#[derive(Parser)]
#[command(
    name = "ptpdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "PTP and Agent Posted Payments dashboard: tables, status chart and Excel export",
    long_about = None
)]
pub struct Cli {
    /// Read from a SQLite snapshot instead of the configured store
    #[arg(global = true, long = "sqlite", value_name = "PATH")]
    pub sqlite: Option<String>,

    /// Use an alternative configuration file
    #[arg(global = true, long = "config", value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Inclusive date range shared by `report` and `export`.
#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE", default_value = DEFAULT_START)]
    pub from: String,

    /// End date (YYYY-MM-DD), inclusive
    #[arg(long = "to", value_name = "DATE", default_value = DEFAULT_END)]
    pub to: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration (password hidden)")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration file for missing keys")]
        check: bool,
    },

    /// Show PTP and posted payment records for a date range
    Report {
        #[command(flatten)]
        range: RangeArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: ReportFormat,

        /// Re-render every SECS seconds until interrupted
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        refresh: Option<u64>,
    },

    /// Export both record sets to a two-sheet workbook
    Export {
        #[command(flatten)]
        range: RangeArgs,

        /// Export format
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Output file (default: `export_file` from the configuration)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
