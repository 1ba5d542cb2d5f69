use crate::cli::commands::open_fetcher;
use crate::cli::parser::{Commands, ReportFormat};
use crate::config::Config;
use crate::core::ReportLogic;
use crate::errors::AppResult;
use crate::export::json::to_json;
use crate::models::{Dashboard, RecordSet};
use crate::ui::chart::render_status_chart;
use crate::ui::messages::{header, info, use_color, warning};
use crate::ui::table::Table;
use crate::utils::date::parse_date;
use std::thread;
use std::time::Duration;

/// Widest a single cell may get in the terminal (long remarks).
const MAX_CELL_WIDTH: usize = 40;
const MAX_BAR: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        range,
        format,
        refresh,
    } = cmd
    {
        let start = parse_date(&range.from)?;
        let end = parse_date(&range.to)?;

        let fetcher = open_fetcher(cfg)?;

        loop {
            let dash = ReportLogic::render(&fetcher, start, end)?;

            match format {
                ReportFormat::Table => print_dashboard(&dash, cfg),
                ReportFormat::Json => println!("{}", to_json(&dash)?),
            }

            let Some(secs) = refresh else { break };
            thread::sleep(Duration::from_secs(*secs));
        }
    }
    Ok(())
}

fn print_dashboard(dash: &Dashboard, cfg: &Config) {
    header(
        "📊",
        format!(
            "PTP and Agent Posted Payments Dashboard - {}",
            cfg.client_segment
        ),
    );
    info(format!("Date range: {}", dash.range));

    for set in RecordSet::ALL {
        let icon = match set {
            RecordSet::Ptp => "📋",
            RecordSet::Posted => "🧾",
        };
        header(icon, set.title());

        let records = dash.records(set);
        if records.is_empty() {
            warning(set.empty_warning());
            continue;
        }

        print!("{}", records_table(dash, set).render());

        if set == RecordSet::Ptp {
            header("📈", "PTP Status Count by Agent");
            print!(
                "{}",
                render_status_chart(&dash.ptp_status_counts, MAX_BAR, use_color())
            );
        }
    }
}

fn records_table(dash: &Dashboard, set: RecordSet) -> Table {
    let mut table = Table::new(set.headers()).with_max_width(MAX_CELL_WIDTH);
    for rec in dash.records(set) {
        table.add_row(rec.cells(set).iter().map(|c| c.display()).collect());
    }
    table
}
