//! Text bar chart for the per-agent status counts.

use crate::models::StatusCountRow;
use crate::ui::table::Table;
use ansi_term::Colour;

const PALETTE: [Colour; 6] = [
    Colour::Blue,
    Colour::Green,
    Colour::Yellow,
    Colour::Purple,
    Colour::Cyan,
    Colour::Red,
];

const BAR: &str = "█";

/// Bar length for `count`, scaled so the largest count fills `max_bar`.
pub fn bar_len(count: usize, max_count: usize, max_bar: usize) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }
    (count * max_bar).div_ceil(max_count).max(1)
}

/// One bar per (agent, status) row; each status code gets its own colour.
pub fn render_status_chart(rows: &[StatusCountRow], max_bar: usize, colored: bool) -> String {
    let max_count = rows.iter().map(|r| r.count).max().unwrap_or(0);

    let mut statuses: Vec<&str> = rows
        .iter()
        .map(|r| r.status_code.as_deref().unwrap_or(""))
        .collect();
    statuses.sort_unstable();
    statuses.dedup();

    let mut table = Table::new(["AGENT CODE", "STATUS CODE", "Number of Records"]);

    for r in rows {
        let status = r.status_code.as_deref().unwrap_or("");
        let bar = BAR.repeat(bar_len(r.count, max_count, max_bar));
        let bar = if colored {
            let idx = statuses.binary_search(&status).unwrap_or(0);
            PALETTE[idx % PALETTE.len()].paint(bar).to_string()
        } else {
            bar
        };

        table.add_row(vec![
            r.agent_code.clone().unwrap_or_default(),
            status.to_string(),
            format!("{bar} {}", r.count),
        ]);
    }

    table.render()
}
