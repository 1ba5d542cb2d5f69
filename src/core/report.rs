use crate::core::fetch::Fetcher;
use crate::core::shape::{normalize_account_numbers, status_counts};
use crate::db::RecordStore;
use crate::errors::AppResult;
use crate::models::{Dashboard, DateRange, RecordSet};
use chrono::NaiveDate;

/// Logica di alto livello per un render della dashboard.
pub struct ReportLogic;

impl ReportLogic {
    /// Validate the range, then fetch and shape both record sets.
    ///
    /// `start > end` fails before the store is touched.
    pub fn render<S: RecordStore>(
        fetcher: &Fetcher<S>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Dashboard> {
        let range = DateRange::new(start, end)?;
        Self::render_range(fetcher, range)
    }

    pub fn render_range<S: RecordStore>(
        fetcher: &Fetcher<S>,
        range: DateRange,
    ) -> AppResult<Dashboard> {
        let mut ptp = fetcher.fetch(RecordSet::Ptp, &range)?.as_ref().clone();
        let mut posted = fetcher.fetch(RecordSet::Posted, &range)?.as_ref().clone();

        normalize_account_numbers(&mut ptp);
        normalize_account_numbers(&mut posted);

        let ptp_status_counts = status_counts(&ptp);

        Ok(Dashboard {
            range,
            ptp,
            posted,
            ptp_status_counts,
        })
    }
}
