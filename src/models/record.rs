use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

/// Which of the two dashboard queries a set of rows came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSet {
    /// Promise-to-pay dispositions (`status_code LIKE 'PTP%'`).
    Ptp,
    /// Agent posted payments (the "CURED" statuses).
    Posted,
}

impl RecordSet {
    pub const ALL: [RecordSet; 2] = [RecordSet::Ptp, RecordSet::Posted];

    /// Stable identifier, used as part of the cache key and in logs.
    pub fn id(&self) -> &'static str {
        match self {
            RecordSet::Ptp => "ptp",
            RecordSet::Posted => "posted",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RecordSet::Ptp => "PTP Records",
            RecordSet::Posted => "Agent Posted Payments (CURED) Records",
        }
    }

    pub fn sheet_name(&self) -> &'static str {
        match self {
            RecordSet::Ptp => "PTP Records",
            RecordSet::Posted => "Agent Posted Payments",
        }
    }

    /// Single row written to the sheet when the set is empty.
    pub fn sheet_placeholder(&self) -> &'static str {
        match self {
            RecordSet::Ptp => "No data found for PTP records.",
            RecordSet::Posted => "No data found for Agent Posted Payments.",
        }
    }

    pub fn empty_warning(&self) -> &'static str {
        match self {
            RecordSet::Ptp => "No PTP records found for the selected date range.",
            RecordSet::Posted => {
                "No Agent Posted Payments (CURED) records found for the selected date range."
            }
        }
    }

    /// Output columns, in the order the query projects them.
    pub fn columns(&self) -> &'static [Column] {
        use Column::*;
        match self {
            RecordSet::Ptp => &[
                Cycle,
                CardCode,
                AccountNumber,
                Name,
                AgentCode,
                StatusCode,
                Remarks,
                PtpAmount,
                PtpDate,
                Balance,
                DispoDate,
                Placement,
                IsLocked,
                IsAborted,
            ],
            RecordSet::Posted => &[
                Cycle,
                CardCode,
                AccountNumber,
                Remarks,
                AgentCode,
                StatusCode,
                PtpAmount,
                PtpDate,
                Balance,
                DispoDate,
                Placement,
                IsLocked,
                IsAborted,
            ],
        }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns().iter().map(Column::header).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Cycle,
    CardCode,
    AccountNumber,
    Name,
    AgentCode,
    StatusCode,
    Remarks,
    PtpAmount,
    PtpDate,
    Balance,
    DispoDate,
    Placement,
    IsLocked,
    IsAborted,
}

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::Cycle => "CYCLE",
            Column::CardCode => "CH CODE",
            Column::AccountNumber => "ACCOUNT NUMBER",
            Column::Name => "NAME",
            Column::AgentCode => "AGENT CODE",
            Column::StatusCode => "STATUS CODE",
            Column::Remarks => "REMARKS",
            Column::PtpAmount => "PTP AMOUNT",
            Column::PtpDate => "PTP DATE",
            Column::Balance => "OB",
            Column::DispoDate => "DISPO DATE",
            Column::Placement => "FINONE ID",
            Column::IsLocked => "IS LOCKED",
            Column::IsAborted => "IS ABORTED",
        }
    }
}

/// One row of the debtor ⋈ followup projection.
///
/// Every field is nullable: the query LEFT JOINs followups onto debtors.
/// `name` is only projected by the PTP query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FollowupRecord {
    #[serde(rename = "CYCLE")]
    pub cycle: Option<String>,
    #[serde(rename = "CH CODE")]
    pub card_code: Option<String>,
    #[serde(rename = "ACCOUNT NUMBER")]
    pub account_number: Option<String>,
    #[serde(rename = "NAME", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "AGENT CODE")]
    pub agent_code: Option<String>,
    #[serde(rename = "STATUS CODE")]
    pub status_code: Option<String>,
    #[serde(rename = "REMARKS")]
    pub remarks: Option<String>,
    #[serde(rename = "PTP AMOUNT")]
    pub ptp_amount: Option<Decimal>,
    #[serde(rename = "PTP DATE")]
    pub ptp_date: Option<NaiveDate>,
    #[serde(rename = "OB")]
    pub balance: Option<Decimal>,
    #[serde(rename = "DISPO DATE")]
    pub dispo_at: Option<NaiveDateTime>,
    #[serde(rename = "FINONE ID")]
    pub placement: Option<String>,
    #[serde(rename = "IS LOCKED")]
    pub is_locked: Option<i64>,
    #[serde(rename = "IS ABORTED")]
    pub is_aborted: Option<i64>,
}

impl FollowupRecord {
    /// `"Cycle "` followed by the last two characters of the raw cycle code.
    pub fn cycle_label(raw: Option<&str>) -> Option<String> {
        let raw = raw?;
        let tail: String = {
            let chars: Vec<char> = raw.chars().collect();
            let from = chars.len().saturating_sub(2);
            chars[from..].iter().collect()
        };
        Some(format!("Cycle {tail}"))
    }

    pub fn cell(&self, column: Column) -> Cell<'_> {
        fn text(v: &Option<String>) -> Cell<'_> {
            v.as_deref().map(Cell::Text).unwrap_or(Cell::Empty)
        }

        match column {
            Column::Cycle => text(&self.cycle),
            Column::CardCode => text(&self.card_code),
            Column::AccountNumber => text(&self.account_number),
            Column::Name => text(&self.name),
            Column::AgentCode => text(&self.agent_code),
            Column::StatusCode => text(&self.status_code),
            Column::Remarks => text(&self.remarks),
            Column::PtpAmount => self.ptp_amount.map(Cell::Number).unwrap_or(Cell::Empty),
            Column::PtpDate => self.ptp_date.map(Cell::Date).unwrap_or(Cell::Empty),
            Column::Balance => self.balance.map(Cell::Number).unwrap_or(Cell::Empty),
            Column::DispoDate => self.dispo_at.map(Cell::DateTime).unwrap_or(Cell::Empty),
            Column::Placement => text(&self.placement),
            Column::IsLocked => self.is_locked.map(Cell::Integer).unwrap_or(Cell::Empty),
            Column::IsAborted => self.is_aborted.map(Cell::Integer).unwrap_or(Cell::Empty),
        }
    }

    /// Cells of this record in the column order of `set`.
    pub fn cells(&self, set: RecordSet) -> Vec<Cell<'_>> {
        set.columns().iter().map(|c| self.cell(*c)).collect()
    }
}

/// A typed cell value, shared by the terminal table and the XLSX writer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Empty,
    Text(&'a str),
    Number(Decimal),
    Integer(i64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Cell<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn display(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => (*s).to_string(),
            Cell::Number(n) => n.to_string(),
            Cell::Integer(i) => i.to_string(),
            Cell::Date(d) => d.format("%Y-%m-%d").to_string(),
            Cell::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
