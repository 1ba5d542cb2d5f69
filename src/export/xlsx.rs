// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::excel_date::{DATE_FORMAT, DATETIME_FORMAT, date_serial, datetime_serial};
use crate::models::{Cell, Dashboard, FollowupRecord, RecordSet};
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

/// Workbook a due fogli (PTP + Posted), sempre entrambi, restituito come buffer.
pub fn build_workbook(dash: &Dashboard) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    for set in RecordSet::ALL {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(set.sheet_name())?;
        write_sheet(worksheet, set, dash.records(set))?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_sheet(
    worksheet: &mut Worksheet,
    set: RecordSet,
    records: &[FollowupRecord],
) -> AppResult<()> {
    // ---------------------------
    // Caso dataset vuoto
    // ---------------------------
    if records.is_empty() {
        worksheet.write_string(0, 0, set.sheet_placeholder())?;
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = set.headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    let formats = CellFormats::new();
    let mut table: Vec<Vec<String>> = Vec::with_capacity(records.len() + 1);
    table.push(headers.iter().map(|h| h.to_string()).collect());

    for (row_index, rec) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let cells = rec.cells(set);

        for (col, cell) in cells.iter().enumerate() {
            write_cell(worksheet, row, col as u16, cell, &formats)?;
        }

        table.push(cells.iter().map(Cell::display).collect());
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in column_widths(&table).iter().enumerate() {
        worksheet.set_column_width(c as u16, *w)?;
    }

    Ok(())
}

struct CellFormats {
    date: Format,
    datetime: Format,
    amount: Format,
}

impl CellFormats {
    fn new() -> Self {
        Self {
            date: Format::new().set_num_format(DATE_FORMAT),
            datetime: Format::new().set_num_format(DATETIME_FORMAT),
            amount: Format::new().set_num_format("0.00"),
        }
    }
}

/// Scrive una singola cella secondo il suo tipo; le celle vuote restano vuote.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell<'_>,
    formats: &CellFormats,
) -> AppResult<()> {
    match cell {
        Cell::Empty => {}
        Cell::Text(s) => {
            worksheet.write_string(row, col, *s)?;
        }
        Cell::Number(n) => match n.to_f64() {
            Some(v) => {
                worksheet.write_number_with_format(row, col, v, &formats.amount)?;
            }
            None => {
                worksheet.write_string(row, col, n.to_string())?;
            }
        },
        Cell::Integer(i) => {
            worksheet.write_number(row, col, *i as f64)?;
        }
        Cell::Date(d) => {
            worksheet.write_number_with_format(row, col, date_serial(d), &formats.date)?;
        }
        Cell::DateTime(dt) => {
            worksheet.write_number_with_format(row, col, datetime_serial(dt), &formats.datetime)?;
        }
    }
    Ok(())
}

/// Per-column width: longest non-empty rendered cell (header included) + 2.
pub(crate) fn column_widths(table: &[Vec<String>]) -> Vec<f64> {
    let ncols = table.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; ncols];

    for row in table {
        for (c, value) in row.iter().enumerate() {
            if !value.is_empty() {
                widths[c] = widths[c].max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    widths.into_iter().map(|w| w as f64 + 2.0).collect()
}
