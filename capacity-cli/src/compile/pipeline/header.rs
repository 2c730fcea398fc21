//! Date header parsing (row 0 of a report)

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::compile::types::{Cell, DateParseError, SourceGrid};

/// Header literal marking the totals column
pub const TOTAL_SENTINEL: &str = "Total";

const HEADER_ROW: usize = 0;

/// Accepted text layouts for header dates with a time component
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Accepted text layouts for plain header dates (month-first when ambiguous)
///
/// Two-digit years are tried before four-digit ones and month-first before
/// year-first, so "1/9/23" never reads as year 1.
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%m/%d/%Y",
    "%m-%d-%y",
    "%m-%d-%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%b-%y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
];

/// A report date and the grid column it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateHeaderEntry {
    pub date: NaiveDate,
    pub column: usize,
}

/// Read the dates from the header row, in column order
///
/// Column 0 holds the row labels and is never read. Empty cells and the
/// totals sentinel are skipped silently; any other cell that is not a date
/// is skipped with a debug log. A skipped cell never ends the scan.
pub fn parse_date_header(grid: &SourceGrid) -> Vec<DateHeaderEntry> {
    let mut entries = Vec::new();

    for (column, cell) in grid.row(HEADER_ROW).iter().enumerate().skip(1) {
        match coerce_header_date(cell) {
            Ok(Some(date)) => entries.push(DateHeaderEntry { date, column }),
            Ok(None) => {}
            Err(e) => {
                log::debug!(
                    "{}: skipping header column {} ({})",
                    grid.source(),
                    column,
                    e
                );
            }
        }
    }

    entries
}

/// Coerce one header cell
///
/// Returns `Ok(None)` for cells that are not meant to hold a date (empty or
/// the totals sentinel).
pub fn coerce_header_date(cell: &Cell) -> Result<Option<NaiveDate>, DateParseError> {
    match cell {
        _ if cell.is_empty() => Ok(None),
        Cell::Text(s) if s == TOTAL_SENTINEL => Ok(None),
        Cell::Date(dt) => Ok(Some(dt.date())),
        Cell::Text(s) => parse_date_text(s).map(Some).ok_or_else(|| DateParseError {
            raw: s.clone(),
        }),
        other => Err(DateParseError {
            raw: other.to_string(),
        }),
    }
}

/// Best-effort parse of a date written as text
pub fn parse_date_text(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
