//! Cell formats for the compiled workbook

use rust_xlsxwriter::{Format, FormatBorder};

use crate::compile::types::{METRIC_COUNT, METRIC_FIELDS};

/// Short date shown in the Date column
pub const DATE_PATTERN: &str = "mm/dd/yyyy";

/// Week numbers are plain integers
pub const WEEK_PATTERN: &str = "0";

/// Bold, bordered header cells
pub fn create_header_format() -> Format {
    Format::new().set_bold().set_border(FormatBorder::Thin)
}

/// Per-column formats for data rows
pub struct ColumnFormats {
    pub date: Format,
    pub week: Format,
    pub metrics: [Format; METRIC_COUNT],
}

impl ColumnFormats {
    pub fn new() -> Self {
        Self {
            date: Format::new().set_num_format(DATE_PATTERN),
            week: Format::new().set_num_format(WEEK_PATTERN),
            metrics: METRIC_FIELDS.map(|spec| Format::new().set_num_format(spec.format.pattern())),
        }
    }
}

impl Default for ColumnFormats {
    fn default() -> Self {
        Self::new()
    }
}
