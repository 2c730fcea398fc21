//! Write the compiled dataset as a formatted workbook

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Workbook, Worksheet};

use crate::compile::types::{CompiledDataset, CompiledRecord, RenderError, output_columns};

use super::formatting::{ColumnFormats, create_header_format};

pub const DEFAULT_SHEET_NAME: &str = "Compiled";

/// Column indices for the compiled sheet
mod cols {
    pub const DATE: u16 = 0;
    pub const WEEK: u16 = 1;
    pub const FIRST_METRIC: u16 = 2;
}

/// Options for the rendered workbook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub sheet_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

/// Render a dataset to xlsx bytes with default options
pub fn render(dataset: &CompiledDataset) -> Result<Vec<u8>, RenderError> {
    render_with_options(dataset, &RenderOptions::default())
}

/// Render a dataset to xlsx bytes
///
/// One header row, then one row per record. Absent values are left as blank
/// cells.
pub fn render_with_options(
    dataset: &CompiledDataset,
    options: &RenderOptions,
) -> Result<Vec<u8>, RenderError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&options.sheet_name)?;

    write_header(worksheet)?;

    let formats = ColumnFormats::new();
    for (idx, record) in dataset.iter().enumerate() {
        let row = u32::try_from(idx + 1).map_err(|_| RenderError::TooManyRows {
            records: dataset.len(),
        })?;
        write_record(worksheet, row, record, &formats)?;
    }

    worksheet.autofit();

    let buffer = workbook.save_to_buffer()?;
    log::info!(
        "Rendered {} records ({} bytes)",
        dataset.len(),
        buffer.len()
    );
    Ok(buffer)
}

fn write_header(ws: &mut Worksheet) -> Result<(), RenderError> {
    let header_format = create_header_format();
    for (col, name) in output_columns().iter().enumerate() {
        ws.write_string_with_format(0, col as u16, *name, &header_format)?;
    }
    Ok(())
}

fn write_record(
    ws: &mut Worksheet,
    row: u32,
    record: &CompiledRecord,
    formats: &ColumnFormats,
) -> Result<(), RenderError> {
    let date = excel_date(record.date())?;
    ws.write_datetime_with_format(row, cols::DATE, &date, &formats.date)?;
    ws.write_number_with_format(row, cols::WEEK, record.week() as f64, &formats.week)?;

    for (idx, value) in record.values().iter().enumerate() {
        // Absent values stay blank
        if let Some(v) = value {
            let col = cols::FIRST_METRIC + idx as u16;
            ws.write_number_with_format(row, col, *v, &formats.metrics[idx])?;
        }
    }

    Ok(())
}

fn excel_date(date: NaiveDate) -> Result<ExcelDateTime, RenderError> {
    let year = u16::try_from(date.year()).map_err(|_| RenderError::DateOutOfRange { date })?;
    ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8)
        .map_err(|_| RenderError::DateOutOfRange { date })
}
