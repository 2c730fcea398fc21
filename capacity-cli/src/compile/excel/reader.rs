//! Read report documents into source grids

use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};

use calamine::{
    Data, DataType, Range, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs,
};

use crate::compile::source::GridSource;
use crate::compile::types::{Cell, GRID_ROW_LIMIT, IngestError, SourceGrid};

/// A report workbook on disk (xlsx, xlsm, xlsb, xls or ods)
#[derive(Debug, Clone)]
pub struct ExcelFile {
    path: PathBuf,
    name: String,
}

impl ExcelFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GridSource for ExcelFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_grid(&self) -> Result<SourceGrid, IngestError> {
        read_grid_from_path(&self.path)
    }
}

/// A report workbook received as raw bytes (e.g. an upload)
#[derive(Debug, Clone)]
pub struct ExcelUpload {
    name: String,
    bytes: Vec<u8>,
}

impl ExcelUpload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

impl GridSource for ExcelUpload {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_grid(&self) -> Result<SourceGrid, IngestError> {
        read_grid_from_bytes(&self.name, &self.bytes)
    }
}

/// Read the first worksheet of a workbook file
pub fn read_grid_from_path<P: AsRef<Path>>(path: P) -> Result<SourceGrid, IngestError> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Open {
        message: e.to_string(),
    })?;

    grid_from_workbook(&path.display().to_string(), &mut workbook)
}

/// Read the first worksheet of an in-memory workbook
pub fn read_grid_from_bytes(name: &str, bytes: &[u8]) -> Result<SourceGrid, IngestError> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| IngestError::Open {
            message: e.to_string(),
        })?;

    grid_from_workbook(name, &mut workbook)
}

fn grid_from_workbook<RS: Read + Seek>(
    name: &str,
    workbook: &mut Sheets<RS>,
) -> Result<SourceGrid, IngestError> {
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(IngestError::NoWorksheet)?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::Sheet {
            sheet: sheet_name.clone(),
            message: e.to_string(),
        })?;

    let grid = grid_from_range(name, &range);
    log::debug!(
        "{}: read sheet '{}' ({} rows x {} columns)",
        name,
        sheet_name,
        grid.row_count(),
        grid.column_count()
    );
    Ok(grid)
}

/// Copy the top of a sheet into a grid anchored at A1
///
/// Calamine ranges only cover the used cells, so leading blank rows and
/// columns are filled back in as empty cells, and the grid is padded down to
/// [`GRID_ROW_LIMIT`] rows even when the sheet's last rows are blank.
fn grid_from_range(name: &str, range: &Range<Data>) -> SourceGrid {
    let Some((_, last_col)) = range.end() else {
        return SourceGrid::new(name, Vec::new());
    };

    let rows = (0..GRID_ROW_LIMIT as u32)
        .map(|row| {
            (0..=last_col)
                .map(|col| {
                    range
                        .get_value((row, col))
                        .map(cell_from_data)
                        .unwrap_or(Cell::Empty)
                })
                .collect()
        })
        .collect();

    SourceGrid::new(name, rows)
}

/// Convert a calamine cell, keeping its native type
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Number(if *b { 1.0 } else { 0.0 }),
        Data::DateTime(dt) => data
            .as_datetime()
            .map(Cell::Date)
            .unwrap_or(Cell::Number(dt.as_f64())),
        Data::DateTimeIso(s) => data
            .as_datetime()
            .map(Cell::Date)
            .unwrap_or_else(|| Cell::Text(s.clone())),
    }
}
