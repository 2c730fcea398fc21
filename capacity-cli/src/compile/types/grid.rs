//! Raw spreadsheet grid as read from one report document

use chrono::NaiveDateTime;

/// Only the top of each report carries the header and metric block
pub const GRID_ROW_LIMIT: usize = 20;

static EMPTY_CELL: Cell = Cell::Empty;

/// A raw cell value, left exactly as the document stored it
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Blank cell, error cell, or not-a-number marker
    Empty,
    /// Text cell
    Text(String),
    /// Numeric cell (booleans are read as 1/0)
    Number(f64),
    /// Date-typed cell
    Date(NaiveDateTime),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Check if this cell carries no value
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    /// Try to get as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<NaiveDateTime> for Cell {
    fn from(value: NaiveDateTime) -> Self {
        Cell::Date(value)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "<empty>"),
            Cell::Text(s) => write!(f, "{:?}", s),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Date(dt) => write!(f, "{}", dt),
        }
    }
}

/// Row-major grid of the first [`GRID_ROW_LIMIT`] rows of a report
///
/// Rows are addressed from the sheet's A1 cell. Rows may be ragged; any
/// position past the end of a row reads as [`Cell::Empty`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceGrid {
    /// Identity of the originating document (used in diagnostics)
    source: String,
    rows: Vec<Vec<Cell>>,
}

impl SourceGrid {
    pub fn new(source: impl Into<String>, mut rows: Vec<Vec<Cell>>) -> Self {
        rows.truncate(GRID_ROW_LIMIT);
        Self {
            source: source.into(),
            rows,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.row(row).get(col).unwrap_or(&EMPTY_CELL)
    }
}
