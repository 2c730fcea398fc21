//! Errors raised while compiling and rendering reports
//!
//! Only [`RenderError`] is fatal. The others are recovered where they occur:
//! an [`IngestError`] drops one file, a [`DateParseError`] drops one header
//! column, and a [`ValueCoercionError`] leaves one value absent.

use chrono::NaiveDate;

/// A report document could not be turned into records
#[derive(Debug, Clone, PartialEq)]
pub enum IngestError {
    /// The document could not be opened or parsed as a workbook
    Open { message: String },
    /// The workbook has no worksheets
    NoWorksheet,
    /// The first worksheet could not be read
    Sheet { sheet: String, message: String },
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::Open { message } => write!(f, "failed to open workbook: {}", message),
            IngestError::NoWorksheet => write!(f, "workbook has no sheets"),
            IngestError::Sheet { sheet, message } => {
                write!(f, "failed to read sheet '{}': {}", sheet, message)
            }
        }
    }
}

impl std::error::Error for IngestError {}

/// A file that contributed no records, and why
#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    pub source: String,
    pub error: IngestError,
}

impl std::fmt::Display for FileFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source, self.error)
    }
}

impl std::error::Error for FileFailure {}

/// A header cell that is present but not a date
#[derive(Debug, Clone, PartialEq)]
pub struct DateParseError {
    pub raw: String,
}

impl std::fmt::Display for DateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "not a date: {}", self.raw)
    }
}

impl std::error::Error for DateParseError {}

/// A metric cell that is present but not a number
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCoercionError {
    pub raw: String,
}

impl std::fmt::Display for ValueCoercionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "not a number: {}", self.raw)
    }
}

impl std::error::Error for ValueCoercionError {}

/// The output document could not be produced
#[derive(Debug)]
pub enum RenderError {
    /// The spreadsheet writer rejected a value or failed to serialize
    Xlsx(rust_xlsxwriter::XlsxError),
    /// A date outside the range a spreadsheet can store
    DateOutOfRange { date: NaiveDate },
    /// More records than a worksheet has rows
    TooManyRows { records: usize },
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Xlsx(e) => write!(f, "failed to write spreadsheet: {}", e),
            RenderError::DateOutOfRange { date } => {
                write!(f, "date {} cannot be stored in a spreadsheet", date)
            }
            RenderError::TooManyRows { records } => {
                write!(f, "{} records do not fit in one worksheet", records)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Xlsx(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for RenderError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        RenderError::Xlsx(e)
    }
}
