//! Excel I/O: report workbooks in, compiled workbook out

mod formatting;
mod reader;
mod writer;

pub use formatting::{DATE_PATTERN, WEEK_PATTERN};
pub use reader::{ExcelFile, ExcelUpload, read_grid_from_bytes, read_grid_from_path};
pub use writer::{DEFAULT_SHEET_NAME, RenderOptions, render, render_with_options};
