//! Extraction pipeline: header dates, column window, metrics, records

mod assemble;
mod coerce;
mod engine;
mod header;
mod window;

pub use assemble::{assemble_records, extract_metrics};
pub use coerce::{MISSING_SENTINEL, coerce_value, parse_decimal};
pub use engine::{Aggregator, CompileReport, FileOutcome};
pub use header::{
    DateHeaderEntry, TOTAL_SENTINEL, coerce_header_date, parse_date_header, parse_date_text,
};
pub use window::ColumnWindow;
