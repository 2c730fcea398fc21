//! Capacity reliability report compiler
//!
//! Reads weekly capacity reports (a header row of dates over a fixed block of
//! metric rows), turns every report date into one normalized record, and
//! writes all records from all reports into a single sorted workbook.

pub mod compile;
pub mod config;
pub mod delivery;

pub use compile::{
    CompileReport, CompiledDataset, CompiledRecord, ExcelFile, ExcelUpload, GridSource,
    RenderError, SourceGrid, compile, compile_report, render, render_with_options,
};
pub use config::Config;
