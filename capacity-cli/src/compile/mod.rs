//! Weekly capacity report compilation
//!
//! Each input report has a header row of dates followed by a fixed block of
//! metric rows. [`compile`] turns any number of reports into one dataset
//! sorted by date; [`render`] writes that dataset out as a formatted xlsx
//! document.

pub mod excel;
pub mod pipeline;
pub mod source;
pub mod types;

pub use excel::{
    ExcelFile, ExcelUpload, RenderOptions, read_grid_from_bytes, read_grid_from_path, render,
    render_with_options,
};
pub use pipeline::{Aggregator, CompileReport, FileOutcome};
pub use source::GridSource;
pub use types::*;

/// Compile reports into one dataset, skipping sources that fail
pub fn compile<I>(sources: I) -> CompiledDataset
where
    I: IntoIterator,
    I::Item: GridSource,
{
    Aggregator::compile_all(sources).dataset
}

/// Like [`compile`], but also reports which sources were skipped
pub fn compile_report<I>(sources: I) -> CompileReport
where
    I: IntoIterator,
    I::Item: GridSource,
{
    Aggregator::compile_all(sources)
}
