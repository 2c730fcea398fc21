//! Core types for report compilation

pub mod error;
pub mod field;
pub mod grid;
pub mod record;

pub use error::{DateParseError, FileFailure, IngestError, RenderError, ValueCoercionError};
pub use field::{CoercionRule, METRIC_COUNT, METRIC_FIELDS, MetricField, MetricSpec, NumberFormat};
pub use grid::{Cell, GRID_ROW_LIMIT, SourceGrid};
pub use record::{
    CompiledDataset, CompiledRecord, DATE_COLUMN, OUTPUT_COLUMN_COUNT, WEEK_COLUMN, output_columns,
};
