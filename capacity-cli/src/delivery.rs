//! Handing the compiled workbook back to whoever asked for it

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Content type of the compiled workbook
pub const CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const DEFAULT_FILE_PREFIX: &str = "Capacity-Reliability-Compiled";

/// Generated output name, e.g. `Capacity-Reliability-Compiled-1700000000000.xlsx`
pub fn output_file_name(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{}-{}.xlsx", prefix, now.timestamp_millis())
}

/// Write the workbook bytes to `path`, creating parent directories
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, bytes)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    log::info!("Excel file exported to: {}", path.display());
    Ok(path.to_path_buf())
}
