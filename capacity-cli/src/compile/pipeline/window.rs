//! Column window of the metric block

use std::ops::Range;

use crate::compile::types::{Cell, SourceGrid};

use super::header::TOTAL_SENTINEL;

/// Contiguous range of data columns eligible for extraction
///
/// Column 0 holds row labels and is never part of the window. When the
/// header row carries the totals sentinel, the last column is left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnWindow {
    columns: Range<usize>,
}

impl ColumnWindow {
    /// Pick the window for a grid from its header row
    pub fn select(grid: &SourceGrid) -> Self {
        let width = grid.column_count();
        let has_total = grid
            .row(0)
            .iter()
            .skip(1)
            .any(|cell| matches!(cell, Cell::Text(s) if s == TOTAL_SENTINEL));

        let end = if has_total {
            width.saturating_sub(1)
        } else {
            width
        };

        Self {
            columns: 1..end.max(1),
        }
    }

    pub fn contains(&self, column: usize) -> bool {
        self.columns.contains(&column)
    }

    /// Number of data columns in the window
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Grid column of the `ordinal`-th data column
    pub fn column_at(&self, ordinal: usize) -> Option<usize> {
        (ordinal < self.width()).then(|| self.columns.start + ordinal)
    }
}
