//! Metric extraction and record assembly for one grid

use crate::compile::types::{CompiledRecord, METRIC_COUNT, METRIC_FIELDS, SourceGrid};

use super::coerce::coerce_value;
use super::header::DateHeaderEntry;
use super::window::ColumnWindow;

/// Build one record per eligible header date
///
/// Dates outside the window are dropped first. The surviving dates are then
/// matched to metric columns by position: the i-th date reads the i-th
/// column of the window, whatever column the date itself sat in. Dates past
/// the window width produce nothing. Metric rows the grid lacks read as
/// empty, so their fields are absent.
pub fn assemble_records(
    grid: &SourceGrid,
    entries: &[DateHeaderEntry],
    window: &ColumnWindow,
) -> Vec<CompiledRecord> {
    entries
        .iter()
        .filter(|entry| window.contains(entry.column))
        .enumerate()
        .map_while(|(ordinal, entry)| window.column_at(ordinal).map(|column| (*entry, column)))
        .map(|(entry, column)| {
            if entry.column != column {
                log::trace!(
                    "{}: date {} from column {} reads metrics from column {}",
                    grid.source(),
                    entry.date,
                    entry.column,
                    column
                );
            }
            CompiledRecord::new(entry.date, extract_metrics(grid, column))
        })
        .collect()
}

/// Read and coerce every metric of one data column
pub fn extract_metrics(grid: &SourceGrid, column: usize) -> [Option<f64>; METRIC_COUNT] {
    let mut values = [None; METRIC_COUNT];
    for spec in &METRIC_FIELDS {
        values[spec.offset] = coerce_value(grid.cell(spec.grid_row(), column), &spec.rule);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::pipeline::header::parse_date_header;
    use crate::compile::types::{Cell, MetricField};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Header row plus nine metric rows; metric cells hold `column * 10 + row`
    fn report(header: Vec<Cell>) -> SourceGrid {
        let width = header.len();
        let mut rows = vec![header];
        for row in 1..=METRIC_COUNT {
            let mut cells = vec![Cell::text(format!("metric {}", row))];
            for col in 1..width {
                cells.push(Cell::Number((col * 10 + row) as f64));
            }
            rows.push(cells);
        }
        SourceGrid::new("report.xlsx", rows)
    }

    fn compile_grid(grid: &SourceGrid) -> Vec<CompiledRecord> {
        let entries = parse_date_header(grid);
        let window = ColumnWindow::select(grid);
        assemble_records(grid, &entries, &window)
    }

    #[test]
    fn test_one_record_per_date() {
        let grid = report(vec![
            Cell::Empty,
            Cell::text("2023-01-02"),
            Cell::text("2023-01-03"),
            Cell::text("2023-01-04"),
        ]);

        let records = compile_grid(&grid);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].date(), date(2023, 1, 2));
        assert_eq!(records[2].value(MetricField::CompletedRoutes), Some(32.0));
        assert!(records.iter().all(|r| r.values().iter().all(Option::is_some)));
    }

    #[test]
    fn test_totals_column_is_not_a_record() {
        let grid = report(vec![
            Cell::Empty,
            Cell::text("2023-01-02"),
            Cell::text("2023-01-03"),
            Cell::text("Total"),
        ]);

        let records = compile_grid(&grid);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].value(MetricField::DspAvailableCapacity), Some(29.0));
    }

    #[test]
    fn test_skipped_header_shifts_metric_alignment() {
        // The unparsable column 2 is dropped, so the date in column 3 reads
        // the metrics of column 2.
        let grid = report(vec![
            Cell::Empty,
            Cell::text("2023-01-02"),
            Cell::text("not a date"),
            Cell::text("2023-01-04"),
        ]);

        let records = compile_grid(&grid);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].date(), date(2023, 1, 4));
        assert_eq!(records[1].value(MetricField::CapacityReliabilityScore), Some(21.0));
    }

    #[test]
    fn test_dates_outside_window_are_dropped() {
        // A trailing date after the totals column falls outside the window
        let grid = report(vec![
            Cell::Empty,
            Cell::text("2023-01-02"),
            Cell::text("Total"),
            Cell::text("2023-01-09"),
        ]);

        let records = compile_grid(&grid);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date(), date(2023, 1, 2));
    }

    #[test]
    fn test_missing_metric_rows_are_absent() {
        let grid = SourceGrid::new(
            "short.xlsx",
            vec![
                vec![Cell::Empty, Cell::text("2023-01-02")],
                vec![Cell::text("Capacity reliability score"), Cell::text("90%")],
            ],
        );

        let records = compile_grid(&grid);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value(MetricField::CapacityReliabilityScore), Some(0.9));
        assert!(records[0].values()[1..].iter().all(Option::is_none));
    }

    #[test]
    fn test_no_dates_is_not_an_error() {
        let grid = SourceGrid::new("blank.xlsx", vec![vec![Cell::text("Metric")]]);
        assert!(compile_grid(&grid).is_empty());
    }

    #[test]
    fn test_extract_metrics_applies_field_rules() {
        let mut rows = vec![vec![Cell::Empty, Cell::text("2023-01-02")]];
        let raw = ["87.5%", "120", "-", "", "95%", "130", "5", "125", "140"];
        for value in raw {
            rows.push(vec![Cell::Empty, Cell::text(value)]);
        }
        let grid = SourceGrid::new("rules.xlsx", rows);

        let values = extract_metrics(&grid, 1);
        assert_eq!(
            values,
            [
                Some(0.875),
                Some(120.0),
                None,
                None,
                Some(95.0),
                Some(130.0),
                Some(5.0),
                Some(125.0),
                Some(140.0),
            ]
        );
    }
}
