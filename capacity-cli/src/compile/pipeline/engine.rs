//! Aggregator - runs the pipeline over every source and collects the records

use crate::compile::source::GridSource;
use crate::compile::types::{CompiledDataset, CompiledRecord, FileFailure, SourceGrid};

use super::assemble::assemble_records;
use super::header::parse_date_header;
use super::window::ColumnWindow;

/// Records from one source, or the reason it contributed none
pub type FileOutcome = Result<Vec<CompiledRecord>, FileFailure>;

/// Result of compiling a batch of sources
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileReport {
    /// All records, ascending by date
    pub dataset: CompiledDataset,
    /// Sources that were dropped, in input order
    pub failures: Vec<FileFailure>,
    /// Number of sources seen
    pub files_processed: usize,
}

impl CompileReport {
    /// Number of sources that compiled without failure
    pub fn succeeded(&self) -> usize {
        self.files_processed - self.failures.len()
    }
}

/// Runs every source through the pipeline, one at a time, in input order
pub struct Aggregator;

impl Aggregator {
    /// Compile all sources into one sorted dataset
    ///
    /// A failing source is logged and skipped; it never stops the run.
    pub fn compile_all<I>(sources: I) -> CompileReport
    where
        I: IntoIterator,
        I::Item: GridSource,
    {
        let mut records = Vec::new();
        let mut failures = Vec::new();
        let mut files_processed = 0;

        for source in sources {
            files_processed += 1;
            match Self::compile_source(&source) {
                Ok(file_records) => {
                    log::debug!(
                        "{}: compiled {} records",
                        source.name(),
                        file_records.len()
                    );
                    records.extend(file_records);
                }
                Err(failure) => {
                    log::warn!("Error processing file {}", failure);
                    failures.push(failure);
                }
            }
        }

        let dataset = CompiledDataset::from_records(records);

        log::info!(
            "Compiled {} records from {} files ({} skipped)",
            dataset.len(),
            files_processed,
            failures.len()
        );

        CompileReport {
            dataset,
            failures,
            files_processed,
        }
    }

    /// Read one source and compile its grid
    pub fn compile_source<S: GridSource + ?Sized>(source: &S) -> FileOutcome {
        source
            .read_grid()
            .map(|grid| Self::compile_grid(&grid))
            .map_err(|error| FileFailure {
                source: source.name().to_string(),
                error,
            })
    }

    /// Header parsing, window selection, extraction and assembly for one grid
    pub fn compile_grid(grid: &SourceGrid) -> Vec<CompiledRecord> {
        let entries = parse_date_header(grid);
        let window = ColumnWindow::select(grid);

        log::debug!(
            "{}: {} header dates, metric window of {} columns",
            grid.source(),
            entries.len(),
            window.width()
        );

        assemble_records(grid, &entries, &window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::types::{Cell, IngestError, METRIC_COUNT, MetricField};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A report whose completed-routes row holds `routes` for each date
    fn report(name: &str, dates: &[&str], routes: &[f64]) -> SourceGrid {
        let mut header = vec![Cell::text("Metric")];
        header.extend(dates.iter().map(|d| Cell::text(*d)));

        let mut rows = vec![header];
        for row in 1..=METRIC_COUNT {
            let mut cells = vec![Cell::text(format!("metric {}", row))];
            for value in routes {
                cells.push(if row == 2 {
                    Cell::Number(*value)
                } else {
                    Cell::text("-")
                });
            }
            rows.push(cells);
        }
        SourceGrid::new(name, rows)
    }

    struct Unreadable;

    impl GridSource for Unreadable {
        fn name(&self) -> &str {
            "corrupt.xlsx"
        }

        fn read_grid(&self) -> Result<SourceGrid, IngestError> {
            Err(IngestError::Open {
                message: "invalid zip header".to_string(),
            })
        }
    }

    fn routes(dataset: &CompiledDataset) -> Vec<f64> {
        dataset
            .iter()
            .map(|r| r.value(MetricField::CompletedRoutes).unwrap())
            .collect()
    }

    #[test]
    fn test_compile_all_empty_input() {
        let report = Aggregator::compile_all(Vec::<SourceGrid>::new());
        assert!(report.dataset.is_empty());
        assert_eq!(report.files_processed, 0);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_bad_file_is_isolated() {
        let good = report("good.xlsx", &["2023-01-02", "2023-01-03"], &[10.0, 11.0]);
        let sources: Vec<&dyn GridSource> = vec![&Unreadable, &good];

        let report = Aggregator::compile_all(sources);
        assert_eq!(report.dataset.len(), 2);
        assert_eq!(report.files_processed, 2);
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].source, "corrupt.xlsx");
    }

    #[test]
    fn test_records_sorted_across_files() {
        let week2 = report("week2.xlsx", &["2023-01-09", "2023-01-10"], &[3.0, 4.0]);
        let week1 = report("week1.xlsx", &["2023-01-02", "2023-01-03"], &[1.0, 2.0]);

        let report = Aggregator::compile_all([week2, week1]);
        let dates: Vec<_> = report.dataset.iter().map(|r| r.date()).collect();
        assert_eq!(
            dates,
            vec![
                date(2023, 1, 2),
                date(2023, 1, 3),
                date(2023, 1, 9),
                date(2023, 1, 10)
            ]
        );
        assert_eq!(routes(&report.dataset), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_duplicate_dates_keep_file_order() {
        let first = report("first.xlsx", &["2023-01-03", "2023-01-02"], &[1.0, 2.0]);
        let second = report("second.xlsx", &["2023-01-02"], &[3.0]);

        let report = Aggregator::compile_all([first, second]);
        assert_eq!(routes(&report.dataset), vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_header_only_file_yields_empty_records() {
        let header_only = SourceGrid::new(
            "header-only.xlsx",
            vec![vec![Cell::Empty, Cell::text("2023-01-03")]],
        );
        let good = report("good.xlsx", &["2023-01-02"], &[7.0]);

        let report = Aggregator::compile_all([header_only, good]);
        assert!(report.failures.is_empty());
        assert_eq!(report.dataset.len(), 2);

        let blank = &report.dataset.records()[1];
        assert_eq!(blank.date(), date(2023, 1, 3));
        assert!(blank.values().iter().all(Option::is_none));
    }

    #[test]
    fn test_missing_values_stay_absent() {
        let grid = report("gaps.xlsx", &["2023-01-02"], &[5.0]);
        let outcome = Aggregator::compile_source(&grid).unwrap();

        assert_eq!(outcome.len(), 1);
        assert_eq!(outcome[0].value(MetricField::CapacityReliabilityScore), None);
        assert_eq!(outcome[0].value(MetricField::CompletedRoutes), Some(5.0));
    }
}
