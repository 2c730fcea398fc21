//! Compiled records and the consolidated dataset

use chrono::{Datelike, NaiveDate};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::field::{METRIC_COUNT, METRIC_FIELDS, MetricField};

pub const DATE_COLUMN: &str = "Date";
pub const WEEK_COLUMN: &str = "Week#";

/// Number of columns in the compiled output
pub const OUTPUT_COLUMN_COUNT: usize = METRIC_COUNT + 2;

/// Output column names: Date, Week#, then every metric in table order
pub fn output_columns() -> [&'static str; OUTPUT_COLUMN_COUNT] {
    let mut columns = [DATE_COLUMN; OUTPUT_COLUMN_COUNT];
    columns[1] = WEEK_COLUMN;
    for (i, spec) in METRIC_FIELDS.iter().enumerate() {
        columns[i + 2] = spec.field.name();
    }
    columns
}

/// One report date from one input file, with its coerced metrics
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledRecord {
    date: NaiveDate,
    week: u32,
    values: [Option<f64>; METRIC_COUNT],
}

impl CompiledRecord {
    /// Assemble a record; the week is the ISO-8601 week of `date`
    pub fn new(date: NaiveDate, values: [Option<f64>; METRIC_COUNT]) -> Self {
        Self {
            date,
            week: date.iso_week().week(),
            values,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// ISO-8601 week number
    pub fn week(&self) -> u32 {
        self.week
    }

    pub fn value(&self, field: MetricField) -> Option<f64> {
        self.values[field.index()]
    }

    /// Metric values in table order
    pub fn values(&self) -> &[Option<f64>; METRIC_COUNT] {
        &self.values
    }
}

impl Serialize for CompiledRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(OUTPUT_COLUMN_COUNT))?;
        map.serialize_entry(DATE_COLUMN, &self.date)?;
        map.serialize_entry(WEEK_COLUMN, &self.week)?;
        for (spec, value) in METRIC_FIELDS.iter().zip(self.values.iter()) {
            map.serialize_entry(spec.field.name(), value)?;
        }
        map.end()
    }
}

/// All compiled records of a run, ascending by date
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledDataset {
    records: Vec<CompiledRecord>,
}

impl CompiledDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset, sorting records by date
    ///
    /// The sort is stable: records sharing a date keep the order they were
    /// given in (file order, then column order within a file).
    pub fn from_records(mut records: Vec<CompiledRecord>) -> Self {
        records.sort_by_key(CompiledRecord::date);
        Self { records }
    }

    pub fn records(&self) -> &[CompiledRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompiledRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a CompiledDataset {
    type Item = &'a CompiledRecord;
    type IntoIter = std::slice::Iter<'a, CompiledRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_with_routes(d: NaiveDate, routes: f64) -> CompiledRecord {
        let mut values = [None; METRIC_COUNT];
        values[MetricField::CompletedRoutes.index()] = Some(routes);
        CompiledRecord::new(d, values)
    }

    #[test]
    fn test_iso_week_numbers() {
        // Monday opening ISO week 1 of 2023
        assert_eq!(record_with_routes(date(2023, 1, 2), 0.0).week(), 1);
        // Saturday belonging to week 52 of 2021
        assert_eq!(record_with_routes(date(2022, 1, 1), 0.0).week(), 52);
        // Week 1 of 2020 starts in December 2019
        assert_eq!(record_with_routes(date(2019, 12, 30), 0.0).week(), 1);
        assert_eq!(record_with_routes(date(2020, 12, 31), 0.0).week(), 53);
    }

    #[test]
    fn test_dataset_sort_is_stable() {
        let records = vec![
            record_with_routes(date(2024, 3, 5), 1.0),
            record_with_routes(date(2024, 3, 4), 2.0),
            record_with_routes(date(2024, 3, 5), 3.0),
            record_with_routes(date(2024, 3, 1), 4.0),
        ];

        let dataset = CompiledDataset::from_records(records);
        let order: Vec<_> = dataset
            .iter()
            .map(|r| r.value(MetricField::CompletedRoutes).unwrap())
            .collect();

        assert_eq!(order, vec![4.0, 2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_output_columns_order() {
        let columns = output_columns();
        assert_eq!(columns.len(), 11);
        assert_eq!(columns[0], "Date");
        assert_eq!(columns[1], "Week#");
        assert_eq!(columns[2], "Capacity reliability score");
        assert_eq!(columns[10], "DSP available capacity");
    }

    #[test]
    fn test_record_serializes_in_column_order() {
        let mut values = [None; METRIC_COUNT];
        values[0] = Some(0.875);
        values[1] = Some(120.0);
        let record = CompiledRecord::new(date(2023, 1, 2), values);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with(
            r#"{"Date":"2023-01-02","Week#":1,"Capacity reliability score":0.875,"Completed routes":120.0,"Amazon paid cancels":null"#
        ));
        assert!(json.ends_with(r#""DSP available capacity":null}"#));
    }
}
