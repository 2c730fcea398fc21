//! Metric block layout: which grid row holds which metric, and how to read it
//!
//! The report's metric block sits directly under the date header. Each metric
//! occupies one row at a fixed offset from the top of the block. The table in
//! [`METRIC_FIELDS`] is the single place where that layout is described.

use serde::Serialize;

/// Number of metric rows in the block
pub const METRIC_COUNT: usize = 9;

/// A named metric from the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetricField {
    CapacityReliabilityScore,
    CompletedRoutes,
    AmazonPaidCancels,
    DspDroppedRoutes,
    ReliabilityTarget,
    RouteTarget,
    FlexUpRouteTarget,
    FinalScheduled,
    DspAvailableCapacity,
}

/// How a raw cell is turned into a number for one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoercionRule {
    /// Divide percent-marked text by this value (e.g. "87.5%" -> 0.875)
    pub scale_percent_by: Option<f64>,
}

impl CoercionRule {
    /// Numbers pass through, percent signs are only stripped
    pub const PLAIN: CoercionRule = CoercionRule {
        scale_percent_by: None,
    };

    /// Percent-marked text becomes a fraction
    pub const PERCENT_AS_FRACTION: CoercionRule = CoercionRule {
        scale_percent_by: Some(100.0),
    };
}

/// Display format of a numeric output column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    Integer,
    ThreeDecimals,
}

impl NumberFormat {
    /// Excel number format pattern
    pub fn pattern(&self) -> &'static str {
        match self {
            NumberFormat::Integer => "0",
            NumberFormat::ThreeDecimals => "0.000",
        }
    }
}

/// One row of the metric block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSpec {
    /// Offset within the metric block (grid row = offset + 1)
    pub offset: usize,
    pub field: MetricField,
    pub rule: CoercionRule,
    pub format: NumberFormat,
}

impl MetricSpec {
    /// Grid row that holds this metric
    pub fn grid_row(&self) -> usize {
        self.offset + 1
    }
}

/// The metric block, in output column order
pub const METRIC_FIELDS: [MetricSpec; METRIC_COUNT] = [
    MetricSpec {
        offset: 0,
        field: MetricField::CapacityReliabilityScore,
        rule: CoercionRule::PERCENT_AS_FRACTION,
        format: NumberFormat::ThreeDecimals,
    },
    MetricSpec {
        offset: 1,
        field: MetricField::CompletedRoutes,
        rule: CoercionRule::PLAIN,
        format: NumberFormat::Integer,
    },
    MetricSpec {
        offset: 2,
        field: MetricField::AmazonPaidCancels,
        rule: CoercionRule::PLAIN,
        format: NumberFormat::Integer,
    },
    MetricSpec {
        offset: 3,
        field: MetricField::DspDroppedRoutes,
        rule: CoercionRule::PLAIN,
        format: NumberFormat::Integer,
    },
    MetricSpec {
        offset: 4,
        field: MetricField::ReliabilityTarget,
        rule: CoercionRule::PLAIN,
        format: NumberFormat::Integer,
    },
    MetricSpec {
        offset: 5,
        field: MetricField::RouteTarget,
        rule: CoercionRule::PLAIN,
        format: NumberFormat::Integer,
    },
    MetricSpec {
        offset: 6,
        field: MetricField::FlexUpRouteTarget,
        rule: CoercionRule::PLAIN,
        format: NumberFormat::Integer,
    },
    MetricSpec {
        offset: 7,
        field: MetricField::FinalScheduled,
        rule: CoercionRule::PLAIN,
        format: NumberFormat::Integer,
    },
    MetricSpec {
        offset: 8,
        field: MetricField::DspAvailableCapacity,
        rule: CoercionRule::PLAIN,
        format: NumberFormat::Integer,
    },
];

impl MetricField {
    /// Column name used in the compiled output
    pub fn name(&self) -> &'static str {
        match self {
            MetricField::CapacityReliabilityScore => "Capacity reliability score",
            MetricField::CompletedRoutes => "Completed routes",
            MetricField::AmazonPaidCancels => "Amazon paid cancels",
            MetricField::DspDroppedRoutes => "DSP dropped routes",
            MetricField::ReliabilityTarget => "Reliability target",
            MetricField::RouteTarget => "Route target",
            MetricField::FlexUpRouteTarget => "Flex-up route target",
            MetricField::FinalScheduled => "Final scheduled",
            MetricField::DspAvailableCapacity => "DSP available capacity",
        }
    }

    /// Position of this field in [`METRIC_FIELDS`]
    pub fn index(&self) -> usize {
        METRIC_FIELDS
            .iter()
            .position(|spec| spec.field == *self)
            .unwrap_or_default()
    }

    pub fn spec(&self) -> &'static MetricSpec {
        &METRIC_FIELDS[self.index()]
    }

    /// All fields in output order
    pub fn all() -> impl Iterator<Item = MetricField> {
        METRIC_FIELDS.iter().map(|spec| spec.field)
    }
}

impl std::fmt::Display for MetricField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
