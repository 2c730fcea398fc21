//! Metric value coercion

use crate::compile::types::{Cell, CoercionRule, ValueCoercionError};

/// Cell literal meaning "no value"
pub const MISSING_SENTINEL: &str = "-";

/// Turn a raw metric cell into a number, or `None` when it holds no value
///
/// Empty cells, the "-" sentinel and anything that does not parse as a
/// number all come back as `None`, never as zero. Percent signs are stripped
/// from text; when the rule asks for it, percent-marked text is divided down
/// to a fraction. Numeric cells are never scaled.
pub fn coerce_value(cell: &Cell, rule: &CoercionRule) -> Option<f64> {
    match cell {
        _ if cell.is_empty() => None,
        Cell::Number(n) => n.is_finite().then_some(*n),
        Cell::Text(raw) => {
            if raw == MISSING_SENTINEL {
                return None;
            }
            let value = match parse_decimal(raw) {
                Ok(v) => v,
                Err(e) => {
                    log::trace!("{}", e);
                    return None;
                }
            };
            match rule.scale_percent_by {
                Some(scale) if raw.contains('%') => Some(value / scale),
                _ => Some(value),
            }
        }
        other => {
            log::trace!("not a metric value: {}", other);
            None
        }
    }
}

/// Parse text as a decimal number, ignoring surrounding whitespace and any
/// percent signs
pub fn parse_decimal(raw: &str) -> Result<f64, ValueCoercionError> {
    let cleaned = raw.trim().replace('%', "");
    match cleaned.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValueCoercionError {
            raw: raw.to_string(),
        }),
    }
}
