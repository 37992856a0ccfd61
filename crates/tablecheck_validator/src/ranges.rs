//! Numeric range checks.
//!
//! Every non-null value of a range-constrained column must satisfy
//! `min <= value <= max`. Two defect families are kept apart so operators
//! can tell bad magnitude from corruption: non-finite values (NaN, ±inf)
//! are always violations regardless of the configured bounds, and text
//! cells in a numeric column are reported as `non_numeric` and excluded
//! from the range statistics while evaluation continues.

use tablecheck_core::RangeRule;

use crate::{SAMPLE_LIMIT, Table, Violation, ViolationCategory};

/// Checks one range rule, emitting up to three violations for the column
/// in fixed order: `range`, `non_finite`, `non_numeric`.
pub fn check_range(table: &Table, rule: &RangeRule) -> Vec<Violation> {
    let mut out_of_range: Vec<String> = Vec::new();
    let mut non_finite: Vec<String> = Vec::new();
    let mut non_numeric: Vec<String> = Vec::new();
    let mut observed_min = f64::INFINITY;
    let mut observed_max = f64::NEG_INFINITY;

    for row in table.rows() {
        let cell = table.cell(row, &rule.column);
        if cell.is_null() {
            continue;
        }
        match cell.as_f64() {
            Some(value) if !value.is_finite() => non_finite.push(cell.to_string()),
            Some(value) => {
                observed_min = observed_min.min(value);
                observed_max = observed_max.max(value);
                if value < rule.min || value > rule.max {
                    out_of_range.push(cell.to_string());
                }
            }
            None => non_numeric.push(cell.to_string()),
        }
    }

    let mut violations = Vec::new();

    if !out_of_range.is_empty() {
        violations.push(Violation {
            category: ViolationCategory::Range,
            column: rule.column.clone(),
            count: out_of_range.len(),
            expected: format!("[{}, {}]", rule.min, rule.max),
            found: format!("observed range [{observed_min}, {observed_max}]"),
            sample: out_of_range.iter().take(SAMPLE_LIMIT).cloned().collect(),
        });
    }

    if !non_finite.is_empty() {
        violations.push(Violation {
            category: ViolationCategory::NonFinite,
            column: rule.column.clone(),
            count: non_finite.len(),
            expected: "finite numeric values".to_string(),
            found: format!("{} non-finite value(s)", non_finite.len()),
            sample: non_finite.iter().take(SAMPLE_LIMIT).cloned().collect(),
        });
    }

    if !non_numeric.is_empty() {
        violations.push(Violation {
            category: ViolationCategory::NonNumeric,
            column: rule.column.clone(),
            count: non_numeric.len(),
            expected: "numeric values".to_string(),
            found: format!("{} non-numeric value(s)", non_numeric.len()),
            sample: non_numeric.iter().take(SAMPLE_LIMIT).cloned().collect(),
        });
    }

    violations
}
