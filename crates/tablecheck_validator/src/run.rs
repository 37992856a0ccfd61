//! Validation results: violations, null statistics, and the run value.
//!
//! A completed run is an immutable value owned by the caller. `passed`
//! is true exactly when the violation ledger is empty; violations are a
//! normal run outcome, never an error.

use serde::Serialize;

/// Upper bound on every evidence sample carried by a violation.
pub const SAMPLE_LIMIT: usize = 5;

/// Category of a detected violation.
///
/// The ledger emits categories in this fixed order: primary-key checks,
/// range checks, categorical-domain checks, null checks, then generic
/// quality checks. The order is part of the report contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    /// Duplicate values in a globally-unique key column
    PrimaryKeyGlobal,
    /// Duplicate key values within a grouping partition
    PrimaryKeyWithinGroup,
    /// Values outside configured inclusive bounds
    Range,
    /// NaN or infinite values in a numeric column
    NonFinite,
    /// Text cells in a numeric column
    NonNumeric,
    /// Values outside a categorical column's allowed domain
    Domain,
    /// Nulls in a column with `allow_null = false`
    NullPolicy,
    /// Required contract column absent from the dataset header
    MissingColumn,
    /// Rows where every contract column is null
    AllNullRow,
    /// Duplicate values in the auxiliary identifier column
    IdentifierDuplicate,
}

impl ViolationCategory {
    /// Returns the stable wire name used in the violation ledger.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCategory::PrimaryKeyGlobal => "primary_key_global",
            ViolationCategory::PrimaryKeyWithinGroup => "primary_key_within_group",
            ViolationCategory::Range => "range",
            ViolationCategory::NonFinite => "non_finite",
            ViolationCategory::NonNumeric => "non_numeric",
            ViolationCategory::Domain => "domain",
            ViolationCategory::NullPolicy => "null_policy",
            ViolationCategory::MissingColumn => "missing_column",
            ViolationCategory::AllNullRow => "all_null_row",
            ViolationCategory::IdentifierDuplicate => "identifier_duplicate",
        }
    }
}

/// One detected deviation from the contract.
///
/// Created by a rule check, appended to the run's ledger, never mutated
/// afterwards. `sample` is bounded by [`SAMPLE_LIMIT`].
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    /// Rule category that produced this violation
    pub category: ViolationCategory,
    /// Column the violation concerns
    pub column: String,
    /// Aggregated count (rows, duplicate groups, or affected groups,
    /// depending on the category)
    pub count: usize,
    /// What the contract expected
    pub expected: String,
    /// What the data contained
    pub found: String,
    /// Bounded evidence: offending keys, values, or row positions
    pub sample: Vec<String>,
}

/// Whether a column's null count is acceptable under its null policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NullStatus {
    /// No nulls, or nulls permitted
    Ok,
    /// Nulls present in a column that forbids them
    Fail,
}

impl NullStatus {
    /// Returns the wire name used in the null overview.
    pub fn as_str(&self) -> &'static str {
        match self {
            NullStatus::Ok => "OK",
            NullStatus::Fail => "FAIL",
        }
    }
}

/// Per-column null summary, computed for every contract column exactly
/// once per run, whether or not nulls are permitted there.
#[derive(Debug, Clone, Serialize)]
pub struct NullStat {
    /// Column name
    pub column: String,
    /// Number of rows with a null in this column
    pub null_count: usize,
    /// `null_count / row_count` (0 for an empty table)
    pub null_fraction: f64,
    /// The column's configured null policy
    pub allow_null: bool,
    /// FAIL iff nulls are present and forbidden
    pub status: NullStatus,
}

/// The complete, immutable result of one engine execution.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationRun {
    /// Number of rows in the validated table
    pub row_count: usize,
    /// Number of columns in the validated table's header
    pub column_count: usize,
    /// Violation ledger, in fixed category order
    pub violations: Vec<Violation>,
    /// One entry per contract column, in declaration order
    pub null_stats: Vec<NullStat>,
    /// True iff the ledger is empty
    pub passed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_names() {
        assert_eq!(
            ViolationCategory::PrimaryKeyGlobal.as_str(),
            "primary_key_global"
        );
        assert_eq!(
            ViolationCategory::PrimaryKeyWithinGroup.as_str(),
            "primary_key_within_group"
        );
        assert_eq!(ViolationCategory::Range.as_str(), "range");
        assert_eq!(ViolationCategory::NonFinite.as_str(), "non_finite");
        assert_eq!(ViolationCategory::NonNumeric.as_str(), "non_numeric");
        assert_eq!(ViolationCategory::Domain.as_str(), "domain");
        assert_eq!(ViolationCategory::NullPolicy.as_str(), "null_policy");
        assert_eq!(ViolationCategory::MissingColumn.as_str(), "missing_column");
        assert_eq!(ViolationCategory::AllNullRow.as_str(), "all_null_row");
        assert_eq!(
            ViolationCategory::IdentifierDuplicate.as_str(),
            "identifier_duplicate"
        );
    }

    #[test]
    fn null_status_wire_names() {
        assert_eq!(NullStatus::Ok.as_str(), "OK");
        assert_eq!(NullStatus::Fail.as_str(), "FAIL");
    }
}
