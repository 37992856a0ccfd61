//! Main validation engine.
//!
//! `Validator` runs every rule category against one (contract, table)
//! pair and assembles a `ValidationRun`. It is a pure function of its
//! inputs: no state survives between invocations, so the same pair
//! always yields the same ledger, and independent runs (raw vs. interim
//! data, say) can share one process freely.

use tablecheck_core::{Contract, KeySpec};
use tracing::{debug, info};

use crate::{
    DataError, Table, ValidateError, ValidationRun, Violation, ViolationCategory, domains, keys,
    nulls, quality, ranges,
};

/// Validation engine for tabular data contracts.
///
/// # Example
///
/// ```rust
/// use tablecheck_core::{ColumnRuleBuilder, ColumnType, ContractBuilder};
/// use tablecheck_validator::{Cell, Row, Table, Validator};
///
/// let contract = ContractBuilder::new("demo", "owner")
///     .column(
///         ColumnRuleBuilder::new("id", ColumnType::Integer)
///             .allow_null(false)
///             .build(),
///     )
///     .build();
///
/// let mut row = Row::new();
/// row.insert("id".to_string(), Cell::Int(1));
/// let table = Table::new(vec!["id".to_string()], vec![row]);
///
/// let run = Validator::new().validate(&contract, &table).unwrap();
/// assert!(run.passed);
/// ```
#[derive(Debug, Default)]
pub struct Validator;

impl Validator {
    /// Creates a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates a table against a contract.
    ///
    /// Fatal errors (inconsistent contract, column-less table) abort
    /// before any rule executes. Data content never errors: every
    /// row-level defect lands in the ledger and evaluation continues.
    ///
    /// The ledger order is fixed and documented: primary-key checks,
    /// range checks, categorical-domain checks, null-policy checks, then
    /// generic quality checks (missing required columns, all-null rows,
    /// identifier duplicates). Within a category, violations follow the
    /// contract's declaration order.
    pub fn validate(
        &self,
        contract: &Contract,
        table: &Table,
    ) -> Result<ValidationRun, ValidateError> {
        contract.ensure_consistent()?;
        if table.column_count() == 0 {
            return Err(DataError::NoColumns.into());
        }

        info!(
            contract = %contract.name,
            rows = table.len(),
            columns = table.column_count(),
            "starting validation run"
        );

        let mut violations: Vec<Violation> = Vec::new();

        debug!("checking primary keys");
        for key in &contract.primary_keys {
            match key {
                KeySpec::Global { column } => violations.extend(keys::check_global_unique(
                    table,
                    column,
                    ViolationCategory::PrimaryKeyGlobal,
                )),
                KeySpec::PerGroup { group_by, column } => {
                    violations.extend(keys::check_group_unique(table, group_by, column));
                }
            }
        }

        // Range violations follow the contract's column declaration
        // order, not the order range rules happen to be listed in.
        debug!("checking numeric ranges");
        for rule in &contract.columns {
            if let Some(range) = contract.ranges.iter().find(|r| r.column == rule.name) {
                violations.extend(ranges::check_range(table, range));
            }
        }

        debug!("checking categorical domains");
        for rule in &contract.columns {
            violations.extend(domains::check_domain(table, rule));
        }

        debug!("checking null policies");
        let (null_stats, null_violations) = nulls::check_nulls(table, contract);
        violations.extend(null_violations);

        debug!("running generic quality checks");
        violations.extend(quality::check_missing_columns(table, contract));
        violations.extend(quality::check_all_null_rows(table, contract));
        violations.extend(quality::check_identifier(table, contract));

        let passed = violations.is_empty();
        info!(
            violations = violations.len(),
            passed, "validation run finished"
        );

        Ok(ValidationRun {
            row_count: table.len(),
            column_count: table.column_count(),
            violations,
            null_stats,
            passed,
        })
    }
}
