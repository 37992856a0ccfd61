//! Null-policy checks.
//!
//! Every contract column gets exactly one `NullStat` per run, permitted
//! nulls included. A violation is produced only for columns that forbid
//! nulls yet contain them; an allow-null column never fails here no
//! matter how sparse it is.

use tablecheck_core::Contract;

use crate::{NullStat, NullStatus, SAMPLE_LIMIT, Table, Violation, ViolationCategory};

/// Computes the per-column null overview and the null-policy violations.
///
/// Stats come out in contract declaration order. A column absent from
/// the table header is observed as null in every row.
pub fn check_nulls(table: &Table, contract: &Contract) -> (Vec<NullStat>, Vec<Violation>) {
    let row_count = table.len();
    let mut stats = Vec::with_capacity(contract.columns.len());
    let mut violations = Vec::new();

    for rule in &contract.columns {
        let mut null_count = 0usize;
        let mut sample_rows: Vec<String> = Vec::new();
        for (index, row) in table.rows().enumerate() {
            if table.cell(row, &rule.name).is_null() {
                null_count += 1;
                if sample_rows.len() < SAMPLE_LIMIT {
                    sample_rows.push(format!("row {index}"));
                }
            }
        }

        let null_fraction = if row_count == 0 {
            0.0
        } else {
            null_count as f64 / row_count as f64
        };
        let failed = null_count > 0 && !rule.allow_null;

        stats.push(NullStat {
            column: rule.name.clone(),
            null_count,
            null_fraction,
            allow_null: rule.allow_null,
            status: if failed {
                NullStatus::Fail
            } else {
                NullStatus::Ok
            },
        });

        if failed {
            violations.push(Violation {
                category: ViolationCategory::NullPolicy,
                column: rule.name.clone(),
                count: null_count,
                expected: "no nulls (allow_null = false)".to_string(),
                found: format!("{null_count} null(s) ({:.2}%)", null_fraction * 100.0),
                sample: sample_rows,
            });
        }
    }

    (stats, violations)
}
