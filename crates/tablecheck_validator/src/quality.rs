//! Generic quality checks.
//!
//! Checks that are not tied to one column rule: required columns absent
//! from the dataset header, rows where every contract column is null,
//! and duplicates in the auxiliary identifier column. The identifier
//! check reuses the global-uniqueness logic with its own category so the
//! ledger keeps primary-key defects and identifier defects apart.

use tablecheck_core::Contract;

use crate::{SAMPLE_LIMIT, Table, Violation, ViolationCategory, keys};

/// Reports every required contract column missing from the table header,
/// one violation per column, in declaration order.
pub fn check_missing_columns(table: &Table, contract: &Contract) -> Vec<Violation> {
    contract
        .columns
        .iter()
        .filter(|rule| rule.required && !table.has_column(&rule.name))
        .map(|rule| Violation {
            category: ViolationCategory::MissingColumn,
            column: rule.name.clone(),
            count: 1,
            expected: "column present in dataset".to_string(),
            found: "column absent from header".to_string(),
            sample: Vec::new(),
        })
        .collect()
}

/// Reports rows where every contract column is null as one aggregate
/// violation.
pub fn check_all_null_rows(table: &Table, contract: &Contract) -> Option<Violation> {
    let mut count = 0usize;
    let mut sample: Vec<String> = Vec::new();

    for (index, row) in table.rows().enumerate() {
        let all_null = contract
            .columns
            .iter()
            .all(|rule| table.cell(row, &rule.name).is_null());
        if all_null {
            count += 1;
            if sample.len() < SAMPLE_LIMIT {
                sample.push(format!("row {index}"));
            }
        }
    }

    if count == 0 {
        return None;
    }

    Some(Violation {
        category: ViolationCategory::AllNullRow,
        column: String::new(),
        count,
        expected: "no completely null rows".to_string(),
        found: format!("{count} completely null row(s)"),
        sample,
    })
}

/// Checks the auxiliary identifier column for duplicates, if the
/// contract designates one.
pub fn check_identifier(table: &Table, contract: &Contract) -> Option<Violation> {
    let identifier = contract.identifier.as_deref()?;
    keys::check_global_unique(table, identifier, ViolationCategory::IdentifierDuplicate)
}
