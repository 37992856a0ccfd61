//! Primary-key uniqueness checks.
//!
//! Global uniqueness flags any key value occurring more than once in the
//! table; within-group uniqueness partitions key values by a grouping
//! column and flags collisions inside a partition. Null keys are excluded
//! from duplicate detection in both variants (a null cannot collide with
//! itself); the null-policy check surfaces those nulls separately when
//! the key column forbids them.
//!
//! All walks follow row order, so duplicate samples come out in
//! first-seen order and the ledger is reproducible byte-for-byte.

use std::collections::{HashMap, HashSet};

use crate::{SAMPLE_LIMIT, Table, Violation, ViolationCategory};

/// Checks a column for globally duplicated non-null values.
///
/// Returns at most one violation: `count` is the number of duplicate
/// groups (distinct values occurring more than once), not the number of
/// duplicate rows, and the sample lists offending values in first-seen
/// order.
pub fn check_global_unique(
    table: &Table,
    column: &str,
    category: ViolationCategory,
) -> Option<Violation> {
    let mut occurrences: HashMap<String, usize> = HashMap::new();
    for row in table.rows() {
        let cell = table.cell(row, column);
        if cell.is_null() {
            continue;
        }
        *occurrences.entry(cell.to_string()).or_insert(0) += 1;
    }

    // Re-walk the rows so duplicates emit in first-seen order.
    let mut emitted: HashSet<String> = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for row in table.rows() {
        let cell = table.cell(row, column);
        if cell.is_null() {
            continue;
        }
        let key = cell.to_string();
        if occurrences[&key] > 1 && emitted.insert(key.clone()) {
            duplicates.push(key);
        }
    }

    if duplicates.is_empty() {
        return None;
    }

    let sample: Vec<String> = duplicates.iter().take(SAMPLE_LIMIT).cloned().collect();
    Some(Violation {
        category,
        column: column.to_string(),
        count: duplicates.len(),
        expected: format!("unique values in '{column}'"),
        found: format!("{} value(s) occurring more than once", duplicates.len()),
        sample,
    })
}

/// Checks a key column for duplicates within each partition of a
/// grouping column.
///
/// Returns at most one violation aggregating all affected groups:
/// `count` is the number of groups containing at least one duplicate,
/// and the sample lists the worst-affected groups (highest duplicate
/// count first, ties in first-seen order). Rows with a null group or
/// null key are skipped.
pub fn check_group_unique(table: &Table, group_by: &str, column: &str) -> Option<Violation> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut group_duplicates: HashMap<String, usize> = HashMap::new();
    let mut group_order: Vec<String> = Vec::new();

    for row in table.rows() {
        let group_cell = table.cell(row, group_by);
        let key_cell = table.cell(row, column);
        if group_cell.is_null() || key_cell.is_null() {
            continue;
        }
        let group = group_cell.to_string();
        let pair = (group.clone(), key_cell.to_string());
        if !seen.insert(pair) {
            let entry = group_duplicates.entry(group.clone()).or_insert(0);
            if *entry == 0 {
                group_order.push(group);
            }
            *entry += 1;
        }
    }

    if group_duplicates.is_empty() {
        return None;
    }

    // Worst groups first; the stable sort keeps first-seen order on ties.
    let mut ranked: Vec<(String, usize)> = group_order
        .into_iter()
        .map(|group| {
            let dupes = group_duplicates[&group];
            (group, dupes)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let affected = ranked.len();
    let sample: Vec<String> = ranked
        .iter()
        .take(SAMPLE_LIMIT)
        .map(|(group, dupes)| {
            let noun = if *dupes == 1 { "duplicate" } else { "duplicates" };
            format!("{group_by}={group} ({dupes} {noun})")
        })
        .collect();

    Some(Violation {
        category: ViolationCategory::PrimaryKeyWithinGroup,
        column: column.to_string(),
        count: affected,
        expected: format!("'{column}' unique within each '{group_by}'"),
        found: format!("{affected} group(s) with duplicate keys"),
        sample,
    })
}
