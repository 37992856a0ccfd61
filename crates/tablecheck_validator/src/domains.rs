//! Categorical-domain checks.
//!
//! Membership in an allowed set is exact: byte-identical for text, value
//! equality for numbers. No case folding, trimming, or typo tolerance —
//! "M0rning" and "Morning" are violations against an allowed "morning",
//! however close they look. Lenient matching is a downstream cleaning
//! decision, never performed here.

use std::collections::HashMap;

use tablecheck_core::{AllowedValues, ColumnRule, DomainValue};

use crate::{Cell, SAMPLE_LIMIT, Table, Violation, ViolationCategory};

/// Checks a column's non-null values against its allowed domain.
///
/// Returns at most one violation aggregating every distinct invalid
/// variant with its per-variant count; `count` is the total number of
/// affected rows. Columns without a configured domain are skipped.
pub fn check_domain(table: &Table, rule: &ColumnRule) -> Option<Violation> {
    let allowed = rule.allowed_values.as_ref()?;

    let mut variant_counts: HashMap<String, usize> = HashMap::new();
    let mut variant_order: Vec<String> = Vec::new();
    let mut affected_rows = 0usize;

    for row in table.rows() {
        let cell = table.cell(row, &rule.name);
        if cell.is_null() {
            continue;
        }
        if is_member(allowed, cell) {
            continue;
        }
        affected_rows += 1;
        let variant = cell.to_string();
        let entry = variant_counts.entry(variant.clone()).or_insert(0);
        if *entry == 0 {
            variant_order.push(variant);
        }
        *entry += 1;
    }

    if affected_rows == 0 {
        return None;
    }

    let found = variant_order
        .iter()
        .map(|variant| format!("{variant} ({})", variant_counts[variant]))
        .collect::<Vec<_>>()
        .join("; ");

    Some(Violation {
        category: ViolationCategory::Domain,
        column: rule.name.clone(),
        count: affected_rows,
        expected: allowed.describe(),
        found: format!("{} invalid variant(s): {found}", variant_order.len()),
        sample: variant_order.iter().take(SAMPLE_LIMIT).cloned().collect(),
    })
}

/// Exact membership test of one cell against the domain.
fn is_member(allowed: &AllowedValues, cell: &Cell) -> bool {
    match allowed {
        AllowedValues::Set(values) => values.iter().any(|value| matches_value(value, cell)),
        AllowedValues::Span { min, max } => match cell {
            Cell::Int(i) => min <= i && i <= max,
            Cell::Float(f) => {
                f.is_finite() && f.fract() == 0.0 && *min as f64 <= *f && *f <= *max as f64
            }
            _ => false,
        },
    }
}

fn matches_value(value: &DomainValue, cell: &Cell) -> bool {
    match (value, cell) {
        (DomainValue::Int(i), Cell::Int(c)) => i == c,
        (DomainValue::Int(i), Cell::Float(f)) => *f == *i as f64,
        (DomainValue::Text(t), Cell::Text(c)) => t == c,
        _ => false,
    }
}
