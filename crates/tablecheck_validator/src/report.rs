//! Report emission for validation runs.
//!
//! Three artifacts are rendered from a finished `ValidationRun`: the
//! violation ledger (CSV), the null overview (CSV), and a human-readable
//! summary (markdown). Rendering never re-derives a number the engine
//! already computed and never mutates the run; every function here is a
//! stateless transformation onto a caller-supplied sink.

use std::cmp::Ordering;
use std::io;

use chrono::Utc;
use tablecheck_core::Contract;

use crate::{NullStat, ValidationRun};

/// Writes the violation ledger as CSV.
///
/// One record per violation in engine order, columns
/// `category,column,count,expected,found,sample`; sample entries are
/// joined with `; `.
pub fn write_ledger<W: io::Write>(run: &ValidationRun, writer: W) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["category", "column", "count", "expected", "found", "sample"])?;
    for violation in &run.violations {
        let count = violation.count.to_string();
        let sample = violation.sample.join("; ");
        out.write_record([
            violation.category.as_str(),
            violation.column.as_str(),
            count.as_str(),
            violation.expected.as_str(),
            violation.found.as_str(),
            sample.as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Writes the null overview as CSV.
///
/// One record per contract column, sorted descending by null fraction;
/// the stable sort leaves ties in column declaration order.
pub fn write_nulls_overview<W: io::Write>(run: &ValidationRun, writer: W) -> csv::Result<()> {
    let mut stats: Vec<&NullStat> = run.null_stats.iter().collect();
    stats.sort_by(|a, b| {
        b.null_fraction
            .partial_cmp(&a.null_fraction)
            .unwrap_or(Ordering::Equal)
    });

    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["column", "null_count", "null_fraction", "allow_null", "status"])?;
    for stat in stats {
        let null_count = stat.null_count.to_string();
        let null_fraction = format!("{:.6}", stat.null_fraction);
        let allow_null = stat.allow_null.to_string();
        out.write_record([
            stat.column.as_str(),
            null_count.as_str(),
            null_fraction.as_str(),
            allow_null.as_str(),
            stat.status.as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Renders the human-readable summary as markdown.
///
/// `tag` is an arbitrary caller-supplied run label; it affects the text
/// only, never rule evaluation.
pub fn render_summary(run: &ValidationRun, contract: &Contract, tag: &str) -> String {
    let mut text = String::new();

    text.push_str("# Schema validation summary\n\n");
    text.push_str(&format!("- Run: {tag}\n"));
    text.push_str(&format!(
        "- Contract: {} v{}\n",
        contract.name, contract.version
    ));
    text.push_str(&format!("- Generated: {}\n", Utc::now().to_rfc3339()));
    text.push_str(&format!(
        "- Dataset: {} rows, {} columns\n",
        run.row_count, run.column_count
    ));

    if run.passed {
        text.push_str("- Verdict: **PASSED** — dataset conforms to the contract\n");
    } else {
        text.push_str(&format!(
            "- Verdict: **FAILED** — {} violation(s) found\n",
            run.violations.len()
        ));
    }

    text.push_str("\n## Violations\n\n");
    if run.violations.is_empty() {
        text.push_str("No violations found.\n");
    } else {
        text.push_str("| category | column | count | expected | found |\n");
        text.push_str("|---|---|---|---|---|\n");
        for violation in &run.violations {
            text.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                violation.category.as_str(),
                violation.column,
                violation.count,
                violation.expected,
                violation.found
            ));
        }
    }

    text.push_str("\n## Nulls\n\n");
    let mut stats: Vec<&NullStat> = run.null_stats.iter().filter(|s| s.null_count > 0).collect();
    stats.sort_by(|a, b| {
        b.null_fraction
            .partial_cmp(&a.null_fraction)
            .unwrap_or(Ordering::Equal)
    });
    if stats.is_empty() {
        text.push_str("No nulls observed in contract columns.\n");
    } else {
        for stat in stats {
            text.push_str(&format!(
                "- {}: {} null(s) ({:.2}%) — {}\n",
                stat.column,
                stat.null_count,
                stat.null_fraction * 100.0,
                if stat.allow_null {
                    "allowed"
                } else {
                    "not allowed"
                }
            ));
        }
    }

    text
}
