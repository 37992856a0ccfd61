use colored::*;
use tablecheck_validator::ValidationRun;

pub fn print_validation_run(run: &ValidationRun, format: &str) {
    match format {
        "json" => print_json_run(run),
        _ => print_text_run(run),
    }
}

fn print_text_run(run: &ValidationRun) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  SCHEMA VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if run.passed {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if !run.violations.is_empty() {
        println!("\n{}", "Violations:".red().bold());
        for (i, violation) in run.violations.iter().enumerate() {
            let column = if violation.column.is_empty() {
                "(table)".to_string()
            } else {
                violation.column.clone()
            };
            println!(
                "  {}. [{}] {}: expected {}, found {} (count {})",
                i + 1,
                violation.category.as_str(),
                column.red(),
                violation.expected,
                violation.found,
                violation.count
            );
        }
    }

    let failing_nulls: Vec<_> = run
        .null_stats
        .iter()
        .filter(|s| s.null_count > 0)
        .collect();
    if !failing_nulls.is_empty() {
        println!("\n{}", "Nulls:".bold());
        for stat in failing_nulls {
            let marker = if stat.allow_null {
                "✓".green()
            } else {
                "✗".red()
            };
            println!(
                "  {} {}: {} ({:.2}%)",
                marker,
                stat.column,
                stat.null_count,
                stat.null_fraction * 100.0
            );
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Rows validated:   {}", run.row_count);
    println!("  Columns:          {}", run.column_count);
    println!("  Total violations: {}", run.violations.len());
    println!("{}", "═".repeat(60));
}

fn print_json_run(run: &ValidationRun) {
    match serde_json::to_string_pretty(run) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("{} failed to encode report: {err}", "✗".red().bold()),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
