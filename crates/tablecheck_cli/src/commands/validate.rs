use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tablecheck_parser::parse_file;
use tablecheck_validator::{Validator, report};
use tracing::info;

use crate::{loader, output};

pub fn execute(
    contract_path: &str,
    data_path: &str,
    out_dir: &str,
    tag: &str,
    format: &str,
) -> Result<()> {
    info!("Validating dataset: {}", data_path);
    info!("Contract: {}", contract_path);
    info!("Run tag: {}", tag);

    // Parse the contract file
    let contract = parse_file(Path::new(contract_path))
        .with_context(|| format!("Failed to parse contract file: {contract_path}"))?;

    output::print_info(&format!(
        "Contract loaded: {} v{} (owner: {})",
        contract.name, contract.version, contract.owner
    ));

    // Load the dataset
    let table = loader::load_csv(Path::new(data_path), &contract)
        .with_context(|| format!("Failed to load dataset: {data_path}"))?;

    output::print_info(&format!(
        "Dataset loaded: {} rows, {} columns",
        table.len(),
        table.column_count()
    ));

    // Run the engine
    let run = Validator::new()
        .validate(&contract, &table)
        .context("Validation aborted")?;

    // Render all three artifacts before touching the filesystem, so a
    // run either produces every report or none of them.
    let mut ledger = Vec::new();
    report::write_ledger(&run, &mut ledger).context("Failed to render violation ledger")?;
    let mut overview = Vec::new();
    report::write_nulls_overview(&run, &mut overview)
        .context("Failed to render null overview")?;
    let summary = report::render_summary(&run, &contract, tag);

    let out_dir = Path::new(out_dir);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create report directory: {}", out_dir.display()))?;
    fs::write(out_dir.join("schema_key_violations.csv"), ledger)
        .context("Failed to write violation ledger")?;
    fs::write(out_dir.join("nulls_overview.csv"), overview)
        .context("Failed to write null overview")?;
    fs::write(out_dir.join("schema_validation_summary.md"), summary)
        .context("Failed to write summary")?;

    info!("Reports written to {}", out_dir.display());

    // Print the console report
    output::print_validation_run(&run, format);

    if !run.passed {
        std::process::exit(1);
    }

    Ok(())
}
