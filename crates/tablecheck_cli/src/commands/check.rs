use std::path::Path;

use anyhow::{Context, Result};
use tablecheck_parser::parse_file;
use tracing::info;

use crate::output;

pub fn execute(contract_path: &str) -> Result<()> {
    info!("Checking contract: {}", contract_path);

    // Parse the contract file; consistency is verified during parsing
    let path = Path::new(contract_path);
    let contract = parse_file(path)
        .with_context(|| format!("Failed to parse contract file: {contract_path}"))?;

    output::print_info(&format!(
        "Contract loaded: {} v{} (owner: {})",
        contract.name, contract.version, contract.owner
    ));
    output::print_success("Contract is consistent");

    // Print contract summary
    println!("\nContract Summary:");
    println!("  Name:        {}", contract.name);
    println!("  Version:     {}", contract.version);
    println!("  Owner:       {}", contract.owner);
    println!(
        "  Description: {}",
        contract.description.as_deref().unwrap_or("N/A")
    );
    println!("  Columns:     {}", contract.columns.len());

    if !contract.primary_keys.is_empty() {
        println!("\nPrimary Keys:");
        for key in &contract.primary_keys {
            match key {
                tablecheck_core::KeySpec::Global { column } => {
                    println!("  {column} (global)");
                }
                tablecheck_core::KeySpec::PerGroup { group_by, column } => {
                    println!("  {column} (unique within {group_by})");
                }
            }
        }
    }

    if !contract.ranges.is_empty() {
        println!("\nRanges:");
        for range in &contract.ranges {
            println!("  {}: [{}, {}]", range.column, range.min, range.max);
        }
    }

    if let Some(identifier) = &contract.identifier {
        println!("\nIdentifier: {identifier}");
    }

    Ok(())
}
