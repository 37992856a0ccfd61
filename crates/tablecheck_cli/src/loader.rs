//! CSV dataset loading.
//!
//! Raw text becomes typed cells here, once, guided by the contract's
//! column types; the engine never re-parses a value. A numeric-typed
//! field that fails to parse is loaded as text so the engine can report
//! it as a `non_numeric` finding — a malformed row is data to report,
//! not a reason to stop.

use std::path::Path;

use tablecheck_core::{ColumnType, Contract};
use tablecheck_validator::{Cell, Row, Table};
use thiserror::Error;

/// The dataset cannot be materialized at all.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File cannot be read or parsed as CSV
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    /// Header row has no columns
    #[error("dataset has no header columns")]
    EmptyHeader,
}

/// Loads a CSV file into a typed table.
///
/// Empty fields load as null. Fields in columns the contract types as
/// numeric are parsed once; parse failures load as text. Columns the
/// contract does not know load as text verbatim.
pub fn load_csv(path: &Path, contract: &Contract) -> Result<Table, DataLoadError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(DataLoadError::EmptyHeader);
    }

    let types: Vec<Option<ColumnType>> = headers
        .iter()
        .map(|name| contract.column(name).map(|rule| rule.column_type))
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = Row::new();
        for (index, field) in record.iter().enumerate() {
            let Some(name) = headers.get(index) else {
                continue;
            };
            row.insert(name.clone(), parse_cell(field, types[index]));
        }
        rows.push(row);
    }

    Ok(Table::new(headers, rows))
}

/// Converts one raw field into a typed cell.
fn parse_cell(field: &str, column_type: Option<ColumnType>) -> Cell {
    if field.is_empty() {
        return Cell::Null;
    }

    match column_type {
        Some(ColumnType::Integer) => field
            .parse::<i64>()
            .map(Cell::Int)
            .unwrap_or_else(|_| Cell::Text(field.to_string())),
        Some(ColumnType::Float) => field
            .parse::<f64>()
            .map(Cell::Float)
            .unwrap_or_else(|_| Cell::Text(field.to_string())),
        // Integer-coded categories load as integers, labels as text.
        Some(ColumnType::Categorical) => field
            .parse::<i64>()
            .map(Cell::Int)
            .unwrap_or_else(|_| Cell::Text(field.to_string())),
        Some(ColumnType::Text) | None => Cell::Text(field.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tablecheck_core::{ColumnRuleBuilder, ContractBuilder};

    fn contract() -> Contract {
        ContractBuilder::new("test", "owner")
            .column(ColumnRuleBuilder::new("id", ColumnType::Integer).build())
            .column(
                ColumnRuleBuilder::new("price", ColumnType::Float)
                    .allow_null(true)
                    .build(),
            )
            .column(
                ColumnRuleBuilder::new("category", ColumnType::Categorical)
                    .allow_null(true)
                    .build(),
            )
            .build()
    }

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn typed_cells_parsed_once() {
        let file = write_csv("id,price,category,extra\n1,9.5,2,note\n");
        let table = load_csv(file.path(), &contract()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.column_count(), 4);

        let row = table.get_row(0).unwrap();
        assert_eq!(table.cell(row, "id"), &Cell::Int(1));
        assert_eq!(table.cell(row, "price"), &Cell::Float(9.5));
        assert_eq!(table.cell(row, "category"), &Cell::Int(2));
        // Columns the contract does not know stay text.
        assert_eq!(table.cell(row, "extra"), &Cell::Text("note".to_string()));
    }

    #[test]
    fn empty_fields_load_as_null() {
        let file = write_csv("id,price,category\n1,,\n");
        let table = load_csv(file.path(), &contract()).unwrap();

        let row = table.get_row(0).unwrap();
        assert!(table.cell(row, "price").is_null());
        assert!(table.cell(row, "category").is_null());
    }

    #[test]
    fn unparseable_numeric_loads_as_text() {
        let file = write_csv("id,price,category\nabc,n/a,Morning\n");
        let table = load_csv(file.path(), &contract()).unwrap();

        let row = table.get_row(0).unwrap();
        assert_eq!(table.cell(row, "id"), &Cell::Text("abc".to_string()));
        assert_eq!(table.cell(row, "price"), &Cell::Text("n/a".to_string()));
        assert_eq!(
            table.cell(row, "category"),
            &Cell::Text("Morning".to_string())
        );
    }

    #[test]
    fn non_finite_floats_load_as_floats() {
        let file = write_csv("id,price,category\n1,inf,0\n2,NaN,1\n");
        let table = load_csv(file.path(), &contract()).unwrap();

        let row = table.get_row(0).unwrap();
        assert_eq!(table.cell(row, "price"), &Cell::Float(f64::INFINITY));
        let row = table.get_row(1).unwrap();
        assert!(matches!(table.cell(row, "price"), Cell::Float(f) if f.is_nan()));
    }

    #[test]
    fn missing_file_is_fatal() {
        let result = load_csv(Path::new("no/such/file.csv"), &contract());
        assert!(matches!(result.unwrap_err(), DataLoadError::Csv(_)));
    }
}
